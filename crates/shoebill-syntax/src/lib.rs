//! Shared vocabulary of the Shoebill toolchain: tokens and errors.
pub mod error;
pub mod token;

pub use error::*;
pub use token::*;
