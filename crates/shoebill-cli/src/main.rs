mod render;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use shoebill_lexer::Scanner;
use shoebill_syntax::error::{error, Error, Result};
use shoebill_syntax::token::{Literal, Token};

use render::{render_error, ConsoleReporter};

/// Exit status when the source contained lexical errors.
const EXIT_DATA_ERR: u8 = 65;

#[derive(Parser, Debug)]
#[command(name = "shoebill", about = "Scan Shoebill source into tokens")]
struct Cli {
    /// Source file to scan. Reads standard input when omitted.
    path: Option<PathBuf>,

    /// Output format for the token listing
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum LiteralRecord<'a> {
    Str(&'a str),
    Num(f64),
}

#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    literal: Option<LiteralRecord<'a>>,
    line: usize,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(t: &'a Token) -> Self {
        let literal = t.literal.as_ref().map(|lit| match lit {
            Literal::String(s) => LiteralRecord::Str(s),
            Literal::Number(n) => LiteralRecord::Num(*n),
        });
        Self {
            kind: t.kind.name(),
            lexeme: &t.lexeme,
            literal,
            line: t.line,
        }
    }
}

fn read_source(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => {
            if !p.exists() {
                return error(format!("File not found: {}", p.display()));
            }
            fs::read_to_string(p).map_err(|e| Error::new(format!("Failed to read {}: {}", p.display(), e)))
        }
        None => {
            let mut src = String::new();
            io::stdin().read_to_string(&mut src)?;
            Ok(src)
        }
    }
}

fn print_tokens(tokens: &[Token], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for t in tokens {
                println!("{}", t);
            }
        }
        Format::Json => {
            let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
            let json = serde_json::to_string_pretty(&records).map_err(|e| Error::new(e.to_string()))?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let src = match read_source(cli.path.as_ref()) {
        Ok(s) => s,
        Err(e) => {
            render_error("", &e);
            return ExitCode::FAILURE;
        }
    };

    let mut reporter = ConsoleReporter::new(&src);
    let scanned = Scanner::new(&src).scan_with(&mut reporter);

    if let Err(e) = print_tokens(&scanned.tokens, cli.format) {
        render_error(&src, &e);
        return ExitCode::FAILURE;
    }

    if reporter.had_error() {
        ExitCode::from(EXIT_DATA_ERR)
    } else {
        ExitCode::SUCCESS
    }
}
