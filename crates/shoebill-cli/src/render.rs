use owo_colors::OwoColorize;
use shoebill_syntax::error::{Error, Reporter};

/// Prints lexical errors to stderr as they are reported.
pub struct ConsoleReporter<'a> {
    source: &'a str,
    reported: usize,
}

impl<'a> ConsoleReporter<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, reported: 0 }
    }

    pub fn had_error(&self) -> bool {
        self.reported > 0
    }
}

impl Reporter for ConsoleReporter<'_> {
    fn report(&mut self, line: usize, message: &str) {
        self.reported += 1;
        render_error(self.source, &Error::at_line(message, line));
    }
}

pub fn render_error(source: &str, err: &Error) {
    let Some(line) = err.line else {
        eprintln!("{}: {}", "error".red().bold(), err.msg.red());
        return;
    };
    eprintln!(
        "{} {}: {}",
        format!("[line {}]", line).bright_black(),
        "Error".red().bold(),
        err.msg.red()
    );
    if let Some(src_line) = source.lines().nth(line.saturating_sub(1)) {
        let line_num_str = format!("{:3} | ", line);
        eprintln!("{}{}", line_num_str.bright_black(), src_line);
    }
    provide_error_suggestions(&err.msg);
}

fn provide_error_suggestions(err_msg: &str) {
    if err_msg.contains("Unterminated string") {
        eprintln!("{}", "Help: String is missing its closing quote.".yellow());
        eprintln!("    {}", "Make sure every \" has a matching closing \"".bright_black());
    } else if err_msg.contains("Unexpected character") {
        eprintln!("{}", "Help: This character does not start any token.".yellow());
        eprintln!("    {}", "Identifiers use letters, digits and '_'; comments start with //".bright_black());
    }
}
