//! Helper functions that are common to CLI apps

use crate::cli::constants::*;
use crate::types::{AccountNumber, Amount};
use crate::validation::{parse_account_number, validate_amount};
use std::io::{stdin, stdout, BufRead, Write};

/// **Contains full variants of all existing commands.**
///
/// Wrapped by `help()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added command to help.
fn help_contents_full() -> String {
    format!("{HELP} {DEPOSIT} {WITHDRAW} {BALANCE} {LIST} {QUIT}")
}

/// **Contains short variants of all existing commands.**
fn help_contents_short() -> String {
    "h d w b l q".to_string()
}

/// **Prints all existing commands in their full and short variants.**
pub fn help() {
    println!("{}", help_contents_full());
    println!("{}", help_contents_short());
}

/// What a single prompt produced
#[derive(Debug, PartialEq)]
pub enum Input {
    /// A non-blank line, trailing newline included
    Line(String),
    /// A line with nothing but whitespace; the main loop ignores it.
    Blank,
    /// No more input; the main loop ends as if `quit` had been typed.
    Eof,
}

/// **Prompts on `stdout` and reads a line from `stdin`.**
pub fn read_from_stdin(label: &str) -> Input {
    read_line(&mut stdin().lock(), &mut stdout().lock(), label)
}

/// **Writes `label` to `writer`, then reads one line from `reader`.**
///
/// Running out of input ends the session with [`Input::Eof`],
/// and so does an I/O error on either side, after it is reported.
pub fn read_line<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, label: &str) -> Input {
    if let Err(err) = write!(writer, "\n{label}").and_then(|()| writer.flush()) {
        eprintln!("[ERROR] Failed to write the prompt: {}", err);
        return Input::Eof;
    }

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Input::Eof,
        Ok(_) if line.trim().is_empty() => Input::Blank,
        Ok(_) => Input::Line(line),
        Err(err) => {
            eprintln!("[ERROR] Failed to read line: {}", err);
            Input::Eof
        }
    }
}

/// **Parses an account number argument**
///
/// Prints an informative message and returns `None` if it isn't an integer.
pub fn parse_account(word: &str) -> Option<AccountNumber> {
    match parse_account_number(word) {
        Ok(account_number) => Some(account_number),
        Err(err) => {
            eprintln!("[ERROR] {}", err);
            None
        }
    }
}

/// **Parses an amount argument**
///
/// Prints an informative message and returns `None` unless
/// it is a finite, positive number.
pub fn parse_amount(word: &str) -> Option<Amount> {
    let amount = match word.parse::<Amount>() {
        Ok(amount) => amount,
        Err(_err) => {
            cannot_parse_number(word);
            return None;
        }
    };

    match validate_amount(amount) {
        Ok(amount) => Some(amount),
        Err(err) => {
            eprintln!("[ERROR] {}", err);
            None
        }
    }
}

/// Prints an error message about not being able to parse
/// a string into a number, so that our users can get a
/// more informative message than the provided generic message
/// that comes from the standard library, and which is:
/// "invalid float literal".
pub fn cannot_parse_number(word: &str) {
    eprintln!(
        "[ERROR] Only positive numbers are allowed as the amount; you provided '{}'.",
        word
    );
}

#[cfg(test)]
mod tests {
    use super::{
        help_contents_full, help_contents_short, parse_account, parse_amount, read_line, Input,
    };
    use std::io::{self, Cursor, Write};

    /// A writer whose output is gone, like a closed terminal
    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_help_contents() {
        let expected = "help deposit withdraw balance list quit".to_string();
        assert_eq!(help_contents_full(), expected);
    }

    #[test]
    fn test_help_contents_short() {
        let expected = "h d w b l q".to_string();
        assert_eq!(help_contents_short(), expected);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(Some(12.5), parse_amount("12.5"));
        assert_eq!(None, parse_amount("0"));
        assert_eq!(None, parse_amount("-1"));
        assert_eq!(None, parse_amount("ten"));
        assert_eq!(None, parse_amount("inf"));
    }

    #[test]
    fn test_parse_account() {
        assert_eq!(Some(42), parse_account("42"));
        assert_eq!(None, parse_account("4.2"));
    }

    #[test]
    fn read_line_returns_the_line_and_writes_the_prompt() {
        let mut output: Vec<u8> = Vec::new();
        let input = read_line(&mut Cursor::new("deposit 1 5\n"), &mut output, ">> ");

        assert_eq!(Input::Line("deposit 1 5\n".to_string()), input);
        assert_eq!(b"\n>> ".to_vec(), output);
    }

    #[test]
    fn read_line_tells_blank_lines_from_end_of_input() {
        assert_eq!(Input::Blank, read_line(&mut Cursor::new("  \n"), &mut io::sink(), ">> "));
        assert_eq!(Input::Eof, read_line(&mut Cursor::new(""), &mut io::sink(), ">> "));
    }

    #[test]
    fn read_line_reads_one_line_at_a_time_until_end_of_input() {
        let mut reader = Cursor::new("balance 1\n\nquit");
        let mut output = io::sink();

        assert_eq!(
            Input::Line("balance 1\n".to_string()),
            read_line(&mut reader, &mut output, ">> ")
        );
        assert_eq!(Input::Blank, read_line(&mut reader, &mut output, ">> "));
        assert_eq!(Input::Line("quit".to_string()), read_line(&mut reader, &mut output, ">> "));
        assert_eq!(Input::Eof, read_line(&mut reader, &mut output, ">> "));
    }

    #[test]
    fn read_line_ends_the_session_when_the_prompt_cannot_be_written() {
        let input = read_line(&mut Cursor::new("help\n"), &mut ClosedOutput, ">> ");

        assert_eq!(Input::Eof, input);
    }

    #[test]
    fn read_line_ends_the_session_on_a_read_error() {
        let mut reader = Cursor::new(vec![0xff, 0xfe, b'\n']);

        assert_eq!(Input::Eof, read_line(&mut reader, &mut io::sink(), ">> "));
    }
}
