use crate::utils::error::{Result, ZomatoError};
use crossterm::style::{style, Stylize};
use std::fmt::Display;
use std::io::{BufRead, ErrorKind, Write};
use std::str::FromStr;

/// Line-oriented prompt over any reader/writer pair.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` and reads one line. `None` means the input is exhausted.
    ///
    /// A line that is not valid UTF-8 is consumed and reported as an input error.
    pub fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = match self.input.read_line(&mut line) {
            Ok(read) => read,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(ZomatoError::input("input", "line is not valid UTF-8"));
            }
            Err(e) => return Err(e.into()),
        };
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn success(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n{}", style(message).green())?;
        Ok(())
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n{}", style(message).red())?;
        Ok(())
    }

    pub fn notice(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "\n{}", style(message).yellow())?;
        Ok(())
    }
}

/// Parses a typed value out of a line of user input.
pub fn parse_field<T: FromStr>(field: &str, text: &str) -> Result<T> {
    let text = text.trim();
    text.parse()
        .map_err(|_| ZomatoError::input(field, format!("'{}' is not a valid {}", text, field)))
}

/// Parses `"1, 2,3"` into dish ids. Any bad entry rejects the whole list.
pub fn parse_id_list(text: &str) -> Result<Vec<u32>> {
    text.split(',')
        .map(|part| parse_field::<u32>("dish ID", part))
        .collect()
}
