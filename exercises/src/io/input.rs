//! Line-oriented input reader shared by every exercise.
//!
//! Each declared value occupies one line. Conversion failures surface as an
//! [`InputError`] naming the line and the value that was expected there, so
//! `main` can map them onto [`crate::exit_codes::INVALID_INPUT`].

use std::fmt;
use std::io::BufRead;

use tracing::trace;

/// Why a value could not be read.
#[derive(Debug)]
pub enum InputErrorKind {
    /// Input ended before the value was supplied.
    Missing,
    /// The line could not be converted to the expected type.
    Invalid { raw: String, expected: &'static str },
    /// Reading from the underlying stream failed.
    Io(std::io::Error),
}

/// Failure to read one declared value.
#[derive(Debug)]
pub struct InputError {
    /// 1-based line number of the offending value.
    pub line: usize,
    /// Name of the value the exercise asked for.
    pub name: &'static str,
    pub kind: InputErrorKind,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            InputErrorKind::Missing => {
                write!(f, "line {} ({}): unexpected end of input", self.line, self.name)
            }
            InputErrorKind::Invalid { raw, expected } => write!(
                f,
                "line {} ({}): expected {}, got {:?}",
                self.line, self.name, expected, raw
            ),
            InputErrorKind::Io(err) => {
                write!(f, "line {} ({}): read failed: {}", self.line, self.name, err)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            InputErrorKind::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Reads declared values one line at a time.
pub struct Input<'a> {
    reader: &'a mut dyn BufRead,
    line: usize,
}

impl<'a> Input<'a> {
    pub fn new(reader: &'a mut dyn BufRead) -> Self {
        Self { reader, line: 0 }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Next raw line without its line terminator.
    pub fn next_line(&mut self, name: &'static str) -> Result<String, InputError> {
        self.line += 1;
        let mut buf = String::new();
        let read = self
            .reader
            .read_line(&mut buf)
            .map_err(|err| self.error(name, InputErrorKind::Io(err)))?;
        if read == 0 {
            return Err(self.error(name, InputErrorKind::Missing));
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        trace!(line = self.line, name, raw = %buf, "read value");
        Ok(buf)
    }

    /// Next line with surrounding whitespace removed.
    pub fn next_text(&mut self, name: &'static str) -> Result<String, InputError> {
        Ok(self.next_line(name)?.trim().to_string())
    }

    pub fn next_int(&mut self, name: &'static str) -> Result<i64, InputError> {
        let raw = self.next_text(name)?;
        raw.parse()
            .map_err(|_| self.invalid(name, raw, "an integer"))
    }

    pub fn next_float(&mut self, name: &'static str) -> Result<f64, InputError> {
        let raw = self.next_text(name)?;
        raw.parse().map_err(|_| self.invalid(name, raw, "a number"))
    }

    /// Case-insensitive `true` / `false`.
    pub fn next_bool(&mut self, name: &'static str) -> Result<bool, InputError> {
        let raw = self.next_text(name)?;
        if raw.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(self.invalid(name, raw, "true or false"))
        }
    }

    fn invalid(&self, name: &'static str, raw: String, expected: &'static str) -> InputError {
        self.error(name, InputErrorKind::Invalid { raw, expected })
    }

    fn error(&self, name: &'static str, kind: InputErrorKind) -> InputError {
        InputError {
            line: self.line,
            name,
            kind,
        }
    }
}
