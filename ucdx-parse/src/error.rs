use std::error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Represents any kind of error that can occur while parsing a UCD file.
#[derive(Debug)]
pub struct Error {
    pub(crate) kind: ErrorKind,
    pub(crate) line: Option<u64>,
    pub(crate) content: Option<String>,
    pub(crate) path: Option<PathBuf>,
}

/// The kind of error that occurred while parsing a UCD file.
#[derive(Debug)]
pub enum ErrorKind {
    /// An I/O error reported by the underlying reader.
    Io(io::Error),
    /// A field that should hold a codepoint or codepoint range does not.
    ///
    /// The string is the text of the offending field.
    MalformedCodepoint(String),
    /// A line has fewer fields than its file format requires.
    StructuralMismatch {
        /// The number of fields required.
        expected: usize,
        /// The number of fields found on the line.
        found: usize,
    },
    /// A generic parse error.
    Parse(String),
}

impl Error {
    /// Create a new parse error from the given message.
    pub(crate) fn parse(msg: String) -> Error {
        Error::new(ErrorKind::Parse(msg))
    }

    pub(crate) fn malformed_codepoint(field: &str) -> Error {
        Error::new(ErrorKind::MalformedCodepoint(field.to_string()))
    }

    pub(crate) fn structural_mismatch(expected: usize, found: usize) -> Error {
        Error::new(ErrorKind::StructuralMismatch { expected, found })
    }

    pub(crate) fn io(err: io::Error) -> Error {
        Error::new(ErrorKind::Io(err))
    }

    fn new(kind: ErrorKind) -> Error {
        Error { kind, line: None, content: None, path: None }
    }

    /// Attach the 1-based line number and the raw text of the line that
    /// caused this error.
    pub(crate) fn with_line(mut self, line: u64, content: &str) -> Error {
        self.line = Some(line);
        self.content = Some(content.to_string());
        self
    }

    /// Attach a line number without any line content.
    pub(crate) fn with_line_number(mut self, line: u64) -> Error {
        self.line = Some(line);
        self
    }

    pub(crate) fn with_path<P: AsRef<Path>>(mut self, path: P) -> Error {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Return the specific kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Return the line number at which this error occurred, if available.
    pub fn line(&self) -> Option<u64> {
        self.line
    }

    /// Return the content of the line that caused this error, if available.
    ///
    /// The content is the line as read, minus its line terminator.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Return the file path associated with this error, if one exists.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Unwrap this error into its underlying kind.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Returns true if and only if this is an I/O error.
    ///
    /// If this returns true, the underlying `ErrorKind` is guaranteed to be
    /// `ErrorKind::Io`.
    pub fn is_io_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_))
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.kind {
            ErrorKind::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref path) = self.path {
            if let Some(line) = self.line {
                write!(f, "{}:{}: ", path.display(), line)?;
            } else {
                write!(f, "{}: ", path.display())?;
            }
        } else if let Some(line) = self.line {
            write!(f, "error on line {}: ", line)?;
        }
        match self.kind {
            ErrorKind::Io(ref err) => write!(f, "{}", err)?,
            ErrorKind::MalformedCodepoint(ref field) => {
                write!(f, "invalid codepoint or codepoint range: '{}'", field)?
            }
            ErrorKind::StructuralMismatch { expected, found } => write!(
                f,
                "expected at least {} fields, but found {}",
                expected, found
            )?,
            ErrorKind::Parse(ref msg) => write!(f, "{}", msg)?,
        }
        if let Some(ref content) = self.content {
            write!(f, " (in line '{}')", content)?;
        }
        Ok(())
    }
}
