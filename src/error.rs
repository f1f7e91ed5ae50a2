use std::error;
use std::fmt;
use std::io;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Parse(ucdx_parse::Error),
    Json(serde_json::Error),
    Other(String),
}

impl Error {
    /// Returns true if and only if this is an I/O error for a broken pipe.
    ///
    /// Writing records to a pipe that closes early, e.g., `ucdx records ... |
    /// head`, is not a failure.
    pub fn is_broken_pipe(&self) -> bool {
        match *self {
            Error::Io(ref e) => e.kind() == io::ErrorKind::BrokenPipe,
            Error::Json(ref e) => {
                e.io_error_kind() == Some(io::ErrorKind::BrokenPipe)
            }
            _ => false,
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref err) => Some(err),
            Error::Parse(ref err) => Some(err),
            Error::Json(ref err) => Some(err),
            Error::Other(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Io(ref err) => err.fmt(f),
            Error::Parse(ref err) => err.fmt(f),
            Error::Json(ref err) => err.fmt(f),
            Error::Other(ref msg) => write!(f, "{}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ucdx_parse::Error> for Error {
    fn from(err: ucdx_parse::Error) -> Error {
        Error::Parse(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}

impl From<clap::Error> for Error {
    fn from(err: clap::Error) -> Error {
        Error::Other(err.to_string())
    }
}
