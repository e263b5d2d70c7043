use std::io;

/// Errors raised while building a URL.
///
/// Serializing a query and substituting route parameters never fail on
/// well-formed input; these only surface for values the URL data model
/// cannot express, or when the underlying writer fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Custom error raised by a `Serialize` implementation.
    #[error("{0}")]
    Custom(String),

    /// The value cannot be represented in this position.
    #[error("unsupported {0}")]
    Unsupported(&'static str),

    /// Failure writing the serialized output.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: std::fmt::Display,
    {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
