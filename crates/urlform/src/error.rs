use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported value at `{path}`: form encoding has no representation for null")]
    UnsupportedValue { path: String },

    #[error("value already encoded at `{path}`")]
    DoubleEncode { path: String },

    #[error("root must be a record, found {found}")]
    InvalidRoot { found: &'static str },

    #[error("unsupported key at `{path}`: map keys must be strings, numbers or booleans")]
    UnsupportedKey { path: String },

    #[error("decode at offset {offset}: {message}")]
    Decode { offset: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Message(String),
}

/// Fieldless view of [`Error`] for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedValue,
    DoubleEncode,
    InvalidRoot,
    UnsupportedKey,
    Decode,
    Io,
    Message,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedValue { .. } => ErrorKind::UnsupportedValue,
            Error::DoubleEncode { .. } => ErrorKind::DoubleEncode,
            Error::InvalidRoot { .. } => ErrorKind::InvalidRoot,
            Error::UnsupportedKey { .. } => ErrorKind::UnsupportedKey,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::Io(_) => ErrorKind::Io,
            Error::Message(_) => ErrorKind::Message,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: core::fmt::Display>(t: T) -> Self {
        Error::Message(t.to_string())
    }
}

pub type Result<T> = core::result::Result<T, Error>;
