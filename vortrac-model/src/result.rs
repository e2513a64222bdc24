//!
//! Contains the Result and Error types for VORTRAC model operations.
//!

use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("two sweeps' elevation numbers do not match")]
    ElevationMismatchError,

    #[error("missing or malformed configuration field: {0}")]
    ConfigError(String),

    #[error("I/O error persisting list: {0}")]
    IoError(#[source] std::io::Error),

    #[error("XML write error: {0}")]
    XmlWriteError(#[source] xml::writer::Error),
}
