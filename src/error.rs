use thiserror::Error;

use std::io::Error as IoError;

/// Errors that may rise while reading one request from the input stream.
#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("I/O input error: {0}")]
    IoError(#[from] IoError),

    #[error("input ended before \"{field}\" was provided")]
    UnexpectedEof { field: &'static str },

    #[error("failed to parse {field} (integer) from \"{content}\"")]
    Integer {
        field: &'static str,
        content: String,
    },

    #[error("failed to parse {field} (floating point) from \"{content}\"")]
    Float {
        field: &'static str,
        content: String,
    },

    #[error("failed to parse termination flag from \"{0}\"")]
    TerminationFlag(String),

    #[error("unknown density unit \"{0}\"")]
    DensityUnit(String),
}

/// Errors raised by an [crate::prelude::ElectronDensityModel].
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to start model worker \"{program}\": {source}")]
    Spawn {
        program: String,
        #[source]
        source: IoError,
    },

    #[error("model worker I/O error: {0}")]
    Io(#[from] IoError),

    #[error("model worker closed its output")]
    WorkerClosed,

    #[error("invalid model response \"{0}\"")]
    InvalidResponse(String),

    #[error("model returned a non finite electron density")]
    NonFinite,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("parsing error: {0}")]
    Parsing(#[from] ParsingError),

    #[error("invalid date time: {0}")]
    InvalidDatetime(String),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("I/O output error: {0}")]
    Io(#[from] IoError),
}
