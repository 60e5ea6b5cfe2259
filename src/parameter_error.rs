//! Error handling for arm parameters and drawing configuration

use std::io;

/// Unified error to report invalid arm parameters and failures while reading configuration.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    MissingField(String),
    InvalidLength { name: &'static str, value: f64 },
    InvalidSampleCount(usize),
    UnknownShape(String),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::MissingField(ref field) =>
                write!(f, "Missing Field: {}", field),
            ParameterError::InvalidLength { name, value } =>
                write!(f, "Invalid Length: {} must be positive and finite (got {})", name, value),
            ParameterError::InvalidSampleCount(count) =>
                write!(f, "Invalid Sample Count: at least 2 samples required (got {})", count),
            ParameterError::UnknownShape(ref name) =>
                write!(f, "Unknown Shape: {} (expected m, n or circle)", name),
        }
    }
}

impl std::error::Error for ParameterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParameterError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}
