/// Error types for the geometry reader and configuration loading
use std::path::PathBuf;

use thiserror::Error;

/// Problems found while reading a geometry source.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("failed to read geometry source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: unknown symbol '{symbol}'")]
    UnknownSymbol { line: usize, symbol: char },

    #[error("line {line}: malformed {kind} line")]
    Malformed { line: usize, kind: &'static str },

    #[error("line {line}: vertex index {index} out of range (have {count} vertices)")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        count: usize,
    },
}

impl GeometryError {
    /// Source line of a per-line diagnostic.
    pub fn line(&self) -> Option<usize> {
        match self {
            GeometryError::Io { .. } => None,
            GeometryError::UnknownSymbol { line, .. }
            | GeometryError::Malformed { line, .. }
            | GeometryError::IndexOutOfRange { line, .. } => Some(*line),
        }
    }
}

/// Rejected render configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("field of view must be within (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("near clamp must be positive and finite, got {0}")]
    InvalidNearClamp(f32),

    #[error("pointer divisor must be positive and finite, got {0}")]
    InvalidDivisor(f32),

    #[error("light direction must be a finite non-zero vector")]
    InvalidLight,

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
