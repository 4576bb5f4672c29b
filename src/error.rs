//! Error types for Go source parsing

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{path}:{line}: {message}")]
    Syntax {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("package name mismatch: {first} vs {second}")]
    PackageNameMismatch { first: String, second: String },
    #[error("invalid import path literal {literal}: {reason}")]
    ImportLiteral { literal: String, reason: String },
}

impl ParseError {
    pub(crate) fn syntax(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        ParseError::Syntax {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}
