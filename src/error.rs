//! Errors raised while interpreting a scene file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    /// The scene file could not be opened or read.
    #[error("cannot read scene file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: `{command}` is missing argument {position}")]
    MissingArgument {
        line: usize,
        command: String,
        position: usize,
    },

    #[error("line {line}: `{command}` expects a number, got `{token}`")]
    InvalidNumber {
        line: usize,
        command: String,
        token: String,
    },

    #[error("line {line}: rotation axis has zero length")]
    DegenerateAxis { line: usize },

    /// `groupend` with no open `group`.
    #[error("line {line}: groupend without a matching group")]
    StackUnderflow { line: usize },

    #[error("{open} group(s) still open at end of file")]
    UnclosedGroups { open: usize },
}

impl SceneError {
    /// 1-based line the error was raised on, if it belongs to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            SceneError::MissingArgument { line, .. }
            | SceneError::InvalidNumber { line, .. }
            | SceneError::DegenerateAxis { line }
            | SceneError::StackUnderflow { line } => Some(*line),
            SceneError::Io { .. } | SceneError::UnclosedGroups { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SceneError>;
