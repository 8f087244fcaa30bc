//! Error types for engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("course source error: {0}")]
    Source(String),

    #[error("unknown size class: {0}")]
    UnknownSizeClass(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
