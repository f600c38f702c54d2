//! Error types for the fallible edges of the crate.
//!
//! Rendering itself never fails; errors only come from reading sheets and
//! checking rendered output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid sheet JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rendered CSS does not parse: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, Error>;
