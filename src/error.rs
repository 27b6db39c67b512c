use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnvError>;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("invalid action {action}: expected a value in 0..{n}")]
    InvalidAction { action: i64, n: i64 },
    #[error("step() called before reset()")]
    NotReset,
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("failed to read config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    ConfigParse(#[from] serde_json::Error),
}
