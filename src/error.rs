use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeorouteError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid reward matrix: {0}")]
    InvalidMatrix(String),

    #[error("Unsatisfiable constraint set: no legal route found after {attempts} attempts")]
    UnsatisfiableConstraints { attempts: usize },

    #[error("Sweep error: {0}")]
    Sweep(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeorouteError>;
