use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid shift value '{0}': expected an integer")]
    InvalidShift(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
