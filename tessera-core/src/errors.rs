use thiserror::Error;

pub type Result<T> = std::result::Result<T, TesseraError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TesseraError {
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Invalid margin: {0}")]
    InvalidMargin(&'static str),
    #[error("Invalid button: {0:?}")]
    InvalidButton(String),
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}
