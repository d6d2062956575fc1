use thiserror::Error;

pub type Result<T> = std::result::Result<T, EnigmaError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    #[error("invalid wiring: {0}")]
    InvalidWiring(String),

    #[error("invalid plugboard: {0}")]
    InvalidPlugboard(String),

    #[error("invalid turnover: {0}")]
    InvalidTurnover(String),

    #[error("invalid base: {0}")]
    InvalidBase(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
