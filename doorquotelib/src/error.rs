//! Единый тип ошибок публичного API.
//!
//! Ядро (парсер, округление, расчёт) ошибок не возвращает; этот тип нужен
//! хранилищу, форматам, конфигу и CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid dimension: {0:?}")]
    InvalidDimension(String),

    #[error("Door entry {0} not found")]
    NotFound(u64),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
