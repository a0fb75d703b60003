use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {index} has {fields} fields, expected {expected}")]
    MalformedRow { index: usize, fields: usize, expected: usize },

    #[error("Row {index}: private key is not lowercase hex: {reason}")]
    InvalidHex { index: usize, reason: String },

    #[error("Row {index}: private key is not a valid secp256k1 scalar: {reason}")]
    InvalidKey { index: usize, reason: String },

    #[error("Verification of address number {index} failed")]
    VerificationMismatch { index: usize },

    #[error("Unsupported crypto-currency: {0}")]
    UnknownCurrency(String),
}
