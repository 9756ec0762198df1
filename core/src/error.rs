use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TilechartError {
    #[error("Invalid range '{0}': expected one of 3, 6, 12")]
    InvalidRange(String),
}
