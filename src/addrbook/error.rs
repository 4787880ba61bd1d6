use crate::model::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddrBookError {
    #[error(transparent)]
    InvalidFormat(#[from] FieldError),

    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    #[error("Contact {0} not found")]
    ContactNotFound(String),

    #[error("Contact {0} already exists. Use 'change' command to update the phone number.")]
    AlreadyExists(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl AddrBookError {
    /// Errors caused by what the user typed rather than by the environment.
    /// The API layer turns these into messages instead of failing the session.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AddrBookError::InvalidFormat(_)
                | AddrBookError::PhoneNotFound(_)
                | AddrBookError::ContactNotFound(_)
                | AddrBookError::AlreadyExists(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
