//! Unified Error Model
use std::error::Error as StdError;
use thiserror::Error;

pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error raised by a violated guard
#[derive(Error, Debug)]
pub enum GuardError {
    /// A plain message promoted to a generic error
    #[error("{0}")]
    Assertion(String),

    /// A caller-supplied error, carried unchanged
    #[error(transparent)]
    Custom(BoxError),
}

impl GuardError {
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, GuardError::Custom(_))
    }

    /// Borrow the caller-supplied error as its concrete type
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        match self {
            GuardError::Custom(err) => err.downcast_ref::<E>(),
            GuardError::Assertion(_) => None,
        }
    }

    /// Hand the caller-supplied error back, or return `self` for synthesized errors
    pub fn into_custom(self) -> Result<BoxError, Self> {
        match self {
            GuardError::Custom(err) => Ok(err),
            other => Err(other),
        }
    }
}

/// Override accepted by every assertion: either a message or a ready-made error
#[derive(Debug)]
pub enum ErrorOrMessage {
    Message(String),
    Error(BoxError),
}

impl ErrorOrMessage {
    pub fn error<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        ErrorOrMessage::Error(Box::new(err))
    }
}

impl From<&str> for ErrorOrMessage {
    fn from(msg: &str) -> Self {
        ErrorOrMessage::Message(msg.to_string())
    }
}

impl From<String> for ErrorOrMessage {
    fn from(msg: String) -> Self {
        ErrorOrMessage::Message(msg)
    }
}

impl From<BoxError> for ErrorOrMessage {
    fn from(err: BoxError) -> Self {
        ErrorOrMessage::Error(err)
    }
}

impl From<GuardError> for ErrorOrMessage {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::Assertion(msg) => ErrorOrMessage::Message(msg),
            GuardError::Custom(err) => ErrorOrMessage::Error(err),
        }
    }
}

impl From<ErrorOrMessage> for GuardError {
    fn from(value: ErrorOrMessage) -> Self {
        match value {
            ErrorOrMessage::Message(msg) => GuardError::Assertion(msg),
            ErrorOrMessage::Error(err) => GuardError::Custom(err),
        }
    }
}
