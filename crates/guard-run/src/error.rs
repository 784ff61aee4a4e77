//! Captured failures
use guard_core::GuardError;
use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// A panic caught while running a wrapped closure or future
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Build from a `catch_unwind` payload; only `&str` and `String` payloads carry a message
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(msg) => *msg,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(msg) => msg.to_string(),
                None => "panic with non-string payload".to_string(),
            },
        };
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// What a safe run captured: the error the closure returned, or a panic
#[derive(Debug)]
pub enum RunError<E = GuardError> {
    Raised(E),
    Panicked(PanicError),
}

impl<E> RunError<E> {
    pub fn raised(&self) -> Option<&E> {
        match self {
            RunError::Raised(err) => Some(err),
            RunError::Panicked(_) => None,
        }
    }

    pub fn into_raised(self) -> Result<E, PanicError> {
        match self {
            RunError::Raised(err) => Ok(err),
            RunError::Panicked(panic) => Err(panic),
        }
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, RunError::Panicked(_))
    }
}

impl<E: fmt::Display> RunError<E> {
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl<E: fmt::Display> fmt::Display for RunError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunError::Raised(err) => write!(f, "{}", err),
            RunError::Panicked(panic) => write!(f, "{}", panic),
        }
    }
}

impl<E: StdError + 'static> StdError for RunError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            RunError::Raised(err) => err.source(),
            RunError::Panicked(_) => None,
        }
    }
}

impl<E> From<PanicError> for RunError<E> {
    fn from(panic: PanicError) -> Self {
        RunError::Panicked(panic)
    }
}
