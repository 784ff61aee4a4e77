//! Guard Core: Value model, error vocabulary and shared helpers
//!
//! The pieces every other guard crate builds on: a dynamic [`Value`] that
//! stands in for "a value of unknown type", the [`GuardError`] raised by
//! violated guards, and the small helpers ([`fail`], [`default_to`],
//! [`when`]) used to implement them.

pub mod error;
pub mod util;
pub mod value;

pub use error::{BoxError, ErrorOrMessage, GuardError};
pub use util::{default_to, fail, fail_or_default, when, when_else, Nullish};
pub use value::{Function, Object, Symbol, TypeClass, Value};
