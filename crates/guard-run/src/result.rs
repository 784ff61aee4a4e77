//! Safe-run result
//!
//! Exactly two shapes: success with the produced value, failure with the
//! captured error. On the wire the `success` flag is the only discriminant:
//!
//! ```json
//! {"success": true, "result": 1}
//! {"success": false, "error": "Failed"}
//! ```

use serde::de::{self, IntoDeserializer};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafeRunResult<T, E> {
    /// The run returned normally
    Success { result: T },
    /// The run raised; `error` is what it raised
    Failure { error: E },
}

impl<T, E> SafeRunResult<T, E> {
    pub fn success(&self) -> bool {
        matches!(self, SafeRunResult::Success { .. })
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            SafeRunResult::Success { result } => Some(result),
            SafeRunResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            SafeRunResult::Success { .. } => None,
            SafeRunResult::Failure { error } => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        match self {
            SafeRunResult::Success { result } => Ok(result),
            SafeRunResult::Failure { error } => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SafeRunResult<U, E> {
        match self {
            SafeRunResult::Success { result } => SafeRunResult::Success { result: f(result) },
            SafeRunResult::Failure { error } => SafeRunResult::Failure { error },
        }
    }

    pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> SafeRunResult<T, F> {
        match self {
            SafeRunResult::Success { result } => SafeRunResult::Success { result },
            SafeRunResult::Failure { error } => SafeRunResult::Failure { error: f(error) },
        }
    }
}

impl<T, E> From<Result<T, E>> for SafeRunResult<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(result) => SafeRunResult::Success { result },
            Err(error) => SafeRunResult::Failure { error },
        }
    }
}

impl<T: Serialize, E: Serialize> Serialize for SafeRunResult<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SafeRunResult", 2)?;
        match self {
            SafeRunResult::Success { result } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("result", result)?;
            }
            SafeRunResult::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

#[derive(Deserialize)]
struct RawSafeRunResult<T, E> {
    success: bool,
    result: Option<T>,
    error: Option<E>,
}

/// A payload that decoded as absent; unit-like types (`()`, `Option<_>`)
/// legitimately serialize to `null`, anything else is a missing field.
fn absent<'de, V, DeErr>(field: &'static str) -> Result<V, DeErr>
where
    V: Deserialize<'de>,
    DeErr: de::Error,
{
    let unit: de::value::UnitDeserializer<DeErr> = ().into_deserializer();
    V::deserialize(unit).map_err(|_| DeErr::missing_field(field))
}

impl<'de, T, E> Deserialize<'de> for SafeRunResult<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawSafeRunResult::<T, E>::deserialize(deserializer)?;
        if raw.success {
            let result = match raw.result {
                Some(result) => result,
                None => absent("result")?,
            };
            Ok(SafeRunResult::Success { result })
        } else {
            let error = match raw.error {
                Some(error) => error,
                None => absent("error")?,
            };
            Ok(SafeRunResult::Failure { error })
        }
    }
}
