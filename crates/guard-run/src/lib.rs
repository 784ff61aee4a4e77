//! Guard Run: safe execution
//!
//! Runs a zero-argument closure (or the future it returns) and turns every
//! outcome into a [`SafeRunResult`] instead of propagating it: an `Err` the
//! closure returns becomes [`RunError::Raised`], a panic becomes
//! [`RunError::Panicked`]. The wrappers themselves never fail.
//!
//! ```
//! use guard_core::fail;
//! use guard_run::{safe, safe_unwind};
//!
//! let run = safe_unwind(|| 1);
//! assert!(run.success());
//! assert_eq!(run.result(), Some(&1));
//!
//! let run = safe(|| fail::<i32>("Failed"));
//! assert!(!run.success());
//! assert_eq!(run.error().unwrap().message(), "Failed");
//! ```

pub mod error;
pub mod result;

pub use error::{PanicError, RunError};
pub use result::SafeRunResult;

use futures_util::FutureExt;
use std::any::type_name;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Result of [`safe`] and [`safe_async`]
pub type SafeRun<T, E = guard_core::GuardError> = SafeRunResult<T, RunError<E>>;

fn captured<T, E>(error: RunError<E>) -> SafeRun<T, E> {
    match &error {
        RunError::Raised(_) => {
            tracing::debug!(error_type = type_name::<E>(), "safe run captured error")
        }
        RunError::Panicked(panic) => tracing::debug!(error = %panic, "safe run captured panic"),
    }
    SafeRunResult::Failure { error }
}

fn settle<T, E>(outcome: Result<T, E>) -> SafeRun<T, E> {
    match outcome {
        Ok(result) => SafeRunResult::Success { result },
        Err(err) => captured(RunError::Raised(err)),
    }
}

/// Run a fallible closure, capturing both its `Err` and any panic
pub fn safe<T, E, F>(f: F) -> SafeRun<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(outcome) => settle(outcome),
        Err(payload) => captured(RunError::Panicked(PanicError::from_payload(payload))),
    }
}

/// Run an infallible closure; the only failure it can report is a panic
pub fn safe_unwind<T, F>(f: F) -> SafeRunResult<T, PanicError>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => SafeRunResult::Success { result },
        Err(payload) => {
            let error = PanicError::from_payload(payload);
            tracing::debug!(error = %error, "safe run captured panic");
            SafeRunResult::Failure { error }
        }
    }
}

/// Await the future built by `f`, capturing its `Err` and any panic raised
/// while building or polling it.
pub async fn safe_async<T, E, F, Fut>(f: F) -> SafeRun<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let fut = match catch_unwind(AssertUnwindSafe(f)) {
        Ok(fut) => fut,
        Err(payload) => return captured(RunError::Panicked(PanicError::from_payload(payload))),
    };

    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(outcome) => settle(outcome),
        Err(payload) => captured(RunError::Panicked(PanicError::from_payload(payload))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guard_core::{fail, GuardError};

    #[test]
    fn test_safe_success() {
        let run = safe(|| Ok::<_, GuardError>(1));
        assert!(run.success());
        assert_eq!(run.result(), Some(&1));
    }

    #[test]
    fn test_safe_failure() {
        let run = safe(|| -> Result<i32, GuardError> { fail("Failed") });
        assert!(!run.success());
        let error = run.error().unwrap();
        assert!(matches!(error.raised(), Some(GuardError::Assertion(_))));
        assert_eq!(error.message(), "Failed");
    }

    #[test]
    fn test_safe_captures_panic() {
        let run = safe(|| -> Result<i32, GuardError> { panic!("Failed") });
        let error = run.error().unwrap();
        assert!(error.is_panic());
        assert_eq!(error.message(), "Failed");
    }

    #[test]
    fn test_safe_unwind() {
        assert_eq!(safe_unwind(|| 1).into_result(), Ok(1));

        let run = safe_unwind(|| -> i32 { panic!("boom {}", 7) });
        assert_eq!(run.error().map(PanicError::message), Some("boom 7"));
    }

    #[test]
    fn test_safe_accepts_errors_without_display() {
        let run = safe(|| -> Result<u8, ()> { Err(()) });
        assert_eq!(run.into_result().unwrap_err().into_raised(), Ok(()));

        let run = safe(|| -> Result<u8, ()> { panic!("Failed") });
        assert!(run.error().unwrap().is_panic());
    }

    #[tokio::test]
    async fn test_safe_async_accepts_errors_without_display() {
        let run = safe_async(|| async { Err::<u8, ()>(()) }).await;
        assert_eq!(run.error().and_then(RunError::raised), Some(&()));
    }

    #[tokio::test]
    async fn test_safe_async_success() {
        let run = safe_async(|| async { Ok::<_, GuardError>(1) }).await;
        assert!(run.success());
        assert_eq!(run.result(), Some(&1));
    }

    #[tokio::test]
    async fn test_safe_async_failure() {
        let run = safe_async(|| async { fail::<i32>("Failed") }).await;
        assert!(!run.success());
        assert_eq!(run.error().unwrap().message(), "Failed");
    }
}
