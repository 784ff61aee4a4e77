//! Integration tests for guard-run.
//!
//! Cover the success and failure paths of the sync and async wrappers,
//! panics at every point a wrapped call can panic, and the serialized shape
//! of the result.

use guard_core::{fail, ErrorOrMessage, GuardError};
use guard_run::{safe, safe_async, safe_unwind};
use serde_json::json;
use std::io;
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// =============================================================================
// Synchronous
// =============================================================================

#[test]
fn test_safe_returns_value() {
    init_tracing();
    let run = safe(|| Ok::<_, GuardError>(1));
    assert_eq!(run.into_result().ok(), Some(1));
}

#[test]
fn test_safe_returns_raised_error() {
    let run = safe(|| -> Result<(), GuardError> { fail("Failed") });
    let error = run.into_result().unwrap_err();
    assert!(!error.is_panic());
    assert_eq!(error.message(), "Failed");
}

#[test]
fn test_safe_keeps_foreign_error_types() {
    let run = safe(|| -> Result<u8, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "Failed"))
    });
    let error = run.into_result().unwrap_err();
    assert_eq!(error.raised().map(io::Error::kind), Some(io::ErrorKind::NotFound));
    assert_eq!(error.message(), "Failed");
}

#[test]
fn test_safe_keeps_custom_override_identity() {
    let run = safe(|| -> Result<(), GuardError> {
        fail(ErrorOrMessage::error(io::Error::new(io::ErrorKind::Other, "Failed")))
    });
    let error = run.into_result().unwrap_err().into_raised().unwrap();
    assert!(error.downcast_ref::<io::Error>().is_some());
}

#[test]
fn test_safe_unwind_captures_panic() {
    let run = safe_unwind(|| -> u8 { panic!("Failed") });
    assert!(!run.success());
    assert_eq!(run.error().unwrap().message(), "Failed");
}

// =============================================================================
// Asynchronous
// =============================================================================

#[tokio::test]
async fn test_safe_async_resolves_value() {
    let run = safe_async(|| async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        Ok::<_, GuardError>(1)
    })
    .await;
    assert!(run.success());
    assert_eq!(run.into_result().ok(), Some(1));
}

#[tokio::test]
async fn test_safe_async_resolves_rejection() {
    let run = safe_async(|| async {
        tokio::task::yield_now().await;
        fail::<u8>("Failed")
    })
    .await;
    assert!(!run.success());
    assert_eq!(run.error().unwrap().message(), "Failed");
}

#[tokio::test]
async fn test_safe_async_captures_panic_while_polling() {
    let run = safe_async(|| async {
        tokio::task::yield_now().await;
        if true {
            panic!("Failed");
        }
        Ok::<u8, GuardError>(0)
    })
    .await;
    let error = run.error().unwrap();
    assert!(error.is_panic());
    assert_eq!(error.message(), "Failed");
}

#[tokio::test]
async fn test_safe_async_captures_panic_while_building() {
    let run = safe_async(|| -> std::future::Ready<Result<u8, GuardError>> {
        panic!("Failed");
    })
    .await;
    assert!(run.error().unwrap().is_panic());
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn test_result_serializes_with_flag() {
    let ok = safe(|| Ok::<_, GuardError>(1)).map_error(|e| e.message());
    assert_eq!(
        serde_json::to_value(&ok).unwrap(),
        json!({"success": true, "result": 1})
    );

    let failed = safe(|| fail::<i32>("Failed")).map_error(|e| e.message());
    assert_eq!(
        serde_json::to_value(&failed).unwrap(),
        json!({"success": false, "error": "Failed"})
    );
}
