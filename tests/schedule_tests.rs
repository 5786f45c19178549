#![cfg(feature = "async")]
//! Tests for delayed invocation.
//!
//! Tests cover:
//! - The call runs only after the wait has elapsed
//! - Arguments are forwarded
//! - Cancellation before and after the call
//! - Panics inside the delayed function

use combinars::schedule::{DelayError, delay};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn call_waits_for_the_delay() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let handle = delay(
        move |()| counter.fetch_add(1, Ordering::SeqCst),
        Duration::from_millis(500),
        (),
    )
    .unwrap();

    tokio::time::sleep(Duration::from_millis(499)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!handle.is_finished());

    tokio::time::sleep(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    assert_eq!(handle.join().await, Ok(0));
}

#[tokio::test(start_paused = true)]
async fn arguments_are_forwarded() {
    let handle = delay(
        |(greeting, name): (&'static str, String)| format!("{greeting}, {name}"),
        Duration::from_millis(10),
        ("hello", "ada".to_string()),
    )
    .unwrap();

    assert_eq!(handle.join().await, Ok("hello, ada".to_string()));
}

#[tokio::test(start_paused = true)]
async fn cancel_prevents_the_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let handle = delay(
        move |()| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        Duration::from_secs(1),
        (),
    )
    .unwrap();
    handle.cancel();

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(handle.join().await, Err(DelayError::Cancelled));
}

#[tokio::test(start_paused = true)]
async fn cancel_after_completion_keeps_the_result() {
    let handle = delay(|value: u8| value + 1, Duration::from_millis(1), 1).unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    tokio::task::yield_now().await;
    assert!(handle.is_finished());

    handle.cancel();
    assert_eq!(handle.join().await, Ok(2));
}

#[tokio::test(start_paused = true)]
async fn panicking_call_is_reported() {
    let handle = delay(
        |()| -> i32 { panic!("delayed failure") },
        Duration::from_millis(1),
        (),
    )
    .unwrap();

    assert_eq!(handle.join().await, Err(DelayError::Panicked));
}

#[test]
fn delay_outside_runtime_fails() {
    let result = delay(|()| (), Duration::from_millis(1), ());
    assert!(matches!(result, Err(DelayError::NoRuntime)));
}
