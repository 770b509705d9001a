#![cfg(feature = "async")]
//! Unit tests for the delay decorator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rstest::rstest;
use tokio::time::{Instant, sleep};
use underbar::decorator::{DecoratorError, delay};

const WAIT: Duration = Duration::from_millis(100);

#[tokio::test(start_paused = true)]
async fn delay_returns_before_the_function_runs() {
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);

    let handle = delay(move |(): ()| flag.store(true, Ordering::SeqCst), WAIT, ()).unwrap();

    assert!(!ran.load(Ordering::SeqCst));
    handle.await.unwrap();
    assert!(ran.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn delay_does_not_run_before_the_wait() {
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);
    let start = Instant::now();

    let handle = delay(move |(): ()| flag.store(true, Ordering::SeqCst), WAIT, ()).unwrap();
    sleep(WAIT / 2).await;
    assert!(!ran.load(Ordering::SeqCst));

    handle.await.unwrap();
    assert!(ran.load(Ordering::SeqCst));
    assert!(start.elapsed() >= WAIT);
}

#[tokio::test(start_paused = true)]
async fn delay_passes_arguments_and_returns_the_result() {
    let handle = delay(|(left, right): (i32, i32)| left * right, WAIT, (6, 7)).unwrap();
    assert_eq!(handle.await.unwrap(), 42);
}

#[tokio::test(start_paused = true)]
async fn delay_keeps_running_when_the_handle_is_dropped() {
    let ran = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&ran);

    drop(delay(move |(): ()| flag.store(true, Ordering::SeqCst), WAIT, ()).unwrap());
    sleep(WAIT * 2).await;

    assert!(ran.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn shorter_delays_run_first() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let slow_order = Arc::clone(&order);
    let fast_order = Arc::clone(&order);

    let slow = delay(
        move |label: &'static str| slow_order.lock().unwrap().push(label),
        WAIT * 2,
        "slow",
    )
    .unwrap();
    let fast = delay(
        move |label: &'static str| fast_order.lock().unwrap().push(label),
        WAIT,
        "fast",
    )
    .unwrap();
    slow.await.unwrap();
    fast.await.unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["fast", "slow"]);
}

#[rstest]
fn delay_outside_a_runtime_fails() {
    let result = delay(|(): ()| (), WAIT, ());
    assert!(matches!(
        result,
        Err(DecoratorError::NoRuntime { operation: "delay" })
    ));
}
