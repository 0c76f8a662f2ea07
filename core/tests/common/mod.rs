// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tether::TetherError;
use tracing::Level;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("tether sentinel: {0}")]
  Tether(#[from] TetherError),

  #[error("step failed: {0}")]
  Step(&'static str),
}

pub const ERR_A: TestError = TestError::Step("a");
pub const ERR_B: TestError = TestError::Step("b");
pub const ERR_C: TestError = TestError::Step("c");

// --- Common Context Struct ---
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestContext {
  pub counter: i32,
  pub steps_executed: Vec<String>,
}

impl TestContext {
  pub fn after(&self, step_name: &str) -> Self {
    let mut next = self.clone();
    next.counter += 1;
    next.steps_executed.push(step_name.to_string());
    next
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::TRACE)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Atomic counter for checking execution counts ---
pub static STEP_EXEC_COUNTER: Lazy<Arc<AtomicUsize>> = Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  STEP_EXEC_COUNTER.store(0, Ordering::SeqCst);
}

pub fn executed_steps() -> usize {
  STEP_EXEC_COUNTER.load(Ordering::SeqCst)
}

// --- Common Step Creators ---
pub fn counting_step(outcome: Result<(), TestError>) -> impl FnOnce() -> Result<(), TestError> + Send + 'static {
  let counter = Arc::clone(&STEP_EXEC_COUNTER);
  move || {
    counter.fetch_add(1, Ordering::SeqCst);
    outcome
  }
}
