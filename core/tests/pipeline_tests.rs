// tests/pipeline_tests.rs
mod common;

use common::*;
use serial_test::serial;
use tether::{pipeline, FailurePolicy, Pipeline, PipelineError, TetherError};

#[test]
#[serial]
fn test_pipeline_all_steps_succeed() {
  setup_tracing();
  reset_counters();
  let mut pipeline = Pipeline::<TestError>::new(false);
  pipeline.add(counting_step(Ok(()))).add(counting_step(Ok(())));

  assert_eq!(pipeline.len(), 2);
  assert!(pipeline.run().is_ok());
  assert_eq!(executed_steps(), 2);
}

#[test]
fn test_empty_pipeline_succeeds() {
  setup_tracing();
  let pipeline = Pipeline::<TestError>::new(true);
  assert!(pipeline.is_empty());
  assert!(pipeline.run().is_ok());
}

#[test]
#[serial]
fn test_aggregate_collects_errors_in_order() {
  setup_tracing();
  reset_counters();
  let mut pipeline = Pipeline::new(false);
  pipeline
    .add(counting_step(Err(ERR_A)))
    .add(counting_step(Ok(())))
    .add(counting_step(Err(ERR_B)));

  let err = pipeline.run().unwrap_err();
  assert_eq!(executed_steps(), 3);
  match &err {
    PipelineError::Joined(joined) => {
      assert_eq!(joined.as_slice(), &[ERR_A, ERR_B]);
    }
    other => panic!("Expected PipelineError::Joined, got {:?}", other),
  }
  assert!(err.contains(&ERR_A));
  assert!(err.contains(&ERR_B));
  assert!(!err.contains(&ERR_C));
}

#[test]
#[serial]
fn test_aggregate_keeps_single_error_joined() {
  setup_tracing();
  reset_counters();
  let mut pipeline = Pipeline::new(false);
  pipeline.add(counting_step(Ok(()))).add(counting_step(Err(ERR_C)));

  let err = pipeline.run().unwrap_err();
  assert!(!err.is_halted());
  assert_eq!(err.into_errors(), vec![ERR_C]);
}

#[test]
#[serial]
fn test_stop_on_first_error_skips_remaining_steps() {
  setup_tracing();
  reset_counters();
  let mut pipeline = Pipeline::new(true);
  pipeline
    .add(counting_step(Err(ERR_A)))
    .add(counting_step(Err(ERR_B)))
    .add(counting_step(Ok(())));

  let err = pipeline.run().unwrap_err();
  assert_eq!(executed_steps(), 1);
  assert!(err.is_halted());
  assert_eq!(err.first(), &ERR_A);
  assert_eq!(err.errors(), &[ERR_A]);
}

#[test]
#[serial]
fn test_stop_on_first_error_runs_steps_before_failure() {
  setup_tracing();
  reset_counters();
  let mut pipeline = Pipeline::with_policy(FailurePolicy::StopOnFirstError);
  pipeline
    .add(counting_step(Ok(())))
    .add(counting_step(Ok(())))
    .add(counting_step(Err(ERR_B)))
    .add(counting_step(Ok(())));

  let err = pipeline.run().unwrap_err();
  assert_eq!(executed_steps(), 3);
  assert!(matches!(err, PipelineError::Halted(ref e) if *e == ERR_B));
}

#[test]
fn test_steps_run_in_insertion_order() {
  setup_tracing();
  let order = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
  let mut pipeline = Pipeline::<TestError>::new(false);
  for idx in 0..5 {
    let order = std::sync::Arc::clone(&order);
    pipeline.add(move || {
      order.lock().unwrap().push(idx);
      Ok(())
    });
  }

  pipeline.run().unwrap();
  assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_nothing_runs_before_run() {
  setup_tracing();
  let ran = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));
  let mut pipeline = Pipeline::<TestError>::new(false);
  let flag = std::sync::Arc::clone(&ran);
  pipeline.add(move || {
    flag.store(true, std::sync::atomic::Ordering::SeqCst);
    Ok(())
  });

  assert!(!ran.load(std::sync::atomic::Ordering::SeqCst));
  pipeline.run().unwrap();
  assert!(ran.load(std::sync::atomic::Ordering::SeqCst));
}

#[test]
fn test_pipeline_sentinel_is_matchable() {
  setup_tracing();
  let mut pipeline = Pipeline::<TestError>::new(true);
  pipeline
    .add(|| Err(TestError::from(tether::pipeline::REJECTED_WITHOUT_REASON)))
    .add(|| Ok(()));

  let err = pipeline.run().unwrap_err();
  assert_eq!(
    err.first(),
    &TestError::Tether(TetherError::PipelineRejectedWithoutReason)
  );
}

#[test]
fn test_joined_error_message_lists_every_failure() {
  setup_tracing();
  let mut pipeline = pipeline::<TestError>(false);
  pipeline
    .add(|| Err(TetherError::PipelineRejectedWithoutReason.into()))
    .add(|| Err(ERR_A))
    .add(|| Err(ERR_B));

  let err = pipeline.run().unwrap_err();
  assert_eq!(
    err.to_string(),
    "tether sentinel: pipeline rejected without reason\nstep failed: a\nstep failed: b"
  );
}

#[test]
fn test_pipeline_error_lifts_into_anyhow() {
  setup_tracing();
  fn run_checked() -> anyhow::Result<()> {
    let mut pipeline = Pipeline::new(true);
    pipeline.add(|| Err(ERR_C));
    pipeline.run()?;
    Ok(())
  }

  let err = run_checked().unwrap_err();
  let pipeline_err = err.downcast_ref::<PipelineError<TestError>>().unwrap();
  assert_eq!(pipeline_err.first(), &ERR_C);
}

#[test]
fn test_stop_on_first_error_with_borrowed_counter() {
  setup_tracing();
  let calls = std::cell::Cell::new(0);
  let mut pipeline = Pipeline::<TestError>::new(true);
  pipeline
    .add(|| {
      calls.set(calls.get() + 1);
      Err(ERR_A)
    })
    .add(|| {
      calls.set(calls.get() + 1);
      Err(ERR_B)
    });

  let err = pipeline.run().unwrap_err();
  assert_eq!(err.first(), &ERR_A);
  assert_eq!(calls.get(), 1);
}

#[test]
fn test_aggregate_with_mutably_borrowed_counter() {
  setup_tracing();
  let mut calls = 0;
  let mut pipeline = Pipeline::<TestError>::new(false);
  pipeline.add(|| {
    calls += 1;
    Err(ERR_A)
  });

  let err = pipeline.run().unwrap_err();
  assert_eq!(err.into_errors(), vec![ERR_A]);
  assert_eq!(calls, 1);
}
