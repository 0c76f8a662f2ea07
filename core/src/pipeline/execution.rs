// tether/src/pipeline/execution.rs

//! Contains the `run()` methods of `Pipeline<'a, E>` and `PipelineWithContext<'a, T, E>`.
//!
//! Both walk the queued steps in insertion order. Under
//! `FailurePolicy::StopOnFirstError` the first failure ends the run with
//! `PipelineError::Halted`. Under `FailurePolicy::Aggregate` every step runs
//! and the failures come back together as `PipelineError::Joined`.

use crate::error::{JoinedError, PipelineError};
use crate::pipeline::definition::{Pipeline, PipelineWithContext};
use tracing::{event, instrument, span, Level};

/// Turns the errors collected by an aggregate run into the run's result.
fn finish<E>(collected: Vec<E>) -> Result<(), PipelineError<E>>
where
  E: std::error::Error + 'static,
{
  match JoinedError::from_collected(collected) {
    None => {
      event!(Level::DEBUG, "Pipeline execution completed successfully.");
      Ok(())
    }
    Some(joined) => {
      event!(
        Level::ERROR,
        failed_steps = joined.len(),
        "Pipeline execution completed with failures."
      );
      Err(PipelineError::Joined(joined))
    }
  }
}

impl<E> Pipeline<'_, E>
where
  E: std::error::Error + 'static,
{
  /// Executes every queued step in order, consuming the pipeline.
  ///
  /// Returns `Ok(())` when no step failed. With stop-on-first-error, steps
  /// after the first failing one are dropped without running.
  #[instrument(
    name = "Pipeline::run",
    skip_all,
    fields(
      pipeline_error_type = %std::any::type_name::<E>(),
      num_steps = self.steps.len(),
      policy = ?self.policy,
    )
  )]
  pub fn run(self) -> Result<(), PipelineError<E>> {
    event!(Level::DEBUG, "Pipeline execution starting.");
    let Pipeline { steps, policy } = self;
    let mut collected = Vec::new();

    for (step_idx, step) in steps.into_iter().enumerate() {
      let step_span = span!(Level::DEBUG, "pipeline_step", step_index = step_idx);
      let _step_span_guard = step_span.enter();

      match step() {
        Ok(()) => event!(Level::TRACE, "Step succeeded."),
        Err(e) if policy.stops_on_first_error() => {
          event!(Level::ERROR, error = %e, "Step failed, stopping pipeline.");
          return Err(PipelineError::Halted(e));
        }
        Err(e) => {
          event!(Level::WARN, error = %e, "Step failed, continuing.");
          collected.push(e);
        }
      }
    }

    finish(collected)
  }
}

impl<T, E> PipelineWithContext<'_, T, E>
where
  E: std::error::Error + 'static,
{
  /// Executes every queued step in order, consuming the pipeline, and hands
  /// back the context together with the outcome.
  ///
  /// Each step sees the value returned by the last step that succeeded (or
  /// the initial context). On a halted run the returned context is the one
  /// in place when the failing step ran.
  #[instrument(
    name = "PipelineWithContext::run",
    skip_all,
    fields(
      pipeline_context_type = %std::any::type_name::<T>(),
      pipeline_error_type = %std::any::type_name::<E>(),
      num_steps = self.steps.len(),
      policy = ?self.policy,
    )
  )]
  pub fn run(self) -> (T, Result<(), PipelineError<E>>) {
    event!(Level::DEBUG, "Pipeline execution starting.");
    let PipelineWithContext {
      mut context,
      steps,
      policy,
    } = self;
    let mut collected = Vec::new();

    for (step_idx, step) in steps.into_iter().enumerate() {
      let step_span = span!(Level::DEBUG, "pipeline_step", step_index = step_idx);
      let _step_span_guard = step_span.enter();

      match step(&context) {
        Ok(next) => {
          context = next;
          event!(Level::TRACE, "Step succeeded, context replaced.");
        }
        Err(e) if policy.stops_on_first_error() => {
          event!(Level::ERROR, error = %e, "Step failed, stopping pipeline.");
          return (context, Err(PipelineError::Halted(e)));
        }
        Err(e) => {
          event!(Level::WARN, error = %e, "Step failed, context left unchanged.");
          collected.push(e);
        }
      }
    }

    (context, finish(collected))
  }
}
