// tether/src/pipeline/definition.rs

//! Contains the `Pipeline<'a, E>` and `PipelineWithContext<'a, T, E>` struct
//! definitions and the builder methods that queue steps on them.
//!
//! Nothing runs while steps are added; see `execution.rs` for `run`.

use crate::core::control::FailurePolicy;
use crate::core::step::{ContextStep, Step};
use crate::error::TetherError;

/// Runs ordered, context-free steps.
///
/// `E` is the error type the steps return. The failure policy is fixed at
/// construction. `'a` bounds what the queued steps may borrow.
pub struct Pipeline<'a, E = TetherError> {
  /// Queued steps, in insertion order.
  pub(crate) steps: Vec<Step<'a, E>>,
  pub(crate) policy: FailurePolicy,
}

impl<'a, E> Pipeline<'a, E>
where
  E: std::error::Error + 'static,
{
  /// Creates an empty pipeline. `stop_on_first_error` picks
  /// `FailurePolicy::StopOnFirstError` over `FailurePolicy::Aggregate`.
  pub fn new(stop_on_first_error: bool) -> Self {
    Self::with_policy(FailurePolicy::from(stop_on_first_error))
  }

  pub fn with_policy(policy: FailurePolicy) -> Self {
    Self {
      steps: Vec::new(),
      policy,
    }
  }

  /// Queues `step` after every step added so far.
  pub fn add<F>(&mut self, step: F) -> &mut Self
  where
    F: FnOnce() -> Result<(), E> + 'a,
  {
    self.steps.push(Box::new(step));
    self
  }

  pub fn policy(&self) -> FailurePolicy {
    self.policy
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }
}

impl<E> Default for Pipeline<'_, E>
where
  E: std::error::Error + 'static,
{
  fn default() -> Self {
    Self::with_policy(FailurePolicy::default())
  }
}

// Steps are closures, so only their count is shown.
impl<E> std::fmt::Debug for Pipeline<'_, E> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline")
      .field("steps", &self.steps.len())
      .field("policy", &self.policy)
      .finish()
  }
}

/// Runs ordered steps that each read the current context and return its
/// replacement.
///
/// The pipeline owns the context outright. A step that succeeds replaces it
/// wholesale; a step that fails leaves it as it was.
pub struct PipelineWithContext<'a, T, E = TetherError> {
  pub(crate) context: T,
  pub(crate) steps: Vec<ContextStep<'a, T, E>>,
  pub(crate) policy: FailurePolicy,
}

impl<'a, T, E> PipelineWithContext<'a, T, E>
where
  E: std::error::Error + 'static,
{
  pub fn new(context: T, stop_on_first_error: bool) -> Self {
    Self::with_policy(context, FailurePolicy::from(stop_on_first_error))
  }

  pub fn with_policy(context: T, policy: FailurePolicy) -> Self {
    Self {
      context,
      steps: Vec::new(),
      policy,
    }
  }

  /// Queues `step` after every step added so far.
  pub fn add<F>(&mut self, step: F) -> &mut Self
  where
    F: FnOnce(&T) -> Result<T, E> + 'a,
  {
    self.steps.push(Box::new(step));
    self
  }

  /// The context the first step will see.
  pub fn context(&self) -> &T {
    &self.context
  }

  pub fn policy(&self) -> FailurePolicy {
    self.policy
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }
}

impl<T, E> std::fmt::Debug for PipelineWithContext<'_, T, E>
where
  T: std::fmt::Debug,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PipelineWithContext")
      .field("context", &self.context)
      .field("steps", &self.steps.len())
      .field("policy", &self.policy)
      .finish()
  }
}
