// tether/src/core/control.rs

//! Failure policy for pipelines.

/// What a pipeline does when a step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FailurePolicy {
  /// Return the failing step's error immediately. Remaining steps never run.
  StopOnFirstError,
  /// Keep running every step and return all collected errors joined together.
  #[default]
  Aggregate,
}

impl FailurePolicy {
  pub fn stops_on_first_error(self) -> bool {
    matches!(self, FailurePolicy::StopOnFirstError)
  }
}

/// `true` means stop on the first error.
impl From<bool> for FailurePolicy {
  fn from(stop_on_first_error: bool) -> Self {
    if stop_on_first_error {
      FailurePolicy::StopOnFirstError
    } else {
      FailurePolicy::Aggregate
    }
  }
}
