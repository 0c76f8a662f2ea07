// tether/src/error.rs

//! Error types shared by pipelines and promises.
//!
//! Steps and handlers return the caller's own error type `E`. The crate only
//! contributes the "rejected without reason" sentinels (`TetherError`) and the
//! wrapper a pipeline run fails with (`PipelineError<E>`).

use std::fmt;
use std::slice;
use std::vec;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetherError {
  #[error("pipeline rejected without reason")]
  PipelineRejectedWithoutReason,

  #[error("promise rejected without reason")]
  PromiseRejectedWithoutReason,
}

pub type TetherResult<T, E = TetherError> = std::result::Result<T, E>;

/// Every error collected by an aggregate-mode pipeline, in the order the
/// failing steps ran. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedError<E> {
  errors: Vec<E>,
}

impl<E> JoinedError<E> {
  /// Returns `None` when nothing was collected, so a joined error never
  /// stands for "no error".
  pub(crate) fn from_collected(errors: Vec<E>) -> Option<Self> {
    if errors.is_empty() {
      None
    } else {
      Some(Self { errors })
    }
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }

  /// Always `false`: a `JoinedError` is only built from at least one error.
  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn iter(&self) -> slice::Iter<'_, E> {
    self.errors.iter()
  }

  pub fn as_slice(&self) -> &[E] {
    &self.errors
  }

  pub fn first(&self) -> Option<&E> {
    self.errors.first()
  }

  pub fn into_vec(self) -> Vec<E> {
    self.errors
  }

  pub fn contains(&self, needle: &E) -> bool
  where
    E: PartialEq,
  {
    self.errors.contains(needle)
  }
}

// One constituent per line, matching how the joined errors were collected.
impl<E: fmt::Display> fmt::Display for JoinedError<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (idx, err) in self.errors.iter().enumerate() {
      if idx > 0 {
        f.write_str("\n")?;
      }
      write!(f, "{}", err)?;
    }
    Ok(())
  }
}

impl<E> std::error::Error for JoinedError<E> where E: std::error::Error + 'static {}

impl<E> IntoIterator for JoinedError<E> {
  type Item = E;
  type IntoIter = vec::IntoIter<E>;

  fn into_iter(self) -> Self::IntoIter {
    self.errors.into_iter()
  }
}

impl<'a, E> IntoIterator for &'a JoinedError<E> {
  type Item = &'a E;
  type IntoIter = slice::Iter<'a, E>;

  fn into_iter(self) -> Self::IntoIter {
    self.errors.iter()
  }
}

/// Why a pipeline run failed.
///
/// A pipeline built with `stop_on_first_error = true` fails with `Halted`,
/// carrying the single step error that stopped it. Otherwise every failing
/// step is collected and the run fails with `Joined`.
#[derive(Debug, Error)]
pub enum PipelineError<E>
where
  E: std::error::Error + 'static,
{
  #[error(transparent)]
  Halted(E),

  #[error(transparent)]
  Joined(JoinedError<E>),
}

impl<E> PipelineError<E>
where
  E: std::error::Error + 'static,
{
  pub fn is_halted(&self) -> bool {
    matches!(self, PipelineError::Halted(_))
  }

  /// Constituent errors in collection order. A halted run has exactly one.
  pub fn errors(&self) -> &[E] {
    match self {
      PipelineError::Halted(err) => slice::from_ref(err),
      PipelineError::Joined(joined) => joined.as_slice(),
    }
  }

  pub fn first(&self) -> &E {
    match self {
      PipelineError::Halted(err) => err,
      // JoinedError is never built empty.
      PipelineError::Joined(joined) => &joined.as_slice()[0],
    }
  }

  pub fn contains(&self, needle: &E) -> bool
  where
    E: PartialEq,
  {
    self.errors().contains(needle)
  }

  pub fn into_errors(self) -> Vec<E> {
    match self {
      PipelineError::Halted(err) => vec![err],
      PipelineError::Joined(joined) => joined.into_vec(),
    }
  }
}
