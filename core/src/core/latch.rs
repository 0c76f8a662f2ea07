// tether/src/core/latch.rs

//! The one-way rejection latch behind promises, and the `Reject` callback
//! handed to promise handlers.

use crate::error::TetherError;

/// Outcome state of a promise.
///
/// Starts `Active`. The first rejection moves it to `Rejected` and nothing
/// moves it back. A rejection without a reason is stored as the sentinel
/// `TetherError::PromiseRejectedWithoutReason`, so `Rejected` always holds an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Latch<E> {
  Active,
  Rejected(E),
}

impl<E> Latch<E> {
  pub fn is_rejected(&self) -> bool {
    matches!(self, Latch::Rejected(_))
  }

  pub fn as_result(&self) -> Result<(), &E> {
    match self {
      Latch::Active => Ok(()),
      Latch::Rejected(err) => Err(err),
    }
  }

  pub fn into_result(self) -> Result<(), E> {
    match self {
      Latch::Active => Ok(()),
      Latch::Rejected(err) => Err(err),
    }
  }

  /// Latches `reason` if still active. A later rejection never replaces the
  /// first one.
  pub(crate) fn close(&mut self, reason: Option<E>)
  where
    E: From<TetherError>,
  {
    if let Latch::Active = self {
      let err = reason.unwrap_or_else(|| E::from(TetherError::PromiseRejectedWithoutReason));
      *self = Latch::Rejected(err);
    }
  }
}

impl<E> Default for Latch<E> {
  fn default() -> Self {
    Latch::Active
  }
}

/// Rejection callback given to a promise handler.
///
/// Only the first rejection sticks. Calling it again, from the same handler or
/// a later one, has no effect.
pub struct Reject<'a, E> {
  latch: &'a mut Latch<E>,
}

impl<'a, E> Reject<'a, E>
where
  E: From<TetherError>,
{
  pub(crate) fn new(latch: &'a mut Latch<E>) -> Self {
    Self { latch }
  }

  /// Rejects with an optional reason. `None` latches the sentinel.
  pub fn reject(&mut self, reason: Option<E>) {
    self.latch.close(reason);
  }

  pub fn with(&mut self, reason: E) {
    self.reject(Some(reason));
  }

  pub fn without_reason(&mut self) {
    self.reject(None);
  }

  pub fn is_rejected(&self) -> bool {
    self.latch.is_rejected()
  }
}

impl<E> std::fmt::Debug for Reject<'_, E> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Reject")
      .field("rejected", &self.latch.is_rejected())
      .finish()
  }
}
