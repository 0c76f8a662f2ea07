// tether/src/promise/chain.rs

//! Context-free promise chain.

use crate::core::latch::{Latch, Reject};
use crate::error::TetherError;
use crate::promise::settle;

/// Runs handlers eagerly until one rejects.
///
/// ```
/// use tether::{Promise, TetherError};
///
/// let mut promise = Promise::<TetherError>::new();
/// promise
///   .then(|_reject| {})
///   .then(|reject| reject.without_reason())
///   .then(|_reject| unreachable!());
///
/// assert_eq!(promise.catch(), Err(&TetherError::PromiseRejectedWithoutReason));
/// ```
pub struct Promise<E = TetherError> {
  latch: Latch<E>,
  handled: usize,
}

impl<E> Promise<E>
where
  E: std::error::Error + From<TetherError>,
{
  pub fn new() -> Self {
    Self {
      latch: Latch::Active,
      handled: 0,
    }
  }

  /// Runs `handler` now, unless an earlier handler already rejected, in which
  /// case the call does nothing. Returns the promise for chaining either way.
  pub fn then<F>(&mut self, handler: F) -> &mut Self
  where
    F: FnOnce(&mut Reject<'_, E>),
  {
    let handler_idx = self.handled;
    self.handled += 1;
    settle(&mut self.latch, handler_idx, handler);
    self
  }

  /// `Ok(())` while no handler has rejected, otherwise the first rejection.
  pub fn catch(&self) -> Result<(), &E> {
    self.latch.as_result()
  }

  pub fn is_rejected(&self) -> bool {
    self.latch.is_rejected()
  }

  pub fn into_result(self) -> Result<(), E> {
    self.latch.into_result()
  }
}

impl<E> Default for Promise<E>
where
  E: std::error::Error + From<TetherError>,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<E: std::fmt::Debug> std::fmt::Debug for Promise<E> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Promise")
      .field("latch", &self.latch)
      .field("handled", &self.handled)
      .finish()
  }
}
