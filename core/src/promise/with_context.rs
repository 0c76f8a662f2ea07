// tether/src/promise/with_context.rs

//! Promise chain whose handlers share one mutable context.

use crate::core::latch::{Latch, Reject};
use crate::error::TetherError;
use crate::promise::settle;

/// Runs handlers eagerly against a context it owns, until one rejects.
///
/// Handlers mutate the context in place through `&mut T`. Whatever a
/// rejecting handler wrote before rejecting stays in the context.
pub struct PromiseWithContext<T, E = TetherError> {
  context: T,
  latch: Latch<E>,
  handled: usize,
}

impl<T, E> PromiseWithContext<T, E>
where
  T: Default,
  E: std::error::Error + From<TetherError>,
{
  /// Starts from `context`, or from `T::default()` when none is given.
  pub fn new(context: Option<T>) -> Self {
    Self::from_context(context.unwrap_or_default())
  }
}

impl<T, E> PromiseWithContext<T, E>
where
  E: std::error::Error + From<TetherError>,
{
  pub fn from_context(context: T) -> Self {
    Self {
      context,
      latch: Latch::Active,
      handled: 0,
    }
  }

  /// Runs `handler` now with the context and a reject callback, unless an
  /// earlier handler already rejected.
  pub fn then<F>(&mut self, handler: F) -> &mut Self
  where
    F: FnOnce(&mut T, &mut Reject<'_, E>),
  {
    let handler_idx = self.handled;
    self.handled += 1;
    let context = &mut self.context;
    settle(&mut self.latch, handler_idx, |reject| handler(context, reject));
    self
  }

  pub fn catch(&self) -> Result<(), &E> {
    self.latch.as_result()
  }

  pub fn is_rejected(&self) -> bool {
    self.latch.is_rejected()
  }

  pub fn context(&self) -> &T {
    &self.context
  }

  pub fn context_mut(&mut self) -> &mut T {
    &mut self.context
  }

  /// Consumes the promise, returning the context and the first rejection.
  pub fn into_parts(self) -> (T, Result<(), E>) {
    (self.context, self.latch.into_result())
  }
}

impl<T: std::fmt::Debug, E: std::fmt::Debug> std::fmt::Debug for PromiseWithContext<T, E> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PromiseWithContext")
      .field("context", &self.context)
      .field("latch", &self.latch)
      .field("handled", &self.handled)
      .finish()
  }
}
