// tether/src/promise/mod.rs

//! Chain executors: `Promise<E>` and `PromiseWithContext<T, E>`.
//!
//! Unlike pipelines, promises run each handler as soon as it is passed to
//! `then`. The first handler to reject closes the latch, and every later
//! `then` call is accepted but runs nothing.

pub mod chain;
pub mod with_context;

use crate::core::latch::{Latch, Reject};
use crate::error::TetherError;
use tracing::{event, span, Level};

pub use chain::Promise;
pub use with_context::PromiseWithContext;

/// Sentinel `catch()` reports when a handler rejected without a reason.
pub const REJECTED_WITHOUT_REASON: TetherError = TetherError::PromiseRejectedWithoutReason;

/// Runs one handler against `latch`, unless the latch is already closed.
pub(crate) fn settle<E, F>(latch: &mut Latch<E>, handler_idx: usize, handler: F)
where
  E: std::error::Error + From<TetherError>,
  F: FnOnce(&mut Reject<'_, E>),
{
  if latch.is_rejected() {
    event!(
      Level::DEBUG,
      handler_index = handler_idx,
      "Promise already rejected, handler skipped."
    );
    return;
  }

  let handler_span = span!(Level::DEBUG, "promise_handler", handler_index = handler_idx);
  let _handler_span_guard = handler_span.enter();

  handler(&mut Reject::new(latch));

  match latch {
    Latch::Active => event!(Level::TRACE, "Handler completed."),
    Latch::Rejected(err) => event!(Level::WARN, error = %err, "Handler rejected the promise."),
  }
}
