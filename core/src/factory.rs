// tether/src/factory.rs

//! Free-function constructors, re-exported at the crate root.

use crate::error::TetherError;
use crate::pipeline::{Pipeline, PipelineWithContext};
use crate::promise::{Promise, PromiseWithContext};

pub fn pipeline<'a, E>(stop_on_first_error: bool) -> Pipeline<'a, E>
where
  E: std::error::Error + 'static,
{
  Pipeline::new(stop_on_first_error)
}

pub fn pipeline_with_context<'a, T, E>(context: T, stop_on_first_error: bool) -> PipelineWithContext<'a, T, E>
where
  E: std::error::Error + 'static,
{
  PipelineWithContext::new(context, stop_on_first_error)
}

pub fn promise<E>() -> Promise<E>
where
  E: std::error::Error + From<TetherError>,
{
  Promise::new()
}

/// `None` starts the promise from `T::default()`.
pub fn promise_with_context<T, E>(context: Option<T>) -> PromiseWithContext<T, E>
where
  T: Default,
  E: std::error::Error + From<TetherError>,
{
  PromiseWithContext::new(context)
}
