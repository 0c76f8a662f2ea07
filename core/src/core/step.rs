// tether/src/core/step.rs

//! Boxed step types queued by pipelines.
//!
//! Steps live as long as `'a`, so they may borrow from the caller's stack.
//! Neither alias requires `Send`: a pipeline runs on the thread that built it.

/// A queued step of a context-free pipeline.
pub type Step<'a, E> = Box<dyn FnOnce() -> Result<(), E> + 'a>;

/// A queued step of a pipeline with context. It reads the current context and
/// returns the value that replaces it, or an error that leaves it untouched.
pub type ContextStep<'a, T, E> = Box<dyn FnOnce(&T) -> Result<T, E> + 'a>;
