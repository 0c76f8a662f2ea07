// src/lib.rs

//! Tether: synchronous combinators for ordered, fallible operations.
//!
//! Two families, each with a context-free and a context-carrying variant:
//!  - Pipelines (`Pipeline`, `PipelineWithContext`) queue steps and run them
//!    all at `run()`, either stopping on the first error or collecting every
//!    error into one `PipelineError::Joined`.
//!  - Promises (`Promise`, `PromiseWithContext`) run each handler as soon as
//!    it is added and latch the first rejection. Later handlers are skipped.
//!
//! A rejection that carries no reason is reported as the
//! `TetherError::PromiseRejectedWithoutReason` sentinel, converted into the
//! caller's error type through `From<TetherError>`.

pub mod core;
pub mod error;
pub mod factory;
pub mod pipeline;
pub mod promise;

// --- Re-exports for the Public API ---

pub use crate::core::control::FailurePolicy;
pub use crate::core::latch::{Latch, Reject};

pub use crate::pipeline::{Pipeline, PipelineWithContext};
pub use crate::promise::{Promise, PromiseWithContext};

pub use crate::error::{JoinedError, PipelineError, TetherError, TetherResult};

pub use crate::factory::{pipeline, pipeline_with_context, promise, promise_with_context};

/*
    Picking a runner:
    1. Steps that must all be attempted, with every failure reported:
       `Pipeline::new(false)` / `PipelineWithContext::new(ctx, false)`.
    2. Steps where the first failure makes the rest pointless:
       `Pipeline::new(true)` / `PipelineWithContext::new(ctx, true)`.
    3. Work that should happen right away, one handler at a time, and stop
       for good at the first rejection: `Promise` / `PromiseWithContext`.
*/
