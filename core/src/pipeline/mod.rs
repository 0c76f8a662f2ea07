// tether/src/pipeline/mod.rs

//! Step runners: `Pipeline<'a, E>` and `PipelineWithContext<'a, T, E>`.

pub mod definition;
pub mod execution;

use crate::error::TetherError;

pub use definition::{Pipeline, PipelineWithContext};

/// Sentinel a pipeline step can return when it fails without a more specific
/// error.
pub const REJECTED_WITHOUT_REASON: TetherError = TetherError::PipelineRejectedWithoutReason;
