pub mod control;
pub mod latch;
pub mod step;

// Re-export key types for easier access from other tether modules (and lib.rs)
pub use control::FailurePolicy;
pub use latch::{Latch, Reject};
pub use step::{ContextStep, Step};
