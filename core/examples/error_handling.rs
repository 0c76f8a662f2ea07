// tether/examples/error_handling.rs

use tether::{Pipeline, PipelineError, TetherError};
use tracing::{error, info};

// 1. Define a custom application error type
#[derive(Debug, thiserror::Error)]
enum ExampleAppError {
  #[error("validation failed: {0}")]
  Validation(String),

  #[error(transparent)]
  Tether(#[from] TetherError),
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Error Handling Example ---");

  // Scenario 1: every check runs, failures are reported together
  info!("\nScenario 1: aggregate mode");
  let mut checks = Pipeline::<ExampleAppError>::new(false);
  checks
    .add(|| Err(ExampleAppError::Validation("name is empty".to_string())))
    .add(|| Ok(()))
    .add(|| Err(ExampleAppError::Validation("email is malformed".to_string())));

  match checks.run() {
    Err(PipelineError::Joined(joined)) => {
      for err in &joined {
        error!("check failed: {}", err);
      }
    }
    other => info!("unexpected outcome: {:?}", other),
  }

  // Scenario 2: the first failure stops the run
  info!("\nScenario 2: stop on first error");
  let mut deploy = Pipeline::<ExampleAppError>::new(true);
  deploy
    .add(|| Err(tether::pipeline::REJECTED_WITHOUT_REASON.into()))
    .add(|| {
      info!("never printed");
      Ok(())
    });

  if let Err(err) = deploy.run() {
    error!(halted = err.is_halted(), "deploy stopped: {}", err);
  }
}
