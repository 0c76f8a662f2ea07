// tether/examples/promise_chain.rs

use tether::{PromiseWithContext, TetherError};
use tracing::{info, warn};

#[derive(Debug, Default)]
struct SignupContext {
  email: String,
  verified: bool,
  welcome_sent: bool,
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::TRACE).init();
  info!("--- Promise Chain Example ---");

  let mut signup = PromiseWithContext::<SignupContext, TetherError>::new(None);
  signup
    .then(|ctx, _reject| ctx.email = "someone@example.com".to_string())
    .then(|ctx, reject| {
      if !ctx.email.contains('@') {
        reject.without_reason();
        return;
      }
      ctx.verified = true;
    })
    .then(|ctx, reject| {
      // Pretend the mail service is down.
      reject.without_reason();
      ctx.welcome_sent = false;
    })
    .then(|ctx, _reject| {
      // Skipped: the previous handler rejected.
      ctx.welcome_sent = true;
    });

  match signup.catch() {
    Ok(()) => info!(ctx = ?signup.context(), "signup finished"),
    Err(err) => warn!(ctx = ?signup.context(), "signup rejected: {}", err),
  }
}
