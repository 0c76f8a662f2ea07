// tether/examples/basic_pipeline.rs

use tether::{PipelineWithContext, TetherError};
use tracing::info;

#[derive(Clone, Debug, Default)]
struct OrderContext {
  subtotal_cents: u64,
  tax_cents: u64,
  notes: Vec<String>,
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();
  info!("--- Basic Pipeline Example ---");

  let mut pipeline = PipelineWithContext::<OrderContext, TetherError>::new(OrderContext::default(), true);
  pipeline
    .add(|ctx| {
      let mut next = ctx.clone();
      next.subtotal_cents = 12_500;
      next.notes.push("priced".to_string());
      Ok(next)
    })
    .add(|ctx| {
      let mut next = ctx.clone();
      next.tax_cents = next.subtotal_cents * 8 / 100;
      next.notes.push("taxed".to_string());
      Ok(next)
    });

  let (order, result) = pipeline.run();
  result?;
  info!(
    subtotal = order.subtotal_cents,
    tax = order.tax_cents,
    notes = ?order.notes,
    "Order pipeline completed."
  );
  Ok(())
}
