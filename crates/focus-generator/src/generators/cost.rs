//! BilledCost: the row's share of the period's cost budget.

use super::{money, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::FocusColumn;
use rand::Rng;

pub struct CostGenerator;

impl ColumnGenerator for CostGenerator {
    fn name(&self) -> &'static str {
        "cost"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[FocusColumn::BilledCost]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        // Spread the period total across rows with a ±20% jitter. The
        // profile (and any trend multiplier) is already baked into
        // `period_cost` by the orchestrator.
        let base_per_row = ctx.period_cost / ctx.row_count as f64;
        let factor = ctx.rng.random_range(0.8..=1.2);
        ctx.set(FocusColumn::BilledCost, money(base_per_row * factor));

        Ok(())
    }
}
