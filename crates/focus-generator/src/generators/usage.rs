//! Usage metrics: consumed quantity/unit and the SKU meter.

use super::{pick, quantity, read_dependency, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::FocusColumn;
use rand::Rng;

/// Share of eligible usage rows without metered consumption.
const UNMETERED_RATE: f64 = 0.30;

/// Share of SKU-bearing rows without a meter description.
const METERLESS_RATE: f64 = 0.40;

pub struct UsageMetricsGenerator;

impl ColumnGenerator for UsageMetricsGenerator {
    fn name(&self) -> &'static str {
        "usage-metrics"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::ConsumedQuantity,
            FocusColumn::ConsumedUnit,
            FocusColumn::SkuMeter,
        ]
    }

    fn reads(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::ChargeCategory,
            FocusColumn::ServiceCategory,
            FocusColumn::SkuId,
        ]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        let category = read_dependency(
            ctx,
            FocusColumn::ConsumedQuantity,
            FocusColumn::ChargeCategory,
        )?;
        let family = ctx
            .service_family()
            .ok_or(GenerateError::MissingDependency {
                column: FocusColumn::ConsumedUnit.name(),
                needs: FocusColumn::ServiceCategory.name(),
            })?;

        // Only usage charges meter consumption, and not all of them do.
        let metered = category == "Usage" && !ctx.rng.random_bool(UNMETERED_RATE);
        if metered {
            let (min, max) = family.consumed_quantity_range();
            let amount = ctx.rng.random_range(min..=max);
            ctx.set(FocusColumn::ConsumedQuantity, quantity(amount));
            let consumed_unit = *pick(&mut ctx.rng, family.consumed_units());
            ctx.set(FocusColumn::ConsumedUnit, consumed_unit);
        }

        if !ctx.is_null(FocusColumn::SkuId) && !ctx.rng.random_bool(METERLESS_RATE) {
            ctx.set(FocusColumn::SkuMeter, family.sku_meter());
        }

        Ok(())
    }
}
