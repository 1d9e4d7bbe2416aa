//! Pricing columns: category, quantity and unit.

use super::{pick, quantity, read_dependency, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::catalog::PRICING_CATEGORIES;
use focus_core::FocusColumn;
use rand::Rng;

pub const PRICING_UNITS: &[&str] = &["Hours", "GB-Hours", "Requests", "Transactions"];

pub struct PricingGenerator;

impl ColumnGenerator for PricingGenerator {
    fn name(&self) -> &'static str {
        "pricing"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::PricingCategory,
            FocusColumn::PricingQuantity,
            FocusColumn::PricingUnit,
        ]
    }

    fn reads(&self) -> &'static [FocusColumn] {
        &[FocusColumn::ChargeCategory, FocusColumn::ChargeClass]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        let category =
            read_dependency(ctx, FocusColumn::PricingQuantity, FocusColumn::ChargeCategory)?;
        let correction = ctx.text(FocusColumn::ChargeClass) == Some("Correction");
        let priced = category == "Usage" || category == "Purchase";

        let pricing_category = *pick(&mut ctx.rng, PRICING_CATEGORIES);
        ctx.set(FocusColumn::PricingCategory, pricing_category);

        // Usage rows must carry a quantity unless they correct an earlier
        // invoice; purchases and tax are usually quantity-free.
        let amount = if category == "Usage" && !correction {
            Some(ctx.rng.random_range(1.0..=100.0))
        } else if category == "Purchase" || category == "Tax" {
            if ctx.rng.random_bool(0.7) {
                None
            } else {
                Some(ctx.rng.random_range(1.0..=10.0))
            }
        } else if ctx.rng.random_bool(0.5) {
            Some(ctx.rng.random_range(1.0..=50.0))
        } else {
            None
        };
        if let Some(amount) = amount {
            ctx.set(FocusColumn::PricingQuantity, quantity(amount));
        }

        if priced {
            let pricing_unit = *pick(&mut ctx.rng, PRICING_UNITS);
            ctx.set(FocusColumn::PricingUnit, pricing_unit);
        }

        Ok(())
    }
}
