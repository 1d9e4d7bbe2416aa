//! Charge classification: category, class and frequency.

use super::{pick, pick_weighted, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::catalog::CHARGE_FREQUENCIES;
use focus_core::FocusColumn;
use rand::Rng;

/// Base rates for the charge mix. Usage dominates every real bill;
/// purchases, tax and account-level corrections are the long tail. The
/// rates are profile- and distribution-invariant.
pub const CHARGE_CATEGORY_WEIGHTS: &[(&str, f64)] = &[
    ("Usage", 0.70),
    ("Purchase", 0.15),
    ("Tax", 0.05),
    ("Credit", 0.05),
    ("Adjustment", 0.05),
];

/// Share of rows marked as corrections to a previous invoice.
const CORRECTION_RATE: f64 = 0.10;

/// Purchases are invoiced up front or on a schedule, never usage-based.
const PURCHASE_FREQUENCIES: &[&str] = &["One-Time", "Recurring"];

pub struct ClassificationGenerator;

impl ColumnGenerator for ClassificationGenerator {
    fn name(&self) -> &'static str {
        "classification"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::ChargeCategory,
            FocusColumn::ChargeClass,
            FocusColumn::ChargeFrequency,
        ]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        let category = *pick_weighted(&mut ctx.rng, CHARGE_CATEGORY_WEIGHTS);
        ctx.set(FocusColumn::ChargeCategory, category);

        if ctx.rng.random_bool(CORRECTION_RATE) {
            ctx.set(FocusColumn::ChargeClass, "Correction");
        }

        // The frequency domain narrows once the category is known.
        let frequency = if category == "Purchase" {
            *pick(&mut ctx.rng, PURCHASE_FREQUENCIES)
        } else {
            *pick(&mut ctx.rng, CHARGE_FREQUENCIES)
        };
        ctx.set(FocusColumn::ChargeFrequency, frequency);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_context;

    #[test]
    fn test_purchase_rows_are_never_usage_based() {
        for seed in 0..200 {
            let mut ctx = test_context(seed);
            ClassificationGenerator.generate(&mut ctx).unwrap();
            if ctx.text(FocusColumn::ChargeCategory) == Some("Purchase") {
                assert_ne!(ctx.text(FocusColumn::ChargeFrequency), Some("Usage-Based"));
            }
        }
    }

    #[test]
    fn test_usage_dominates_the_mix() {
        let mut usage = 0;
        for seed in 0..500 {
            let mut ctx = test_context(seed);
            ClassificationGenerator.generate(&mut ctx).unwrap();
            if ctx.text(FocusColumn::ChargeCategory) == Some("Usage") {
                usage += 1;
            }
        }
        assert!(usage > 250, "usage rows: {usage}/500");
    }

    #[test]
    fn test_charge_class_is_correction_or_null() {
        for seed in 0..100 {
            let mut ctx = test_context(seed);
            ClassificationGenerator.generate(&mut ctx).unwrap();
            let class = ctx.text(FocusColumn::ChargeClass);
            assert!(class.is_none() || class == Some("Correction"));
        }
    }
}
