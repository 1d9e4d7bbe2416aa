//! Commitment discount columns.
//!
//! One Bernoulli draw decides whether the row participates in a commitment.
//! A row that does not participate gets every commitment column nulled in a
//! single step; the conditional-nullability invariant is enforced here at
//! generation time, not left for the post-processor.

use super::{pick, quantity, read_dependency, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::catalog::{COMMITMENT_DISCOUNT_CATEGORIES, COMMITMENT_DISCOUNT_STATUSES};
use focus_core::FocusColumn;
use rand::Rng;

/// Share of rows covered by a commitment discount.
const COMMITMENT_RATE: f64 = 0.20;

pub const COMMITMENT_DISCOUNT_TYPES: &[&str] = &["Reserved", "SavingsPlan", "Custom"];
const COMMITMENT_DISCOUNT_UNITS: &[&str] = &["Hours", "GB", "Requests"];

pub struct CommitmentDiscountGenerator;

impl ColumnGenerator for CommitmentDiscountGenerator {
    fn name(&self) -> &'static str {
        "commitment-discount"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::CommitmentDiscountId,
            FocusColumn::CommitmentDiscountCategory,
            FocusColumn::CommitmentDiscountQuantity,
            FocusColumn::CommitmentDiscountStatus,
            FocusColumn::CommitmentDiscountType,
            FocusColumn::CommitmentDiscountUnit,
        ]
    }

    fn reads(&self) -> &'static [FocusColumn] {
        &[FocusColumn::ChargeCategory]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        let category = read_dependency(
            ctx,
            FocusColumn::CommitmentDiscountStatus,
            FocusColumn::ChargeCategory,
        )?;

        if !ctx.rng.random_bool(COMMITMENT_RATE) {
            // Not committed: the whole cluster stays null, in one step.
            for column in self.owns() {
                ctx.set_null(*column);
            }
            return Ok(());
        }

        let id = format!("CD-{:04x}", ctx.rng.random_range(0u32..0x1_0000));
        ctx.set(FocusColumn::CommitmentDiscountId, id);
        let commitment_category = *pick(&mut ctx.rng, COMMITMENT_DISCOUNT_CATEGORIES);
        ctx.set(
            FocusColumn::CommitmentDiscountCategory,
            commitment_category,
        );
        let commitment_type = *pick(&mut ctx.rng, COMMITMENT_DISCOUNT_TYPES);
        ctx.set(FocusColumn::CommitmentDiscountType, commitment_type);
        let commitment_unit = *pick(&mut ctx.rng, COMMITMENT_DISCOUNT_UNITS);
        ctx.set(FocusColumn::CommitmentDiscountUnit, commitment_unit);

        // Status and consumed commitment quantity only apply to usage rows.
        if category == "Usage" {
            let commitment_status = *pick(&mut ctx.rng, COMMITMENT_DISCOUNT_STATUSES);
            ctx.set(FocusColumn::CommitmentDiscountStatus, commitment_status);
            let commitment_quantity = quantity(ctx.rng.random_range(1.0..=50.0));
            ctx.set(
                FocusColumn::CommitmentDiscountQuantity,
                commitment_quantity,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_context;

    #[test]
    fn test_uncommitted_rows_null_the_whole_cluster() {
        let generator = CommitmentDiscountGenerator;
        for seed in 0..200 {
            let mut ctx = test_context(seed);
            ctx.set(FocusColumn::ChargeCategory, "Usage");
            generator.generate(&mut ctx).unwrap();

            if ctx.is_null(FocusColumn::CommitmentDiscountId) {
                for column in generator.owns() {
                    assert!(ctx.is_null(*column), "{column} should be null");
                }
            }
        }
    }

    #[test]
    fn test_committed_usage_rows_carry_status_and_quantity() {
        for seed in 0..200 {
            let mut ctx = test_context(seed);
            ctx.set(FocusColumn::ChargeCategory, "Usage");
            CommitmentDiscountGenerator.generate(&mut ctx).unwrap();

            if !ctx.is_null(FocusColumn::CommitmentDiscountId) {
                assert!(!ctx.is_null(FocusColumn::CommitmentDiscountStatus));
                assert!(!ctx.is_null(FocusColumn::CommitmentDiscountQuantity));
                assert!(!ctx.is_null(FocusColumn::CommitmentDiscountCategory));
                assert!(!ctx.is_null(FocusColumn::CommitmentDiscountType));
                assert!(!ctx.is_null(FocusColumn::CommitmentDiscountUnit));
            }
        }
    }

    #[test]
    fn test_committed_purchase_rows_omit_status() {
        for seed in 0..200 {
            let mut ctx = test_context(seed);
            ctx.set(FocusColumn::ChargeCategory, "Purchase");
            CommitmentDiscountGenerator.generate(&mut ctx).unwrap();

            if !ctx.is_null(FocusColumn::CommitmentDiscountId) {
                assert!(ctx.is_null(FocusColumn::CommitmentDiscountStatus));
                assert!(ctx.is_null(FocusColumn::CommitmentDiscountQuantity));
                // The cluster is still non-empty on the other columns.
                assert!(!ctx.is_null(FocusColumn::CommitmentDiscountCategory));
            }
        }
    }
}
