//! Derived cost columns: list/effective/contracted costs and unit prices.
//!
//! Everything here derives from BilledCost. The discount factors are chosen
//! so the cost ordering always holds: EffectiveCost tops out at 1.05x the
//! billed amount while ListCost starts at 1.1x, so EffectiveCost < ListCost
//! for every non-zero row.

use super::{price, scale_money, scale_price, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::FocusColumn;
use rand::Rng;
use rust_decimal::Decimal;

pub struct CostDetailsGenerator;

impl ColumnGenerator for CostDetailsGenerator {
    fn name(&self) -> &'static str {
        "cost-details"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::ListCost,
            FocusColumn::EffectiveCost,
            FocusColumn::ContractedCost,
            FocusColumn::ListUnitPrice,
            FocusColumn::ContractedUnitPrice,
        ]
    }

    fn reads(&self) -> &'static [FocusColumn] {
        &[FocusColumn::BilledCost, FocusColumn::PricingQuantity]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        let billed = ctx
            .decimal(FocusColumn::BilledCost)
            .ok_or(GenerateError::MissingDependency {
                column: FocusColumn::ListCost.name(),
                needs: FocusColumn::BilledCost.name(),
            })?;

        // List price before discounts, amortized cost after them.
        let list = scale_money(billed, ctx.rng.random_range(1.1..=1.5));
        let effective = scale_money(billed, ctx.rng.random_range(0.85..=1.05));

        ctx.set(FocusColumn::ListCost, list);
        ctx.set(FocusColumn::EffectiveCost, effective);
        ctx.set(FocusColumn::ContractedCost, effective);

        let list_unit_price = match ctx.decimal(FocusColumn::PricingQuantity) {
            Some(quantity) if quantity > Decimal::ZERO => (list / quantity).round_dp(4),
            _ => price(ctx.rng.random_range(0.01..=10.0)),
        };
        let contracted_unit_price =
            scale_price(list_unit_price, ctx.rng.random_range(0.7..=0.95));

        ctx.set(FocusColumn::ListUnitPrice, list_unit_price);
        ctx.set(FocusColumn::ContractedUnitPrice, contracted_unit_price);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::money;
    use crate::testing::test_context;

    fn prepared(seed: u64, billed: f64) -> RowContext<'static> {
        let mut ctx = test_context(seed);
        ctx.set(FocusColumn::BilledCost, money(billed));
        ctx
    }

    #[test]
    fn test_effective_never_exceeds_list() {
        for seed in 0..300 {
            let mut ctx = prepared(seed, 250.0);
            CostDetailsGenerator.generate(&mut ctx).unwrap();
            let list = ctx.decimal(FocusColumn::ListCost).unwrap();
            let effective = ctx.decimal(FocusColumn::EffectiveCost).unwrap();
            assert!(effective <= list, "effective {effective} > list {list}");
        }
    }

    #[test]
    fn test_contracted_cost_matches_effective() {
        let mut ctx = prepared(5, 100.0);
        CostDetailsGenerator.generate(&mut ctx).unwrap();
        assert_eq!(
            ctx.decimal(FocusColumn::ContractedCost),
            ctx.decimal(FocusColumn::EffectiveCost)
        );
    }

    #[test]
    fn test_unit_price_derives_from_quantity() {
        let mut ctx = prepared(9, 100.0);
        ctx.set(FocusColumn::PricingQuantity, money(20.0));
        CostDetailsGenerator.generate(&mut ctx).unwrap();

        let list = ctx.decimal(FocusColumn::ListCost).unwrap();
        let unit = ctx.decimal(FocusColumn::ListUnitPrice).unwrap();
        assert_eq!(unit, (list / money(20.0)).round_dp(4));

        let contracted = ctx.decimal(FocusColumn::ContractedUnitPrice).unwrap();
        assert!(contracted < unit);
    }

    #[test]
    fn test_missing_billed_cost_is_an_error() {
        let mut ctx = test_context(0);
        let err = CostDetailsGenerator.generate(&mut ctx).unwrap_err();
        assert!(matches!(err, GenerateError::MissingDependency { .. }));
    }
}
