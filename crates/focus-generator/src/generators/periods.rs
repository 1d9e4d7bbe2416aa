//! Billing and charge period columns.

use super::ColumnGenerator;
use crate::context::RowContext;
use crate::error::GenerateError;
use chrono::Duration;
use focus_core::FocusColumn;
use rand::Rng;

/// A charge period covers at most one day of the billing month.
const MAX_CHARGE_SPAN_HOURS: i64 = 24;

pub struct PeriodGenerator;

impl ColumnGenerator for PeriodGenerator {
    fn name(&self) -> &'static str {
        "periods"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::BillingPeriodStart,
            FocusColumn::BillingPeriodEnd,
            FocusColumn::ChargePeriodStart,
            FocusColumn::ChargePeriodEnd,
        ]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        let period_start = ctx.billing_month.first_instant();
        let period_end = ctx.billing_month.next().first_instant();
        let period_hours = (period_end - period_start).num_hours();

        // Start anywhere in the month, then extend by a positive span
        // clipped to the period end, so start < end <= period end holds by
        // construction.
        let start_hour = ctx.rng.random_range(0..period_hours);
        let max_span = MAX_CHARGE_SPAN_HOURS.min(period_hours - start_hour);
        let span = ctx.rng.random_range(1..=max_span);

        let charge_start = period_start + Duration::hours(start_hour);
        let charge_end = charge_start + Duration::hours(span);

        ctx.set(FocusColumn::BillingPeriodStart, period_start);
        ctx.set(FocusColumn::BillingPeriodEnd, period_end);
        ctx.set(FocusColumn::ChargePeriodStart, charge_start);
        ctx.set(FocusColumn::ChargePeriodEnd, charge_end);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_context;

    #[test]
    fn test_charge_period_stays_inside_billing_period() {
        for seed in 0..300 {
            let mut ctx = test_context(seed);
            PeriodGenerator.generate(&mut ctx).unwrap();

            let billing_start = ctx.datetime(FocusColumn::BillingPeriodStart).unwrap();
            let billing_end = ctx.datetime(FocusColumn::BillingPeriodEnd).unwrap();
            let charge_start = ctx.datetime(FocusColumn::ChargePeriodStart).unwrap();
            let charge_end = ctx.datetime(FocusColumn::ChargePeriodEnd).unwrap();

            assert!(billing_start < billing_end);
            assert!(charge_start < charge_end);
            assert!(charge_start >= billing_start);
            assert!(charge_end <= billing_end);
        }
    }

    #[test]
    fn test_billing_period_is_one_calendar_month() {
        let mut ctx = test_context(7);
        PeriodGenerator.generate(&mut ctx).unwrap();

        let start = ctx.datetime(FocusColumn::BillingPeriodStart).unwrap();
        let end = ctx.datetime(FocusColumn::BillingPeriodEnd).unwrap();
        assert_eq!(start.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2024-02-01T00:00:00+00:00");
    }
}
