//! Capacity reservation columns: same single-gate pattern as commitment
//! discounts.

use super::{pick, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::catalog::CAPACITY_RESERVATION_STATUSES;
use focus_core::FocusColumn;
use rand::Rng;

/// Share of rows that consume (or hold unused) reserved capacity.
const RESERVATION_RATE: f64 = 0.30;

pub struct CapacityReservationGenerator;

impl ColumnGenerator for CapacityReservationGenerator {
    fn name(&self) -> &'static str {
        "capacity-reservation"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::CapacityReservationId,
            FocusColumn::CapacityReservationStatus,
        ]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        if !ctx.rng.random_bool(RESERVATION_RATE) {
            return Ok(());
        }

        let id = format!("CapRes-{:04x}", ctx.rng.random_range(0u32..0x1_0000));
        ctx.set(FocusColumn::CapacityReservationId, id);
        let reservation_status = *pick(&mut ctx.rng, CAPACITY_RESERVATION_STATUSES);
        ctx.set(FocusColumn::CapacityReservationStatus, reservation_status);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_context;

    #[test]
    fn test_status_is_null_iff_id_is_null() {
        for seed in 0..200 {
            let mut ctx = test_context(seed);
            CapacityReservationGenerator.generate(&mut ctx).unwrap();
            assert_eq!(
                ctx.is_null(FocusColumn::CapacityReservationId),
                ctx.is_null(FocusColumn::CapacityReservationStatus)
            );
        }
    }

    #[test]
    fn test_status_value_is_allowed() {
        for seed in 0..200 {
            let mut ctx = test_context(seed);
            CapacityReservationGenerator.generate(&mut ctx).unwrap();
            if let Some(status) = ctx.text(FocusColumn::CapacityReservationStatus) {
                assert!(CAPACITY_RESERVATION_STATUSES.contains(&status));
            }
        }
    }
}
