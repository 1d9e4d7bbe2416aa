//! Enhanced cross-column checks.
//!
//! These rules relate several columns of the same row; all of them must
//! hold simultaneously for a dataset to be conformant. The checker never
//! stops at the first finding.

use crate::report::ValidationReport;
use focus_core::{FocusColumn, FocusRecord};
use rust_decimal::Decimal;

pub const TAX_SKU: &str = "tax-sku-null";
pub const PURCHASE_FREQUENCY: &str = "purchase-charge-frequency";
pub const COMMITMENT_CLUSTER: &str = "commitment-discount-cluster";
pub const COMMITMENT_STATUS: &str = "usage-commitment-status";
pub const CAPACITY_STATUS: &str = "capacity-reservation-status";
pub const USAGE_PRICING_QUANTITY: &str = "usage-pricing-quantity";
pub const PERIOD_ORDERING: &str = "period-ordering";
pub const COST_NON_NEGATIVE: &str = "cost-non-negative";
pub const COST_ORDERING: &str = "cost-ordering";

/// The commitment discount columns governed by `CommitmentDiscountId`.
const COMMITMENT_SIBLINGS: &[FocusColumn] = &[
    FocusColumn::CommitmentDiscountCategory,
    FocusColumn::CommitmentDiscountName,
    FocusColumn::CommitmentDiscountQuantity,
    FocusColumn::CommitmentDiscountStatus,
    FocusColumn::CommitmentDiscountType,
    FocusColumn::CommitmentDiscountUnit,
];

const COST_COLUMNS: &[FocusColumn] = &[
    FocusColumn::BilledCost,
    FocusColumn::ListCost,
    FocusColumn::EffectiveCost,
    FocusColumn::ContractedCost,
];

/// Run every cross-column check over one row.
pub(crate) fn check_row(row: usize, record: &FocusRecord, report: &mut ValidationReport) {
    let category = record.text(FocusColumn::ChargeCategory);

    check_tax_sku(row, record, category, report);
    check_purchase_frequency(row, record, category, report);
    check_commitment_cluster(row, record, category, report);
    check_capacity_status(row, record, report);
    check_usage_pricing_quantity(row, record, category, report);
    check_period_ordering(row, record, report);
    check_costs(row, record, report);
}

/// Tax charges are never SKU-priced.
fn check_tax_sku(
    row: usize,
    record: &FocusRecord,
    category: Option<&str>,
    report: &mut ValidationReport,
) {
    if category != Some("Tax") {
        return;
    }
    for column in [FocusColumn::SkuId, FocusColumn::SkuPriceId] {
        if !record.is_null(column) {
            report.violation(
                row,
                Some(column.name()),
                TAX_SKU,
                format!("{column} must be null when ChargeCategory is Tax"),
            );
        }
    }
}

/// Purchases are invoiced up front or on a schedule, never usage-based.
fn check_purchase_frequency(
    row: usize,
    record: &FocusRecord,
    category: Option<&str>,
    report: &mut ValidationReport,
) {
    if category == Some("Purchase")
        && record.text(FocusColumn::ChargeFrequency) == Some("Usage-Based")
    {
        report.violation(
            row,
            Some(FocusColumn::ChargeFrequency.name()),
            PURCHASE_FREQUENCY,
            "ChargeFrequency must not be Usage-Based when ChargeCategory is Purchase".to_string(),
        );
    }
}

/// `CommitmentDiscountId` is null exactly when every sibling commitment
/// column is null; committed usage rows must also carry a status.
fn check_commitment_cluster(
    row: usize,
    record: &FocusRecord,
    category: Option<&str>,
    report: &mut ValidationReport,
) {
    let id_null = record.is_null(FocusColumn::CommitmentDiscountId);
    let populated: Vec<&'static str> = COMMITMENT_SIBLINGS
        .iter()
        .filter(|c| !record.is_null(**c))
        .map(|c| c.name())
        .collect();

    if id_null && !populated.is_empty() {
        report.violation(
            row,
            Some(FocusColumn::CommitmentDiscountId.name()),
            COMMITMENT_CLUSTER,
            format!(
                "CommitmentDiscountId is null but [{}] are populated",
                populated.join(", ")
            ),
        );
    }
    if !id_null && populated.is_empty() {
        report.violation(
            row,
            Some(FocusColumn::CommitmentDiscountId.name()),
            COMMITMENT_CLUSTER,
            "CommitmentDiscountId is set but every other commitment column is null".to_string(),
        );
    }

    if !id_null
        && category == Some("Usage")
        && record.is_null(FocusColumn::CommitmentDiscountStatus)
    {
        report.violation(
            row,
            Some(FocusColumn::CommitmentDiscountStatus.name()),
            COMMITMENT_STATUS,
            "committed Usage rows must carry a CommitmentDiscountStatus".to_string(),
        );
    }
}

/// A reservation status only makes sense for a named reservation.
fn check_capacity_status(row: usize, record: &FocusRecord, report: &mut ValidationReport) {
    if record.is_null(FocusColumn::CapacityReservationId)
        && !record.is_null(FocusColumn::CapacityReservationStatus)
    {
        report.violation(
            row,
            Some(FocusColumn::CapacityReservationStatus.name()),
            CAPACITY_STATUS,
            "CapacityReservationStatus must be null when CapacityReservationId is null"
                .to_string(),
        );
    }
}

/// Usage charges are metered unless they correct an earlier invoice.
fn check_usage_pricing_quantity(
    row: usize,
    record: &FocusRecord,
    category: Option<&str>,
    report: &mut ValidationReport,
) {
    if category == Some("Usage")
        && record.text(FocusColumn::ChargeClass) != Some("Correction")
        && record.is_null(FocusColumn::PricingQuantity)
    {
        report.violation(
            row,
            Some(FocusColumn::PricingQuantity.name()),
            USAGE_PRICING_QUANTITY,
            "PricingQuantity must be set on non-correction Usage rows".to_string(),
        );
    }
}

/// Charge periods nest inside their billing period and both are ordered.
fn check_period_ordering(row: usize, record: &FocusRecord, report: &mut ValidationReport) {
    let billing_start = record.datetime(FocusColumn::BillingPeriodStart);
    let billing_end = record.datetime(FocusColumn::BillingPeriodEnd);
    let charge_start = record.datetime(FocusColumn::ChargePeriodStart);
    let charge_end = record.datetime(FocusColumn::ChargePeriodEnd);

    if let (Some(start), Some(end)) = (billing_start, billing_end) {
        if start >= end {
            report.violation(
                row,
                Some(FocusColumn::BillingPeriodStart.name()),
                PERIOD_ORDERING,
                format!("BillingPeriodStart {start} is not before BillingPeriodEnd {end}"),
            );
        }
    }
    if let (Some(start), Some(end)) = (charge_start, charge_end) {
        if start >= end {
            report.violation(
                row,
                Some(FocusColumn::ChargePeriodStart.name()),
                PERIOD_ORDERING,
                format!("ChargePeriodStart {start} is not before ChargePeriodEnd {end}"),
            );
        }
    }
    if let (Some(charge), Some(billing)) = (charge_start, billing_start) {
        if charge < billing {
            report.violation(
                row,
                Some(FocusColumn::ChargePeriodStart.name()),
                PERIOD_ORDERING,
                format!("ChargePeriodStart {charge} precedes BillingPeriodStart {billing}"),
            );
        }
    }
    if let (Some(charge), Some(billing)) = (charge_end, billing_end) {
        if charge > billing {
            report.violation(
                row,
                Some(FocusColumn::ChargePeriodEnd.name()),
                PERIOD_ORDERING,
                format!("ChargePeriodEnd {charge} exceeds BillingPeriodEnd {billing}"),
            );
        }
    }
}

/// Costs are non-negative and discounts only ever reduce the list price.
fn check_costs(row: usize, record: &FocusRecord, report: &mut ValidationReport) {
    for column in COST_COLUMNS {
        if let Some(amount) = record.decimal(*column) {
            if amount < Decimal::ZERO {
                report.violation(
                    row,
                    Some(column.name()),
                    COST_NON_NEGATIVE,
                    format!("{column} is negative ({amount})"),
                );
            }
        }
    }

    if let (Some(effective), Some(list)) = (
        record.decimal(FocusColumn::EffectiveCost),
        record.decimal(FocusColumn::ListCost),
    ) {
        if effective > list {
            report.violation(
                row,
                Some(FocusColumn::EffectiveCost.name()),
                COST_ORDERING,
                format!("EffectiveCost {effective} exceeds ListCost {list}"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::valid_record;
    use rust_decimal::Decimal;

    fn run(record: &FocusRecord) -> ValidationReport {
        let mut report = ValidationReport::default();
        check_row(0, record, &mut report);
        report
    }

    fn rules(report: &ValidationReport) -> Vec<&'static str> {
        report.violations.iter().map(|v| v.rule).collect()
    }

    #[test]
    fn test_valid_record_passes_every_rule() {
        assert!(run(&valid_record()).valid());
    }

    #[test]
    fn test_tax_rows_with_sku_are_reported() {
        let mut record = valid_record();
        record.set(FocusColumn::ChargeCategory, "Tax");
        let report = run(&record);
        assert_eq!(rules(&report), vec![TAX_SKU, TAX_SKU]);
    }

    #[test]
    fn test_usage_based_purchase_is_reported() {
        let mut record = valid_record();
        record.set(FocusColumn::ChargeCategory, "Purchase");
        let report = run(&record);
        assert_eq!(rules(&report), vec![PURCHASE_FREQUENCY]);
    }

    #[test]
    fn test_orphaned_commitment_sibling_is_reported() {
        let mut record = valid_record();
        record.set(FocusColumn::CommitmentDiscountStatus, "Used");
        let report = run(&record);
        assert_eq!(rules(&report), vec![COMMITMENT_CLUSTER]);
    }

    #[test]
    fn test_bare_commitment_id_is_reported() {
        let mut record = valid_record();
        record.set(FocusColumn::CommitmentDiscountId, "CD-0001");
        let report = run(&record);
        // A bare id also leaves the committed Usage row without a status.
        assert_eq!(rules(&report), vec![COMMITMENT_CLUSTER, COMMITMENT_STATUS]);
    }

    #[test]
    fn test_committed_usage_without_status_is_reported() {
        let mut record = valid_record();
        record.set(FocusColumn::CommitmentDiscountId, "CD-0001");
        record.set(FocusColumn::CommitmentDiscountCategory, "Spend");
        record.set(FocusColumn::CommitmentDiscountType, "Reserved");
        record.set(FocusColumn::CommitmentDiscountUnit, "Hours");
        let report = run(&record);
        assert_eq!(rules(&report), vec![COMMITMENT_STATUS]);
    }

    #[test]
    fn test_capacity_status_without_id_is_reported() {
        let mut record = valid_record();
        record.set(FocusColumn::CapacityReservationStatus, "Unused");
        let report = run(&record);
        assert_eq!(rules(&report), vec![CAPACITY_STATUS]);
    }

    #[test]
    fn test_usage_without_pricing_quantity_is_reported() {
        let mut record = valid_record();
        record.set_null(FocusColumn::PricingQuantity);
        let report = run(&record);
        assert_eq!(rules(&report), vec![USAGE_PRICING_QUANTITY]);
    }

    #[test]
    fn test_usage_correction_may_omit_pricing_quantity() {
        let mut record = valid_record();
        record.set(FocusColumn::ChargeClass, "Correction");
        record.set_null(FocusColumn::PricingQuantity);
        assert!(run(&record).valid());
    }

    #[test]
    fn test_inverted_charge_period_is_reported() {
        let mut record = valid_record();
        let start = record.datetime(FocusColumn::ChargePeriodStart).unwrap();
        let end = record.datetime(FocusColumn::ChargePeriodEnd).unwrap();
        record.set(FocusColumn::ChargePeriodStart, end);
        record.set(FocusColumn::ChargePeriodEnd, start);
        let report = run(&record);
        assert!(rules(&report).contains(&PERIOD_ORDERING));
    }

    #[test]
    fn test_charge_period_outside_billing_period_is_reported() {
        let mut record = valid_record();
        let billing_end = record.datetime(FocusColumn::BillingPeriodEnd).unwrap();
        record.set(
            FocusColumn::ChargePeriodEnd,
            billing_end + chrono::Duration::hours(1),
        );
        let report = run(&record);
        assert_eq!(rules(&report), vec![PERIOD_ORDERING]);
    }

    #[test]
    fn test_negative_billed_cost_is_reported() {
        let mut record = valid_record();
        record.set(FocusColumn::BilledCost, Decimal::new(-5_00, 2));
        let report = run(&record);
        assert_eq!(rules(&report), vec![COST_NON_NEGATIVE]);
    }

    #[test]
    fn test_effective_above_list_is_reported() {
        let mut record = valid_record();
        record.set(FocusColumn::EffectiveCost, Decimal::new(140_00, 2));
        let report = run(&record);
        assert_eq!(rules(&report), vec![COST_ORDERING]);
    }
}
