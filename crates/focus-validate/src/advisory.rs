//! Advisory checks: findings worth surfacing that do not make a dataset
//! non-conformant. They land in `ValidationReport::warnings` and never
//! affect the pass/fail outcome.

use crate::report::ValidationReport;
use focus_core::{FocusColumn, FocusRecord};
use rust_decimal::Decimal;
use std::collections::BTreeSet;

pub const MIXED_CURRENCY: &str = "mixed-currency";
pub const RESOURCE_WITHOUT_TYPE: &str = "resource-without-type";
pub const UNUSED_COMMITMENT_BILLED: &str = "unused-commitment-billed";

/// Run the advisory checks over the whole dataset.
pub(crate) fn check_dataset(records: &[FocusRecord], report: &mut ValidationReport) {
    let mut currencies = BTreeSet::new();

    for (row, record) in records.iter().enumerate() {
        if let Some(currency) = record.text(FocusColumn::BillingCurrency) {
            currencies.insert(currency.to_string());
        }

        if !record.is_null(FocusColumn::ResourceId) && record.is_null(FocusColumn::ResourceType) {
            report.warning(
                row,
                Some(FocusColumn::ResourceType.name()),
                RESOURCE_WITHOUT_TYPE,
                "row carries a ResourceId but no ResourceType".to_string(),
            );
        }

        if record.text(FocusColumn::CommitmentDiscountStatus) == Some("Unused") {
            if let Some(billed) = record.decimal(FocusColumn::BilledCost) {
                if billed != Decimal::ZERO {
                    report.warning(
                        row,
                        Some(FocusColumn::BilledCost.name()),
                        UNUSED_COMMITMENT_BILLED,
                        format!("unused commitment billed {billed}"),
                    );
                }
            }
        }
    }

    if currencies.len() > 1 {
        report.warning(
            0,
            Some(FocusColumn::BillingCurrency.name()),
            MIXED_CURRENCY,
            format!(
                "dataset mixes billing currencies: {}",
                currencies.into_iter().collect::<Vec<_>>().join(", ")
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::valid_record;

    fn run(records: &[FocusRecord]) -> ValidationReport {
        let mut report = ValidationReport::default();
        check_dataset(records, &mut report);
        report
    }

    #[test]
    fn test_clean_dataset_has_no_warnings() {
        let records = vec![valid_record(), valid_record()];
        assert!(run(&records).warnings.is_empty());
    }

    #[test]
    fn test_mixed_currencies_warn_once() {
        let mut other = valid_record();
        other.set(FocusColumn::BillingCurrency, "EUR");
        let report = run(&[valid_record(), other]);

        assert!(report.valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].rule, MIXED_CURRENCY);
    }

    #[test]
    fn test_resource_without_type_warns() {
        let mut record = valid_record();
        record.set_null(FocusColumn::ResourceType);
        let report = run(std::slice::from_ref(&record));
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].rule, RESOURCE_WITHOUT_TYPE);
    }

    #[test]
    fn test_billed_unused_commitment_warns() {
        let mut record = valid_record();
        record.set(FocusColumn::CommitmentDiscountId, "CD-0001");
        record.set(FocusColumn::CommitmentDiscountStatus, "Unused");
        let report = run(std::slice::from_ref(&record));
        assert!(report
            .warnings
            .iter()
            .any(|w| w.rule == UNUSED_COMMITMENT_BILLED));
    }
}
