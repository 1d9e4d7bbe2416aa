//! Basic structural checks: nullability, data types, allowed values.

use crate::report::ValidationReport;
use focus_core::{FocusColumn, FocusRecord};

pub const NON_NULLABLE: &str = "non-nullable";
pub const DATA_TYPE: &str = "data-type";
pub const ALLOWED_VALUES: &str = "allowed-values";

/// Run every catalog-driven check over one row.
pub(crate) fn check_row(row: usize, record: &FocusRecord, report: &mut ValidationReport) {
    for column in FocusColumn::ALL {
        let meta = column.metadata();
        let value = record.get(column);

        if value.is_null() {
            if !meta.allows_nulls {
                report.violation(
                    row,
                    Some(column.name()),
                    NON_NULLABLE,
                    format!("{column} must not be null"),
                );
            }
            continue;
        }

        match value.data_type() {
            Some(actual) if actual != meta.data_type => {
                report.violation(
                    row,
                    Some(column.name()),
                    DATA_TYPE,
                    format!(
                        "{column} holds a {actual:?} value but is declared {:?}",
                        meta.data_type
                    ),
                );
                continue;
            }
            _ => {}
        }

        if let (Some(allowed), Some(text)) = (meta.allowed_values, value.as_text()) {
            if !allowed.contains(&text) {
                report.violation(
                    row,
                    Some(column.name()),
                    ALLOWED_VALUES,
                    format!("{column} value '{text}' is not in the allowed set"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::valid_record;
    use focus_core::FocusValue;
    use rust_decimal::Decimal;

    fn run(record: &FocusRecord) -> ValidationReport {
        let mut report = ValidationReport::default();
        check_row(0, record, &mut report);
        report
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(run(&valid_record()).valid());
    }

    #[test]
    fn test_null_non_nullable_column_is_reported() {
        let mut record = valid_record();
        record.set_null(FocusColumn::BilledCost);
        let report = run(&record);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, NON_NULLABLE);
        assert_eq!(report.violations[0].column, Some("BilledCost"));
    }

    #[test]
    fn test_nullable_mandatory_column_may_be_null() {
        let mut record = valid_record();
        record.set_null(FocusColumn::ChargeClass);
        record.set_null(FocusColumn::ChargeDescription);
        assert!(run(&record).valid());
    }

    #[test]
    fn test_wrong_data_type_is_reported() {
        let mut record = valid_record();
        record.set(FocusColumn::ChargeCategory, Decimal::ONE);
        let report = run(&record);
        assert!(report
            .violations
            .iter()
            .any(|v| v.rule == DATA_TYPE && v.column == Some("ChargeCategory")));
    }

    #[test]
    fn test_unknown_enumerated_value_is_reported() {
        let mut record = valid_record();
        record.set(FocusColumn::PricingCategory, "Discounted");
        let report = run(&record);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, ALLOWED_VALUES);
    }

    #[test]
    fn test_key_value_columns_accept_maps() {
        let mut record = valid_record();
        let mut tags = std::collections::BTreeMap::new();
        tags.insert("Environment".to_string(), "Production".to_string());
        record.set(FocusColumn::Tags, FocusValue::KeyValue(tags));
        assert!(run(&record).valid());
    }
}
