//! Validation engine for FOCUS datasets.
//!
//! [`validate`] is a pure function over a sequence of records: it runs the
//! basic structural layer (nullability, data types, allowed values) and the
//! enhanced cross-column layer over every row, plus a handful of advisory
//! dataset-level checks, and returns a [`ValidationReport`] listing every
//! finding. It never stops at the first failure and never throws for a
//! detected non-conformance.
//!
//! # Example
//!
//! ```
//! use focus_core::FocusRecord;
//!
//! let records: Vec<FocusRecord> = Vec::new();
//! let report = focus_validate::validate(&records);
//! assert!(report.valid());
//! ```

pub mod advisory;
pub mod basic;
pub mod enhanced;
pub mod report;

#[cfg(test)]
pub(crate) mod testing;

pub use report::{ValidationReport, Violation};

use focus_core::FocusRecord;

/// Check a dataset against the full FOCUS rule set.
pub fn validate(records: &[FocusRecord]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (row, record) in records.iter().enumerate() {
        basic::check_row(row, record, &mut report);
        enhanced::check_row(row, record, &mut report);
    }
    advisory::check_dataset(records, &mut report);

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::valid_record;
    use focus_core::FocusColumn;

    #[test]
    fn test_valid_dataset_passes() {
        let records = vec![valid_record(), valid_record(), valid_record()];
        let report = validate(&records);
        assert!(report.valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_findings_accumulate_across_rows() {
        let mut first = valid_record();
        first.set_null(FocusColumn::BilledCost);
        let mut third = valid_record();
        third.set(FocusColumn::CapacityReservationStatus, "Used");

        let report = validate(&[first, valid_record(), third]);
        assert!(!report.valid());
        assert_eq!(report.violations.len(), 2);
        assert_eq!(report.violations[0].row, 0);
        assert_eq!(report.violations[1].row, 2);
    }

    #[test]
    fn test_empty_dataset_is_valid() {
        assert!(validate(&[]).valid());
    }
}
