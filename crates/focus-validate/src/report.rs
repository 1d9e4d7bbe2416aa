//! Validation report types.

use serde::Serialize;

/// One detected non-conformance: which row, which column (if the finding is
/// column-specific), which rule, and a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Zero-based row index in the validated dataset.
    pub row: usize,
    /// Offending column, when the rule pins one down.
    pub column: Option<&'static str>,
    /// Stable rule identifier.
    pub rule: &'static str,
    pub message: String,
}

/// Complete validation outcome over a dataset.
///
/// `violations` are hard failures: a dataset with any of them is not FOCUS
/// conformant. `warnings` are advisory findings that never affect
/// [`valid`](Self::valid). Findings are data, not errors; the validator
/// never throws for a detected non-conformance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

impl ValidationReport {
    /// Whether the dataset passed every hard rule.
    pub fn valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub(crate) fn violation(
        &mut self,
        row: usize,
        column: Option<&'static str>,
        rule: &'static str,
        message: String,
    ) {
        self.violations.push(Violation {
            row,
            column,
            rule,
            message,
        });
    }

    pub(crate) fn warning(
        &mut self,
        row: usize,
        column: Option<&'static str>,
        rule: &'static str,
        message: String,
    ) {
        self.warnings.push(Violation {
            row,
            column,
            rule,
            message,
        });
    }

    /// One-line outcome for logs and CLI output.
    pub fn summary(&self) -> String {
        if self.valid() {
            format!(
                "Validation PASSED ({} warning{})",
                self.warnings.len(),
                if self.warnings.len() == 1 { "" } else { "s" }
            )
        } else {
            format!(
                "Validation FAILED: {} violation{}, {} warning{}",
                self.violations.len(),
                if self.violations.len() == 1 { "" } else { "s" },
                self.warnings.len(),
                if self.warnings.len() == 1 { "" } else { "s" }
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::default();
        assert!(report.valid());
        assert!(report.summary().contains("PASSED"));
    }

    #[test]
    fn test_violations_fail_the_report() {
        let mut report = ValidationReport::default();
        report.violation(3, Some("BilledCost"), "cost-non-negative", "negative".into());
        assert!(!report.valid());
        assert!(report.summary().contains("FAILED"));
        assert!(report.summary().contains("1 violation"));
    }

    #[test]
    fn test_warnings_do_not_fail_the_report() {
        let mut report = ValidationReport::default();
        report.warning(0, None, "mixed-currency", "two currencies".into());
        assert!(report.valid());
    }

    #[test]
    fn test_report_serializes_for_api_consumers() {
        let mut report = ValidationReport::default();
        report.violation(1, Some("SkuId"), "tax-sku-null", "SkuId set on a Tax row".into());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["violations"][0]["row"], 1);
        assert_eq!(json["violations"][0]["column"], "SkuId");
        assert_eq!(json["violations"][0]["rule"], "tax-sku-null");
    }
}
