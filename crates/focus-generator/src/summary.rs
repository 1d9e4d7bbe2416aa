//! Summary statistics over a generated dataset.

use focus_core::{FocusColumn, FocusRecord};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;

/// Headline numbers for a dataset: what was generated, for whom, and how
/// much it cost. The CLI prints this after `generate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub record_count: usize,
    pub total_billed_cost: Decimal,
    /// Distinct `ProviderName` values, sorted.
    pub providers: Vec<String>,
    /// Distinct billing months as `YYYY-MM`, sorted.
    pub billing_months: Vec<String>,
    /// Distinct `BillingCurrency` values, sorted (one entry for a healthy
    /// dataset).
    pub currencies: Vec<String>,
}

impl DatasetSummary {
    pub fn for_records(records: &[FocusRecord]) -> Self {
        let mut total = Decimal::ZERO;
        let mut providers = BTreeSet::new();
        let mut months = BTreeSet::new();
        let mut currencies = BTreeSet::new();

        for record in records {
            if let Some(cost) = record.decimal(FocusColumn::BilledCost) {
                total += cost;
            }
            if let Some(provider) = record.text(FocusColumn::ProviderName) {
                providers.insert(provider.to_string());
            }
            if let Some(start) = record.datetime(FocusColumn::BillingPeriodStart) {
                months.insert(start.format("%Y-%m").to_string());
            }
            if let Some(currency) = record.text(FocusColumn::BillingCurrency) {
                currencies.insert(currency.to_string());
            }
        }

        Self {
            record_count: records.len(),
            total_billed_cost: total,
            providers: providers.into_iter().collect(),
            billing_months: months.into_iter().collect(),
            currencies: currencies.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records, {} {} billed, providers [{}], months [{}]",
            self.record_count,
            self.total_billed_cost.round_dp(2),
            self.currencies.join("/"),
            self.providers.join(", "),
            self.billing_months.join(", "),
        )
    }
}
