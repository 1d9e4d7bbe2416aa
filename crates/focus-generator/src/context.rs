//! Per-row generation context.

use crate::family::ServiceFamily;
use crate::pools::IdentityPools;
use chrono::{DateTime, Utc};
use focus_core::{
    BillingMonth, CloudProvider, Distribution, FocusColumn, FocusRecord, FocusValue,
    GenerationRequest, Profile,
};
use rand::rngs::StdRng;
use rust_decimal::Decimal;

/// Everything a generator unit may consult while producing one row.
///
/// The context owns the row's RNG stream and the partially built record;
/// units read columns produced by earlier units and write their own. It is
/// created per row by the orchestrator and consumed into the finished
/// [`FocusRecord`].
pub struct RowContext<'a> {
    pub profile: Profile,
    pub distribution: Distribution,
    /// Provider this row is billed by, drawn from the request's provider set.
    pub provider: CloudProvider,
    /// Zero-based billing period index (always 0 for single-month datasets).
    pub period: u32,
    pub billing_month: BillingMonth,
    /// Row index within the current billing period.
    pub row_index: u64,
    /// Rows per billing period.
    pub row_count: u64,
    /// Total BilledCost budget for the current billing period.
    pub period_cost: f64,
    pub pools: &'a IdentityPools,
    /// This row's private RNG stream (seeded from `base_seed` and the
    /// global row index).
    pub rng: StdRng,
    record: FocusRecord,
}

impl<'a> RowContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        request: &GenerationRequest,
        provider: CloudProvider,
        period: u32,
        billing_month: BillingMonth,
        row_index: u64,
        period_cost: f64,
        pools: &'a IdentityPools,
        rng: StdRng,
    ) -> Self {
        Self {
            profile: request.profile,
            distribution: request.distribution,
            provider,
            period,
            billing_month,
            row_index,
            row_count: request.row_count,
            period_cost,
            pools,
            rng,
            record: FocusRecord::new(),
        }
    }

    pub fn get(&self, column: FocusColumn) -> &FocusValue {
        self.record.get(column)
    }

    pub fn set(&mut self, column: FocusColumn, value: impl Into<FocusValue>) {
        self.record.set(column, value);
    }

    pub fn set_null(&mut self, column: FocusColumn) {
        self.record.set_null(column);
    }

    pub fn is_null(&self, column: FocusColumn) -> bool {
        self.record.is_null(column)
    }

    pub fn text(&self, column: FocusColumn) -> Option<&str> {
        self.record.text(column)
    }

    pub fn decimal(&self, column: FocusColumn) -> Option<Decimal> {
        self.record.decimal(column)
    }

    pub fn datetime(&self, column: FocusColumn) -> Option<DateTime<Utc>> {
        self.record.datetime(column)
    }

    /// Service family of the already-generated `ServiceCategory`, if any.
    pub fn service_family(&self) -> Option<ServiceFamily> {
        self.text(FocusColumn::ServiceCategory)
            .and_then(ServiceFamily::from_category)
    }

    pub fn into_record(self) -> FocusRecord {
        self.record
    }
}
