//! Column generator units.
//!
//! Each unit owns a cohesive cluster of catalog columns and is the only
//! writer of those columns. Units are pure functions of the context they
//! are handed (partial record, RNG stream, request parameters, identity
//! pools): no global state, no I/O. The registry lists the units in
//! dependency order; `owns()`/`reads()` declarations make the 50/50 column
//! coverage and the read-after-write ordering checkable by test instead of
//! relying on a runtime fallback branch.

pub mod account;
pub mod business;
pub mod capacity;
pub mod classification;
pub mod commitment;
pub mod cost;
pub mod cost_details;
pub mod location;
pub mod metadata;
pub mod periods;
pub mod pricing;
pub mod resource;
pub mod service;
pub mod sku;
pub mod usage;

use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::FocusColumn;
use rand::seq::IndexedRandom;
use rand::Rng;
use rust_decimal::Decimal;

/// A generator unit: owns a fixed set of columns and fills them in from the
/// partially built row.
pub trait ColumnGenerator {
    /// Short unit name for logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Columns this unit writes. Disjoint across the registry; the union
    /// over all units is the full catalog.
    fn owns(&self) -> &'static [FocusColumn];

    /// Columns this unit reads. Every read must be owned by an earlier
    /// registry entry.
    fn reads(&self) -> &'static [FocusColumn] {
        &[]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError>;
}

/// All generator units in dependency order.
pub fn registry() -> Vec<Box<dyn ColumnGenerator>> {
    vec![
        Box::new(classification::ClassificationGenerator),
        Box::new(periods::PeriodGenerator),
        Box::new(service::ServiceGenerator),
        Box::new(location::LocationGenerator),
        Box::new(sku::SkuGenerator),
        Box::new(pricing::PricingGenerator),
        Box::new(resource::ResourceGenerator),
        Box::new(account::AccountGenerator),
        Box::new(cost::CostGenerator),
        Box::new(cost_details::CostDetailsGenerator),
        Box::new(commitment::CommitmentDiscountGenerator),
        Box::new(capacity::CapacityReservationGenerator),
        Box::new(usage::UsageMetricsGenerator),
        Box::new(business::BusinessGenerator),
        Box::new(metadata::MetadataGenerator),
    ]
}

/// Uniform pick from a static table.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    items.choose(rng).expect("choice tables are non-empty")
}

/// Weighted pick from a static `(value, weight)` table.
pub(crate) fn pick_weighted<'a, T, R: Rng + ?Sized>(rng: &mut R, table: &'a [(T, f64)]) -> &'a T {
    &table
        .choose_weighted(rng, |(_, weight)| *weight)
        .expect("weight tables are non-empty with positive weights")
        .0
}

/// Monetary amount: two decimal places.
pub(crate) fn money(value: f64) -> Decimal {
    Decimal::new((value * 100.0).round() as i64, 2)
}

/// Unit price: four decimal places.
pub(crate) fn price(value: f64) -> Decimal {
    Decimal::new((value * 10_000.0).round() as i64, 4)
}

/// Quantity: two decimal places.
pub(crate) fn quantity(value: f64) -> Decimal {
    money(value)
}

/// Scale a monetary amount by an f64 factor, keeping two decimal places.
pub(crate) fn scale_money(amount: Decimal, factor: f64) -> Decimal {
    (amount * price(factor)).round_dp(2)
}

/// Scale a unit price by an f64 factor, keeping four decimal places.
pub(crate) fn scale_price(amount: Decimal, factor: f64) -> Decimal {
    (amount * price(factor)).round_dp(4)
}

/// Read a text dependency, failing loudly if the registry order let us down.
pub(crate) fn read_dependency(
    ctx: &RowContext<'_>,
    column: FocusColumn,
    needs: FocusColumn,
) -> Result<String, GenerateError> {
    ctx.text(needs)
        .map(str::to_string)
        .ok_or(GenerateError::MissingDependency {
            column: column.name(),
            needs: needs.name(),
        })
}
