//! Shared fixture for unit tests inside this crate.

use chrono::{DateTime, Utc};
use focus_core::{FocusColumn, FocusRecord};
use rust_decimal::Decimal;

fn timestamp(s: &str) -> DateTime<Utc> {
    s.parse().expect("fixture timestamps are valid")
}

/// One fully conformant Usage row: passes every basic, enhanced and
/// advisory check. Tests mutate a copy to break exactly the rule under
/// test.
pub(crate) fn valid_record() -> FocusRecord {
    let mut record = FocusRecord::new();

    record.set(FocusColumn::AvailabilityZone, "us-east-1a");
    record.set(FocusColumn::BilledCost, Decimal::new(100_00, 2));
    record.set(FocusColumn::BillingAccountId, "123456789012");
    record.set(FocusColumn::BillingAccountName, "Acme Corp");
    record.set(FocusColumn::BillingCurrency, "USD");
    record.set(
        FocusColumn::BillingPeriodStart,
        timestamp("2024-01-01T00:00:00Z"),
    );
    record.set(
        FocusColumn::BillingPeriodEnd,
        timestamp("2024-02-01T00:00:00Z"),
    );
    record.set(FocusColumn::ChargeCategory, "Usage");
    record.set(
        FocusColumn::ChargeDescription,
        "Amazon EC2 usage in US East (N. Virginia) - Hours",
    );
    record.set(FocusColumn::ChargeFrequency, "Usage-Based");
    record.set(
        FocusColumn::ChargePeriodStart,
        timestamp("2024-01-10T00:00:00Z"),
    );
    record.set(
        FocusColumn::ChargePeriodEnd,
        timestamp("2024-01-10T06:00:00Z"),
    );
    record.set(FocusColumn::ConsumedQuantity, Decimal::new(100_00, 2));
    record.set(FocusColumn::ConsumedUnit, "Hours");
    record.set(FocusColumn::ContractedCost, Decimal::new(95_00, 2));
    record.set(FocusColumn::ContractedUnitPrice, Decimal::new(1_0000, 4));
    record.set(FocusColumn::EffectiveCost, Decimal::new(95_00, 2));
    record.set(FocusColumn::InvoiceIssuerName, "Amazon Web Services, Inc.");
    record.set(FocusColumn::ListCost, Decimal::new(130_00, 2));
    record.set(FocusColumn::ListUnitPrice, Decimal::new(1_3000, 4));
    record.set(FocusColumn::PricingCategory, "Standard");
    record.set(FocusColumn::PricingQuantity, Decimal::new(100_00, 2));
    record.set(FocusColumn::PricingUnit, "Hours");
    record.set(FocusColumn::ProviderName, "AWS");
    record.set(FocusColumn::PublisherName, "Amazon Web Services");
    record.set(FocusColumn::RegionId, "us-east-1");
    record.set(FocusColumn::RegionName, "US East (N. Virginia)");
    record.set(FocusColumn::ResourceId, "i-00ab12cd");
    record.set(FocusColumn::ResourceName, "web-server-12cd");
    record.set(FocusColumn::ResourceType, "Instance");
    record.set(FocusColumn::ServiceCategory, "Compute");
    record.set(FocusColumn::ServiceName, "Amazon EC2");
    record.set(FocusColumn::ServiceSubcategory, "Virtual Machines");
    record.set(FocusColumn::SkuId, "SKU-00ff");
    record.set(FocusColumn::SkuMeter, "Instance runtime");
    record.set(FocusColumn::SkuPriceId, "SKUPRICE-00ff");
    record.set(FocusColumn::SubAccountId, "234567890123");
    record.set(FocusColumn::SubAccountName, "Production");

    record
}
