//! Free-form metadata: tags, SKU price details and templated names.
//!
//! `ChargeDescription` and `CommitmentDiscountName` are built from columns
//! that earlier units already resolved, so descriptions read like the rest
//! of the row instead of like random noise.

use super::{pick, read_dependency, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use crate::family::ServiceFamily;
use focus_core::{FocusColumn, FocusValue};
use rand::Rng;
use std::collections::BTreeMap;

/// Share of rows with no tags at all.
const UNTAGGED_RATE: f64 = 0.40;

/// Share of tagged rows that also carry ad-hoc custom tags.
const CUSTOM_TAG_RATE: f64 = 0.30;

/// Share of SKU-priced rows without published price details.
const DETAILLESS_RATE: f64 = 0.50;

/// Share of rows whose description was never filled in upstream.
const UNDESCRIBED_RATE: f64 = 0.10;

const TAG_CATEGORIES: &[(&str, &[&str])] = &[
    ("Environment", &["Production", "Development", "Staging", "Testing"]),
    ("Project", &["WebApp", "DataPipeline", "Analytics", "ML-Training", "Backup"]),
    ("Owner", &["Engineering", "DataScience", "DevOps", "Finance", "Marketing"]),
    ("CostCenter", &["CC-1001", "CC-2002", "CC-3003", "CC-4004"]),
    ("Application", &["WebServer", "Database", "LoadBalancer", "Cache", "Storage"]),
];

const PRICING_MODELS: &[&str] = &["OnDemand", "Reserved", "Spot", "Committed"];
const TERM_LENGTHS: &[&str] = &["None", "1yr", "3yr"];
const PAYMENT_OPTIONS: &[&str] = &["NoUpfront", "PartialUpfront", "AllUpfront"];
const INSTANCE_TYPES: &[&str] = &["t3.micro", "m5.large", "c5.xlarge", "r5.2xlarge"];
const OPERATING_SYSTEMS: &[&str] = &["Linux", "Windows", "RHEL"];
const STORAGE_CLASSES: &[&str] = &["Standard", "IA", "Archive", "Glacier"];
const REDUNDANCY_LEVELS: &[&str] = &["LRS", "ZRS", "GRS"];

pub struct MetadataGenerator;

impl ColumnGenerator for MetadataGenerator {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::Tags,
            FocusColumn::SkuPriceDetails,
            FocusColumn::ChargeDescription,
            FocusColumn::CommitmentDiscountName,
        ]
    }

    fn reads(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::ChargeCategory,
            FocusColumn::ServiceCategory,
            FocusColumn::ServiceName,
            FocusColumn::RegionName,
            FocusColumn::ConsumedUnit,
            FocusColumn::SkuPriceId,
            FocusColumn::CommitmentDiscountId,
            FocusColumn::CommitmentDiscountType,
        ]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        self.generate_tags(ctx);
        self.generate_sku_price_details(ctx)?;
        self.generate_charge_description(ctx)?;
        self.generate_commitment_discount_name(ctx);
        Ok(())
    }
}

impl MetadataGenerator {
    fn generate_tags(&self, ctx: &mut RowContext<'_>) {
        use rand::seq::IndexedRandom;

        if ctx.rng.random_bool(UNTAGGED_RATE) {
            return;
        }

        let mut tags = BTreeMap::new();
        let count = ctx.rng.random_range(2..=4usize);
        let selected: Vec<&(&str, &[&str])> =
            TAG_CATEGORIES.choose_multiple(&mut ctx.rng, count).collect();
        for (key, values) in selected {
            let value = *pick(&mut ctx.rng, values);
            tags.insert((*key).to_string(), value.to_string());
        }

        if ctx.rng.random_bool(CUSTOM_TAG_RATE) {
            let billing_code = format!("BC-{}", ctx.rng.random_range(1000..10_000));
            let temporary = *pick(&mut ctx.rng, &["true", "false"]);
            let candidates: [(&str, String); 3] = [
                ("CreatedBy", "AutomatedDeployment".to_string()),
                ("BillingCode", billing_code),
                ("Temporary", temporary.to_string()),
            ];
            let extra = ctx.rng.random_range(1..=2usize);
            let chosen: Vec<&(&str, String)> =
                candidates.choose_multiple(&mut ctx.rng, extra).collect();
            for (key, value) in chosen {
                tags.insert((*key).to_string(), value.clone());
            }
        }

        ctx.set(FocusColumn::Tags, FocusValue::KeyValue(tags));
    }

    fn generate_sku_price_details(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        if ctx.is_null(FocusColumn::SkuPriceId) || ctx.rng.random_bool(DETAILLESS_RATE) {
            return Ok(());
        }

        let family = ctx
            .service_family()
            .ok_or(GenerateError::MissingDependency {
                column: FocusColumn::SkuPriceDetails.name(),
                needs: FocusColumn::ServiceCategory.name(),
            })?;

        let mut details = BTreeMap::new();
        details.insert("sku_family".to_string(), family.sku_family().to_string());
        details.insert(
            "pricing_model".to_string(),
            pick(&mut ctx.rng, PRICING_MODELS).to_string(),
        );
        details.insert(
            "term_length".to_string(),
            pick(&mut ctx.rng, TERM_LENGTHS).to_string(),
        );
        details.insert(
            "payment_option".to_string(),
            pick(&mut ctx.rng, PAYMENT_OPTIONS).to_string(),
        );

        match family {
            ServiceFamily::Compute => {
                details.insert(
                    "instance_type".to_string(),
                    pick(&mut ctx.rng, INSTANCE_TYPES).to_string(),
                );
                details.insert(
                    "operating_system".to_string(),
                    pick(&mut ctx.rng, OPERATING_SYSTEMS).to_string(),
                );
            }
            ServiceFamily::Storage => {
                details.insert(
                    "storage_class".to_string(),
                    pick(&mut ctx.rng, STORAGE_CLASSES).to_string(),
                );
                details.insert(
                    "redundancy".to_string(),
                    pick(&mut ctx.rng, REDUNDANCY_LEVELS).to_string(),
                );
            }
            _ => {}
        }

        ctx.set(FocusColumn::SkuPriceDetails, FocusValue::KeyValue(details));
        Ok(())
    }

    fn generate_charge_description(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        if ctx.rng.random_bool(UNDESCRIBED_RATE) {
            return Ok(());
        }

        let service = read_dependency(
            ctx,
            FocusColumn::ChargeDescription,
            FocusColumn::ServiceName,
        )?;
        let category = read_dependency(
            ctx,
            FocusColumn::ChargeDescription,
            FocusColumn::ChargeCategory,
        )?;
        let region = ctx
            .text(FocusColumn::RegionName)
            .unwrap_or("unspecified region")
            .to_string();
        let unit = ctx.text(FocusColumn::ConsumedUnit).map(str::to_string);

        let description = match category.as_str() {
            "Usage" => match unit {
                Some(unit) => format!("{service} usage in {region} - {unit}"),
                None => format!("{service} usage in {region}"),
            },
            "Purchase" => format!("{service} reserved capacity purchase"),
            "Tax" => format!("Tax on {service} charges"),
            "Credit" => format!("Credit applied to {service} usage"),
            "Adjustment" => format!("Billing adjustment for {service}"),
            _ => format!("{service} charge"),
        };
        ctx.set(FocusColumn::ChargeDescription, description);
        Ok(())
    }

    fn generate_commitment_discount_name(&self, ctx: &mut RowContext<'_>) {
        if ctx.is_null(FocusColumn::CommitmentDiscountId) {
            return;
        }

        let name = match ctx.text(FocusColumn::CommitmentDiscountType) {
            Some("Reserved") => {
                format!("Reserved Instance Plan {}", ctx.rng.random_range(1000..10_000))
            }
            Some("SavingsPlan") => format!("Savings Plan {}", ctx.rng.random_range(100..1000)),
            Some("Custom") => format!("Enterprise Agreement {}", ctx.rng.random_range(10..100)),
            _ => format!("Commitment Plan {}", ctx.rng.random_range(100..1000)),
        };
        ctx.set(FocusColumn::CommitmentDiscountName, name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_context;

    fn prepared(seed: u64) -> RowContext<'static> {
        let mut ctx = test_context(seed);
        ctx.set(FocusColumn::ChargeCategory, "Usage");
        ctx.set(FocusColumn::ServiceCategory, "Compute");
        ctx.set(FocusColumn::ServiceName, "Amazon EC2");
        ctx.set(FocusColumn::RegionName, "US East (N. Virginia)");
        ctx.set(FocusColumn::ConsumedUnit, "Hours");
        ctx.set(FocusColumn::SkuPriceId, "SKUPRICE-00ff");
        ctx
    }

    #[test]
    fn test_tags_have_two_to_four_known_categories() {
        for seed in 0..200 {
            let mut ctx = prepared(seed);
            MetadataGenerator.generate_tags(&mut ctx);
            let Some(FocusValue::KeyValue(tags)) = Some(ctx.get(FocusColumn::Tags)) else {
                continue;
            };
            if tags.is_empty() {
                continue;
            }
            let known: usize = tags
                .keys()
                .filter(|k| TAG_CATEGORIES.iter().any(|(name, _)| name == &k.as_str()))
                .count();
            assert!((2..=4).contains(&known), "known tags: {known}");
        }
    }

    #[test]
    fn test_usage_description_mentions_service_and_region() {
        for seed in 0..50 {
            let mut ctx = prepared(seed);
            MetadataGenerator.generate_charge_description(&mut ctx).unwrap();
            if let Some(description) = ctx.text(FocusColumn::ChargeDescription) {
                assert!(description.contains("Amazon EC2"));
                assert!(description.contains("US East (N. Virginia)"));
            }
        }
    }

    #[test]
    fn test_sku_price_details_require_sku_price_id() {
        for seed in 0..100 {
            let mut ctx = prepared(seed);
            ctx.set_null(FocusColumn::SkuPriceId);
            MetadataGenerator.generate_sku_price_details(&mut ctx).unwrap();
            assert!(ctx.is_null(FocusColumn::SkuPriceDetails));
        }
    }

    #[test]
    fn test_compute_details_carry_instance_fields() {
        let mut found = false;
        for seed in 0..100 {
            let mut ctx = prepared(seed);
            MetadataGenerator.generate_sku_price_details(&mut ctx).unwrap();
            if let FocusValue::KeyValue(details) = ctx.get(FocusColumn::SkuPriceDetails) {
                assert_eq!(details.get("sku_family").map(String::as_str), Some("Compute Instance"));
                assert!(details.contains_key("instance_type"));
                assert!(details.contains_key("operating_system"));
                found = true;
            }
        }
        assert!(found, "no seed produced price details");
    }

    #[test]
    fn test_commitment_name_tracks_type() {
        let mut ctx = prepared(3);
        ctx.set(FocusColumn::CommitmentDiscountId, "CD-0001");
        ctx.set(FocusColumn::CommitmentDiscountType, "SavingsPlan");
        MetadataGenerator.generate_commitment_discount_name(&mut ctx);
        assert!(ctx
            .text(FocusColumn::CommitmentDiscountName)
            .unwrap()
            .starts_with("Savings Plan "));
    }

    #[test]
    fn test_no_commitment_means_no_name() {
        let mut ctx = prepared(4);
        MetadataGenerator.generate_commitment_discount_name(&mut ctx);
        assert!(ctx.is_null(FocusColumn::CommitmentDiscountName));
    }
}
