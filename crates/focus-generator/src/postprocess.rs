//! Bulk post-processing over an assembled dataset.
//!
//! Two passes run after every row exists:
//!
//! 1. Distribution reweighting: the selected distribution makes its favored
//!    service categories more expensive. All cost and unit-price columns of
//!    a row scale by the same factor, so the cost-ordering invariants that
//!    held at generation time keep holding.
//! 2. A conditional-nullability sweep. Generation-time gating is the
//!    authoritative enforcement; this pass only exists to catch a generator
//!    bug before the dataset leaves the engine. Any correction it makes is
//!    logged as a warning because it means a generator is wrong.

use crate::generators::{pick, scale_money, scale_price};
use crate::seeding::{stream_seed, streams};
use focus_core::{Distribution, FocusColumn, FocusRecord, GenerationRequest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

/// GPU-flavored resource types substituted on ML-focused compute rows.
const GPU_RESOURCE_TYPES: &[&str] = &["GPU Instance", "GPU Accelerator", "ML Instance"];

/// Storage resource types substituted on data-intensive storage rows.
const STORAGE_RESOURCE_TYPES: &[&str] =
    &["Block Storage", "Object Storage", "File Storage", "Archive Storage"];

/// Media resource types substituted on media-intensive compute rows.
const MEDIA_RESOURCE_TYPES: &[&str] = &["Media Transcoder", "Video Processing", "Content Delivery"];

/// Every column that scales together when a row's cost is adjusted.
const SCALED_COST_COLUMNS: &[FocusColumn] = &[
    FocusColumn::BilledCost,
    FocusColumn::ListCost,
    FocusColumn::EffectiveCost,
    FocusColumn::ContractedCost,
];

const SCALED_PRICE_COLUMNS: &[FocusColumn] =
    &[FocusColumn::ListUnitPrice, FocusColumn::ContractedUnitPrice];

/// Apply distribution reweighting and the defensive nullability sweep.
pub fn adjust(records: &mut [FocusRecord], request: &GenerationRequest) {
    let mut rng = StdRng::seed_from_u64(stream_seed(request.seed, streams::ADJUST));
    apply_distribution_bias(records, request.distribution, &mut rng);

    let corrections = enforce_conditional_nullability(records);
    if corrections > 0 {
        warn!(
            corrections,
            "conditional-nullability sweep was not a no-op; a generator unit is leaking values"
        );
    }
}

fn apply_distribution_bias(records: &mut [FocusRecord], distribution: Distribution, rng: &mut StdRng) {
    match distribution {
        Distribution::EvenlyDistributed => {}
        Distribution::MlFocused => {
            for record in records.iter_mut() {
                match record.text(FocusColumn::ServiceCategory) {
                    Some("AI and Machine Learning") => {
                        scale_costs(record, rng.random_range(1.2..=1.5));
                    }
                    Some("Compute") => {
                        retype_null_resource(record, GPU_RESOURCE_TYPES, 0.4, rng);
                    }
                    _ => {}
                }
            }
        }
        Distribution::DataIntensive => {
            for record in records.iter_mut() {
                match record.text(FocusColumn::ServiceCategory) {
                    Some("Storage") => {
                        scale_costs(record, rng.random_range(1.1..=1.4));
                        retype_null_resource(record, STORAGE_RESOURCE_TYPES, 1.0, rng);
                    }
                    Some("Databases") => {
                        scale_costs(record, rng.random_range(1.1..=1.4));
                    }
                    _ => {}
                }
            }
        }
        Distribution::MediaIntensive => {
            for record in records.iter_mut() {
                match record.text(FocusColumn::ServiceCategory) {
                    Some("Storage") | Some("Networking") => {
                        scale_costs(record, rng.random_range(1.1..=1.3));
                    }
                    Some("Compute") => {
                        retype_null_resource(record, MEDIA_RESOURCE_TYPES, 0.3, rng);
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Scale every cost and unit-price column of one row by the same factor.
fn scale_costs(record: &mut FocusRecord, factor: f64) {
    for column in SCALED_COST_COLUMNS {
        if let Some(amount) = record.decimal(*column) {
            record.set(*column, scale_money(amount, factor));
        }
    }
    for column in SCALED_PRICE_COLUMNS {
        if let Some(amount) = record.decimal(*column) {
            record.set(*column, scale_price(amount, factor));
        }
    }
}

/// Fill an absent `ResourceType` with a distribution-flavored type. Rows
/// with a pooled resource already carry a type and are left alone.
fn retype_null_resource(
    record: &mut FocusRecord,
    types: &'static [&'static str],
    rate: f64,
    rng: &mut StdRng,
) {
    if record.is_null(FocusColumn::ResourceType) && rng.random_bool(rate) {
        record.set(FocusColumn::ResourceType, *pick(rng, types));
    }
}

/// Columns forced null whenever `CommitmentDiscountId` is null.
const COMMITMENT_SIBLINGS: &[FocusColumn] = &[
    FocusColumn::CommitmentDiscountCategory,
    FocusColumn::CommitmentDiscountName,
    FocusColumn::CommitmentDiscountQuantity,
    FocusColumn::CommitmentDiscountStatus,
    FocusColumn::CommitmentDiscountType,
    FocusColumn::CommitmentDiscountUnit,
];

/// Second-pass enforcement of the conditional-nullability rules. Returns
/// the number of cells corrected; anything non-zero indicates a generator
/// bug upstream.
fn enforce_conditional_nullability(records: &mut [FocusRecord]) -> usize {
    let mut corrections = 0;

    for record in records.iter_mut() {
        if record.is_null(FocusColumn::CommitmentDiscountId) {
            for column in COMMITMENT_SIBLINGS {
                corrections += null_out(record, *column);
            }
        }

        if record.is_null(FocusColumn::CapacityReservationId) {
            corrections += null_out(record, FocusColumn::CapacityReservationStatus);
        }

        if record.text(FocusColumn::ChargeCategory) == Some("Tax") {
            corrections += null_out(record, FocusColumn::SkuId);
            corrections += null_out(record, FocusColumn::SkuPriceId);
        }

        if record.is_null(FocusColumn::SkuId) {
            corrections += null_out(record, FocusColumn::SkuMeter);
        }
        if record.is_null(FocusColumn::SkuPriceId) {
            corrections += null_out(record, FocusColumn::SkuPriceDetails);
        }

        if record.is_null(FocusColumn::ConsumedQuantity) {
            corrections += null_out(record, FocusColumn::ConsumedUnit);
        }
    }

    corrections
}

fn null_out(record: &mut FocusRecord, column: FocusColumn) -> usize {
    if record.is_null(column) {
        0
    } else {
        record.set_null(column);
        1
    }
}
