//! Shared fixtures for unit tests inside this crate.

use crate::context::RowContext;
use crate::pools::IdentityPools;
use focus_core::{BillingMonth, CloudProvider, Distribution, GenerationRequest, Profile};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::OnceLock;

static REQUEST: OnceLock<GenerationRequest> = OnceLock::new();
static POOLS: OnceLock<IdentityPools> = OnceLock::new();

/// A row context for exercising one generator unit in isolation:
/// Greenfield / Evenly Distributed / AWS, 10 rows sharing a 10,000 period
/// budget, with the row RNG seeded from `seed`.
pub(crate) fn test_context(seed: u64) -> RowContext<'static> {
    let request = REQUEST.get_or_init(|| {
        GenerationRequest::new(
            Profile::Greenfield,
            Distribution::EvenlyDistributed,
            vec![CloudProvider::Aws],
            10,
        )
    });
    let pools = POOLS.get_or_init(|| IdentityPools::build(request));

    RowContext::new(
        request,
        CloudProvider::Aws,
        0,
        BillingMonth::default(),
        0,
        10_000.0,
        pools,
        StdRng::seed_from_u64(seed),
    )
}
