//! Dataset orchestration: drives the generator units over every row.

use crate::context::RowContext;
use crate::error::GenerateError;
use crate::generators::{pick, registry, ColumnGenerator};
use crate::pools::IdentityPools;
use crate::postprocess;
use crate::seeding::{row_seed, stream_seed, streams};
use crate::trend;
use focus_core::{BillingMonth, CloudProvider, ConfigError, FocusRecord, GenerationRequest, Profile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Monthly BilledCost envelope per organization profile, in the dataset
/// currency.
fn monthly_cost_envelope(profile: Profile) -> (f64, f64) {
    match profile {
        Profile::Greenfield => (10_000.0, 50_000.0),
        Profile::LargeBusiness => (100_000.0, 250_000.0),
        Profile::Enterprise => (500_000.0, 2_000_000.0),
    }
}

/// Generates complete FOCUS datasets from a validated request.
///
/// Construction validates the request and builds the per-dataset state
/// (identity pools, the baseline monthly cost). Generation itself is a pure
/// function of that state: every row derives its own RNG stream from the
/// request seed and the global row index, so identical requests produce
/// byte-identical datasets no matter how often or in what order rows are
/// produced.
pub struct DatasetGenerator {
    request: GenerationRequest,
    pools: IdentityPools,
    units: Vec<Box<dyn ColumnGenerator>>,
    /// Baseline BilledCost total for one billing period, before any trend
    /// multiplier.
    base_period_cost: f64,
}

impl DatasetGenerator {
    /// Validate the request and set up per-dataset state. Fails fast with a
    /// [`ConfigError`] before any generation work begins.
    pub fn new(request: GenerationRequest) -> Result<Self, ConfigError> {
        request.validate()?;

        let pools = IdentityPools::build(&request);
        let mut cost_rng =
            StdRng::seed_from_u64(stream_seed(request.seed, streams::DATASET_COST));
        let (low, high) = monthly_cost_envelope(request.profile);
        let base_period_cost = cost_rng.random_range(low..=high);

        Ok(Self {
            request,
            pools,
            units: registry(),
            base_period_cost,
        })
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    /// Generate the full dataset: `row_count` rows per billing period, one
    /// period unless the request carries a multi-month trend.
    pub fn generate(&self) -> Result<Vec<FocusRecord>, GenerateError> {
        // new() already validated, but the check is cheap and generate()
        // must hold on its own when the struct was built another way.
        self.request.validate()?;

        let period_count = self.request.period_count();
        let multipliers = match &self.request.trend {
            Some(trend) => trend::period_multipliers(trend, self.request.seed),
            None => vec![1.0],
        };

        let total_rows = self.request.row_count * u64::from(period_count);
        let mut records = Vec::with_capacity(total_rows as usize);

        info!(
            rows = total_rows,
            periods = period_count,
            profile = self.request.profile.as_str(),
            distribution = self.request.distribution.as_str(),
            "generating dataset"
        );

        for period in 0..period_count {
            let billing_month = self.request.start_month.advance(period);
            let period_cost = self.base_period_cost * multipliers[period as usize];
            debug!(period, %billing_month, period_cost, "generating billing period");

            for row_index in 0..self.request.row_count {
                let global_index = u64::from(period) * self.request.row_count + row_index;
                records.push(self.generate_row(period, billing_month, row_index, global_index, period_cost)?);
            }
        }

        postprocess::adjust(&mut records, &self.request);

        #[cfg(debug_assertions)]
        self.self_check(&records);

        Ok(records)
    }

    /// Generate one dataset per requested provider, keyed by provider.
    ///
    /// Each provider gets its own full `row_count`-per-period dataset, the
    /// way a real organization receives one bill per cloud; identity pools
    /// are shared, so the same accounts appear across providers.
    pub fn generate_per_provider(
        &self,
    ) -> Result<BTreeMap<CloudProvider, Vec<FocusRecord>>, GenerateError> {
        let mut datasets = BTreeMap::new();
        for provider in &self.request.providers {
            if datasets.contains_key(provider) {
                continue;
            }
            let mut single = self.request.clone();
            single.providers = vec![*provider];
            let records = DatasetGenerator::new(single)?.generate()?;
            datasets.insert(*provider, records);
        }
        Ok(datasets)
    }

    fn generate_row(
        &self,
        period: u32,
        billing_month: BillingMonth,
        row_index: u64,
        global_index: u64,
        period_cost: f64,
    ) -> Result<FocusRecord, GenerateError> {
        let mut rng = StdRng::seed_from_u64(row_seed(self.request.seed, global_index));
        let provider = *pick(&mut rng, &self.request.providers);

        let mut ctx = RowContext::new(
            &self.request,
            provider,
            period,
            billing_month,
            row_index,
            period_cost,
            &self.pools,
            rng,
        );

        for unit in &self.units {
            unit.generate(&mut ctx)?;
        }

        Ok(ctx.into_record())
    }

    /// The engine's own output must pass its own validator; anything else
    /// is a generator defect, not a condition for the caller to handle.
    #[cfg(debug_assertions)]
    fn self_check(&self, records: &[FocusRecord]) {
        let report = focus_validate::validate(records);
        assert!(
            report.valid(),
            "generated dataset failed self-validation: {}",
            report.summary()
        );
    }
}
