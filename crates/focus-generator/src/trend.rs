//! Multi-month trend functions.
//!
//! A trend scenario turns the trend options into one cost multiplier per
//! billing period. The orchestrator applies the multiplier to the period's
//! cost budget before any row is generated, so the trend is baked into the
//! rows rather than patched on afterwards. Multipliers come from their own
//! RNG stream and are floored at 0.1.

use crate::seeding::{stream_seed, streams};
use focus_core::{TrendOptions, TrendScenario};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimum multiplier; a period never costs less than a tenth of baseline.
const MULTIPLIER_FLOOR: f64 = 0.1;

/// Default jitter applied around a scenario's curve. The seasonal scenario
/// widens this to its `baselineVariation` parameter.
const VARIATION: f64 = 0.05;

/// Compute the cost multiplier for every billing period of the request.
pub fn period_multipliers(options: &TrendOptions, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(stream_seed(seed, streams::TREND));
    let months = options.month_count as usize;

    let band = match options.scenario {
        TrendScenario::Seasonal => options.parameter("baselineVariation", 10.0) / 100.0,
        _ => VARIATION,
    };

    (0..months)
        .map(|month| {
            let base = match options.scenario {
                TrendScenario::Linear => linear(options, month),
                TrendScenario::Seasonal => seasonal(options, months, month),
                TrendScenario::StepChange => step_change(options, month),
                TrendScenario::Anomaly => anomaly(options, month),
            };
            let variation = rng.random_range(-band..=band);
            (base * (1.0 + variation)).max(MULTIPLIER_FLOOR)
        })
        .collect()
}

/// Compound growth: `growthRate` percent per month, so six months at 10%
/// put the last period at roughly 1.1^5 times the first.
fn linear(options: &TrendOptions, month: usize) -> f64 {
    let rate = options.parameter("growthRate", 10.0) / 100.0;
    (1.0 + rate).powi(month as i32)
}

/// Year-end peaks: November and December (or the last two periods of a
/// shorter range) jump to `peakMultiplier`, the rest drift up 2% a month
/// inside the `baselineVariation` band.
fn seasonal(options: &TrendOptions, months: usize, month: usize) -> f64 {
    let peak = options.parameter("peakMultiplier", 2.5);

    let peak_months = if months >= 11 {
        (10, 11)
    } else {
        (months.saturating_sub(2), months - 1)
    };
    if month == peak_months.0 || month == peak_months.1 {
        peak
    } else {
        1.0 + month as f64 * 0.02
    }
}

/// Flat-ish baseline that jumps to `stepMultiplier` from `stepMonth`
/// (1-based) onward.
fn step_change(options: &TrendOptions, month: usize) -> f64 {
    let step_month = (options.parameter("stepMonth", 4.0).max(1.0) as usize) - 1;
    let step = options.parameter("stepMultiplier", 2.0);

    if month < step_month {
        1.0 + month as f64 * 0.02
    } else {
        step + (month - step_month) as f64 * 0.02
    }
}

/// A single spike of `anomalyMultiplier` at `anomalyMonth` (1-based).
fn anomaly(options: &TrendOptions, month: usize) -> f64 {
    let anomaly_month = (options.parameter("anomalyMonth", 6.0).max(1.0) as usize) - 1;
    let spike = options.parameter("anomalyMultiplier", 10.0);

    if month == anomaly_month {
        spike
    } else {
        1.0 + month as f64 * 0.02
    }
}
