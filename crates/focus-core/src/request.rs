//! Generation request model and boundary validation.

use crate::error::ConfigError;
use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Organization-size archetype controlling overall cost magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Profile {
    Greenfield,
    #[serde(rename = "Large Business")]
    LargeBusiness,
    Enterprise,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Greenfield => "Greenfield",
            Self::LargeBusiness => "Large Business",
            Self::Enterprise => "Enterprise",
        }
    }
}

/// Bias pattern over which service categories dominate the generated spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Distribution {
    #[serde(rename = "Evenly Distributed")]
    EvenlyDistributed,
    #[serde(rename = "ML-Focused")]
    MlFocused,
    #[serde(rename = "Data-Intensive")]
    DataIntensive,
    #[serde(rename = "Media-Intensive")]
    MediaIntensive,
}

impl Distribution {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EvenlyDistributed => "Evenly Distributed",
            Self::MlFocused => "ML-Focused",
            Self::DataIntensive => "Data-Intensive",
            Self::MediaIntensive => "Media-Intensive",
        }
    }
}

/// Supported cloud providers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Azure,
    Gcp,
}

impl CloudProvider {
    pub const ALL: [CloudProvider; 3] = [CloudProvider::Aws, CloudProvider::Azure, CloudProvider::Gcp];

    /// Short provider key used in file names and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Azure => "Azure",
            Self::Gcp => "GCP",
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar billing month.
///
/// The anchor is explicit (defaulting to January 2024) rather than "now" so
/// that identical requests produce byte-identical datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingMonth {
    pub year: i32,
    pub month: u32,
}

impl BillingMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, ConfigError> {
        let candidate = Self { year, month };
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ConfigError::InvalidBillingMonth { year, month });
        }
        Ok(candidate)
    }

    /// Inclusive start of the month, midnight UTC.
    pub fn first_instant(self) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_default()
            .and_hms_opt(0, 0, 0)
            .unwrap_or_default()
            .and_utc()
    }

    /// The following calendar month.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The month `periods` months after this one.
    pub fn advance(self, periods: u32) -> Self {
        (0..periods).fold(self, |m, _| m.next())
    }
}

impl Default for BillingMonth {
    fn default() -> Self {
        Self {
            year: 2024,
            month: 1,
        }
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for BillingMonth {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedBillingMonth(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

/// Multi-month trend shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum TrendScenario {
    Linear,
    Seasonal,
    StepChange,
    Anomaly,
}

/// Options for multi-month trend generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendOptions {
    pub month_count: u32,
    pub scenario: TrendScenario,
    /// Scenario parameters (growthRate, peakMultiplier, stepMonth, ...).
    /// Missing keys fall back to per-scenario defaults.
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
}

impl TrendOptions {
    pub const MIN_MONTHS: u32 = 2;
    pub const MAX_MONTHS: u32 = 12;

    pub fn new(month_count: u32, scenario: TrendScenario) -> Self {
        Self {
            month_count,
            scenario,
            parameters: BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Parameter lookup with a scenario default.
    pub fn parameter(&self, name: &str, default: f64) -> f64 {
        self.parameters.get(name).copied().unwrap_or(default)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_MONTHS..=Self::MAX_MONTHS).contains(&self.month_count) {
            return Err(ConfigError::MonthCountOutOfRange {
                got: self.month_count,
                min: Self::MIN_MONTHS,
                max: Self::MAX_MONTHS,
            });
        }
        for (name, value) in &self.parameters {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteParameter {
                    name: name.clone(),
                    value: *value,
                });
            }
        }
        Ok(())
    }
}

/// Everything the engine needs to produce one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub profile: Profile,
    pub distribution: Distribution,
    pub providers: Vec<CloudProvider>,
    pub row_count: u64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub start_month: BillingMonth,
    #[serde(default)]
    pub trend: Option<TrendOptions>,
}

fn default_seed() -> u64 {
    42
}

impl GenerationRequest {
    pub fn new(
        profile: Profile,
        distribution: Distribution,
        providers: Vec<CloudProvider>,
        row_count: u64,
    ) -> Self {
        Self {
            profile,
            distribution,
            providers,
            row_count,
            seed: default_seed(),
            start_month: BillingMonth::default(),
            trend: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_start_month(mut self, start_month: BillingMonth) -> Self {
        self.start_month = start_month;
        self
    }

    pub fn with_trend(mut self, trend: TrendOptions) -> Self {
        self.trend = Some(trend);
        self
    }

    /// Number of billing periods this request spans.
    pub fn period_count(&self) -> u32 {
        self.trend.as_ref().map(|t| t.month_count).unwrap_or(1)
    }

    /// Boundary validation. The API/CLI layer is expected to reject bad
    /// requests before they get here, but the engine re-checks regardless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_count == 0 {
            return Err(ConfigError::ZeroRowCount);
        }
        if self.providers.is_empty() {
            return Err(ConfigError::NoProviders);
        }
        BillingMonth::new(self.start_month.year, self.start_month.month)?;
        if let Some(trend) = &self.trend {
            trend.validate()?;
        }
        Ok(())
    }
}
