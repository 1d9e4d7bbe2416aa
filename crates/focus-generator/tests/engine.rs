//! End-to-end tests over the generation engine: the acceptance scenarios
//! plus the engine's primary contract that its own output always validates
//! cleanly.

use focus_core::{
    CloudProvider, ConfigError, Distribution, FocusColumn, FocusRecord, GenerationRequest,
    Profile, TrendOptions, TrendScenario,
};
use focus_generator::{DatasetGenerator, DatasetSummary};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

fn total_billed(records: &[FocusRecord]) -> Decimal {
    records
        .iter()
        .filter_map(|r| r.decimal(FocusColumn::BilledCost))
        .sum()
}

#[test]
fn test_scenario_small_greenfield_dataset() {
    let request = GenerationRequest::new(
        Profile::Greenfield,
        Distribution::EvenlyDistributed,
        vec![CloudProvider::Aws],
        5,
    );
    let records = DatasetGenerator::new(request).unwrap().generate().unwrap();

    assert_eq!(records.len(), 5);
    for record in &records {
        // Every catalog column exists on every record, populated or null.
        assert_eq!(record.iter().count(), FocusColumn::COUNT);
    }

    let report = focus_validate::validate(&records);
    assert!(report.valid(), "{}", report.summary());
}

#[test]
fn test_scenario_enterprise_outspends_greenfield() {
    let build = |profile| {
        GenerationRequest::new(
            profile,
            Distribution::DataIntensive,
            vec![CloudProvider::Aws],
            50,
        )
    };

    let enterprise = DatasetGenerator::new(build(Profile::Enterprise))
        .unwrap()
        .generate()
        .unwrap();
    let greenfield = DatasetGenerator::new(build(Profile::Greenfield))
        .unwrap()
        .generate()
        .unwrap();

    assert!(
        total_billed(&enterprise) > total_billed(&greenfield),
        "enterprise {} <= greenfield {}",
        total_billed(&enterprise),
        total_billed(&greenfield)
    );
}

#[test]
fn test_scenario_zero_row_count_is_rejected_before_generation() {
    let request = GenerationRequest::new(
        Profile::Greenfield,
        Distribution::EvenlyDistributed,
        vec![CloudProvider::Aws],
        0,
    );
    assert!(matches!(
        DatasetGenerator::new(request),
        Err(ConfigError::ZeroRowCount)
    ));
}

#[test]
fn test_scenario_linear_trend_compounds_over_six_months() {
    let request = GenerationRequest::new(
        Profile::Greenfield,
        Distribution::EvenlyDistributed,
        vec![CloudProvider::Aws],
        50,
    )
    .with_trend(
        TrendOptions::new(6, TrendScenario::Linear).with_parameter("growthRate", 10.0),
    );
    let records = DatasetGenerator::new(request).unwrap().generate().unwrap();
    assert_eq!(records.len(), 300);

    let first: Decimal = total_billed(&records[..50]);
    let sixth: Decimal = total_billed(&records[250..]);
    let ratio = (sixth / first).to_f64().unwrap();

    // Period 6 sits near 1.1^5 = 1.61x period 1, inside the jitter bands.
    assert!(ratio > 1.3, "ratio {ratio}");
    assert!(ratio < 2.0, "ratio {ratio}");
}

#[test]
fn test_generation_is_deterministic() {
    let build = || {
        GenerationRequest::new(
            Profile::LargeBusiness,
            Distribution::MlFocused,
            vec![CloudProvider::Aws, CloudProvider::Azure],
            30,
        )
        .with_seed(7)
    };

    let first = DatasetGenerator::new(build()).unwrap().generate().unwrap();
    let second = DatasetGenerator::new(build()).unwrap().generate().unwrap();
    assert_eq!(first, second);

    // Byte-for-byte, not just structurally equal.
    let left = serde_json::to_string(&first).unwrap();
    let right = serde_json::to_string(&second).unwrap();
    assert_eq!(left, right);
}

#[test]
fn test_every_configuration_produces_a_valid_dataset() {
    for profile in [Profile::Greenfield, Profile::LargeBusiness, Profile::Enterprise] {
        for distribution in [
            Distribution::EvenlyDistributed,
            Distribution::MlFocused,
            Distribution::DataIntensive,
            Distribution::MediaIntensive,
        ] {
            for provider in CloudProvider::ALL {
                let request =
                    GenerationRequest::new(profile, distribution, vec![provider], 30);
                let records = DatasetGenerator::new(request).unwrap().generate().unwrap();

                let report = focus_validate::validate(&records);
                assert!(
                    report.valid(),
                    "{:?}/{:?}/{provider}: {}",
                    profile,
                    distribution,
                    report.summary()
                );
            }
        }
    }
}

#[test]
fn test_multi_month_trends_validate_for_every_scenario() {
    for scenario in [
        TrendScenario::Linear,
        TrendScenario::Seasonal,
        TrendScenario::StepChange,
        TrendScenario::Anomaly,
    ] {
        let request = GenerationRequest::new(
            Profile::LargeBusiness,
            Distribution::EvenlyDistributed,
            vec![CloudProvider::Aws],
            20,
        )
        .with_trend(TrendOptions::new(6, scenario));
        let records = DatasetGenerator::new(request).unwrap().generate().unwrap();

        assert_eq!(records.len(), 120);
        let report = focus_validate::validate(&records);
        assert!(report.valid(), "{scenario:?}: {}", report.summary());
    }
}

#[test]
fn test_distribution_bias_shows_in_the_service_mix() {
    let count_category = |records: &[FocusRecord], category: &str| {
        records
            .iter()
            .filter(|r| r.text(FocusColumn::ServiceCategory) == Some(category))
            .count()
    };
    let build = |distribution| {
        GenerationRequest::new(
            Profile::LargeBusiness,
            distribution,
            vec![CloudProvider::Aws],
            400,
        )
    };

    let ml = DatasetGenerator::new(build(Distribution::MlFocused))
        .unwrap()
        .generate()
        .unwrap();
    let even = DatasetGenerator::new(build(Distribution::EvenlyDistributed))
        .unwrap()
        .generate()
        .unwrap();

    let ml_share = count_category(&ml, "AI and Machine Learning");
    let even_share = count_category(&even, "AI and Machine Learning");
    assert!(
        ml_share > even_share,
        "ML-focused {ml_share} rows vs evenly distributed {even_share}"
    );
}

#[test]
fn test_summary_covers_the_generated_dataset() {
    let request = GenerationRequest::new(
        Profile::Greenfield,
        Distribution::EvenlyDistributed,
        vec![CloudProvider::Aws, CloudProvider::Gcp],
        40,
    )
    .with_trend(TrendOptions::new(2, TrendScenario::Linear));
    let records = DatasetGenerator::new(request).unwrap().generate().unwrap();

    let summary = DatasetSummary::for_records(&records);
    assert_eq!(summary.record_count, 80);
    assert_eq!(summary.billing_months, vec!["2024-01", "2024-02"]);
    assert_eq!(summary.currencies.len(), 1);
    assert!(summary.total_billed_cost > Decimal::ZERO);
    for provider in &summary.providers {
        assert!(["AWS", "Google Cloud"].contains(&provider.as_str()));
    }
}
