// tests/calibration.rs
use climate_game::calibration::{CalibrationWeights, Indicators, calibrate};
use climate_game::{SimConfig, SimError, simulation};

fn ind(gdp: f64, gdppc: f64, carbon: f64, fossil: f64, vuln: f64) -> Indicators {
    Indicators {
        gdp,
        gdp_per_capita: gdppc,
        capital_formation: gdp * 0.2,
        energy_use: gdp * 0.01,
        carbon_intensity: carbon,
        fossil_share_pct: fossil,
        vulnerability_score: vuln,
    }
}

fn rows() -> Vec<(&'static str, Indicators)> {
    vec![
        ("Northland", ind(2.0e12, 45_000.0, 0.15, 60.0, 30.0)),
        ("Coalia", ind(1.0e12, 9_000.0, 0.60, 85.0, 55.0)),
        ("Islesia", ind(5.0e10, 4_000.0, 0.30, 95.0, 80.0)),
    ]
}

#[test]
fn influence_is_normalised_and_tracks_size() {
    let pop = calibrate(&rows(), &CalibrationWeights::default()).unwrap();
    assert_eq!(pop.len(), 3);
    let infl: Vec<f64> = pop.iter().map(|(_, b)| b.influence).collect();
    assert!((infl.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    assert!(infl[0] > infl[1] && infl[1] > infl[2]);
}

#[test]
fn baselines_follow_the_indicators() {
    let pop = calibrate(&rows(), &CalibrationWeights::default()).unwrap();
    let b: Vec<_> = pop.iter().collect();

    assert_eq!(b[0].0, "Northland");
    assert_eq!(b[0].1.income, 45_000.0);
    assert!((b[2].1.vulnerability - 0.8).abs() < 1e-12);

    // Coalia is the dirtiest economy: alpha = 1.
    let gdp_norm = 1.0e12 / 3.05e12;
    let penalty = (-9_000.0_f64 / 45_000.0).exp() + 1.0;
    let expected = gdp_norm * 1.85 * penalty * 100_000.0;
    assert!((b[1].1.adoption_cost - expected).abs() < 1e-6 * expected);
    assert!(b[1].1.adoption_cost > b[0].1.adoption_cost);
}

#[test]
fn calibrated_population_runs() {
    let pop = calibrate(&rows(), &CalibrationWeights::default()).unwrap();
    let h = simulation::run(&pop, SimConfig::default().with_rounds(10)).unwrap();
    assert_eq!(h.len(), 11);
}

#[test]
fn zero_columns_split_evenly() {
    let zeros = vec![("a", ind(0.0, 0.0, 0.0, 0.0, 0.0)), ("b", ind(0.0, 0.0, 0.0, 0.0, 0.0))];
    let pop = calibrate(&zeros, &CalibrationWeights::default()).unwrap();
    for (_, b) in pop.iter() {
        assert!((b.influence - 0.5).abs() < 1e-12);
        assert_eq!(b.adoption_cost, 0.0);
    }
}

#[test]
fn rejects_empty_and_invalid_rows() {
    let empty: Vec<(&str, Indicators)> = Vec::new();
    assert_eq!(calibrate(&empty, &CalibrationWeights::default()), Err(SimError::EmptyPopulation));

    let bad = vec![("neg", ind(-1.0, 1.0, 0.1, 10.0, 10.0))];
    assert!(matches!(
        calibrate(&bad, &CalibrationWeights::default()),
        Err(SimError::InvalidBaseline { .. })
    ));
}

#[test]
fn rejects_non_finite_or_negative_weights() {
    let defaults = CalibrationWeights::default();
    for w in [
        CalibrationWeights { cost_scale: f64::NAN, ..defaults },
        CalibrationWeights { cost_scale: f64::INFINITY, ..defaults },
        CalibrationWeights { gdp: -0.5, ..defaults },
        CalibrationWeights { energy: f64::NAN, ..defaults },
        CalibrationWeights { capital: f64::NEG_INFINITY, ..defaults },
    ] {
        assert!(matches!(calibrate(&rows(), &w), Err(SimError::InvalidConfiguration(_))), "{w:?}");
    }

    // A zero cost scale is a legitimate "free transition" calibration.
    let free = calibrate(&rows(), &CalibrationWeights { cost_scale: 0.0, ..defaults }).unwrap();
    assert!(free.iter().all(|(_, b)| b.adoption_cost == 0.0));
}

#[test]
fn vulnerability_score_is_capped_at_100() {
    let over = vec![("hot", ind(1.0e9, 2_000.0, 0.2, 50.0, 250.0))];
    assert!(matches!(
        calibrate(&over, &CalibrationWeights::default()),
        Err(SimError::InvalidBaseline { .. })
    ));

    let edge = vec![("hot", ind(1.0e9, 2_000.0, 0.2, 50.0, 100.0))];
    let pop = calibrate(&edge, &CalibrationWeights::default()).unwrap();
    assert_eq!(pop.iter().next().unwrap().1.vulnerability, 1.0);
}
