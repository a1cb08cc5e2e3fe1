//! Strategy Flow Integration Test
//!
//! Exercises the full path from strategy definition to rendered output:
//! - Presets and JSON strategy files
//! - Composite assembly and PnL evaluation
//! - Renderer hand-off (capturing, ASCII and JSON)

use std::num::NonZeroUsize;

use opdiag_core::{
    CompositeContract, Contract, PayoffChart, PayoffError, Pnl, Position, PriceGrid, Side,
    X_AXIS_LABEL,
};
use opdiag_ports::{PayoffRenderer, Plot, Render, RenderError, RenderResult};
use opdiag_runner::{
    ConfigError, OutputFormat, RunOptions, RunnerError, StrategySource, load_strategy, run,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Renderer that keeps every chart it is given
#[derive(Default)]
struct CapturingRenderer {
    charts: Vec<PayoffChart>,
}

impl PayoffRenderer for CapturingRenderer {
    fn draw(&mut self, chart: &PayoffChart) -> RenderResult<()> {
        self.charts.push(chart.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "CapturingRenderer"
    }
}

fn long_call() -> Contract {
    Contract::call(dec!(100), dec!(5), Side::Long).unwrap()
}

fn long_put() -> Contract {
    Contract::put(dec!(100), dec!(5), Side::Long).unwrap()
}

/// Test the straddle scenario end to end through a renderer
#[test]
fn test_straddle_rendered_series() {
    let _ = env_logger::try_init();

    let straddle = long_call() + long_put();
    let mut renderer = CapturingRenderer::default();
    straddle.render(&mut renderer).unwrap();

    let chart = &renderer.charts[0];
    assert_eq!(chart.curve.len(), 201);

    let at = |price: Decimal| -> Pnl {
        chart
            .curve
            .iter()
            .find(|p| p.price == price)
            .map(|p| p.pnl)
            .unwrap()
    };
    assert_eq!(at(dec!(80)), dec!(10));
    assert_eq!(at(dec!(100)), dec!(-10));

    // Max loss is the combined premium
    assert_eq!(chart.min_pnl(), Some(dec!(-10)));
    assert_eq!(chart.breakevens(), vec![dec!(90), dec!(110)]);
    assert_eq!(chart.strikes, vec![dec!(100), dec!(100)]);
}

/// Test sum and replication properties over the default grid
#[test]
fn test_composition_properties_over_grid() {
    let grid = PriceGrid::new(dec!(0), dec!(200)).unwrap();
    let prices = grid.points();

    let legs = [
        Contract::call(dec!(95), dec!(7.5), Side::Long).unwrap(),
        Contract::call(dec!(120), dec!(1.25), Side::Short).unwrap(),
        Contract::put(dec!(80), dec!(2), Side::Long).unwrap(),
        Contract::put(dec!(150), dec!(0), Side::Short).unwrap(),
    ];

    for a in &legs {
        for b in &legs {
            let combined = (*a + *b).pnl(prices);
            let a_pnl = a.pnl(prices);
            let b_pnl = b.pnl(prices);
            for i in 0..prices.len() {
                assert_eq!(combined[i], a_pnl[i] + b_pnl[i]);
            }
        }

        for n in 1..=4usize {
            let replicated = a.replicate(n).unwrap().pnl(prices);
            let operator = (*a * NonZeroUsize::new(n).unwrap()).pnl(prices);
            let single = a.pnl(prices);
            for i in 0..prices.len() {
                assert_eq!(replicated[i], single[i] * Decimal::from(n));
                assert_eq!(operator[i], replicated[i]);
            }
        }
    }
}

/// Test that prepending keeps both orders and composites cannot lead
#[test]
fn test_combination_rules() {
    let tail = long_put() + Contract::call(dec!(120), dec!(1), Side::Short).unwrap();
    let combined = long_call().combine(tail.clone());

    let mut expected = vec![long_call()];
    expected.extend_from_slice(tail.contracts());
    assert_eq!(combined.contracts(), expected.as_slice());

    let err = Position::from(tail).combine(long_call()).unwrap_err();
    assert!(matches!(err, PayoffError::TypeMismatch(_)));
}

/// Test that a single contract plots as a one-leg composite
#[test]
fn test_plot_matches_one_leg_composite() {
    let mut plotted = CapturingRenderer::default();
    long_call().plot(&mut plotted).unwrap();

    let mut rendered = CapturingRenderer::default();
    CompositeContract::new(vec![long_call()])
        .render(&mut rendered)
        .unwrap();

    assert_eq!(plotted.charts, rendered.charts);
}

/// Test JSON output for a preset with overridden range
#[test]
fn test_run_preset_as_json() {
    let _ = env_logger::try_init();

    let options = RunOptions {
        source: StrategySource::Preset("iron_condor".to_string()),
        price_min: Some(dec!(70)),
        price_max: Some(dec!(130)),
        format: OutputFormat::Json,
    };

    let mut out = Vec::new();
    run(&options, &mut out).unwrap();

    let chart: PayoffChart = serde_json::from_slice(&out).unwrap();
    assert_eq!(chart.curve.len(), 61);
    assert_eq!(chart.price_min, dec!(70));
    assert_eq!(chart.price_max, dec!(130));
    assert_eq!(chart.strikes, vec![dec!(80), dec!(90), dec!(110), dec!(120)]);
    assert_eq!(chart.max_pnl(), Some(dec!(4)));
    assert_eq!(chart.min_pnl(), Some(dec!(-6)));
}

/// Test ASCII output from a strategy file
#[test]
fn test_run_strategy_file_as_ascii() {
    let _ = env_logger::try_init();

    let path = std::env::temp_dir().join(format!("opdiag-strategy-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{
            "name": "Short put",
            "price_min": 50,
            "price_max": 150,
            "legs": [ { "kind": "put", "strike": 100, "premium": 4, "side": "S" } ]
        }"#,
    )
    .unwrap();

    let options = RunOptions {
        source: StrategySource::File(path.clone()),
        ..Default::default()
    };
    let config = load_strategy(&options).unwrap();
    assert_eq!(config.name, "Short put");

    let mut out = Vec::new();
    let result = run(&options, &mut out);
    std::fs::remove_file(&path).ok();
    result.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(X_AXIS_LABEL));
    assert!(text.contains("Strikes: 100"));
    assert!(text.contains("Loss: [50, 95]"));
    assert!(text.contains("Profit: [97, 150]"));
}

/// Test that bad ranges and unknown presets fail before any output
#[test]
fn test_run_failures() {
    let mut out = Vec::new();

    let inverted = RunOptions {
        price_min: Some(dec!(150)),
        price_max: Some(dec!(50)),
        ..Default::default()
    };
    let err = run(&inverted, &mut out).unwrap_err();
    assert!(matches!(
        err,
        RunnerError::Render(RenderError::Payoff(PayoffError::InvalidArgument(_)))
    ));

    let unbounded = RunOptions {
        price_min: Some(Decimal::MIN),
        price_max: Some(Decimal::MAX),
        ..Default::default()
    };
    let err = run(&unbounded, &mut out).unwrap_err();
    assert!(matches!(
        err,
        RunnerError::Render(RenderError::Payoff(PayoffError::InvalidArgument(_)))
    ));

    let unknown = RunOptions {
        source: StrategySource::Preset("calendar".to_string()),
        ..Default::default()
    };
    let err = run(&unknown, &mut out).unwrap_err();
    assert!(matches!(
        err,
        RunnerError::Config(ConfigError::UnknownPreset(_))
    ));

    assert!(out.is_empty());
}
