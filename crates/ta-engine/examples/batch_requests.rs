//! Batch Request Examples
//!
//! Computes several indicators over one series from a JSON request list, then
//! fans a single indicator out over many series.
//!
//! Run with: `cargo run --example batch_requests`

#![allow(clippy::cast_precision_loss)]

use ta_engine::batch::{compute_all, process_batch, IndicatorOutput, IndicatorRequest};
use ta_engine::indicators::{rsi, RsiParams};
use ta_engine::OhlcvPoint;

const REQUESTS: &str = r#"[
    { "kind": "sma", "period": 10 },
    { "kind": "ema", "period": 10 },
    { "kind": "rsi" },
    { "kind": "macd", "fast_period": 6, "slow_period": 13, "signal_period": 5 },
    { "kind": "bollinger", "period": 10, "multiplier": 2.0 },
    { "kind": "stochastic" },
    { "kind": "sar" }
]"#;

fn generate(bars: usize, phase: f64) -> Vec<OhlcvPoint> {
    (0..bars)
        .map(|i| {
            let t = i as f64;
            let close = 100.0 + ((t + phase) * 0.2).sin() * 6.0 + t * 0.05;
            OhlcvPoint::new(i as i64 * 60_000, close - 0.2, close + 1.0, close - 1.0, close, 10_000.0)
        })
        .collect()
}

fn describe(output: &IndicatorOutput) -> String {
    match output {
        IndicatorOutput::Line(line) => format!("line, last {:?}", line.values().last().copied().flatten()),
        IndicatorOutput::Macd(macd) => format!("macd, {} crossovers", macd.crossovers().len()),
        IndicatorOutput::Bollinger(bands) => {
            format!("bollinger, last bandwidth {:?}", bands.bandwidth().values().last().copied().flatten())
        }
        IndicatorOutput::Stochastic(stoch) => {
            format!("stochastic, last %D {:?}", stoch.percent_d.values().last().copied().flatten())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let series = generate(120, 0.0);
    let requests: Vec<IndicatorRequest> = serde_json::from_str(REQUESTS)?;

    println!("=== One series, {} requests ===", requests.len());
    let outputs = compute_all(&series, &requests)?;
    for (request, output) in requests.iter().zip(&outputs) {
        println!("  {:<12} lookback {:>3}: {}", request.name(), request.lookback(), describe(output));
    }
    println!();

    println!("=== RSI(14) over 100 series ===");
    let universe: Vec<Vec<OhlcvPoint>> = (0..100).map(|k| generate(250, k as f64)).collect();
    let results = process_batch(&universe, |s| rsi(s, RsiParams::default()))?;
    let overbought = results
        .iter()
        .filter(|line| line.values().last().copied().flatten().is_some_and(|v| v > 70.0))
        .count();
    println!("  {overbought} of {} series end above 70", results.len());

    Ok(())
}
