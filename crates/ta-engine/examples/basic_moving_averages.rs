//! Basic Moving Average Examples
//!
//! Computes SMA, WMA and EMA over a short close series and prints the aligned
//! output, including the absent warm-up points.
//!
//! Run with: `cargo run --example basic_moving_averages`

use ta_engine::indicators::{ema, sma, sma_crossovers, wma, EmaParams, SmaParams, WmaParams};
use ta_engine::{IndicatorSeries, OhlcvPoint};

const DAY_MS: i64 = 86_400_000;

fn bars(closes: &[f64]) -> Vec<OhlcvPoint> {
    closes
        .iter()
        .zip(0_i64..)
        .map(|(&c, i)| OhlcvPoint::new(1_700_000_000_000 + i * DAY_MS, c, c + 0.25, c - 0.25, c, 1_000.0))
        .collect()
}

fn print_series(label: &str, series: &IndicatorSeries) {
    println!("{label}:");
    for point in series.iter() {
        match point.value {
            Some(value) => println!("  {} {value:.4}", point.timestamp),
            None => println!("  {} -", point.timestamp),
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let closes = [
        44.34, 44.09, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03, 45.61, 46.28, 46.28, 46.00,
        46.03, 46.41, 46.22, 45.64,
    ];
    let series = bars(&closes);
    println!("Price data: {} bars", series.len());
    println!();

    let sma_5 = sma(&series, SmaParams::new().period(5))?;
    println!("5-period SMA: first {} points absent", sma_5.absent_prefix_len());
    print_series("SMA(5)", &sma_5);

    let wma_5 = wma(&series, WmaParams::new().period(5))?;
    print_series("WMA(5)", &wma_5);

    let ema_10 = ema(&series, EmaParams::new().period(10))?;
    println!("10-period EMA: lookback {}", EmaParams::new().period(10).lookback());
    print_series("EMA(10)", &ema_10);

    let crosses = sma_crossovers(&series, 3, 8)?;
    println!("SMA(3)/SMA(8) crossovers: {}", crosses.len());
    for cross in crosses {
        println!("  {:?} at {} (fast {:.4}, slow {:.4})", cross.kind, cross.timestamp, cross.fast, cross.slow);
    }

    Ok(())
}
