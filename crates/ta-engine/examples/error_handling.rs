//! Error Handling Examples
//!
//! Shows which inputs are rejected and which degenerate inputs still produce
//! an aligned, all-absent result.
//!
//! Run with: `cargo run --example error_handling`

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::wildcard_enum_match_arm)]

use ta_engine::indicators::{rsi, sma, williams_r, RsiParams, SmaParams, WilliamsRParams};
use ta_engine::{Error, OhlcvPoint, SeriesError};

fn flat_bar(timestamp: i64, price: f64) -> OhlcvPoint {
    OhlcvPoint::new(timestamp, price, price, price, price, 0.0)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Error Handling Examples ===");
    println!();

    println!("1. Empty Input:");
    match sma(&[], SmaParams::default()) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::InvalidSeries(SeriesError::Empty)) => {
            println!("   Caught empty series (expected)");
            println!("   Fix: Provide at least one bar");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    println!("2. Out-of-order Timestamps:");
    let shuffled = vec![flat_bar(1_000, 10.0), flat_bar(3_000, 11.0), flat_bar(2_000, 12.0)];
    match rsi(&shuffled, RsiParams::default()) {
        Ok(_) => println!("   Unexpected success"),
        Err(Error::InvalidSeries(SeriesError::NonIncreasingTimestamp {
            index,
            previous,
            current,
        })) => {
            println!("   Bar {index} has timestamp {current}, not after {previous}");
            println!("   Fix: Sort bars by time and drop duplicates");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    println!("3. Duplicate Timestamps:");
    let duplicated = vec![flat_bar(1_000, 10.0), flat_bar(1_000, 10.5)];
    if let Err(e) = sma(&duplicated, SmaParams::new().period(2)) {
        println!("   Error: {e}");
    }
    println!();

    println!("4. Period Longer Than Series (not an error):");
    let short: Vec<OhlcvPoint> = (0..5).map(|i| flat_bar(i * 60_000, 100.0 + i as f64)).collect();
    match sma(&short, SmaParams::new().period(50)) {
        Ok(out) => println!("   {} points, {} present", out.len(), out.present_count()),
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    println!("5. Flat Price Range (not an error):");
    let flat: Vec<OhlcvPoint> = (0..20).map(|i| flat_bar(i * 60_000, 42.0)).collect();
    match williams_r(&flat, WilliamsRParams::new().period(5)) {
        Ok(out) => println!("   Williams %R on flat prices: {:?}", out.value_at(10)),
        Err(e) => println!("   Unexpected error: {e}"),
    }
    println!();

    println!("6. Propagating with ?:");
    fn latest_rsi(series: &[OhlcvPoint]) -> ta_engine::Result<Option<f64>> {
        let out = rsi(series, RsiParams::new().period(3))?;
        Ok(out.values().last().copied().flatten())
    }
    println!("   valid series: {:?}", latest_rsi(&short));
    println!("   empty series: {:?}", latest_rsi(&[]).map_err(|e| e.to_string()));
}
