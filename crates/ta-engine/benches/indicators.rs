//! Performance benchmarks for ta-engine indicators.
//!
//! Run with: `cargo bench -p ta-engine`
//!
//! Measures throughput for each indicator across input sizes to confirm the
//! O(n) kernels stay linear, and compares sequential and parallel batches.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ta_engine::batch::{compute_all, BatchProcessor, IndicatorRequest};
use ta_engine::indicators::{
    bollinger, ema, macd, roc, rsi, sar, sma, stochastic, williams_r, wma, BollingerParams, EmaParams,
    MacdParams, RocParams, RsiParams, SarParams, SmaParams, StochasticParams, WilliamsRParams, WmaParams,
};
use ta_engine::OhlcvPoint;

/// Generate synthetic OHLCV bars for benchmarks.
fn generate_ohlcv(size: usize) -> Vec<OhlcvPoint> {
    let mut price = 100.0_f64;
    (0..size)
        .map(|i| {
            let t = i as f64;
            // deterministic price walk for reproducibility
            price += (t * 0.1).sin() * 2.0 + (t * 0.03).cos() * 1.5;
            price = price.max(10.0);

            let high = price + 1.0 + (t * 0.07).sin().abs();
            let low = price - 1.0 - (t * 0.05).cos().abs();
            let open = price + (t * 0.04).sin() * 0.3;
            let volume = 1_000_000.0 + ((t * 1000.0).sin() * 500_000.0).abs();
            OhlcvPoint::new(i as i64 * 60_000, open, high, low, price, volume)
        })
        .collect()
}

const SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

macro_rules! bench_indicator {
    ($fn_name:ident, $group:literal, $call:expr) => {
        fn $fn_name(c: &mut Criterion) {
            let mut group = c.benchmark_group($group);
            for &size in SIZES {
                let data = generate_ohlcv(size);
                group.throughput(Throughput::Elements(size as u64));
                group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
                    b.iter(|| $call(black_box(data.as_slice())))
                });
            }
            group.finish();
        }
    };
}

bench_indicator!(bench_sma, "sma", |s| sma(s, SmaParams::default()));
bench_indicator!(bench_wma, "wma", |s| wma(s, WmaParams::default()));
bench_indicator!(bench_ema, "ema", |s| ema(s, EmaParams::default()));
bench_indicator!(bench_rsi, "rsi", |s| rsi(s, RsiParams::default()));
bench_indicator!(bench_macd, "macd", |s| macd(s, MacdParams::default()));
bench_indicator!(bench_bollinger, "bollinger", |s| bollinger(s, BollingerParams::default()));
bench_indicator!(bench_stochastic, "stochastic", |s| stochastic(s, StochasticParams::default()));
bench_indicator!(bench_williams_r, "williams_r", |s| williams_r(s, WilliamsRParams::default()));
bench_indicator!(bench_roc, "roc", |s| roc(s, RocParams::default()));
bench_indicator!(bench_sar, "sar", |s| sar(s, SarParams::default()));

fn all_requests() -> Vec<IndicatorRequest> {
    vec![
        IndicatorRequest::Sma(SmaParams::default()),
        IndicatorRequest::Wma(WmaParams::default()),
        IndicatorRequest::Ema(EmaParams::default()),
        IndicatorRequest::Rsi(RsiParams::default()),
        IndicatorRequest::Macd(MacdParams::default()),
        IndicatorRequest::Bollinger(BollingerParams::default()),
        IndicatorRequest::Stochastic(StochasticParams::default()),
        IndicatorRequest::WilliamsR(WilliamsRParams::default()),
        IndicatorRequest::Roc(RocParams::default()),
        IndicatorRequest::Sar(SarParams::default()),
    ]
}

fn bench_compute_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_all");
    let requests = all_requests();
    for &size in &[1_000, 100_000] {
        let data = generate_ohlcv(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| compute_all(black_box(data), black_box(&requests)))
        });
    }
    group.finish();
}

fn bench_batch_processor(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_processor");
    let universe: Vec<Vec<OhlcvPoint>> = (0..256).map(|_| generate_ohlcv(2_000)).collect();
    for (label, threshold) in [("sequential", usize::MAX), ("parallel", 0)] {
        let processor = BatchProcessor::new().min_parallel_threshold(threshold);
        group.bench_function(label, |b| {
            b.iter(|| processor.process(black_box(&universe), |s| rsi(s, RsiParams::default())))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sma,
    bench_wma,
    bench_ema,
    bench_rsi,
    bench_macd,
    bench_bollinger,
    bench_stochastic,
    bench_williams_r,
    bench_roc,
    bench_sar,
    bench_compute_all,
    bench_batch_processor,
);
criterion_main!(benches);
