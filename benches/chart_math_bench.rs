use chrono::{Days, NaiveDate};
use criterion::{Criterion, criterion_group, criterion_main};
use indexmap::IndexMap;
use std::hint::black_box;
use trends_rs::api::ChartFrame;
use trends_rs::core::{
    ChartMargins, PricePoint, Series, Symbol, UnifiedDomain, Viewport, interpolate_closes,
};

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid start date")
}

/// Five watchlist-sized series over a month, each skipping a different
/// weekday so interpolation always has gaps to fill.
fn watchlist_histories() -> IndexMap<Symbol, Series> {
    let tickers = ["AAPL", "MSFT", "GOOGL", "AMZN", "META"];
    tickers
        .iter()
        .enumerate()
        .map(|(series_index, ticker)| {
            let symbol = Symbol::new(*ticker).expect("valid ticker");
            let points = (0u64..=30)
                .filter(|day| (*day as usize + series_index) % 7 != 0)
                .map(|day| {
                    let date = start_date()
                        .checked_add_days(Days::new(day))
                        .expect("in range");
                    let close = 100.0 + series_index as f64 * 50.0 + (day as f64) * 0.8;
                    PricePoint {
                        date,
                        open: close - 0.3,
                        high: close + 1.0,
                        low: close - 1.0,
                        close,
                        volume: 8_000_000,
                    }
                });
            (symbol.clone(), Series::from_points(symbol, points))
        })
        .collect()
}

fn selection(histories: &IndexMap<Symbol, Series>) -> Vec<Symbol> {
    histories.keys().cloned().collect()
}

fn bench_unify_and_interpolate(c: &mut Criterion) {
    let histories = watchlist_histories();

    c.bench_function("unify_and_interpolate_5x31", |b| {
        b.iter(|| {
            let domain = UnifiedDomain::from_series(black_box(histories.values()));
            for series in histories.values() {
                let _ = interpolate_closes(black_box(series), black_box(&domain));
            }
        })
    });
}

fn bench_frame_build_and_scene(c: &mut Criterion) {
    let histories = watchlist_histories();
    let selected = selection(&histories);
    let viewport = Viewport::new(1280, 720);
    let margins = ChartMargins::default();

    c.bench_function("frame_build_and_scene_5x31", |b| {
        b.iter(|| {
            let frame = ChartFrame::build(
                black_box(&histories),
                black_box(&selected),
                black_box(viewport),
                black_box(margins),
            )
            .expect("valid build inputs")
            .expect("chart has data");
            let _ = frame.scene();
        })
    });
}

fn bench_hit_test_sweep(c: &mut Criterion) {
    let histories = watchlist_histories();
    let selected = selection(&histories);
    let frame = ChartFrame::build(
        &histories,
        &selected,
        Viewport::new(1280, 720),
        ChartMargins::default(),
    )
    .expect("valid build inputs")
    .expect("chart has data");

    c.bench_function("hit_test_sweep_1k", |b| {
        b.iter(|| {
            for step in 0..1_000u32 {
                let x = f64::from(step) * 1.28;
                let _ = frame.hit_test(black_box(x));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_unify_and_interpolate,
    bench_frame_build_and_scene,
    bench_hit_test_sweep
);
criterion_main!(benches);
