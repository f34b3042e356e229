use approx::assert_relative_eq;
use chrono::NaiveDate;
use indexmap::IndexMap;
use trends_rs::api::ChartFrame;
use trends_rs::core::{ChartMargins, PricePoint, Series, Symbol, Viewport};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).expect("valid test date")
}

fn sym(ticker: &str) -> Symbol {
    Symbol::new(ticker).unwrap()
}

fn series(ticker: &str, closes: &[(u32, f64)]) -> Series {
    let points = closes.iter().map(|(d, close)| PricePoint {
        date: day(*d),
        open: *close,
        high: *close,
        low: *close,
        close: *close,
        volume: 1_000,
    });
    Series::from_points(sym(ticker), points)
}

fn build(all: Vec<Series>, selected: &[Symbol]) -> ChartFrame {
    let map: IndexMap<Symbol, Series> =
        all.into_iter().map(|s| (s.symbol().clone(), s)).collect();
    ChartFrame::build(&map, selected, Viewport::new(400, 200), ChartMargins::default())
        .expect("valid build inputs")
        .expect("chart has data")
}

/// Four unified days, x positions 50/150/250/350, A = [100, 102, 104, 106]
/// after interpolation and B = [200, 199, 198, 202].
fn two_symbol_frame() -> ChartFrame {
    build(
        vec![
            series("AAPL", &[(1, 100.0), (2, 102.0), (4, 106.0)]),
            series("MSFT", &[(1, 200.0), (3, 198.0), (4, 202.0)]),
        ],
        &[sym("AAPL"), sym("MSFT")],
    )
}

#[test]
fn pointer_on_a_point_resolves_its_date_and_closes() {
    let frame = two_symbol_frame();
    let tooltip = frame.hit_test(250.0).expect("pointer is over the chart");

    assert_eq!(tooltip.date, day(3));
    assert_eq!(tooltip.x, 250.0);
    assert_eq!(tooltip.rows.len(), 2);
    assert_eq!(tooltip.rows[0].symbol, sym("AAPL"));
    assert_relative_eq!(tooltip.rows[0].close, 104.0);
    assert_eq!(tooltip.rows[1].symbol, sym("MSFT"));
    assert_relative_eq!(tooltip.rows[1].close, 198.0);
}

#[test]
fn pointer_between_points_rounds_to_the_nearest_index() {
    let frame = two_symbol_frame();

    let left = frame.hit_test(199.9).expect("rounds down");
    assert_eq!(left.date, day(2));

    let right = frame.hit_test(200.1).expect("rounds up");
    assert_eq!(right.date, day(3));
}

#[test]
fn tooltip_snaps_x_back_to_the_domain_index() {
    let frame = two_symbol_frame();
    let tooltip = frame.hit_test(163.0).expect("pointer is over the chart");
    assert_eq!(tooltip.date, day(2));
    assert_eq!(tooltip.x, 150.0);
}

#[test]
fn pointer_outside_the_domain_has_no_tooltip() {
    let frame = two_symbol_frame();
    assert!(frame.hit_test(-10.0).is_none());
    assert!(frame.hit_test(420.0).is_none());
    assert!(frame.hit_test(f64::NAN).is_none());
}

#[test]
fn anchor_sits_above_the_topmost_row() {
    let frame = two_symbol_frame();
    let tooltip = frame.hit_test(250.0).expect("pointer is over the chart");

    // B's close of 198 projects higher (smaller pixel y) than A's 104.
    let top_y = frame.value_scale().y_at(198.0);
    assert_relative_eq!(tooltip.anchor_y, top_y - 10.0);
    assert!(tooltip.rows.iter().all(|row| tooltip.anchor_y < row.y));
}

#[test]
fn symbols_with_a_gap_at_the_date_are_omitted() {
    // A covers only the first two days, B only the last two.
    let frame = build(
        vec![
            series("AAPL", &[(1, 100.0), (2, 102.0)]),
            series("MSFT", &[(3, 198.0), (4, 202.0)]),
        ],
        &[sym("AAPL"), sym("MSFT")],
    );

    let tooltip = frame.hit_test(350.0).expect("B has data here");
    assert_eq!(tooltip.rows.len(), 1);
    assert_eq!(tooltip.rows[0].symbol, sym("MSFT"));
}

#[test]
fn date_where_every_series_gaps_has_no_tooltip() {
    // One point each at the domain edges leaves the middle day with no
    // bracketed value for either series.
    let frame = build(
        vec![
            series("AAPL", &[(1, 100.0)]),
            series("MSFT", &[(3, 198.0)]),
        ],
        &[sym("AAPL"), sym("MSFT")],
    );

    assert_eq!(frame.domain().len(), 3);
    let middle_x = frame.index_scale().x_at(1);
    assert!(frame.hit_test(middle_x).is_none());
}

#[test]
fn repeated_hits_at_the_same_pixel_are_identical() {
    let frame = two_symbol_frame();
    let first = frame.hit_test(152.0);
    let second = frame.hit_test(152.0);
    assert_eq!(first, second);
}

#[test]
fn single_point_domain_always_resolves_index_zero() {
    let frame = build(vec![series("AAPL", &[(15, 173.72)])], &[sym("AAPL")]);
    let tooltip = frame.hit_test(390.0).expect("single point catches all x");
    assert_eq!(tooltip.date, day(15));
    assert_eq!(tooltip.x, 50.0);
}

#[test]
fn rows_follow_selection_order() {
    let frame = build(
        vec![
            series("MSFT", &[(1, 200.0), (2, 201.0)]),
            series("AAPL", &[(1, 100.0), (2, 101.0)]),
        ],
        &[sym("MSFT"), sym("AAPL")],
    );

    let tooltip = frame.hit_test(50.0).expect("pointer is over the chart");
    let order: Vec<_> = tooltip.rows.iter().map(|row| row.symbol.clone()).collect();
    assert_eq!(order, vec![sym("MSFT"), sym("AAPL")]);
}
