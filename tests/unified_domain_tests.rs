use chrono::NaiveDate;
use trends_rs::core::{PricePoint, Series, Symbol, UnifiedDomain};

fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).expect("valid test date")
}

fn series(symbol: &str, dates: &[NaiveDate]) -> Series {
    let points = dates.iter().map(|date| PricePoint {
        date: *date,
        open: 10.0,
        high: 11.0,
        low: 9.0,
        close: 10.0,
        volume: 1_000,
    });
    Series::from_points(Symbol::new(symbol).unwrap(), points)
}

#[test]
fn domain_spans_min_to_max_across_series() {
    let a = series("AAPL", &[day(2024, 3, 4), day(2024, 3, 8)]);
    let b = series("MSFT", &[day(2024, 3, 6), day(2024, 3, 11)]);

    let domain = UnifiedDomain::from_series([&a, &b]);
    assert_eq!(domain.start(), Some(day(2024, 3, 4)));
    assert_eq!(domain.end(), Some(day(2024, 3, 11)));
    assert_eq!(domain.len(), 8);
}

#[test]
fn domain_includes_weekends_no_series_reports() {
    // Mar 8 2024 is a Friday; Mar 11 a Monday.
    let a = series("AAPL", &[day(2024, 3, 8), day(2024, 3, 11)]);
    let domain = UnifiedDomain::from_series([&a]);
    let dates: Vec<_> = domain.iter().collect();
    assert_eq!(
        dates,
        vec![day(2024, 3, 8), day(2024, 3, 9), day(2024, 3, 10), day(2024, 3, 11)]
    );
}

#[test]
fn domain_crosses_month_boundaries() {
    let a = series("AAPL", &[day(2024, 2, 28), day(2024, 3, 2)]);
    let domain = UnifiedDomain::from_series([&a]);
    // 2024 is a leap year.
    assert_eq!(domain.date_at(1), Some(day(2024, 2, 29)));
    assert_eq!(domain.len(), 4);
}

#[test]
fn empty_inputs_yield_empty_domain() {
    assert!(UnifiedDomain::from_series([]).is_empty());

    let empty = Series::empty(Symbol::new("AAPL").unwrap());
    let domain = UnifiedDomain::from_series([&empty]);
    assert!(domain.is_empty());
    assert_eq!(domain.start(), None);
    assert_eq!(domain.len(), 0);
}

#[test]
fn single_date_yields_single_day_domain() {
    let a = series("AAPL", &[day(2024, 3, 15)]);
    let domain = UnifiedDomain::from_series([&a]);
    assert_eq!(domain.len(), 1);
    assert_eq!(domain.start(), domain.end());
}

#[test]
fn index_of_is_inverse_of_date_at() {
    let a = series("AAPL", &[day(2024, 3, 1), day(2024, 3, 20)]);
    let domain = UnifiedDomain::from_series([&a]);

    for index in 0..domain.len() {
        let date = domain.date_at(index).unwrap();
        assert_eq!(domain.index_of(date), Some(index));
    }
    assert_eq!(domain.index_of(day(2024, 2, 29)), None);
    assert_eq!(domain.index_of(day(2024, 3, 21)), None);
}
