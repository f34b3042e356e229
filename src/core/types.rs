use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TrendsError, TrendsResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Ticker symbol. Opaque beyond string equality and ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Creates a symbol, rejecting empty or blank tickers.
    pub fn new(ticker: impl Into<String>) -> TrendsResult<Self> {
        let ticker = ticker.into();
        if ticker.trim().is_empty() {
            return Err(TrendsError::InvalidSymbol(ticker));
        }
        Ok(Self(ticker))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One daily OHLCV observation.
///
/// `low <= open, close <= high` is expected from well-behaved feeds but is
/// deliberately not enforced; downstream code must tolerate violations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Current quote shown on the dashboard stock cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub latest_trading_day: NaiveDate,
}

/// Daily price history for one symbol, ordered by date.
///
/// Dates need not be contiguous: weekends, holidays, and fetch gaps all leave
/// holes. A refresh replaces the series wholesale; there is no incremental
/// patching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    symbol: Symbol,
    points: BTreeMap<NaiveDate, PricePoint>,
}

impl Series {
    #[must_use]
    pub fn empty(symbol: Symbol) -> Self {
        Self {
            symbol,
            points: BTreeMap::new(),
        }
    }

    /// Builds a series from unordered points. Duplicate dates keep the last
    /// point seen (last-writer-wins, matching the cache semantics upstream).
    #[must_use]
    pub fn from_points(symbol: Symbol, points: impl IntoIterator<Item = PricePoint>) -> Self {
        let points = points.into_iter().map(|p| (p.date, p)).collect();
        Self { symbol, points }
    }

    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&PricePoint> {
        self.points.get(&date)
    }

    #[must_use]
    pub fn close_at(&self, date: NaiveDate) -> Option<f64> {
        self.points.get(&date).map(|p| p.close)
    }

    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.keys().next().copied()
    }

    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.keys().next_back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.values()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.keys().copied()
    }
}
