//! Synthetic quote and history generation used when the live feed fails.
//!
//! The output is plausible rather than accurate: each series starts 5-10%
//! away from a fixed per-symbol base price and drifts linearly back to it by
//! the final day, with small daily noise on top. All randomness flows
//! through an explicitly seeded `StdRng` so tests can pin exact sequences.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{Days, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{PricePoint, Quote, Series, Symbol};

/// Number of days of history before today; the series itself has one more
/// point because both endpoints are included.
pub const HISTORY_DAYS: u64 = 30;

/// Maximum daily close move as a fraction of the base price.
const DAILY_VOLATILITY: f64 = 0.015;

const VOLUME_MIN: u64 = 5_000_000;
const VOLUME_MAX: u64 = 15_000_000;

/// Reference price the synthetic series decays toward.
///
/// Snapshot prices for the default watchlist; anything unknown gets a flat
/// hundred so the chart still scales sensibly.
#[must_use]
pub fn base_price(symbol: &Symbol) -> f64 {
    match symbol.as_str() {
        "AAPL" => 173.72,
        "MSFT" => 417.88,
        "GOOGL" => 147.60,
        "AMZN" => 178.75,
        "META" => 485.58,
        _ => 100.00,
    }
}

/// Deterministic generator for one symbol's fallback data.
#[derive(Debug)]
pub struct FallbackGenerator {
    rng: StdRng,
}

impl FallbackGenerator {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Derives a per-symbol seed so concurrent fallbacks for different
    /// symbols stay independently reproducible.
    #[must_use]
    pub fn for_symbol(base_seed: u64, symbol: &Symbol) -> Self {
        let mut hasher = DefaultHasher::new();
        symbol.hash(&mut hasher);
        Self::from_seed(base_seed ^ hasher.finish())
    }

    /// Synthesizes a 31-point daily history ending today.
    #[must_use]
    pub fn history(&mut self, symbol: &Symbol) -> Series {
        self.history_ending(symbol, Utc::now().date_naive())
    }

    /// Synthesizes a 31-point daily history ending on an explicit day.
    #[must_use]
    pub fn history_ending(&mut self, symbol: &Symbol, today: NaiveDate) -> Series {
        let base = base_price(symbol);
        let start = today
            .checked_sub_days(Days::new(HISTORY_DAYS))
            .unwrap_or(today);

        // One starting offset per series; the trend decays it to zero.
        let sign = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let starting_diff = self.rng.gen_range(0.05..0.10) * sign;
        let starting_price = base * (1.0 + starting_diff);

        let mut points = Vec::with_capacity(HISTORY_DAYS as usize + 1);
        let mut date = start;
        for day in 0..=HISTORY_DAYS {
            let days_factor = day as f64 / HISTORY_DAYS as f64;
            let trend = starting_price + (base - starting_price) * days_factor;
            let daily_change = base * DAILY_VOLATILITY * self.rng.gen_range(-1.0..1.0);
            let close = trend + daily_change;

            points.push(PricePoint {
                date,
                open: close * (1.0 + self.rng.gen_range(-0.005..0.005)),
                high: close * (1.0 + self.rng.gen_range(0.0..0.02)),
                low: close * (1.0 - self.rng.gen_range(0.0..0.02)),
                close,
                volume: self.rng.gen_range(VOLUME_MIN..VOLUME_MAX),
            });

            date = match date.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }

        Series::from_points(symbol.clone(), points)
    }

    /// Synthesizes a current quote around the symbol's base price.
    #[must_use]
    pub fn quote(&mut self, symbol: &Symbol) -> Quote {
        self.quote_on(symbol, Utc::now().date_naive())
    }

    #[must_use]
    pub fn quote_on(&mut self, symbol: &Symbol, today: NaiveDate) -> Quote {
        Quote {
            symbol: symbol.clone(),
            price: base_price(symbol),
            change: self.rng.gen_range(-2.0..2.0),
            change_percent: self.rng.gen_range(-1.5..1.5),
            volume: self.rng.gen_range(VOLUME_MIN..VOLUME_MAX),
            latest_trading_day: today,
        }
    }
}
