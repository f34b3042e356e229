use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::core::{Quote, Series, Symbol};

/// Freshness window after which a cached response is refetched.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(15 * 60);

/// Read-through cache for quote and history responses.
///
/// Explicit and injectable rather than a process-wide global, so providers
/// can share one instance and tests can construct their own with a short
/// TTL. Quote and history entries are keyed independently per symbol.
/// Writes are last-writer-wins; concurrent fetches for the same symbol are
/// not deduplicated.
#[derive(Debug)]
pub struct QuoteCache {
    ttl: Duration,
    quotes: Mutex<HashMap<Symbol, Entry<Quote>>>,
    histories: Mutex<HashMap<Symbol, Entry<Series>>>,
}

#[derive(Debug)]
struct Entry<T> {
    value: T,
    stored_at: Instant,
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_CACHE_TTL)
    }
}

impl QuoteCache {
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            quotes: Mutex::new(HashMap::new()),
            histories: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[must_use]
    pub fn quote(&self, symbol: &Symbol) -> Option<Quote> {
        let map = lock(&self.quotes);
        let entry = map.get(symbol)?;
        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        debug!(symbol = %symbol, "using cached quote");
        Some(entry.value.clone())
    }

    pub fn store_quote(&self, quote: Quote) {
        let mut map = lock(&self.quotes);
        map.insert(
            quote.symbol.clone(),
            Entry {
                value: quote,
                stored_at: Instant::now(),
            },
        );
    }

    #[must_use]
    pub fn history(&self, symbol: &Symbol) -> Option<Series> {
        let map = lock(&self.histories);
        let entry = map.get(symbol)?;
        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        debug!(symbol = %symbol, "using cached history");
        Some(entry.value.clone())
    }

    pub fn store_history(&self, series: Series) {
        let symbol = series.symbol().clone();
        let mut map = lock(&self.histories);
        map.insert(
            symbol,
            Entry {
                value: series,
                stored_at: Instant::now(),
            },
        );
    }
}

/// A poisoned lock only means another fetch worker panicked mid-write; the
/// map itself stays usable for last-writer-wins data.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn quote(symbol: &str) -> Quote {
        Quote {
            symbol: Symbol::new(symbol).unwrap(),
            price: 100.0,
            change: 1.0,
            change_percent: 1.0,
            volume: 1_000,
            latest_trading_day: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    #[test]
    fn fresh_entry_is_returned() {
        let cache = QuoteCache::default();
        cache.store_quote(quote("AAPL"));
        assert!(cache.quote(&Symbol::new("AAPL").unwrap()).is_some());
    }

    #[test]
    fn expired_entry_is_a_miss() {
        let cache = QuoteCache::with_ttl(Duration::ZERO);
        cache.store_quote(quote("AAPL"));
        assert!(cache.quote(&Symbol::new("AAPL").unwrap()).is_none());
    }

    #[test]
    fn quote_and_history_keys_are_independent() {
        let cache = QuoteCache::default();
        let symbol = Symbol::new("AAPL").unwrap();
        cache.store_quote(quote("AAPL"));
        assert!(cache.history(&symbol).is_none());
    }
}
