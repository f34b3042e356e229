pub mod cache;
pub mod fallback;
pub mod provider;

#[cfg(feature = "live-data")]
pub mod alpha_vantage;

pub use cache::{DEFAULT_CACHE_TTL, QuoteCache};
pub use fallback::{FallbackGenerator, HISTORY_DAYS, base_price};
pub use provider::{FixtureProvider, MarketDataProvider};

#[cfg(feature = "live-data")]
pub use alpha_vantage::AlphaVantageProvider;

use indexmap::IndexMap;

use crate::core::{Quote, Series, Symbol};
use crate::error::{TrendsError, TrendsResult};

/// Fetches current quotes for a whole watchlist.
///
/// Quote requests are independent and may run concurrently, so each symbol
/// gets its own scoped worker thread against the shared provider.
pub fn fetch_quotes<P>(provider: &P, symbols: &[Symbol]) -> TrendsResult<Vec<Quote>>
where
    P: MarketDataProvider + Sync,
{
    std::thread::scope(|scope| {
        let handles: Vec<_> = symbols
            .iter()
            .map(|symbol| scope.spawn(move || provider.quote(symbol)))
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(TrendsError::Api("quote worker panicked".to_owned())))
            })
            .collect()
    })
}

/// Fetches daily histories for a whole watchlist.
///
/// Unlike quotes this runs one symbol at a time: the upstream time-series
/// endpoint rate-limits aggressively, and the serialization is deliberate.
pub fn fetch_histories<P>(
    provider: &P,
    symbols: &[Symbol],
) -> TrendsResult<IndexMap<Symbol, Series>>
where
    P: MarketDataProvider,
{
    let mut histories = IndexMap::with_capacity(symbols.len());
    for symbol in symbols {
        let series = provider.history(symbol)?;
        histories.insert(symbol.clone(), series);
    }
    Ok(histories)
}
