use crate::core::{Quote, Series, Symbol};
use crate::data::FallbackGenerator;
use crate::error::TrendsResult;

/// Source of quotes and 30-day daily histories.
///
/// Selected once at construction time: the live Alpha Vantage backend or the
/// deterministic fixture below. The live backend recovers transport and
/// payload failures internally with synthetic data, so `Err` here means a
/// configuration or input problem, not a flaky network.
pub trait MarketDataProvider {
    fn quote(&self, symbol: &Symbol) -> TrendsResult<Quote>;

    /// Last 30 calendar days of daily history, ascending by date.
    fn history(&self, symbol: &Symbol) -> TrendsResult<Series>;
}

/// Deterministic provider backed entirely by seeded synthetic data.
///
/// Every call for the same symbol and seed returns the same series, which is
/// what demo configurations without an API key and the test suites want.
#[derive(Debug, Clone, Copy)]
pub struct FixtureProvider {
    seed: u64,
}

impl FixtureProvider {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    #[must_use]
    pub fn seed(self) -> u64 {
        self.seed
    }
}

impl MarketDataProvider for FixtureProvider {
    fn quote(&self, symbol: &Symbol) -> TrendsResult<Quote> {
        Ok(FallbackGenerator::for_symbol(self.seed, symbol).quote(symbol))
    }

    fn history(&self, symbol: &Symbol) -> TrendsResult<Series> {
        Ok(FallbackGenerator::for_symbol(self.seed, symbol).history(symbol))
    }
}
