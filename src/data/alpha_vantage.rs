//! Alpha Vantage market-data backend.
//!
//! Quotes come from `GLOBAL_QUOTE`, histories from `TIME_SERIES_DAILY`
//! (compact output, trimmed to the last 30 trading days). Successful
//! responses go through the shared [`QuoteCache`]; any transport failure,
//! throttled response, or unexpected payload shape falls back to seeded
//! synthetic data instead of surfacing an error.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::{PricePoint, Quote, Series, Symbol};
use crate::data::{FallbackGenerator, MarketDataProvider, QuoteCache};
use crate::error::{TrendsError, TrendsResult};

const BASE_URL: &str = "https://www.alphavantage.co/query";
const HISTORY_DAYS: usize = 30;

/// Live provider over the Alpha Vantage REST API.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    cache: Arc<QuoteCache>,
    fallback_seed: u64,
}

impl AlphaVantageProvider {
    /// Reads `ALPHAVANTAGE_API_KEY` from the environment (`.env` honored).
    pub fn from_env() -> TrendsResult<Self> {
        dotenvy::dotenv().ok();
        let api_key =
            std::env::var("ALPHAVANTAGE_API_KEY").map_err(|_| TrendsError::MissingApiKey)?;
        Ok(Self::new(api_key, Arc::new(QuoteCache::default())))
    }

    #[must_use]
    pub fn new(api_key: impl Into<String>, cache: Arc<QuoteCache>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            cache,
            fallback_seed: 0,
        }
    }

    /// Overrides the seed used for synthetic fallback data.
    #[must_use]
    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback_seed = seed;
        self
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<QuoteCache> {
        &self.cache
    }

    fn fetch_quote_live(&self, symbol: &Symbol) -> TrendsResult<Quote> {
        debug!(symbol = %symbol, "fetching quote from alpha vantage");
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol.as_str()),
                ("apikey", &self.api_key),
            ])
            .send()?;

        if !resp.status().is_success() {
            return Err(TrendsError::Api(format!(
                "quote request failed with status {}",
                resp.status()
            )));
        }

        let body: GlobalQuoteResponse = resp.json()?;
        let raw = body
            .global_quote
            .ok_or_else(|| TrendsError::Api("response missing Global Quote payload".to_owned()))?;

        Ok(Quote {
            symbol: symbol.clone(),
            price: parse_price(&raw.price, "price")?,
            change: parse_price(&raw.change, "change")?,
            change_percent: parse_price(raw.change_percent.trim_end_matches('%'), "change percent")?,
            volume: parse_volume(&raw.volume)?,
            latest_trading_day: parse_date(&raw.latest_trading_day)?,
        })
    }

    fn fetch_history_live(&self, symbol: &Symbol) -> TrendsResult<Series> {
        debug!(symbol = %symbol, "fetching daily history from alpha vantage");
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol.as_str()),
                ("outputsize", "compact"),
                ("apikey", &self.api_key),
            ])
            .send()?;

        if !resp.status().is_success() {
            return Err(TrendsError::Api(format!(
                "history request failed with status {}",
                resp.status()
            )));
        }

        let body: DailyResponse = resp.json()?;
        // A rate-limited response is a 200 with the payload key missing.
        let time_series = body.time_series.ok_or_else(|| {
            TrendsError::Api("response missing Time Series (Daily) payload".to_owned())
        })?;

        let mut dated: Vec<(NaiveDate, DailyBar)> = Vec::with_capacity(time_series.len());
        for (raw_date, bar) in time_series {
            dated.push((parse_date(&raw_date)?, bar));
        }
        dated.sort_by_key(|(date, _)| *date);

        let skip = dated.len().saturating_sub(HISTORY_DAYS);
        let mut points = Vec::with_capacity(dated.len() - skip);
        for (date, bar) in dated.into_iter().skip(skip) {
            points.push(PricePoint {
                date,
                open: parse_price(&bar.open, "open")?,
                high: parse_price(&bar.high, "high")?,
                low: parse_price(&bar.low, "low")?,
                close: parse_price(&bar.close, "close")?,
                volume: parse_volume(&bar.volume)?,
            });
        }

        Ok(Series::from_points(symbol.clone(), points))
    }
}

impl MarketDataProvider for AlphaVantageProvider {
    fn quote(&self, symbol: &Symbol) -> TrendsResult<Quote> {
        if let Some(hit) = self.cache.quote(symbol) {
            return Ok(hit);
        }

        match self.fetch_quote_live(symbol) {
            Ok(quote) => {
                self.cache.store_quote(quote.clone());
                Ok(quote)
            }
            Err(err) => {
                warn!(symbol = %symbol, error = %err, "quote fetch failed, using synthetic fallback");
                Ok(FallbackGenerator::for_symbol(self.fallback_seed, symbol).quote(symbol))
            }
        }
    }

    fn history(&self, symbol: &Symbol) -> TrendsResult<Series> {
        if let Some(hit) = self.cache.history(symbol) {
            return Ok(hit);
        }

        match self.fetch_history_live(symbol) {
            Ok(series) => {
                self.cache.store_history(series.clone());
                Ok(series)
            }
            Err(err) => {
                warn!(symbol = %symbol, error = %err, "history fetch failed, using synthetic fallback");
                Ok(FallbackGenerator::for_symbol(self.fallback_seed, symbol).history(symbol))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: String,
    #[serde(rename = "06. volume")]
    volume: String,
    #[serde(rename = "07. latest trading day")]
    latest_trading_day: String,
    #[serde(rename = "09. change")]
    change: String,
    #[serde(rename = "10. change percent")]
    change_percent: String,
}

#[derive(Debug, Deserialize)]
struct DailyResponse {
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<HashMap<String, DailyBar>>,
}

#[derive(Debug, Deserialize)]
struct DailyBar {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

/// Alpha Vantage encodes all numbers as strings; go through `Decimal` so
/// malformed values fail loudly instead of collecting NaNs.
fn parse_price(raw: &str, field_name: &str) -> TrendsResult<f64> {
    let value: Decimal = raw
        .trim()
        .parse()
        .map_err(|e| TrendsError::Api(format!("invalid {field_name} value {raw:?}: {e}")))?;
    value
        .to_f64()
        .ok_or_else(|| TrendsError::Api(format!("{field_name} cannot be represented as f64")))
}

fn parse_volume(raw: &str) -> TrendsResult<u64> {
    raw.trim()
        .parse()
        .map_err(|e| TrendsError::Api(format!("invalid volume value {raw:?}: {e}")))
}

fn parse_date(raw: &str) -> TrendsResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| TrendsError::Api(format!("invalid date value {raw:?}: {e}")))
}
