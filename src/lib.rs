//! trends-rs: market-trends charting core.
//!
//! Computes the multi-series daily chart shown on a personal-finance
//! dashboard: a shared calendar-day axis across several stock series,
//! gap-aware linear interpolation, pixel projection into SVG path strings,
//! and nearest-date tooltip resolution. The host owns the drawing surface;
//! this crate only emits geometry and labels.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartFrame, MarketTrendsView};
pub use crate::core::{PricePoint, Quote, Series, Symbol, UnifiedDomain, Viewport};
pub use data::MarketDataProvider;
pub use error::{TrendsError, TrendsResult};
