use std::time::{Duration, Instant};

use indexmap::IndexMap;
use tracing::info;

use crate::api::palette::DEFAULT_WATCHLIST;
use crate::api::{ChartFrame, Tooltip};
use crate::core::{ChartMargins, Quote, Series, Symbol, Viewport};
use crate::data::{MarketDataProvider, fetch_histories, fetch_quotes};
use crate::error::TrendsResult;
use crate::render::ChartScene;

/// How often the host should re-trigger a full fetch/compute/render cycle.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Umbrella message for a refresh that failed outright.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load market data. Please try again later.";

/// Shown in place of the chart when there is nothing to draw.
pub const NO_DATA_MESSAGE: &str = "No chart data available";

/// State behind the market-trends panel of the dashboard.
///
/// The host event loop drives it: `refresh` on mount and on each timer
/// tick, `set_viewport` on resize, `toggle_symbol` on card clicks, and the
/// pointer methods on mouse events. All chart math happens synchronously
/// inside; the projected frame is rebuilt lazily after any input change.
#[derive(Debug)]
pub struct MarketTrendsView {
    watchlist: Vec<Symbol>,
    margins: ChartMargins,
    viewport: Viewport,
    quotes: Vec<Quote>,
    histories: IndexMap<Symbol, Series>,
    selected: Vec<Symbol>,
    tooltip: Option<Tooltip>,
    error: Option<&'static str>,
    frame: Option<ChartFrame>,
    frame_stale: bool,
}

impl MarketTrendsView {
    /// View over the default five-symbol watchlist.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let watchlist = DEFAULT_WATCHLIST
            .iter()
            .filter_map(|ticker| Symbol::new(*ticker).ok())
            .collect();
        Self::with_watchlist(watchlist, viewport)
    }

    #[must_use]
    pub fn with_watchlist(watchlist: Vec<Symbol>, viewport: Viewport) -> Self {
        Self {
            watchlist,
            margins: ChartMargins::default(),
            viewport,
            quotes: Vec::new(),
            histories: IndexMap::new(),
            selected: Vec::new(),
            tooltip: None,
            error: None,
            frame: None,
            frame_stale: true,
        }
    }

    /// Replaces quotes and histories wholesale from the provider.
    ///
    /// The first successful refresh auto-selects the first watchlist symbol
    /// so the chart is never empty by default. On failure the umbrella
    /// error message is latched for the host to display.
    pub fn refresh<P>(&mut self, provider: &P) -> TrendsResult<()>
    where
        P: MarketDataProvider + Sync,
    {
        match self.refresh_inner(provider) {
            Ok(()) => {
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(LOAD_ERROR_MESSAGE);
                Err(err)
            }
        }
    }

    fn refresh_inner<P>(&mut self, provider: &P) -> TrendsResult<()>
    where
        P: MarketDataProvider + Sync,
    {
        let quotes = fetch_quotes(provider, &self.watchlist)?;
        let histories = fetch_histories(provider, &self.watchlist)?;
        info!(symbols = self.watchlist.len(), "market data refreshed");

        self.quotes = quotes;
        self.histories = histories;
        if self.selected.is_empty() {
            if let Some(first) = self.watchlist.first() {
                self.selected.push(first.clone());
            }
        }
        self.tooltip = None;
        self.frame_stale = true;
        Ok(())
    }

    /// Toggles a symbol in or out of the plotted selection.
    ///
    /// Deselecting the only selected symbol is a no-op, and symbols outside
    /// the watchlist are ignored.
    pub fn toggle_symbol(&mut self, symbol: &Symbol) {
        if let Some(position) = self.selected.iter().position(|s| s == symbol) {
            if self.selected.len() > 1 {
                self.selected.remove(position);
            }
        } else if self.watchlist.contains(symbol) {
            self.selected.push(symbol.clone());
        } else {
            return;
        }
        self.tooltip = None;
        self.frame_stale = true;
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.tooltip = None;
        self.frame_stale = true;
    }

    /// Current projected frame, rebuilding it if any input changed.
    ///
    /// `Ok(None)` is the "no chart data available" state.
    pub fn frame(&mut self) -> TrendsResult<Option<&ChartFrame>> {
        if self.frame_stale {
            self.frame =
                ChartFrame::build(&self.histories, &self.selected, self.viewport, self.margins)?;
            self.frame_stale = false;
        }
        Ok(self.frame.as_ref())
    }

    /// Drawable scene for the current inputs, if there is anything to draw.
    pub fn scene(&mut self) -> TrendsResult<Option<ChartScene>> {
        Ok(self.frame()?.map(ChartFrame::scene))
    }

    /// Updates tooltip state from a pointer position over the chart.
    pub fn pointer_moved(&mut self, pointer_x: f64) -> TrendsResult<()> {
        self.frame()?;
        self.tooltip = self.frame.as_ref().and_then(|f| f.hit_test(pointer_x));
        Ok(())
    }

    pub fn pointer_left(&mut self) {
        self.tooltip = None;
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    #[must_use]
    pub fn selected(&self) -> &[Symbol] {
        &self.selected
    }

    #[must_use]
    pub fn watchlist(&self) -> &[Symbol] {
        &self.watchlist
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }
}

/// Due-time bookkeeping for the periodic refresh cycle.
///
/// The host owns the actual timer source and must drop it with the view on
/// teardown; this only answers "is a refresh due now".
#[derive(Debug, Clone, Copy)]
pub struct RefreshTimer {
    interval: Duration,
    last_fired: Option<Instant>,
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::with_interval(REFRESH_INTERVAL)
    }
}

impl RefreshTimer {
    #[must_use]
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    #[must_use]
    pub fn interval(self) -> Duration {
        self.interval
    }

    /// True before the first refresh and whenever the interval has elapsed.
    #[must_use]
    pub fn is_due(self, now: Instant) -> bool {
        match self.last_fired {
            None => true,
            Some(last) => now.duration_since(last) >= self.interval,
        }
    }

    pub fn mark(&mut self, now: Instant) {
        self.last_fired = Some(now);
    }
}
