use crate::core::Symbol;

/// Watchlist shown on the dashboard by default.
pub const DEFAULT_WATCHLIST: [&str; 5] = ["AAPL", "MSFT", "GOOGL", "AMZN", "META"];

/// Stroke color for symbols outside the fixed palette.
pub const DEFAULT_SERIES_COLOR: &str = "#007bff";

#[must_use]
pub fn company_name(symbol: &Symbol) -> Option<&'static str> {
    match symbol.as_str() {
        "AAPL" => Some("Apple Inc."),
        "MSFT" => Some("Microsoft Corp."),
        "GOOGL" => Some("Alphabet Inc."),
        "AMZN" => Some("Amazon.com Inc."),
        "META" => Some("Meta Platforms Inc."),
        _ => None,
    }
}

#[must_use]
pub fn series_color(symbol: &Symbol) -> &'static str {
    match symbol.as_str() {
        "AAPL" => "#007bff",
        "MSFT" => "#28a745",
        "GOOGL" => "#dc3545",
        "AMZN" => "#fd7e14",
        "META" => "#6f42c1",
        _ => DEFAULT_SERIES_COLOR,
    }
}

/// Legend/tooltip label: company name when known, ticker otherwise.
#[must_use]
pub fn series_label(symbol: &Symbol) -> String {
    company_name(symbol)
        .map(str::to_owned)
        .unwrap_or_else(|| symbol.as_str().to_owned())
}
