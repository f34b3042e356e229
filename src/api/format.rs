//! Display formatting for stock cards and tooltips.

/// Two-decimal dollar amount; non-finite input renders as `$0.00`.
#[must_use]
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "$0.00".to_owned();
    }
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${value:.2}")
    }
}

/// Signed two-decimal delta, e.g. `+1.25` / `-0.38`.
#[must_use]
pub fn format_change(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_owned();
    }
    format!("{value:+.2}")
}

/// Volume with K/M/B suffixes, one decimal place.
#[must_use]
pub fn format_volume(volume: u64) -> String {
    let volume = volume as f64;
    if volume >= 1e9 {
        format!("{:.1}B", volume / 1e9)
    } else if volume >= 1e6 {
        format!("{:.1}M", volume / 1e6)
    } else if volume >= 1e3 {
        format!("{:.1}K", volume / 1e3)
    } else {
        format!("{volume:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_render_with_two_decimals() {
        assert_eq!(format_price(173.72), "$173.72");
        assert_eq!(format_price(-0.5), "-$0.50");
        assert_eq!(format_price(f64::NAN), "$0.00");
    }

    #[test]
    fn changes_are_signed() {
        assert_eq!(format_change(1.254), "+1.25");
        assert_eq!(format_change(-0.375), "-0.38");
    }

    #[test]
    fn volumes_use_magnitude_suffixes() {
        assert_eq!(format_volume(12_400_000_000), "12.4B");
        assert_eq!(format_volume(5_200_000), "5.2M");
        assert_eq!(format_volume(9_800), "9.8K");
        assert_eq!(format_volume(512), "512");
    }
}
