use crate::core::{Series, UnifiedDomain};

/// Resolves a closing price for every domain date of one series.
///
/// Known dates return their recorded close unchanged. Missing dates with a
/// known neighbor on both sides blend linearly by index position on the
/// unified domain. Missing dates with no bracketing point on one side stay
/// `None`: an explicit gap the path builder must lift the pen over.
///
/// Blending by index rather than elapsed days is a deliberate
/// simplification; the two coincide while the domain is one-point-per-day.
#[must_use]
pub fn interpolate_closes(series: &Series, domain: &UnifiedDomain) -> Vec<Option<f64>> {
    let len = domain.len();
    if len == 0 {
        return Vec::new();
    }

    let known: Vec<Option<f64>> = domain.iter().map(|date| series.close_at(date)).collect();

    // Nearest known index at-or-before / at-or-after each slot, both O(n).
    let mut prev_known: Vec<Option<usize>> = vec![None; len];
    let mut last = None;
    for (idx, value) in known.iter().enumerate() {
        if value.is_some() {
            last = Some(idx);
        }
        prev_known[idx] = last;
    }

    let mut next_known: Vec<Option<usize>> = vec![None; len];
    let mut next = None;
    for (idx, value) in known.iter().enumerate().rev() {
        if value.is_some() {
            next = Some(idx);
        }
        next_known[idx] = next;
    }

    known
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            if value.is_some() {
                return *value;
            }
            match (prev_known[idx], next_known[idx]) {
                (Some(prev), Some(after)) => {
                    let prev_value = known[prev]?;
                    let next_value = known[after]?;
                    let ratio = (idx - prev) as f64 / (after - prev) as f64;
                    Some(prev_value + (next_value - prev_value) * ratio)
                }
                _ => None,
            }
        })
        .collect()
}
