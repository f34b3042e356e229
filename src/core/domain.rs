use chrono::{Days, NaiveDate};

use crate::core::Series;

/// Contiguous run of calendar days shared by every plotted series.
///
/// Spans the earliest to latest date observed across the input series, with
/// every day in between present whether or not any series reports it.
/// Weekends and holidays are therefore part of the axis; the interpolator
/// decides what value (if any) a series has on them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnifiedDomain {
    days: Vec<NaiveDate>,
}

impl UnifiedDomain {
    /// Builds the shared axis from the selected series.
    ///
    /// An empty input set, or one where no series has a single point, yields
    /// an empty domain. That is the "no chart to draw" state, not an error.
    #[must_use]
    pub fn from_series<'a>(series: impl IntoIterator<Item = &'a Series>) -> Self {
        let mut min: Option<NaiveDate> = None;
        let mut max: Option<NaiveDate> = None;

        for s in series {
            if let Some(first) = s.first_date() {
                min = Some(min.map_or(first, |m| m.min(first)));
            }
            if let Some(last) = s.last_date() {
                max = Some(max.map_or(last, |m| m.max(last)));
            }
        }

        match (min, max) {
            (Some(start), Some(end)) => Self::from_range(start, end),
            _ => Self::default(),
        }
    }

    /// Builds the axis directly from an inclusive day range.
    #[must_use]
    pub fn from_range(start: NaiveDate, end: NaiveDate) -> Self {
        if start > end {
            return Self::default();
        }

        let mut days = Vec::with_capacity((end - start).num_days() as usize + 1);
        let mut day = start;
        while day <= end {
            days.push(day);
            // Day increments on NaiveDate cannot overflow within chrono's
            // representable range, but stay total anyway.
            day = match day.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
        Self { days }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    #[must_use]
    pub fn end(&self) -> Option<NaiveDate> {
        self.days.last().copied()
    }

    #[must_use]
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        self.days.get(index).copied()
    }

    /// Index of a date on the axis, in O(1) by day arithmetic since the run
    /// is contiguous.
    #[must_use]
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let start = self.start()?;
        let end = self.end()?;
        if date < start || date > end {
            return None;
        }
        Some((date - start).num_days() as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.days
    }
}
