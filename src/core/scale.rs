use crate::core::Viewport;
use crate::error::{TrendsError, TrendsResult};

/// Pixel margins between the plot area and the viewport edges.
///
/// `x` is applied on both left and right, `y` on both top and bottom. The
/// defaults match the dashboard chart (50px / 40px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargins {
    pub x: f64,
    pub y: f64,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self { x: 50.0, y: 40.0 }
    }
}

impl ChartMargins {
    fn validate(self, viewport: Viewport) -> TrendsResult<Self> {
        if !self.x.is_finite() || !self.y.is_finite() || self.x < 0.0 || self.y < 0.0 {
            return Err(TrendsError::InvalidData(
                "chart margins must be finite and >= 0".to_owned(),
            ));
        }
        if 2.0 * self.x >= f64::from(viewport.width) || 2.0 * self.y >= f64::from(viewport.height) {
            return Err(TrendsError::InvalidData(
                "chart margins must leave a positive plot area".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Tuning controls for value-range fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScaleTuning {
    pub padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl Default for ValueScaleTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.10,
            min_span_absolute: 1.0,
        }
    }
}

impl ValueScaleTuning {
    fn validate(self) -> TrendsResult<Self> {
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(TrendsError::InvalidData(
                "value scale padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(TrendsError::InvalidData(
                "value scale min span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Maps unified-domain indices to pixel X inside the plot margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexScale {
    margin_x: f64,
    step: f64,
    len: usize,
}

impl IndexScale {
    /// Fits the scale so index 0 sits at the left margin and the last index
    /// at the right margin. A single-point domain degenerates to a zero step
    /// with the point pinned at the left margin.
    pub fn fit(domain_len: usize, viewport: Viewport, margins: ChartMargins) -> TrendsResult<Self> {
        if !viewport.is_valid() {
            return Err(TrendsError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margins = margins.validate(viewport)?;
        if domain_len == 0 {
            return Err(TrendsError::InvalidData(
                "index scale cannot be built from an empty domain".to_owned(),
            ));
        }

        let inner = f64::from(viewport.width) - 2.0 * margins.x;
        let step = if domain_len == 1 {
            0.0
        } else {
            inner / (domain_len - 1) as f64
        };

        Ok(Self {
            margin_x: margins.x,
            step,
            len: domain_len,
        })
    }

    #[must_use]
    pub fn x_at(self, index: usize) -> f64 {
        self.margin_x + self.step * index as f64
    }

    /// Nearest domain index under a pointer X, or `None` when the rounded
    /// index falls outside the domain.
    #[must_use]
    pub fn index_at_pixel(self, pixel_x: f64) -> Option<usize> {
        if !pixel_x.is_finite() {
            return None;
        }
        if self.len == 1 {
            return Some(0);
        }

        let raw = (pixel_x - self.margin_x) / self.step;
        let rounded = raw.round();
        if rounded < 0.0 || rounded > (self.len - 1) as f64 {
            return None;
        }
        Some(rounded as usize)
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Maps raw values to pixel Y, inverted because pixel Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    margin_y: f64,
    height: f64,
    min: f64,
    max: f64,
    per_unit: f64,
}

impl ValueScale {
    /// Fits a padded value range into the vertical plot area.
    ///
    /// A degenerate `min == max` input is widened by the minimum span before
    /// padding so the scale never divides by a zero span.
    pub fn fit(
        raw_min: f64,
        raw_max: f64,
        viewport: Viewport,
        margins: ChartMargins,
        tuning: ValueScaleTuning,
    ) -> TrendsResult<Self> {
        if !viewport.is_valid() {
            return Err(TrendsError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let margins = margins.validate(viewport)?;
        let tuning = tuning.validate()?;

        let (base_min, base_max) = normalize_range(raw_min, raw_max, tuning.min_span_absolute)?;
        let span = base_max - base_min;
        let min = base_min - span * tuning.padding_ratio;
        let max = base_max + span * tuning.padding_ratio;

        let height = f64::from(viewport.height);
        let per_unit = (height - 2.0 * margins.y) / (max - min);

        Ok(Self {
            margin_y: margins.y,
            height,
            min,
            max,
            per_unit,
        })
    }

    #[must_use]
    pub fn y_at(self, value: f64) -> f64 {
        self.height - self.margin_y - (value - self.min) * self.per_unit
    }

    /// Padded value range actually mapped onto the axis.
    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Pixel Y of the value-zero axis line, i.e. the bottom of the plot area.
    #[must_use]
    pub fn baseline(self) -> f64 {
        self.height - self.margin_y
    }
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> TrendsResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(TrendsError::InvalidData(
            "value range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
