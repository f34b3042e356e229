use serde::{Deserialize, Serialize};

use crate::core::{Symbol, Viewport};
use crate::error::{TrendsError, TrendsResult};

/// Backend-agnostic scene for one chart draw pass.
///
/// Everything the host needs to paint the trends chart onto an SVG-like
/// surface: per-series path strings, axis segments, and tick labels. The
/// scene owns no surface and is discarded after the pass that consumed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub viewport: SceneViewport,
    pub series: Vec<SeriesScene>,
    pub x_axis: AxisSegment,
    pub y_axis: AxisSegment,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

/// Viewport echoed into the scene so hosts can set the SVG viewBox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneViewport {
    pub width: u32,
    pub height: u32,
}

impl From<Viewport> for SceneViewport {
    fn from(viewport: Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
        }
    }
}

/// One plotted series: stroke path, filled area variant, and legend styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesScene {
    pub symbol: Symbol,
    pub label: String,
    pub color: String,
    pub line_path: String,
    pub area_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl ChartScene {
    pub fn validate(&self) -> TrendsResult<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(TrendsError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for segment in [&self.x_axis, &self.y_axis] {
            if ![segment.x1, segment.y1, segment.x2, segment.y2]
                .iter()
                .all(|v| v.is_finite())
            {
                return Err(TrendsError::InvalidData(
                    "axis segment coordinates must be finite".to_owned(),
                ));
            }
        }

        for tick in self.x_ticks.iter().chain(&self.y_ticks) {
            if !tick.x.is_finite() || !tick.y.is_finite() {
                return Err(TrendsError::InvalidData(
                    "tick coordinates must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }
}
