use chrono::Datelike;
use indexmap::IndexMap;

use crate::api::palette;
use crate::core::{
    ChartMargins, IndexScale, Series, Symbol, UnifiedDomain, ValueScale, ValueScaleTuning,
    Viewport, interpolate_closes,
};
use crate::error::TrendsResult;
use crate::render::{AxisSegment, AxisTick, ChartScene, SeriesScene};

/// Every Nth domain index gets an x-axis tick (plus the final index).
pub const X_TICK_STRIDE: usize = 5;

/// Number of evenly spaced y-axis ticks across the padded value range.
pub const Y_TICK_COUNT: usize = 5;

const X_TICK_LABEL_OFFSET: f64 = 15.0;
const Y_TICK_LABEL_OFFSET: f64 = 10.0;

/// Fully projected chart state for one set of inputs.
///
/// Derived wholesale from the selected histories, viewport, and margins;
/// rebuilt whenever any of those change and never patched in place. Holds
/// everything scene emission and tooltip hit-testing need.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    viewport: Viewport,
    margins: ChartMargins,
    domain: UnifiedDomain,
    index_scale: IndexScale,
    value_scale: ValueScale,
    values: IndexMap<Symbol, Vec<Option<f64>>>,
}

impl ChartFrame {
    /// Projects the selected symbols' histories into a frame.
    ///
    /// Returns `Ok(None)` when there is nothing to draw: no selection, no
    /// series with data, or selections whose series are all empty. Errors
    /// are reserved for invalid viewports and margins.
    pub fn build(
        histories: &IndexMap<Symbol, Series>,
        selected: &[Symbol],
        viewport: Viewport,
        margins: ChartMargins,
    ) -> TrendsResult<Option<Self>> {
        let picked: Vec<&Series> = selected
            .iter()
            .filter_map(|symbol| histories.get(symbol))
            .collect();

        let domain = UnifiedDomain::from_series(picked.iter().copied());
        if domain.is_empty() {
            return Ok(None);
        }

        let mut values = IndexMap::with_capacity(picked.len());
        for series in &picked {
            values.insert(series.symbol().clone(), interpolate_closes(series, &domain));
        }

        let mut raw_min = f64::INFINITY;
        let mut raw_max = f64::NEG_INFINITY;
        for series_values in values.values() {
            for value in series_values.iter().flatten() {
                raw_min = raw_min.min(*value);
                raw_max = raw_max.max(*value);
            }
        }
        if !raw_min.is_finite() || !raw_max.is_finite() {
            return Ok(None);
        }

        let index_scale = IndexScale::fit(domain.len(), viewport, margins)?;
        let value_scale =
            ValueScale::fit(raw_min, raw_max, viewport, margins, ValueScaleTuning::default())?;

        Ok(Some(Self {
            viewport,
            margins,
            domain,
            index_scale,
            value_scale,
            values,
        }))
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn domain(&self) -> &UnifiedDomain {
        &self.domain
    }

    #[must_use]
    pub fn index_scale(&self) -> IndexScale {
        self.index_scale
    }

    #[must_use]
    pub fn value_scale(&self) -> ValueScale {
        self.value_scale
    }

    /// Padded value range mapped onto the y axis.
    #[must_use]
    pub fn value_range(&self) -> (f64, f64) {
        self.value_scale.range()
    }

    /// Interpolated close per domain index, per selected symbol, in
    /// selection order. `None` marks a gap with no bracketing data.
    #[must_use]
    pub fn values(&self) -> &IndexMap<Symbol, Vec<Option<f64>>> {
        &self.values
    }

    /// Emits the drawable scene for this frame.
    #[must_use]
    pub fn scene(&self) -> ChartScene {
        let baseline = self.value_scale.baseline();
        let width = f64::from(self.viewport.width);

        let series = self
            .values
            .iter()
            .map(|(symbol, series_values)| {
                let (line_path, area_path) =
                    build_paths(series_values, self.index_scale, self.value_scale);
                SeriesScene {
                    symbol: symbol.clone(),
                    label: palette::series_label(symbol),
                    color: palette::series_color(symbol).to_owned(),
                    line_path,
                    area_path,
                }
            })
            .collect();

        ChartScene {
            viewport: self.viewport.into(),
            series,
            x_axis: AxisSegment {
                x1: self.margins.x,
                y1: baseline,
                x2: width - self.margins.x,
                y2: baseline,
            },
            y_axis: AxisSegment {
                x1: self.margins.x,
                y1: self.margins.y,
                x2: self.margins.x,
                y2: baseline,
            },
            x_ticks: self.x_ticks(),
            y_ticks: self.y_ticks(),
        }
    }

    fn x_ticks(&self) -> Vec<AxisTick> {
        let len = self.domain.len();
        let label_y = self.value_scale.baseline() + X_TICK_LABEL_OFFSET;
        self.domain
            .iter()
            .enumerate()
            .filter(|(index, _)| index % X_TICK_STRIDE == 0 || *index == len - 1)
            .map(|(index, date)| AxisTick {
                x: self.index_scale.x_at(index),
                y: label_y,
                label: format!("{}/{}", date.month(), date.day()),
            })
            .collect()
    }

    fn y_ticks(&self) -> Vec<AxisTick> {
        let (min, max) = self.value_scale.range();
        let label_x = self.margins.x - Y_TICK_LABEL_OFFSET;
        (0..Y_TICK_COUNT)
            .map(|step| {
                let ratio = step as f64 / (Y_TICK_COUNT - 1) as f64;
                let value = min + (max - min) * ratio;
                AxisTick {
                    x: label_x,
                    y: self.value_scale.y_at(value),
                    label: format!("{value:.2}"),
                }
            })
            .collect()
    }
}

/// Builds the stroke path and its closed-area variant for one series.
///
/// Defined points connect with `L`; a gap lifts the pen so the next defined
/// point starts a fresh `M` subpath instead of drawing through undefined
/// space. Each contiguous run of the area path closes down to the baseline
/// at both of its ends.
fn build_paths(
    values: &[Option<f64>],
    index_scale: IndexScale,
    value_scale: ValueScale,
) -> (String, String) {
    let baseline = value_scale.baseline();
    let mut line = String::new();
    let mut area = String::new();
    let mut run_end_x: Option<f64> = None;

    for (index, value) in values.iter().enumerate() {
        let Some(value) = value else {
            if let Some(last_x) = run_end_x.take() {
                close_area_run(&mut area, last_x, baseline);
            }
            continue;
        };

        let x = index_scale.x_at(index);
        let y = value_scale.y_at(*value);
        if run_end_x.is_none() {
            push_command(&mut line, "M", x, y);
            push_command(&mut area, "M", x, baseline);
            push_command(&mut area, "L", x, y);
        } else {
            push_command(&mut line, "L", x, y);
            push_command(&mut area, "L", x, y);
        }
        run_end_x = Some(x);
    }

    if let Some(last_x) = run_end_x {
        close_area_run(&mut area, last_x, baseline);
    }

    (line, area)
}

fn push_command(path: &mut String, command: &str, x: f64, y: f64) {
    if !path.is_empty() {
        path.push(' ');
    }
    path.push_str(command);
    path.push_str(&format!(" {x} {y}"));
}

fn close_area_run(area: &mut String, last_x: f64, baseline: f64) {
    push_command(area, "L", last_x, baseline);
    area.push_str(" Z");
}
