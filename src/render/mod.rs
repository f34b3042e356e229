pub mod scene;

pub use scene::{AxisSegment, AxisTick, ChartScene, SceneViewport, SeriesScene};
