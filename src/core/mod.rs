pub mod domain;
pub mod interpolate;
pub mod scale;
pub mod types;

pub use domain::UnifiedDomain;
pub use interpolate::interpolate_closes;
pub use scale::{ChartMargins, IndexScale, ValueScale, ValueScaleTuning};
pub use types::{PricePoint, Quote, Series, Symbol, Viewport};
