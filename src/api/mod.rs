pub mod format;
pub mod frame;
pub mod palette;
pub mod view;

pub use frame::{ChartFrame, X_TICK_STRIDE, Y_TICK_COUNT};
pub use hit_test::{Tooltip, TooltipRow};
pub use view::{
    LOAD_ERROR_MESSAGE, MarketTrendsView, NO_DATA_MESSAGE, REFRESH_INTERVAL, RefreshTimer,
};
