pub mod error;
pub mod model;
pub mod service;
pub mod time;
pub mod usecase;

pub use error::TilechartError;
pub use model::month::{MonthKey, Range};
pub use model::status::{ColorClass, Status, StatusRecord};
pub use model::tile::{MonthSection, MonthSummary, Tile};
pub use service::timer::{ManualTimer, Timer, TimerHandle, WallTimer};
pub use service::tooltip::{HoverPosition, HoverState, HoverTooltip, Popup, HOVER_DELAY};
pub use time::{days_in_month, ordinal_suffix, tile_label};
pub use usecase::chart::{RenderedChart, TileChart};
pub use usecase::grouping::{group_by_month_in, DayEntry, MonthBuckets};
pub use usecase::month_range::month_range;
pub use usecase::tile_grid::build_sections;
