pub mod chart;
pub mod grouping;
pub mod month_range;
pub mod tile_grid;
