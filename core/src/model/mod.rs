pub mod month;
pub mod status;
pub mod tile;
