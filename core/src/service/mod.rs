pub mod timer;
pub mod tooltip;
