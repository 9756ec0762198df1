use crate::model::month::MonthKey;
use crate::model::status::ColorClass;

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub day: u32,
    pub color: ColorClass,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthSection {
    pub key: MonthKey,
    pub label: String,
    pub tiles: Vec<Tile>,
}

/// Per-month tally of tile colors.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub key: MonthKey,
    pub label: String,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub default: usize,
}

impl MonthSummary {
    pub fn from_section(section: &MonthSection) -> Self {
        let mut summary = Self {
            key: section.key,
            label: section.label.clone(),
            present: 0,
            late: 0,
            absent: 0,
            default: 0,
        };
        for tile in &section.tiles {
            match tile.color {
                ColorClass::Present => summary.present += 1,
                ColorClass::Late => summary.late += 1,
                ColorClass::Absent => summary.absent += 1,
                ColorClass::Default => summary.default += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.present + self.late + self.absent + self.default
    }
}
