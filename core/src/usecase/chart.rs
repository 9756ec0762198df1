use chrono::{NaiveDate, TimeZone};
use log::debug;

use crate::model::month::Range;
use crate::model::status::StatusRecord;
use crate::model::tile::{MonthSection, MonthSummary};
use crate::usecase::grouping::group_by_month_in;
use crate::usecase::month_range::month_range;
use crate::usecase::tile_grid::build_sections;

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedChart {
    pub sections: Vec<MonthSection>,
    pub malformed: Vec<String>,
}

impl RenderedChart {
    pub fn summaries(&self) -> Vec<MonthSummary> {
        self.sections.iter().map(MonthSummary::from_section).collect()
    }
}

/// Renders caller records into month sections. Nothing is cached: every call
/// recomputes the range, the buckets and the tiles.
pub struct TileChart<'a> {
    records: &'a [StatusRecord],
    range: Range,
}

impl<'a> TileChart<'a> {
    pub fn new(records: &'a [StatusRecord], range: Range) -> Self {
        Self { records, range }
    }

    pub fn render_in<Tz: TimeZone>(&self, today: NaiveDate, tz: &Tz) -> RenderedChart {
        let keys = month_range(today, self.range);
        let buckets = group_by_month_in(self.records, tz);
        debug!(
            "Rendering {} months from {} records ({} buckets)",
            keys.len(),
            self.records.len(),
            buckets.len()
        );

        RenderedChart {
            sections: build_sections(&keys, &buckets),
            malformed: buckets.malformed().to_vec(),
        }
    }
}
