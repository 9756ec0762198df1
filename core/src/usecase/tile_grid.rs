use crate::model::month::MonthKey;
use crate::model::status::{ColorClass, Status};
use crate::model::tile::{MonthSection, Tile};
use crate::time::{short_month_name, tile_label};
use crate::usecase::grouping::{DayEntry, MonthBuckets};

pub fn build_sections(keys: &[MonthKey], buckets: &MonthBuckets) -> Vec<MonthSection> {
    keys.iter()
        .map(|&key| build_section(key, buckets.get(key)))
        .collect()
}

/// One tile per calendar day of `key`.
pub fn build_section(key: MonthKey, entries: &[DayEntry]) -> MonthSection {
    let tiles = (1..=key.days())
        .map(|day| Tile {
            day,
            color: ColorClass::from(resolve_status(entries, day)),
            label: tile_label(key.year, key.month, day),
        })
        .collect();

    MonthSection {
        key,
        label: short_month_name(key.month).to_string(),
        tiles,
    }
}

/// First entry for `day` wins, even if it carries no status.
pub fn resolve_status(entries: &[DayEntry], day: u32) -> Option<Status> {
    entries
        .iter()
        .find(|entry| entry.day == day)
        .and_then(|entry| entry.status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month).unwrap()
    }

    #[test]
    fn test_tile_count_matches_calendar() {
        let empty = MonthBuckets::default();
        let sections = build_sections(&[key(2024, 1), key(2023, 1), key(2024, 3)], &empty);
        let counts: Vec<usize> = sections.iter().map(|s| s.tiles.len()).collect();
        assert_eq!(counts, vec![29, 28, 30]);
    }

    #[test]
    fn test_tiles_are_numbered_from_one() {
        let section = build_section(key(2024, 0), &[]);
        let days: Vec<u32> = section.tiles.iter().map(|t| t.day).collect();
        assert_eq!(days, (1..=31).collect::<Vec<_>>());
        assert_eq!(section.label, "Jan");
        assert_eq!(section.tiles[21].label, "22nd Jan 24");
    }

    #[test]
    fn test_first_match_wins() {
        let entries = [
            DayEntry { day: 10, status: Some(Status::Late) },
            DayEntry { day: 10, status: Some(Status::Present) },
        ];
        assert_eq!(resolve_status(&entries, 10), Some(Status::Late));
        assert_eq!(resolve_status(&entries, 11), None);
    }

    #[test]
    fn test_first_match_without_status_shadows_later_entries() {
        let entries = [
            DayEntry { day: 3, status: None },
            DayEntry { day: 3, status: Some(Status::Absent) },
        ];
        let section = build_section(key(2024, 3), &entries);
        assert_eq!(section.tiles[2].color, ColorClass::Default);
    }

    #[test]
    fn test_colors_follow_status() {
        let entries = [
            DayEntry { day: 1, status: Some(Status::Present) },
            DayEntry { day: 2, status: Some(Status::Late) },
            DayEntry { day: 3, status: Some(Status::Absent) },
        ];
        let section = build_section(key(2024, 3), &entries);
        let colors: Vec<ColorClass> = section.tiles.iter().take(4).map(|t| t.color).collect();
        assert_eq!(
            colors,
            vec![
                ColorClass::Present,
                ColorClass::Late,
                ColorClass::Absent,
                ColorClass::Default,
            ]
        );
    }
}
