use std::time::Duration;

use chrono::NaiveDate;
use ratatui::layout::Rect;
use tilechart_core::{HoverPosition, HoverTooltip, MonthSection, Range, Tile, WallTimer};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// Index of a tile inside `App::sections`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRef {
    pub section: usize,
    pub day_index: usize,
}

pub struct App {
    pub sections: Vec<MonthSection>,
    pub range: Range,
    pub today: NaiveDate,
    pub tooltip: HoverTooltip<WallTimer>,
    pub cursor: Option<TileRef>,
    pub hovered: Option<TileRef>,
    /// Screen cell of every visible tile, refreshed on each draw.
    pub tile_areas: Vec<(Rect, TileRef)>,
}

impl App {
    pub fn new(sections: Vec<MonthSection>, range: Range, today: NaiveDate) -> App {
        App {
            sections,
            range,
            today,
            tooltip: HoverTooltip::new(WallTimer::new()),
            cursor: None,
            hovered: None,
            tile_areas: Vec::new(),
        }
    }

    pub fn tile(&self, tile_ref: TileRef) -> Option<&Tile> {
        self.sections
            .get(tile_ref.section)
            .and_then(|s| s.tiles.get(tile_ref.day_index))
    }

    pub fn tile_at(&self, column: u16, row: u16) -> Option<TileRef> {
        self.tile_areas
            .iter()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height
            })
            .map(|(_, tile_ref)| *tile_ref)
    }

    fn area_of(&self, tile_ref: TileRef) -> Option<Rect> {
        self.tile_areas
            .iter()
            .find(|(_, r)| *r == tile_ref)
            .map(|(area, _)| *area)
    }

    /// Moves the hover target, feeding leave/enter into the tooltip the same
    /// way a pointer crossing tile borders would.
    /// A tile without a screen cell has nowhere to anchor a popup and counts
    /// as no target.
    pub fn hover(&mut self, target: Option<TileRef>) {
        let target = target.and_then(|tile_ref| {
            self.tile(tile_ref)?;
            self.area_of(tile_ref).map(|area| (tile_ref, area))
        });
        if target.map(|(tile_ref, _)| tile_ref) == self.hovered {
            return;
        }
        if self.hovered.is_some() {
            self.tooltip.hover_leave();
        }
        if let Some((tile_ref, area)) = target {
            let position = HoverPosition {
                left: area.x as f32,
                top: area.y as f32,
            };
            if let Some(tile) = self
                .sections
                .get(tile_ref.section)
                .and_then(|s| s.tiles.get(tile_ref.day_index))
            {
                self.tooltip.hover_enter(tile, position);
            }
        }
        self.hovered = target.map(|(tile_ref, _)| tile_ref);
    }

    pub fn on_mouse_move(&mut self, column: u16, row: u16) {
        let target = self.tile_at(column, row);
        self.hover(target);
    }

    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        if self.sections.is_empty() {
            return;
        }

        let next = match self.cursor {
            None => TileRef {
                section: self.sections.len() - 1,
                day_index: 0,
            },
            Some(current) => {
                let last_section = self.sections.len() as i32 - 1;
                let section = (current.section as i32 + dy).clamp(0, last_section) as usize;
                let last_day = self.sections[section].tiles.len() as i32 - 1;
                let day_index = (current.day_index as i32 + dx).clamp(0, last_day.max(0)) as usize;
                TileRef { section, day_index }
            }
        };

        self.cursor = Some(next);
        self.hover(Some(next));
    }

    pub fn clear_cursor(&mut self) {
        self.cursor = None;
        self.hover(None);
    }

    /// Fires due tooltip timers. Returns whether a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.tooltip.tick()
    }

    pub fn poll_timeout(&self) -> Duration {
        self.tooltip
            .timer()
            .time_until_next()
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilechart_core::{build_sections, HoverState, MonthBuckets, MonthKey};

    fn app() -> App {
        let keys = [MonthKey::new(2024, 1).unwrap(), MonthKey::new(2024, 2).unwrap()];
        let sections = build_sections(&keys, &MonthBuckets::default());
        let mut app = App::new(
            sections,
            Range::Three,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        );
        for (s, section) in app.sections.iter().enumerate() {
            for d in 0..section.tiles.len() {
                let area = Rect::new(5 + d as u16 * 2, 4 + s as u16 * 2, 1, 1);
                app.tile_areas.push((area, TileRef { section: s, day_index: d }));
            }
        }
        app
    }

    #[test]
    fn test_tile_at_hits_tiles_only() {
        let app = app();
        assert_eq!(app.tile_at(5, 4), Some(TileRef { section: 0, day_index: 0 }));
        assert_eq!(app.tile_at(7, 6), Some(TileRef { section: 1, day_index: 1 }));
        assert_eq!(app.tile_at(6, 4), None);
        assert_eq!(app.tile_at(0, 0), None);
    }

    #[test]
    fn test_mouse_move_feeds_tooltip() {
        let mut app = app();
        app.on_mouse_move(5, 4);
        assert_eq!(app.tooltip.state(), HoverState::PendingShow);

        app.on_mouse_move(5, 4);
        assert_eq!(app.tooltip.state(), HoverState::PendingShow);

        app.on_mouse_move(0, 0);
        assert_eq!(app.tooltip.state(), HoverState::PendingHide);
        assert_eq!(app.hovered, None);
    }

    #[test]
    fn test_cursor_clamps_to_month_length() {
        let mut app = app();
        app.move_cursor(0, 0);
        assert_eq!(app.cursor, Some(TileRef { section: 1, day_index: 0 }));

        app.move_cursor(40, 0);
        assert_eq!(app.cursor, Some(TileRef { section: 1, day_index: 30 }));

        app.move_cursor(0, -1);
        assert_eq!(app.cursor, Some(TileRef { section: 0, day_index: 28 }));
        assert_eq!(app.tile(app.cursor.unwrap()).unwrap().label, "29th Feb 24");

        app.move_cursor(0, -5);
        assert_eq!(app.cursor.unwrap().section, 0);
    }

    #[test]
    fn test_cursor_on_undrawn_tile_shows_no_popup() {
        let mut app = app();
        app.tile_areas.truncate(10);

        app.move_cursor(0, 0);
        assert_eq!(app.cursor, Some(TileRef { section: 1, day_index: 0 }));
        assert_eq!(app.hovered, None);
        assert_eq!(app.tooltip.state(), HoverState::Idle);

        app.move_cursor(0, -1);
        assert_eq!(app.hovered, Some(TileRef { section: 0, day_index: 0 }));
        assert_eq!(app.tooltip.state(), HoverState::PendingShow);

        app.move_cursor(20, 0);
        assert_eq!(app.cursor, Some(TileRef { section: 0, day_index: 20 }));
        assert_eq!(app.hovered, None);
        assert_eq!(app.tooltip.state(), HoverState::PendingHide);

        std::thread::sleep(tilechart_core::HOVER_DELAY + Duration::from_millis(50));
        app.tick();
        assert_eq!(app.tooltip.state(), HoverState::Idle);
        assert!(app.tooltip.current_popup().is_none());
    }

    #[test]
    fn test_poll_timeout_follows_pending_timer() {
        let mut app = app();
        assert_eq!(app.poll_timeout(), IDLE_POLL);
        app.move_cursor(0, 0);
        assert!(app.poll_timeout() <= tilechart_core::HOVER_DELAY);
    }
}
