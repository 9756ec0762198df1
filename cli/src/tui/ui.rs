use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use tilechart_core::{ColorClass, Popup};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, TileRef};

const LABEL_WIDTH: u16 = 5;
const TILE_STRIDE: u16 = 2;
const ROW_STRIDE: u16 = 2;

fn tile_color(color: ColorClass) -> Color {
    match color {
        ColorClass::Present => Color::Green,
        ColorClass::Late => Color::Yellow,
        ColorClass::Absent => Color::Red,
        ColorClass::Default => Color::DarkGray,
    }
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Grid
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let title = format!(
        "TILECHART  last {} months to {}",
        app.range,
        app.today.format("%Y-%m-%d")
    );
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_grid(f, app, main_chunks[1]);

    let footer = Paragraph::new("mouse/arrows: Inspect day | Esc: Clear | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);

    if let Some(popup) = app.tooltip.current_popup() {
        draw_popup(f, popup, size);
    }
}

fn draw_grid(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Days ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    app.tile_areas.clear();
    // Leave room above the first row for the popup.
    let top = inner.y + 1;

    for (s, section) in app.sections.iter().enumerate() {
        let y = top + s as u16 * ROW_STRIDE;
        if y >= inner.y + inner.height {
            break;
        }

        let mut spans = vec![Span::styled(
            format!("{:<width$}", section.label, width = LABEL_WIDTH as usize),
            Style::default().fg(Color::Blue),
        )];
        for (d, tile) in section.tiles.iter().enumerate() {
            let tile_ref = TileRef {
                section: s,
                day_index: d,
            };
            let mut style = Style::default().fg(tile_color(tile.color));
            if app.cursor == Some(tile_ref) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled("■", style));
            spans.push(Span::raw(" "));

            let x = inner.x + LABEL_WIDTH + d as u16 * TILE_STRIDE;
            if x < inner.x + inner.width {
                app.tile_areas.push((Rect::new(x, y, 1, 1), tile_ref));
            }
        }

        let row = Rect::new(inner.x, y, inner.width, 1);
        f.render_widget(Paragraph::new(Line::from(spans)), row);
    }
}

fn draw_popup(f: &mut Frame, popup: &Popup, bounds: Rect) {
    let width = (popup.content.width() as u16 + 4).min(bounds.width);
    let height = 3.min(bounds.height);
    let max_x = bounds.x + bounds.width - width;
    let max_y = bounds.y + bounds.height - height;
    let x = (popup.x.max(0.0) as u16).clamp(bounds.x, max_x);
    let y = (popup.y.max(0.0) as u16).clamp(bounds.y, max_y);
    let area = Rect::new(x, y, width, height);

    let widget = Paragraph::new(popup.content.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(Clear, area);
    f.render_widget(widget, area);
}
