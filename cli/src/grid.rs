use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use tilechart_core::{ColorClass, MonthSection, MonthSummary};

const TILE: &str = "■";
const RESET: &str = "\x1b[0m";

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Present")]
    present: usize,
    #[tabled(rename = "Late")]
    late: usize,
    #[tabled(rename = "Absent")]
    absent: usize,
    #[tabled(rename = "No data")]
    default: usize,
    #[tabled(rename = "Days")]
    days: usize,
}

fn ansi_color(color: ColorClass) -> &'static str {
    match color {
        ColorClass::Present => "\x1b[32m",
        ColorClass::Late => "\x1b[33m",
        ColorClass::Absent => "\x1b[31m",
        ColorClass::Default => "\x1b[90m",
    }
}

/// One line per month: short label, then a tile per day.
pub fn format_grid(sections: &[MonthSection], use_color: bool) -> String {
    let mut out = String::new();
    for section in sections {
        out.push_str(&format!("{:<4}", section.label));
        for tile in &section.tiles {
            if use_color {
                out.push_str(ansi_color(tile.color));
                out.push_str(TILE);
                out.push_str(RESET);
            } else {
                out.push(legend_char(tile.color));
            }
            out.push(' ');
        }
        out.truncate(out.trim_end().len());
        out.push('\n');
    }
    out
}

fn legend_char(color: ColorClass) -> char {
    match color {
        ColorClass::Present => 'P',
        ColorClass::Late => 'L',
        ColorClass::Absent => 'A',
        ColorClass::Default => '.',
    }
}

pub fn show_grid(sections: &[MonthSection], use_color: bool) {
    if let (Some(first), Some(last)) = (sections.first(), sections.last()) {
        println!("\x1b[1;36m{} .. {}\x1b[0m", first.key, last.key);
    }
    print!("{}", format_grid(sections, use_color));
}

pub fn summary_table(summaries: &[MonthSummary]) -> Table {
    let rows: Vec<SummaryRow> = summaries
        .iter()
        .map(|s| SummaryRow {
            month: format!("{} ({})", s.label, s.key),
            present: s.present,
            late: s.late,
            absent: s.absent,
            default: s.default,
            days: s.total(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table
}

pub fn show_summary(summaries: &[MonthSummary]) {
    let mut table = summary_table(summaries);
    table.with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("{}", table);
}
