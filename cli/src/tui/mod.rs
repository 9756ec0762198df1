pub mod app;
pub mod ui;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::tui::app::App;

/// Interactive grid. Log output goes to stderr, so raise `RUST_LOG` only
/// with stderr redirected.
pub fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if event::poll(app.poll_timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Esc => app.clear_cursor(),
                    KeyCode::Left | KeyCode::Char('h') => app.move_cursor(-1, 0),
                    KeyCode::Right | KeyCode::Char('l') => app.move_cursor(1, 0),
                    KeyCode::Up | KeyCode::Char('k') => app.move_cursor(0, -1),
                    KeyCode::Down | KeyCode::Char('j') => app.move_cursor(0, 1),
                    _ => {}
                },
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Moved => {
                    app.on_mouse_move(mouse.column, mouse.row);
                }
                _ => {}
            }
        }

        app.tick();
    }
}
