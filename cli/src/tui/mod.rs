pub mod app;
pub mod ui;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use curriculum_core::{AppDataRepository, Clock};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::tui::app::App;

pub fn run<R: AppDataRepository>(repo: R) -> Result<()> {
    // Load before touching the terminal so errors print normally
    let mut app = App::new(repo, Clock::System.today())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<R: AppDataRepository>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.message = None;
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Left | KeyCode::Char('h') => app.previous_phase(),
                    KeyCode::Right | KeyCode::Char('l') => app.next_phase(),
                    KeyCode::Down | KeyCode::Char('j') => app.next_week(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_week(),
                    KeyCode::Char('c') => app.go_to_current(),
                    KeyCode::Char('t') => app.toggle_theme(),
                    KeyCode::Char('r') => app.refresh(),
                    _ => {}
                }
            }
        }
    }
}
