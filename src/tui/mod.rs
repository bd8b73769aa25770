//! Terminal front end for the feedback form

mod event;
mod render;
mod state;

pub use state::App;

use anyhow::Result;
use event::{Event, Handler};
use ratatui::crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Present the form until the user quits, then hand the state back
pub fn run(mut app: App) -> Result<App> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &Handler::new(100));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|()| app)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    loop {
        let mut drawn = Ok(());
        terminal.draw(|frame| drawn = render::render(frame, app))?;
        drawn?;

        match event_handler.next()? {
            Event::Key(key) => app.handle_key(key.code)?,
            Event::Tick | Event::Resize => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
