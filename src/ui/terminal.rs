use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::info;

use super::app::{App, Message, Step};
use super::theme::Theme;
use super::view;
use crate::catalog::CatalogStore;
use crate::errors::KresourError;

/// How long the loop waits for input before emitting a tick.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the browser on the alternate screen until the user quits.
pub fn run(catalog: &CatalogStore) -> Result<(), KresourError> {
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, App::new(catalog, Theme::default()));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: App<'_>) -> Result<(), KresourError> {
    let (width, height) = crossterm::terminal::size()?;
    let mut app = match app.update(Message::Resize { width, height })? {
        Step::Continue(app) => app,
        Step::Quit => return Ok(()),
    };
    info!(phases = app.catalog().len(), width, height, "Browser started");

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            view::draw(&mut app, area, frame.buffer_mut());
        })?;

        app = match app.update(next_message()?)? {
            Step::Continue(next) => next,
            Step::Quit => return Ok(()),
        };
    }
}

fn next_message() -> Result<Message, KresourError> {
    if !event::poll(TICK_RATE)? {
        return Ok(Message::Tick);
    }
    let message = match event::read()? {
        // Windows also reports key releases
        Event::Key(key) if key.kind == KeyEventKind::Press => Message::Key(key),
        Event::Resize(width, height) => Message::Resize { width, height },
        _ => Message::Tick,
    };
    Ok(message)
}
