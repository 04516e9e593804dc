//! Terminal UI entry point and event loop.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;
pub mod widgets;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{
    poll as ct_poll, read as ct_read, DisableMouseCapture, EnableMouseCapture, Event,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use self::app::App;
use crate::api::HttpMailApi;
use crate::config::Config;
use crate::dispatch::Dispatcher;

/// Run the viewer. Blocks until the user quits.
pub fn run_tui(config: &Config) -> anyhow::Result<()> {
    // Validate the URL before touching the terminal so errors print normally
    let api = HttpMailApi::new(&config.server.url, config.server.timeout())?;
    let dispatcher = Dispatcher::new(Arc::new(api));
    let app = App::new(config);

    // Setup terminal (alternate screen)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the event loop
    let result = run_event_loop(&mut terminal, app, &dispatcher);

    // Restore terminal (always, even on error)
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop: dispatch → apply → render → poll → handle → repeat.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    dispatcher: &Dispatcher,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    app.mount(Instant::now());

    loop {
        // Hand queued requests to the workers
        for request in app.take_requests() {
            dispatcher.dispatch(request);
        }

        // Apply whatever has completed
        for response in dispatcher.drain() {
            app.apply(response);
        }

        // Render
        terminal.draw(|frame| {
            ui::render(frame, &mut app);
        })?;

        // Poll for events, waking early if the refresh timer is due
        let wait = app
            .timer
            .time_until_due(Instant::now())
            .map_or(tick_rate, |due| due.min(tick_rate));
        if ct_poll(wait)? {
            match ct_read()? {
                Event::Key(key) => event::handle_key_event(&mut app, key)?,
                Event::Mouse(mouse) => event::handle_mouse_event(&mut app, mouse),
                _ => {}
            }
        }

        // Periodic housekeeping
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    app.teardown();
    Ok(())
}
