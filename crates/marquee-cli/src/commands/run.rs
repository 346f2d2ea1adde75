use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, info};

use marquee_core::AppConfig;
use marquee_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    ui, App, Theme,
};

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            // Leave the shell usable when the screen could not be taken over
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            disable_raw_mode()?;
            return Err(e);
        }
    };

    let result = run_app(&mut terminal, &config);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Marquee"))?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, config: &AppConfig) -> Result<()> {
    let event_handler = EventHandler::with_frame_rate(config.ui.animation_fps);
    info!(
        velocity = config.marquee.velocity,
        spacing = config.marquee.spacing,
        frame_ms = event_handler.tick_rate().as_millis() as u64,
        "Starting marquee"
    );

    let mut app = App::new(config, Theme::default(), Instant::now());

    // Main loop: one tick and one draw per iteration
    loop {
        app.on_frame(Instant::now());
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        match event_handler.next()? {
            Some(AppEvent::Key(key)) => app.apply(handle_key_event(key)),
            Some(AppEvent::Mouse(mouse)) => app.apply(handle_mouse_event(mouse)),
            Some(AppEvent::Resize(width, height)) => {
                debug!(width, height, "Terminal resized");
            }
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            break;
        }
    }

    info!("Marquee stopped");
    Ok(())
}
