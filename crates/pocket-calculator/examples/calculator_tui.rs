//! Calculator TUI example
//!
//! Run with: cargo run --example calculator_tui
//!
//! Type digits and operators, Enter or `=` for equals, Backspace to erase,
//! Esc to clear, `h` for the history sidebar, `t` to switch themes, `q` to
//! quit. The keypad is clickable.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use pocket_calculator::tui::{self, CalculatorApp, InputHandler, UiAction};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Traces are off unless RUST_LOG asks for them; they go to stderr so
    // the alternate screen stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let input = InputHandler::new();

    loop {
        terminal.draw(|frame| tui::render(&app, frame))?;
        app.on_tick();

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle(input.handle_key(key)),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let frame = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(&mut app, frame, mouse);
                }
                _ => {}
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Routes a left click to the keypad button or history entry under it
fn handle_mouse(app: &mut CalculatorApp, frame: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    let areas = tui::areas(frame, app.show_history());
    if let Some(index) = app.keypad().hit_test(areas.keypad, mouse.column, mouse.row) {
        if let Some(key) = app.keypad().get_button(index).map(|button| button.key) {
            app.handle(UiAction::Key(key));
        }
    } else if let Some(row) = tui::history_index_at(areas.history, mouse.column, mouse.row) {
        app.set_selection(row);
        app.handle(UiAction::RecallSelected);
    }
}
