//! Rendering for the terminal front end
//!
//! Expression trail above a right-aligned display, keypad beneath, history
//! sidebar on the right when visible. All colors come from a small palette
//! switched by the engine's theme flag.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Width of the history sidebar when visible
const HISTORY_WIDTH: u16 = 30;

/// Screen regions of the calculator UI
#[derive(Debug, Clone, Copy)]
pub struct Areas {
    /// Expression trail line
    pub expression: Rect,
    /// Main display block
    pub display: Rect,
    /// Keypad grid
    pub keypad: Rect,
    /// History sidebar; zero-width while hidden
    pub history: Rect,
}

/// Splits a frame into the calculator's regions
#[must_use]
pub fn areas(frame: Rect, show_history: bool) -> Areas {
    let sidebar = if show_history { HISTORY_WIDTH } else { 0 };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(sidebar)])
        .split(frame);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // expression trail
            Constraint::Length(3),  // display
            Constraint::Min(12),    // keypad
        ])
        .split(columns[0]);

    Areas {
        expression: main[0],
        display: main[1],
        keypad: main[2],
        history: columns[1],
    }
}

/// Maps a click inside the history sidebar to an entry index
#[must_use]
pub fn history_index_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    if area.width < 3 || area.height < 3 {
        return None;
    }
    let inside_x = x > area.x && x < area.x + area.width - 1;
    let inside_y = y > area.y && y < area.y + area.height - 1;
    if inside_x && inside_y {
        Some(usize::from(y - area.y - 1))
    } else {
        None
    }
}

/// Renders the calculator UI into a frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    frame.render_widget(CalculatorScreen::new(app), frame.area());
}

/// Theme-dependent colors
struct Palette {
    fg: Color,
    dim: Color,
    accent: Color,
}

impl Palette {
    fn for_theme(dark: bool) -> Self {
        if dark {
            Self {
                fg: Color::White,
                dim: Color::Gray,
                accent: Color::LightBlue,
            }
        } else {
            Self {
                fg: Color::Black,
                dim: Color::DarkGray,
                accent: Color::Blue,
            }
        }
    }
}

/// Whole-screen widget over the app state
#[derive(Debug)]
pub struct CalculatorScreen<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorScreen<'a> {
    /// Creates the screen widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, areas: Areas, buf: &mut Buffer, palette: &Palette) {
        Paragraph::new(self.app.calculator().expression().to_string())
            .alignment(Alignment::Right)
            .style(Style::default().fg(palette.dim))
            .render(areas.expression, buf);

        Paragraph::new(self.app.calculator().display())
            .alignment(Alignment::Right)
            .style(Style::default().fg(palette.fg).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .title(" pocket calculator ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.accent)),
            )
            .render(areas.display, buf);
    }

    fn render_history(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        let block = Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.dim));

        let history = self.app.calculator().history();
        if history.is_empty() {
            Paragraph::new("no history yet")
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.dim))
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = history
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let style = if index == self.app.selected() {
                    Style::default().fg(Color::Black).bg(palette.accent)
                } else {
                    Style::default().fg(palette.fg)
                };
                ListItem::new(Line::from(Span::styled(entry.to_string(), style)))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}

impl Widget for CalculatorScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let areas = areas(area, self.app.show_history());
        let dark = self.app.calculator().dark_mode();
        let palette = Palette::for_theme(dark);

        self.render_display(areas, buf, &palette);
        KeypadWidget::new(self.app.keypad(), dark, self.app.erase_flash())
            .render(areas.keypad, buf);

        if areas.history.width > 0 {
            self.render_history(areas.history, buf, &palette);
        }
    }
}
