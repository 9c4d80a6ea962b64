//! Keypad grid for the terminal front end
//!
//! A 5×4 button grid mirroring the calculator face: clear/erase/sign/÷ on
//! top, digit rows beneath, percent and equals on the bottom row. Buttons
//! know the engine action they emit; the grid supports mouse hit-testing
//! and a pressed highlight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::engine::Action;
use crate::core::operations::Operator;

/// Keys a keypad button can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadKey {
    /// A digit key (0-9)
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// One of the four operator keys
    Operator(Operator),
    /// The equals key
    Equals,
    /// The clear key (C)
    Clear,
    /// The erase key (⌫)
    Erase,
    /// The sign toggle key (±)
    ToggleSign,
    /// The percent key (%)
    Percent,
}

impl PadKey {
    /// The engine action this key triggers
    #[must_use]
    pub fn action(&self) -> Action {
        match self {
            Self::Digit(digit) => Action::Digit(*digit),
            Self::Decimal => Action::Decimal,
            Self::Operator(op) => Action::Operator(*op),
            Self::Equals => Action::Equals,
            Self::Clear => Action::Clear,
            Self::Erase => Action::Erase,
            Self::ToggleSign => Action::ToggleSign,
            Self::Percent => Action::Percent,
        }
    }

    /// The character shown on the button face
    #[must_use]
    pub fn label(&self) -> char {
        match self {
            Self::Digit(digit) => char::from_digit(u32::from(*digit), 10).unwrap_or('?'),
            Self::Decimal => '.',
            Self::Operator(op) => op.glyph(),
            Self::Equals => '=',
            Self::Clear => 'C',
            Self::Erase => '⌫',
            Self::ToggleSign => '±',
            Self::Percent => '%',
        }
    }

    /// Maps a typed character to the key it presses, if any
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if let Some(digit) = ch.to_digit(10) {
            return Some(Self::Digit(digit as u8));
        }
        if let Some(op) = Operator::from_key(ch) {
            return Some(Self::Operator(op));
        }
        match ch {
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The key this button presses
    pub key: PadKey,
    /// The character on the button face
    pub label: char,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates an unpressed button for a key
    #[must_use]
    pub fn new(key: PadKey) -> Self {
        Self {
            key,
            label: key.label(),
            pressed: false,
        }
    }
}

/// The keypad layout - a 5×4 grid of buttons
/// ```text
/// [ C ] [ ⌫ ] [ ± ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ % ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in row-major order
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let keys = [
            // Row 0: C ⌫ ± ÷
            PadKey::Clear,
            PadKey::Erase,
            PadKey::ToggleSign,
            PadKey::Operator(Operator::Divide),
            // Row 1: 7 8 9 ×
            PadKey::Digit(7),
            PadKey::Digit(8),
            PadKey::Digit(9),
            PadKey::Operator(Operator::Multiply),
            // Row 2: 4 5 6 -
            PadKey::Digit(4),
            PadKey::Digit(5),
            PadKey::Digit(6),
            PadKey::Operator(Operator::Subtract),
            // Row 3: 1 2 3 +
            PadKey::Digit(1),
            PadKey::Digit(2),
            PadKey::Digit(3),
            PadKey::Operator(Operator::Add),
            // Row 4: 0 . % =
            PadKey::Digit(0),
            PadKey::Decimal,
            PadKey::Percent,
            PadKey::Equals,
        ];

        Self {
            buttons: keys.into_iter().map(KeypadButton::new).collect(),
            cols: 4,
            rows: 5,
        }
    }

    /// Number of buttons on the pad
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions as (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button by index, row-major
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Button by grid position
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Index of the button for a key
    #[must_use]
    pub fn find_button(&self, key: PadKey) -> Option<usize> {
        self.buttons.iter().position(|b| b.key == key)
    }

    /// Marks the button at `index` as pressed
    pub fn press_button(&mut self, index: usize) {
        if let Some(button) = self.buttons.get_mut(index) {
            button.pressed = true;
        }
    }

    /// Releases every button
    pub fn release_all(&mut self) {
        for button in &mut self.buttons {
            button.pressed = false;
        }
    }

    /// Highlights exactly the button for `key`, releasing the rest
    pub fn highlight(&mut self, key: PadKey) {
        self.release_all();
        if let Some(index) = self.find_button(key) {
            self.press_button(index);
        }
    }

    /// Iterates all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Iterates buttons with their (row, col) positions
    pub fn buttons_with_positions(&self) -> impl Iterator<Item = ((usize, usize), &KeypadButton)> {
        self.buttons.iter().enumerate().map(move |(i, button)| {
            let row = i / self.cols;
            let col = i % self.cols;
            ((row, col), button)
        })
    }

    /// Converts a click position inside the rendered pad to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // The border takes one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let button_width = (area.width - 2) / self.cols as u16;
        let button_height = (area.height - 2) / self.rows as u16;
        if button_width == 0 || button_height == 0 {
            return None;
        }

        let col = (inner_x / button_width) as usize;
        let row = (inner_y / button_height) as usize;
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    dark: bool,
    erase_flash: bool,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a keypad widget; `erase_flash` briefly inverts the erase key
    #[must_use]
    pub fn new(keypad: &'a Keypad, dark: bool, erase_flash: bool) -> Self {
        Self {
            keypad,
            dark,
            erase_flash,
        }
    }

    fn button_style(&self, button: &KeypadButton) -> Style {
        if self.erase_flash && button.key == PadKey::Erase {
            return Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD);
        }
        if button.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        let digit_color = if self.dark { Color::White } else { Color::Black };
        match button.key {
            PadKey::Digit(_) | PadKey::Decimal => Style::default().fg(digit_color),
            PadKey::Operator(_) => Style::default().fg(Color::Yellow),
            PadKey::Equals => Style::default().fg(Color::Green),
            PadKey::Clear | PadKey::Erase => Style::default().fg(Color::Red),
            PadKey::ToggleSign | PadKey::Percent => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 4 || inner.height < 5 {
            return; // too small to render buttons
        }

        let button_width = inner.width / self.keypad.cols as u16;
        let button_height = inner.height / self.keypad.rows as u16;

        for ((row, col), button) in self.keypad.buttons_with_positions() {
            let x = inner.x + (col as u16 * button_width);
            let y = inner.y + (row as u16 * button_height);
            let style = self.button_style(button);

            if button_width >= 3 {
                let label = format!("[{}]", button.label);
                let label_x = x + (button_width.saturating_sub(3)) / 2;
                let label_y = y + button_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), button_width);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== PadKey tests =====

    #[test]
    fn test_key_actions() {
        assert_eq!(PadKey::Digit(5).action(), Action::Digit(5));
        assert_eq!(PadKey::Decimal.action(), Action::Decimal);
        assert_eq!(
            PadKey::Operator(Operator::Add).action(),
            Action::Operator(Operator::Add)
        );
        assert_eq!(PadKey::Equals.action(), Action::Equals);
        assert_eq!(PadKey::Clear.action(), Action::Clear);
        assert_eq!(PadKey::Erase.action(), Action::Erase);
        assert_eq!(PadKey::ToggleSign.action(), Action::ToggleSign);
        assert_eq!(PadKey::Percent.action(), Action::Percent);
    }

    #[test]
    fn test_key_labels() {
        assert_eq!(PadKey::Digit(7).label(), '7');
        assert_eq!(PadKey::Decimal.label(), '.');
        assert_eq!(PadKey::Operator(Operator::Divide).label(), '÷');
        assert_eq!(PadKey::Equals.label(), '=');
        assert_eq!(PadKey::Clear.label(), 'C');
        assert_eq!(PadKey::Erase.label(), '⌫');
        assert_eq!(PadKey::ToggleSign.label(), '±');
        assert_eq!(PadKey::Percent.label(), '%');
    }

    #[test]
    fn test_key_from_char() {
        assert_eq!(PadKey::from_char('4'), Some(PadKey::Digit(4)));
        assert_eq!(PadKey::from_char('.'), Some(PadKey::Decimal));
        assert_eq!(
            PadKey::from_char('*'),
            Some(PadKey::Operator(Operator::Multiply))
        );
        assert_eq!(PadKey::from_char('='), Some(PadKey::Equals));
        assert_eq!(PadKey::from_char('c'), Some(PadKey::Clear));
        assert_eq!(PadKey::from_char('%'), Some(PadKey::Percent));
        assert_eq!(PadKey::from_char('x'), None);
    }

    // ===== Keypad layout tests =====

    #[test]
    fn test_keypad_has_twenty_buttons() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 20);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_top_row() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().key, PadKey::Clear);
        assert_eq!(keypad.get_button_at(0, 1).unwrap().key, PadKey::Erase);
        assert_eq!(keypad.get_button_at(0, 2).unwrap().key, PadKey::ToggleSign);
        assert_eq!(
            keypad.get_button_at(0, 3).unwrap().key,
            PadKey::Operator(Operator::Divide)
        );
    }

    #[test]
    fn test_keypad_digit_rows() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(1, 0).unwrap().label, '7');
        assert_eq!(keypad.get_button_at(2, 1).unwrap().label, '5');
        assert_eq!(keypad.get_button_at(3, 2).unwrap().label, '3');
        assert_eq!(keypad.get_button_at(4, 0).unwrap().label, '0');
    }

    #[test]
    fn test_keypad_bottom_row() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(4, 1).unwrap().key, PadKey::Decimal);
        assert_eq!(keypad.get_button_at(4, 2).unwrap().key, PadKey::Percent);
        assert_eq!(keypad.get_button_at(4, 3).unwrap().key, PadKey::Equals);
    }

    #[test]
    fn test_keypad_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.get_button(100).is_none());
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(0, 4).is_none());
    }

    #[test]
    fn test_every_digit_has_a_button() {
        let keypad = Keypad::new();
        for digit in 0..=9 {
            assert!(
                keypad.find_button(PadKey::Digit(digit)).is_some(),
                "missing button for digit {digit}"
            );
        }
    }

    #[test]
    fn test_every_operator_has_a_button() {
        let keypad = Keypad::new();
        for op in Operator::all() {
            assert!(keypad.find_button(PadKey::Operator(op)).is_some());
        }
    }

    #[test]
    fn test_button_positions_unique() {
        let keypad = Keypad::new();
        let mut keys = std::collections::HashSet::new();
        for button in keypad.buttons() {
            assert!(keys.insert(button.key), "duplicate key {:?}", button.key);
        }
    }

    // ===== Highlight tests =====

    #[test]
    fn test_press_and_release() {
        let mut keypad = Keypad::new();
        keypad.press_button(0);
        assert!(keypad.get_button(0).unwrap().pressed);
        keypad.release_all();
        assert!(keypad.buttons().all(|b| !b.pressed));
    }

    #[test]
    fn test_highlight_releases_others() {
        let mut keypad = Keypad::new();
        keypad.press_button(0);
        keypad.press_button(5);
        keypad.highlight(PadKey::Equals);

        let pressed: Vec<_> = keypad.buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].key, PadKey::Equals);
    }

    // ===== Hit-test tests =====

    #[test]
    fn test_hit_test_inside() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        assert!(keypad.hit_test(area, 10, 5).is_some());
    }

    #[test]
    fn test_hit_test_outside_and_border() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 10, 22, 12);
        assert!(keypad.hit_test(area, 0, 0).is_none());
        assert!(keypad.hit_test(area, 10, 10).is_none()); // border cell
        assert!(keypad.hit_test(area, 100, 100).is_none());
    }

    #[test]
    fn test_hit_test_finds_clear_in_top_left() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 22, 12);
        let index = keypad.hit_test(area, 2, 1).unwrap();
        assert_eq!(keypad.get_button(index).unwrap().key, PadKey::Clear);
    }

    // ===== Widget tests =====

    #[test]
    fn test_widget_renders_labels() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad, false, false);
        let area = Rect::new(0, 0, 22, 12);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Keypad"));
        assert!(content.contains("[7]"));
        assert!(content.contains("[=]"));
        assert!(content.contains("[C]"));
    }

    #[test]
    fn test_widget_render_too_small_does_not_panic() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad, true, false);
        let area = Rect::new(0, 0, 5, 4);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
    }

    #[test]
    fn test_widget_renders_flash_and_pressed() {
        let mut keypad = Keypad::new();
        keypad.highlight(PadKey::Digit(7));
        let widget = KeypadWidget::new(&keypad, false, true);
        let area = Rect::new(0, 0, 22, 12);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let content: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("[⌫]"));
        assert!(content.contains("[7]"));
    }
}
