//! Static styling for the browser.
//!
//! Colors are fixed; nothing here depends on runtime state.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Padding};

pub const BORDER: Color = Color::Indexed(63);
pub const TITLE_FG: Color = Color::Rgb(250, 250, 250); // #FAFAFA
pub const TITLE_BG: Color = Color::Rgb(125, 86, 244); // #7D56F4
pub const SECTION: Color = Color::Rgb(4, 181, 117); // #04B575
pub const COMMAND_FG: Color = Color::Rgb(255, 95, 135); // #FF5F87
pub const COMMAND_BG: Color = Color::Rgb(26, 26, 26); // #1a1a1a
pub const DESCRIPTION: Color = Color::Rgb(250, 250, 250); // #FAFAFA
pub const CONTENT: Color = Color::Rgb(217, 220, 207); // #D9DCCF
pub const HELP: Color = Color::Rgb(98, 98, 98); // #626262
pub const SELECTED: Color = Color::Rgb(238, 111, 248); // #EE6FF8
pub const DIMMED: Color = Color::Rgb(119, 119, 119); // #777777

/// Rows below the widgets kept free for help and title chrome.
pub const RESERVED_FOOTER: u16 = 4;

/// Extra columns the detail document leaves inside the frame.
pub const INNER_PADDING: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub border: Style,
    pub title: Style,
    pub section: Style,
    pub command: Style,
    pub description: Style,
    pub content: Style,
    pub help: Style,
    pub selected: Style,
    pub dimmed: Style,
    /// Horizontal and vertical padding inside the frame border.
    pub frame_padding: (u16, u16),
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Style::default().fg(BORDER),
            title: Style::default()
                .fg(TITLE_FG)
                .bg(TITLE_BG)
                .add_modifier(Modifier::BOLD),
            section: Style::default().fg(SECTION).add_modifier(Modifier::BOLD),
            command: Style::default().fg(COMMAND_FG).bg(COMMAND_BG),
            description: Style::default().fg(DESCRIPTION),
            content: Style::default().fg(CONTENT),
            help: Style::default().fg(HELP),
            selected: Style::default().fg(SELECTED).add_modifier(Modifier::BOLD),
            dimmed: Style::default().fg(DIMMED),
            frame_padding: (2, 1),
        }
    }
}

impl Theme {
    /// Columns and rows consumed by the app frame (border plus padding).
    pub fn frame_size(&self) -> (u16, u16) {
        let (pad_x, pad_y) = self.frame_padding;
        (2 + pad_x * 2, 2 + pad_y * 2)
    }

    /// The bordered, padded block every screen is drawn inside.
    pub fn frame_block(&self) -> Block<'static> {
        let (pad_x, pad_y) = self.frame_padding;
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border)
            .padding(Padding::new(pad_x, pad_x, pad_y, pad_y))
    }
}
