use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Text;

/// A scrollable window over a block of pre-wrapped text.
#[derive(Debug, Clone, Default)]
pub struct ScrollView {
    content: Text<'static>,
    offset: usize,
    width: u16,
    height: u16,
}

impl ScrollView {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Replace the content, keeping the scroll offset where the new content allows.
    pub fn set_content(&mut self, content: Text<'static>) {
        self.content = content;
        self.clamp_offset();
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.clamp_offset();
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn content(&self) -> &Text<'static> {
        &self.content
    }

    pub fn line_count(&self) -> usize {
        self.content.lines.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.line_count().saturating_sub(usize::from(self.height))
    }

    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn goto_top(&mut self) {
        self.offset = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let page = usize::from(self.height.max(1));
        let half = (page / 2).max(1);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('d') if ctrl => self.scroll_down(half),
            KeyCode::Char('u') if ctrl => self.scroll_up(half),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ') => self.scroll_down(page),
            KeyCode::PageUp | KeyCode::Char('b') => self.scroll_up(page),
            KeyCode::Char('d') => self.scroll_down(half),
            KeyCode::Char('u') => self.scroll_up(half),
            KeyCode::Home | KeyCode::Char('g') => self.goto_top(),
            KeyCode::End | KeyCode::Char('G') => self.goto_bottom(),
            _ => {}
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let area = Rect {
            width: area.width.min(self.width),
            height: area.height.min(self.height),
            ..area
        };
        let visible = self
            .content
            .lines
            .iter()
            .skip(self.offset)
            .take(usize::from(area.height));
        for (row, line) in (0u16..).zip(visible) {
            buf.set_line(area.x, area.y + row, line, area.width);
        }
    }
}
