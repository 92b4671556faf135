use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget};

use crate::ui::theme::Theme;

/// Rows taken by one entry: title, description, spacing.
const ITEM_HEIGHT: u16 = 3;

/// Rows taken by the title, the gap below it and the help line.
const CHROME_HEIGHT: u16 = 3;

pub const LIST_HELP: &str = "↑/k up • ↓/j down • enter select • backspace back • q quit";

/// One selectable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub title: String,
    pub description: String,
}

impl ListEntry {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A titled list with its own cursor.
///
/// The cursor always points at an existing row, or is `None` when the list is
/// empty.
#[derive(Debug, Clone)]
pub struct SelectList {
    title: String,
    items: Vec<ListEntry>,
    state: ListState,
    width: u16,
    height: u16,
}

impl SelectList {
    pub fn new(title: impl Into<String>, items: Vec<ListEntry>, width: u16, height: u16) -> Self {
        let mut list = Self {
            title: title.into(),
            items: Vec::new(),
            state: ListState::default(),
            width,
            height,
        };
        list.set_items(items);
        list
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[ListEntry] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the rows and put the cursor back on the first one.
    pub fn set_items(&mut self, items: Vec<ListEntry>) {
        self.items = items;
        self.state = ListState::default();
        if !self.items.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Index of the row under the cursor.
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Move the cursor to `index`, clamped to the last row.
    pub fn select(&mut self, index: usize) {
        if let Some(last) = self.items.len().checked_sub(1) {
            self.state.select(Some(index.min(last)));
        }
    }

    /// Number of rows one page jump moves the cursor.
    pub fn page_size(&self) -> usize {
        usize::from((self.height.saturating_sub(CHROME_HEIGHT) / ITEM_HEIGHT).max(1))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(current) = self.state.selected() else {
            return;
        };
        let last = self.items.len().saturating_sub(1);
        let page = self.page_size();

        let next = match key.code {
            KeyCode::Up | KeyCode::Char('k') => current.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (current + 1).min(last),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => (current + page).min(last),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => current.saturating_sub(page),
            KeyCode::Home | KeyCode::Char('g') => 0,
            KeyCode::End | KeyCode::Char('G') => last,
            _ => return,
        };
        self.state.select(Some(next));
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let area = Rect {
            width: area.width.min(self.width),
            height: area.height.min(self.height),
            ..area
        };
        let [title_area, _, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(Span::styled(
            format!(" {} ", self.title),
            theme.title,
        )))
        .render(title_area, buf);

        if self.items.is_empty() {
            Paragraph::new(Span::styled("No items.", theme.dimmed)).render(body_area, buf);
        } else {
            let rows: Vec<ListItem> = self
                .items
                .iter()
                .map(|entry| {
                    ListItem::new(Text::from(vec![
                        Line::from(Span::styled(entry.title.clone(), theme.content)),
                        Line::from(Span::styled(entry.description.clone(), theme.dimmed)),
                        Line::default(),
                    ]))
                })
                .collect();
            let list = List::new(rows)
                .highlight_style(theme.selected)
                .highlight_symbol("│ ");
            StatefulWidget::render(list, body_area, buf, &mut self.state);
        }

        Paragraph::new(Span::styled(LIST_HELP, theme.help)).render(help_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn entries(n: usize) -> Vec<ListEntry> {
        (0..n)
            .map(|i| ListEntry::new(format!("tool-{}", i), "desc"))
            .collect()
    }

    #[test]
    fn test_cursor_starts_on_first_row() {
        let list = SelectList::new("Tools", entries(3), 40, 20);
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn test_empty_list_has_no_cursor() {
        let mut list = SelectList::new("Tools", vec![], 40, 20);
        assert_eq!(list.selected(), None);
        list.handle_key(key(KeyCode::Down));
        list.select(3);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut list = SelectList::new("Tools", entries(3), 40, 20);
        list.handle_key(key(KeyCode::Up));
        assert_eq!(list.selected(), Some(0));
        for _ in 0..5 {
            list.handle_key(key(KeyCode::Char('j')));
        }
        assert_eq!(list.selected(), Some(2));
        list.handle_key(key(KeyCode::Char('g')));
        assert_eq!(list.selected(), Some(0));
        list.handle_key(key(KeyCode::End));
        assert_eq!(list.selected(), Some(2));
    }

    #[test]
    fn test_page_jump_uses_height() {
        // 3 chrome rows + 3 entries of 3 rows
        let mut list = SelectList::new("Tools", entries(10), 40, 12);
        assert_eq!(list.page_size(), 3);
        list.handle_key(key(KeyCode::PageDown));
        assert_eq!(list.selected(), Some(3));
        list.handle_key(key(KeyCode::Left));
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn test_set_items_resets_cursor() {
        let mut list = SelectList::new("Tools", entries(4), 40, 20);
        list.select(3);
        list.set_items(entries(2));
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn test_render_shows_title_rows_and_help() {
        let mut list = SelectList::new("Tools in Scanning", entries(2), 60, 12);
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        list.render(area, &mut buf, &Theme::default());
        let text = crate::ui::view::buffer_to_string(&buf);
        assert!(text.contains("Tools in Scanning"));
        assert!(text.contains("tool-0"));
        assert!(text.contains("tool-1"));
        assert!(text.contains("enter select"));
    }
}
