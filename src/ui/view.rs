use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use super::app::{App, Screen};

/// Draw the active screen inside the themed frame.
pub fn draw(app: &mut App<'_>, area: Rect, buf: &mut Buffer) {
    let block = app.theme.frame_block();
    let inner = block.inner(area);
    block.render(area, buf);

    match app.nav.screen {
        Screen::Catalog => app.phase_list.render(inner, buf, &app.theme),
        Screen::ToolList { .. } => {
            if let Some(tools) = app.tool_list.as_mut() {
                tools.list.render(inner, buf, &app.theme);
            }
        }
        Screen::ToolDetail { .. } => {
            if let Some(detail) = app.detail.as_ref() {
                detail.view.render(inner, buf);
            }
        }
    }
}

/// Render the app into an off-screen buffer and return it as plain text.
pub fn render_to_string(app: &mut App<'_>, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    draw(app, area, &mut buf);
    buffer_to_string(&buf)
}

/// Buffer rows joined by newlines, trailing blanks trimmed.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let width = usize::from(buf.area.width.max(1));
    buf.content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
