//! Recomputes widget geometry when the terminal size changes.

use tracing::debug;

use super::app::App;
use super::content::build_detail_document;
use super::theme::{Theme, INNER_PADDING, RESERVED_FOOTER};
use crate::errors::KresourError;

/// Widget dimensions derived from a terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub widget_width: u16,
    pub widget_height: u16,
    /// Wrap width for the detail document, never below 1.
    pub content_width: u16,
}

pub fn frame_layout(theme: &Theme, width: u16, height: u16) -> FrameLayout {
    let (margin_w, margin_h) = theme.frame_size();
    let widget_width = width.saturating_sub(margin_w);
    FrameLayout {
        widget_width,
        widget_height: height.saturating_sub(margin_h).saturating_sub(RESERVED_FOOTER),
        content_width: widget_width.saturating_sub(INNER_PADDING).max(1),
    }
}

/// Store the new size, resize every built widget and rewrap the detail page.
pub fn apply(app: &mut App<'_>, width: u16, height: u16) -> Result<(), KresourError> {
    app.nav.width = width;
    app.nav.height = height;
    let layout = frame_layout(&app.theme, width, height);

    app.phase_list.set_size(layout.widget_width, layout.widget_height);
    if let Some(tools) = app.tool_list.as_mut() {
        tools.list.set_size(layout.widget_width, layout.widget_height);
    }
    if let Some(detail) = app.detail.as_mut() {
        detail.view.set_size(layout.widget_width, layout.widget_height);
        let tool = app.catalog.tool_at(detail.phase, detail.tool)?;
        let document = build_detail_document(tool, layout.content_width, &app.theme);
        detail.view.set_content(document.into_text());
    }

    debug!(width, height, content_width = layout.content_width, "Applied resize");
    Ok(())
}
