pub mod app;
pub mod content;
pub mod keymap;
pub mod resize;
pub mod terminal;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::{App, Message, NavigationState, Screen, Step};
pub use content::{build_detail_document, build_tool_list_items, DetailDocument};
pub use theme::Theme;
