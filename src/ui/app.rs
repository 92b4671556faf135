//! Navigation between the catalog, tool list and tool detail screens.
//!
//! The [`App`] owns all mutable browser state. Each [`Message`] moves the app
//! into [`App::update`], which hands it back inside [`Step::Continue`] or ends
//! the session with [`Step::Quit`].

use crossterm::event::KeyEvent;
use tracing::debug;

use super::content::{build_detail_document, build_tool_list_items};
use super::keymap::{self, KeyAction};
use super::resize::{self, frame_layout};
use super::theme::Theme;
use super::widgets::{ListEntry, ScrollView, SelectList};
use crate::catalog::CatalogStore;
use crate::errors::KresourError;

pub const CATALOG_TITLE: &str = "Cybersecurity Phases";

/// The active screen, carrying the indices that are valid in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    ToolList { phase: usize },
    ToolDetail { phase: usize, tool: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub screen: Screen,
    pub width: u16,
    pub height: u16,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            screen: Screen::Catalog,
            width: 0,
            height: 0,
        }
    }
}

/// Input the event loop feeds to [`App::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    Tick,
}

pub enum Step<'a> {
    Continue(App<'a>),
    Quit,
}

/// Tool list built for one phase.
#[derive(Debug, Clone)]
pub struct ToolListScreen {
    pub phase: usize,
    pub list: SelectList,
}

/// Detail viewport built for one tool.
#[derive(Debug, Clone)]
pub struct DetailScreen {
    pub phase: usize,
    pub tool: usize,
    pub view: ScrollView,
}

pub struct App<'a> {
    pub(super) catalog: &'a CatalogStore,
    pub(super) theme: Theme,
    pub(super) nav: NavigationState,
    pub(super) phase_list: SelectList,
    pub(super) tool_list: Option<ToolListScreen>,
    pub(super) detail: Option<DetailScreen>,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a CatalogStore, theme: Theme) -> Self {
        let entries = catalog
            .phases()
            .iter()
            .map(|phase| ListEntry::new(phase.name.clone(), phase.description.clone()))
            .collect();
        Self {
            catalog,
            theme,
            nav: NavigationState::default(),
            phase_list: SelectList::new(CATALOG_TITLE, entries, 0, 0),
            tool_list: None,
            detail: None,
        }
    }

    pub fn update(mut self, message: Message) -> Result<Step<'a>, KresourError> {
        match message {
            Message::Resize { width, height } => resize::apply(&mut self, width, height)?,
            Message::Tick => {}
            Message::Key(key) => match keymap::classify(&key) {
                KeyAction::Quit => {
                    debug!(screen = ?self.nav.screen, "Quit requested");
                    return Ok(Step::Quit);
                }
                KeyAction::Back => self.back(),
                KeyAction::Select => self.select(key)?,
                KeyAction::Widget => self.delegate(key),
            },
        }
        Ok(Step::Continue(self))
    }

    fn back(&mut self) {
        let next = match self.nav.screen {
            Screen::ToolDetail { phase, .. } => Screen::ToolList { phase },
            Screen::ToolList { .. } | Screen::Catalog => Screen::Catalog,
        };
        if next != self.nav.screen {
            debug!(from = ?self.nav.screen, to = ?next, "Navigated back");
            self.nav.screen = next;
        }
    }

    fn select(&mut self, key: KeyEvent) -> Result<(), KresourError> {
        match self.nav.screen {
            Screen::Catalog => self.open_phase(),
            Screen::ToolList { phase } => self.open_tool(phase),
            Screen::ToolDetail { .. } => {
                self.delegate(key);
                Ok(())
            }
        }
    }

    fn open_phase(&mut self) -> Result<(), KresourError> {
        let Some(index) = self.phase_list.selected() else {
            return Ok(());
        };
        let phase = self.catalog.phase_at(index)?;
        let layout = frame_layout(&self.theme, self.nav.width, self.nav.height);
        let list = SelectList::new(
            format!("Tools in {}", phase.name),
            build_tool_list_items(phase),
            layout.widget_width,
            layout.widget_height,
        );

        debug!(phase = %phase.name, tools = list.items().len(), "Opened phase");
        self.tool_list = Some(ToolListScreen { phase: index, list });
        self.nav.screen = Screen::ToolList { phase: index };
        Ok(())
    }

    fn open_tool(&mut self, phase: usize) -> Result<(), KresourError> {
        let Some(index) = self
            .tool_list
            .as_ref()
            .and_then(|tools| tools.list.selected())
        else {
            return Ok(());
        };
        let tool = self.catalog.tool_at(phase, index)?;
        let layout = frame_layout(&self.theme, self.nav.width, self.nav.height);
        let document = build_detail_document(tool, layout.content_width, &self.theme);

        let mut view = ScrollView::new(layout.widget_width, layout.widget_height);
        view.set_content(document.into_text());

        debug!(tool = %tool.name, content_width = layout.content_width, "Opened tool");
        self.detail = Some(DetailScreen {
            phase,
            tool: index,
            view,
        });
        self.nav.screen = Screen::ToolDetail { phase, tool: index };
        Ok(())
    }

    fn delegate(&mut self, key: KeyEvent) {
        match self.nav.screen {
            Screen::Catalog => self.phase_list.handle_key(key),
            Screen::ToolList { .. } => {
                if let Some(tools) = self.tool_list.as_mut() {
                    tools.list.handle_key(key);
                }
            }
            Screen::ToolDetail { .. } => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.view.handle_key(key);
                }
            }
        }
    }

    pub fn screen(&self) -> Screen {
        self.nav.screen
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn catalog(&self) -> &'a CatalogStore {
        self.catalog
    }

    /// The phase most recently selected, kept after navigating back.
    pub fn selected_phase_index(&self) -> Option<usize> {
        match self.nav.screen {
            Screen::ToolList { phase } | Screen::ToolDetail { phase, .. } => Some(phase),
            Screen::Catalog => self.tool_list.as_ref().map(|tools| tools.phase),
        }
    }

    /// The tool most recently selected, kept after navigating back.
    pub fn selected_tool_index(&self) -> Option<usize> {
        match self.nav.screen {
            Screen::ToolDetail { tool, .. } => Some(tool),
            _ => self.detail.as_ref().map(|detail| detail.tool),
        }
    }

    pub fn phase_list(&self) -> &SelectList {
        &self.phase_list
    }

    pub fn tool_list(&self) -> Option<&SelectList> {
        self.tool_list.as_ref().map(|tools| &tools.list)
    }

    pub fn detail_view(&self) -> Option<&ScrollView> {
        self.detail.as_ref().map(|detail| &detail.view)
    }

    /// Wrap width the detail page is built at for the current terminal size.
    pub fn content_width(&self) -> u16 {
        frame_layout(&self.theme, self.nav.width, self.nav.height).content_width
    }
}
