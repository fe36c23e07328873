//! Application state.
//!
//! `App` owns the query controller and all transient presentation state
//! (tab selection, input buffer, evidence card selection/expansion).
//! Child render functions get read-only access; the two query actions go
//! through `App::submit` and `App::clear_query`.

use crate::api::types::Source;
use crate::api::AskClient;
use crate::query::{QueryController, QueryState};
use crate::ui::input::InputState;

/// Maximum number of evidence cards rendered per answer.
pub const MAX_SOURCES: usize = 5;

/// Navigable views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Query,
    Analytics,
    Archive,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Query, Tab::Analytics, Tab::Archive, Tab::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Query => "Query",
            Tab::Analytics => "Analytics",
            Tab::Archive => "Archive",
            Tab::Settings => "Settings",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Main application state.
pub struct App {
    /// Active view.
    pub tab: Tab,
    /// Query lifecycle owner.
    pub controller: QueryController,
    /// Question buffer + product filter.
    pub input: InputState,
    /// Per-card expansion, rebuilt collapsed whenever a new answer lands.
    expanded: Vec<bool>,
    /// Selected evidence card.
    selected_card: usize,
    /// Cosmetic row selection on the archive table.
    pub archive_row: usize,
    /// Exit flag.
    pub should_quit: bool,
}

impl App {
    pub fn new(client: AskClient) -> Self {
        Self {
            tab: Tab::Query,
            controller: QueryController::new(client),
            input: InputState::new(),
            expanded: Vec::new(),
            selected_card: 0,
            archive_row: 0,
            should_quit: false,
        }
    }

    /// Submit the current input buffer.
    ///
    /// Blank input is refused silently by the controller. On acceptance
    /// the buffer clears (the filter persists) and card state resets.
    pub fn submit(&mut self) {
        let question = self.input.buffer().to_string();
        if self.controller.submit(&question, self.input.product()) {
            self.input.clear_buffer();
            self.reset_cards();
        }
    }

    /// Clear the answer area back to Idle.
    pub fn clear_query(&mut self) {
        self.controller.clear();
        self.reset_cards();
    }

    /// Drain worker events; rebuild card state when the answer changed.
    pub fn on_tick(&mut self) {
        if self.controller.poll() {
            self.reset_cards();
        }
    }

    /// Sources visible on screen: the first [`MAX_SOURCES`] of the active
    /// answer, nothing in any other state.
    pub fn visible_sources(&self) -> &[Source] {
        match self.controller.state() {
            QueryState::Answered(response) => {
                let n = response.sources.len().min(MAX_SOURCES);
                &response.sources[..n]
            }
            _ => &[],
        }
    }

    /// Expansion flag for one visible card.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub fn selected_card(&self) -> usize {
        self.selected_card
    }

    pub fn select_next_card(&mut self) {
        let count = self.visible_sources().len();
        if count > 0 && self.selected_card + 1 < count {
            self.selected_card += 1;
        }
    }

    pub fn select_prev_card(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    /// Toggle the selected card between collapsed and expanded. Other
    /// cards are untouched.
    pub fn toggle_selected_card(&mut self) {
        if let Some(flag) = self.expanded.get_mut(self.selected_card) {
            *flag = !*flag;
        }
    }

    /// Cards are recreated per answer, so all default to collapsed.
    fn reset_cards(&mut self) {
        self.expanded = vec![false; self.visible_sources().len()];
        self.selected_card = 0;
    }
}
