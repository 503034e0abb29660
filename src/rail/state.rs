use tracing::debug;

use super::navigation::Navigable;
use crate::layout::LaunchItem;

/// Request to start the app with the given item id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSignal {
    pub item_id: String,
}

/// Outcome of selecting the focused item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Launch(LaunchSignal),
    OpenedPanel,
    /// Nothing to act on, or the panel is open
    Ignored,
}

/// The rail: ordered items, the focused position and whether the settings panel is open.
///
/// `focus_index` is always a valid index into `items` when the list is non-empty.
/// While the panel is open, navigation and selection leave the rail untouched.
#[derive(Debug, Clone)]
pub struct RailState {
    items: Vec<LaunchItem>,
    focus_index: usize,
    panel_open: bool,
}

fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

impl RailState {
    /// Creates the rail, clamping the focus hint into range
    pub fn new(items: Vec<LaunchItem>, initial_focus: usize) -> Self {
        let focus_index = clamp_index(initial_focus, items.len());
        Self {
            items,
            focus_index,
            panel_open: false,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[LaunchItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Focused position, `None` when the rail has no items
    #[must_use]
    pub fn focus_index(&self) -> Option<usize> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.focus_index)
        }
    }

    #[must_use]
    pub fn focused_item(&self) -> Option<&LaunchItem> {
        self.items.get(self.focus_index)
    }

    #[must_use]
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn move_right(&mut self) {
        if self.panel_open {
            return;
        }
        self.focus_next();
        debug!(focus = self.focus_index, "focus moved right");
    }

    pub fn move_left(&mut self) {
        if self.panel_open {
            return;
        }
        self.focus_previous();
        debug!(focus = self.focus_index, "focus moved left");
    }

    /// Moves focus straight to `index`; out-of-range indices are ignored
    pub fn focus_on(&mut self, index: usize) -> bool {
        if self.panel_open || index >= self.items.len() {
            return false;
        }
        self.focus_index = index;
        true
    }

    /// Acts on the focused item: settings items open the panel, anything else launches
    pub fn select(&mut self) -> Selection {
        if self.panel_open {
            return Selection::Ignored;
        }
        let Some(item) = self.focused_item() else {
            return Selection::Ignored;
        };

        if item.opens_settings() {
            self.open_panel();
            Selection::OpenedPanel
        } else {
            Selection::Launch(LaunchSignal {
                item_id: item.id.clone(),
            })
        }
    }

    pub fn open_panel(&mut self) {
        if !self.panel_open {
            debug!("settings panel opened");
        }
        self.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        if self.panel_open {
            debug!("settings panel closed");
        }
        self.panel_open = false;
    }

    /// Swaps the item list, re-clamping focus so it stays valid
    pub fn replace_items(&mut self, items: Vec<LaunchItem>) {
        self.focus_index = clamp_index(self.focus_index, items.len());
        self.items = items;
    }
}

impl Navigable for RailState {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn focused_index(&self) -> usize {
        self.focus_index
    }

    fn set_focused_index(&mut self, index: usize) {
        self.focus_index = clamp_index(index, self.items.len());
    }
}
