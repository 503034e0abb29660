use crate::layout::NetworkIndicator;
use crate::rail::{RailGeometry, RailState, compute_offset};

/// One rail entry as it should be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub index: usize,
    pub id: String,
    pub label: String,
    pub asset: String,
    pub focused: bool,
    /// Left edge before scrolling
    pub start: f64,
}

/// Label bubble for the focused item, hidden when nothing is focused
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
}

impl Tooltip {
    #[must_use]
    pub fn aria_hidden(&self) -> bool {
        !self.visible
    }
}

/// Binary connected/disconnected badge with its accessible text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub id: String,
    pub label: String,
    pub connected: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelView {
    pub visible: bool,
    /// Rows listed inside the panel
    pub rows: Vec<String>,
}

/// Everything the surface needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub geometry: RailGeometry,
    pub viewport_width: f64,
    pub offset: f64,
    pub items: Vec<ItemView>,
    pub tooltip: Tooltip,
    pub badges: Vec<Badge>,
    pub panel: PanelView,
}

/// Projects the rail and indicators into a drawable scene
#[must_use]
pub fn project(
    state: &RailState,
    indicators: &[NetworkIndicator],
    geometry: RailGeometry,
    viewport_width: f64,
) -> Scene {
    let focus = state.focus_index();
    let items = state
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| ItemView {
            index,
            id: item.id.clone(),
            label: item.label.clone(),
            asset: item.asset.clone(),
            focused: focus == Some(index),
            start: geometry.item_start(index),
        })
        .collect();

    let tooltip = state
        .focused_item()
        .map(|item| Tooltip {
            visible: true,
            text: item.label.clone(),
        })
        .unwrap_or_default();

    let badges: Vec<Badge> = indicators
        .iter()
        .map(|indicator| Badge {
            id: indicator.id.clone(),
            label: indicator.label.clone(),
            connected: indicator.status.is_connected(),
            description: indicator.description(),
        })
        .collect();

    let panel = PanelView {
        visible: state.panel_open(),
        rows: badges.iter().map(|badge| badge.description.clone()).collect(),
    };

    let mut scene = Scene {
        geometry,
        viewport_width,
        offset: 0.0,
        items,
        tooltip,
        badges,
        panel,
    };
    scene.reposition(state, viewport_width);
    scene
}

impl Scene {
    /// Recomputes only the scroll offset, for viewport resizes
    pub fn reposition(&mut self, state: &RailState, viewport_width: f64) {
        self.viewport_width = viewport_width;
        self.offset = state.focus_index().map_or(0.0, |focus| {
            compute_offset(focus, &self.geometry, state.len(), viewport_width)
        });
    }

    /// Left edge of an item inside the viewport, after scrolling
    #[must_use]
    pub fn item_left(&self, item: &ItemView) -> f64 {
        item.start - self.offset
    }

    /// Item under a viewport x coordinate, gaps excluded
    #[must_use]
    pub fn item_at(&self, x: f64) -> Option<usize> {
        self.items
            .iter()
            .find(|item| {
                let left = self.item_left(item);
                x >= left && x < left + self.geometry.item_size
            })
            .map(|item| item.index)
    }

    #[cfg(test)]
    #[must_use]
    pub fn focused(&self) -> Option<&ItemView> {
        self.items.iter().find(|item| item.focused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LoadedLayout, NetworkStatus};

    fn scene_for(state: &RailState) -> Scene {
        project(
            state,
            &LoadedLayout::builtin().network_indicators,
            RailGeometry::default(),
            800.0,
        )
    }

    #[test]
    fn test_exactly_one_item_focused() {
        let mut state = RailState::new(LoadedLayout::builtin().items, 0);
        state.move_right();
        let scene = scene_for(&state);
        let focused: Vec<usize> = scene
            .items
            .iter()
            .filter(|item| item.focused)
            .map(|item| item.index)
            .collect();
        assert_eq!(focused, vec![1]);
        assert_eq!(scene.focused().map(|item| item.id.as_str()), Some("prime"));
    }

    #[test]
    fn test_tooltip_follows_focus() {
        let state = RailState::new(LoadedLayout::builtin().items, 3);
        let scene = scene_for(&state);
        assert!(scene.tooltip.visible);
        assert!(!scene.tooltip.aria_hidden());
        assert_eq!(scene.tooltip.text, "Disney+");
    }

    #[test]
    fn test_empty_rail_hides_tooltip() {
        let state = RailState::new(Vec::new(), 0);
        let scene = scene_for(&state);
        assert!(scene.items.is_empty());
        assert!(!scene.tooltip.visible);
        assert!(scene.tooltip.aria_hidden());
        assert_eq!(scene.offset, 0.0);
    }

    #[test]
    fn test_badges_reflect_status() {
        let state = RailState::new(Vec::new(), 0);
        let indicators = vec![
            NetworkIndicator::new("wifi", "Wi-Fi", NetworkStatus::Connected),
            NetworkIndicator::new("bluetooth", "Bluetooth", NetworkStatus::Disconnected),
        ];
        let scene = project(&state, &indicators, RailGeometry::default(), 800.0);
        assert!(scene.badges[0].connected);
        assert_eq!(scene.badges[0].description, "Wi-Fi: Connected");
        assert!(!scene.badges[1].connected);
        assert_eq!(scene.badges[1].description, "Bluetooth: Disconnected");
    }

    #[test]
    fn test_panel_visibility_tracks_state() {
        let mut state = RailState::new(LoadedLayout::builtin().items, 0);
        assert!(!scene_for(&state).panel.visible);
        state.open_panel();
        let scene = scene_for(&state);
        assert!(scene.panel.visible);
        assert_eq!(scene.panel.rows.len(), 2);
    }

    #[test]
    fn test_reposition_only_moves_offset() {
        let state = RailState::new(LoadedLayout::builtin().items, 5);
        let mut scene = scene_for(&state);
        assert_eq!(scene.offset, 440.0);
        let items_before = scene.items.clone();

        scene.reposition(&state, 600.0);
        assert_eq!(scene.offset, 640.0);
        assert_eq!(scene.viewport_width, 600.0);
        assert_eq!(scene.items, items_before);
    }

    #[test]
    fn test_item_at_accounts_for_offset() {
        let state = RailState::new(LoadedLayout::builtin().items, 5);
        let scene = scene_for(&state);
        // item 5 starts at 990, viewport-relative 550
        assert_eq!(scene.item_at(560.0), Some(5));
        // gap between items 4 and 5
        assert_eq!(scene.item_at(540.0), None);
        assert_eq!(scene.item_at(0.0), Some(2));
    }
}
