use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use crate::input::PointerTarget;
use crate::ui::utils::{centered_rect, contains};
use crate::view::Scene;

/// Height of one rail item box, borders included
pub const ITEM_HEIGHT: u16 = 7;

const RAIL_MARGIN: u16 = 2;
const PANEL_WIDTH_PERCENT: u16 = 50;
const PANEL_HEIGHT_PERCENT: u16 = 50;

/// Screen regions of the home view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub header: Rect,
    pub rail: Rect,
    pub tooltip: Rect,
    pub footer: Rect,
}

pub fn areas(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(3), // Footer
        ])
        .split(area);
    let header = chunks.first().copied().unwrap_or_default();
    let body = chunks.get(1).copied().unwrap_or_default();
    let footer = chunks.get(2).copied().unwrap_or_default();

    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(ITEM_HEIGHT), // Rail
            Constraint::Length(1),           // Tooltip
            Constraint::Min(0),
        ])
        .split(body);
    let rail = body_chunks
        .get(1)
        .copied()
        .unwrap_or_default()
        .inner(Margin::new(RAIL_MARGIN, 0));
    let tooltip = body_chunks.get(2).copied().unwrap_or_default();

    Areas {
        header,
        rail,
        tooltip,
        footer,
    }
}

/// Width the rail scrolls within, for a whole-terminal `area`
pub fn viewport_width(area: Rect) -> f64 {
    f64::from(areas(area).rail.width)
}

pub fn panel_area(area: Rect) -> Rect {
    centered_rect(PANEL_WIDTH_PERCENT, PANEL_HEIGHT_PERCENT, area)
}

/// The close control sits on the last inner row of the panel
pub fn close_control_area(panel: Rect) -> Rect {
    let inner = panel.inner(Margin::new(1, 1));
    Rect {
        x: inner.x,
        y: inner.y + inner.height.saturating_sub(1),
        width: inner.width,
        height: inner.height.min(1),
    }
}

/// Maps a click at (`column`, `row`) to what it activates
pub fn hit_test(area: Rect, scene: &Scene, column: u16, row: u16) -> Option<PointerTarget> {
    if scene.panel.visible {
        let panel = panel_area(area);
        if contains(close_control_area(panel), column, row) {
            return Some(PointerTarget::CloseControl);
        }
        if contains(panel, column, row) {
            return None;
        }
        return Some(PointerTarget::Backdrop);
    }

    let rail = areas(area).rail;
    if !contains(rail, column, row) {
        return None;
    }
    let x = f64::from(column - rail.x);
    scene.item_at(x).map(PointerTarget::Item)
}
