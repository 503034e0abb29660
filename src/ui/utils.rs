use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthChar;

/// Creates a centered rectangle within the given area
///
/// # Arguments
/// * `percent_x` - Width as a percentage of the container (0-100)
/// * `percent_y` - Height as a percentage of the container (0-100)
/// * `r` - The container rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);

    // Small terminals still get a usable panel
    let min_width = 30u16;
    let min_height = 8u16;

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    let middle = popup_layout.get(1).copied().unwrap_or(r);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(middle);

    let mut result = horizontal.get(1).copied().unwrap_or(middle);

    if result.width < min_width && r.width >= min_width {
        result.width = min_width;
        result.x = r.x + (r.width.saturating_sub(result.width)) / 2;
    }
    if result.height < min_height && r.height >= min_height {
        result.height = min_height;
        result.y = r.y + (r.height.saturating_sub(result.height)) / 2;
    }

    result
}

/// Cuts `text` to at most `width` terminal columns, marking the cut with `…`
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().filter_map(UnicodeWidthChar::width).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut truncated = String::new();
    for character in text.chars() {
        let char_width = character.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        used += char_width;
        truncated.push(character);
    }
    truncated.push('…');
    truncated
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
