use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::ui::utils::truncate_to_width;
use crate::view::{ItemView, Scene};

/// Draws every item that intersects the rail viewport, shifted by the scene offset
pub fn render_rail(frame: &mut Frame, area: Rect, scene: &Scene) {
    if scene.items.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No apps configured",
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center),
            area,
        );
        return;
    }

    for item in &scene.items {
        if let Some(visible) = item_rect(area, scene, item) {
            render_item(frame, visible, item);
        }
    }
}

/// Screen rectangle of an item, clipped to the rail; `None` when fully scrolled out
fn item_rect(area: Rect, scene: &Scene, item: &ItemView) -> Option<Rect> {
    let left = scene.item_left(item).round();
    let right = left + scene.geometry.item_size.round();
    let clipped_left = left.max(0.0);
    let clipped_right = right.min(f64::from(area.width));
    if clipped_right <= clipped_left {
        return None;
    }

    // both bounds lie within 0..=area.width here
    let x = clipped_left as u16;
    let width = (clipped_right - clipped_left) as u16;
    Some(Rect {
        x: area.x + x,
        y: area.y,
        width,
        height: area.height,
    })
}

fn render_item(frame: &mut Frame, area: Rect, item: &ItemView) {
    let (border_style, border_type, label_style) = if item.focused {
        (
            Style::default().fg(Color::Cyan),
            BorderType::Thick,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            BorderType::Rounded,
            Style::default().fg(Color::White),
        )
    };

    let inner_width = usize::from(area.width.saturating_sub(2));
    let initial = item
        .label
        .chars()
        .next()
        .map(|character| character.to_uppercase().collect::<String>())
        .unwrap_or_default();
    let asset_name = item
        .asset
        .rsplit('/')
        .next()
        .unwrap_or(item.asset.as_str());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            initial,
            label_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            truncate_to_width(&item.label, inner_width),
            label_style,
        )),
        Line::from(Span::styled(
            truncate_to_width(asset_name, inner_width),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        ),
        area,
    );
}

/// Focused item's label under the rail
pub fn render_tooltip(frame: &mut Frame, area: Rect, scene: &Scene) {
    if scene.tooltip.aria_hidden() {
        return;
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            truncate_to_width(&scene.tooltip.text, usize::from(area.width)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        area,
    );
}
