use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::components;
use crate::ui::layout::{close_control_area, panel_area};
use crate::view::Scene;

/// Settings overlay: network status rows plus the close control
pub fn render_settings_panel(frame: &mut Frame, scene: &Scene) {
    let area = panel_area(frame.area());
    frame.render_widget(Clear, area);

    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(" Settings ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::Cyan)),
        area,
    );

    let inner = area.inner(Margin::new(1, 1));
    let close = close_control_area(area);
    let rows_area = Rect {
        height: inner.height.saturating_sub(close.height),
        ..inner
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Network",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    for (badge, row) in scene.badges.iter().zip(&scene.panel.rows) {
        let mut spans = vec![Span::raw("  ")];
        spans.extend(components::badge_spans(badge).into_iter().take(1));
        spans.push(Span::styled(
            format!(" {row}"),
            Style::default().fg(Color::White),
        ));
        lines.push(Line::from(spans));
    }
    if scene.badges.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No network indicators",
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), rows_area);

    // the close control is the panel's only focusable control
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Close ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        close,
    );
}

