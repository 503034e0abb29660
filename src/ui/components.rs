use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::view::Badge;

const SEPARATOR: &str = "  ";

/// Renders a footer with mode indicator and keybindings
pub fn render_navigation_footer(
    f: &mut Frame,
    area: Rect,
    mode: &str,
    keybindings: &[(&str, &str)],
) {
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", mode),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    for &(key, desc) in keybindings {
        spans.push(Span::raw(SEPARATOR));
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        area,
    );
}

/// Coloured dot plus label for one network indicator
pub fn badge_spans(badge: &Badge) -> Vec<Span<'static>> {
    let (dot, style) = if badge.connected {
        (
            "●",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        ("○", Style::default().fg(Color::DarkGray))
    };
    vec![
        Span::styled(dot, style),
        Span::raw(" "),
        Span::styled(badge.label.clone(), style),
    ]
}

/// Renders the badges right-aligned, one after another
pub fn render_badges(frame: &mut Frame, area: Rect, badges: &[Badge]) {
    let mut spans = Vec::new();
    for badge in badges {
        spans.extend(badge_spans(badge));
        spans.push(Span::raw(SEPARATOR));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
        area,
    );
}

pub fn render_status_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast = Paragraph::new(Line::from(vec![Span::styled(
        format!(" {} ", message),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(toast, area);
}
