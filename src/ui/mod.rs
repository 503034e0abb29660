mod components;
mod layout;
mod panel;
mod rail;
mod utils;

pub use layout::{hit_test, viewport_width};

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(f: &mut Frame, app: &App) {
    let scene = app.scene();
    let regions = layout::areas(f.area());

    render_header(f, app, regions.header);
    rail::render_rail(f, regions.rail, scene);
    rail::render_tooltip(f, regions.tooltip, scene);

    if scene.panel.visible {
        components::render_navigation_footer(
            f,
            regions.footer,
            "SETTINGS",
            &[("Esc", "close"), ("Enter", "close"), ("Ctrl+C", "quit")],
        );
        panel::render_settings_panel(f, scene);
    } else {
        components::render_navigation_footer(
            f,
            regions.footer,
            "HOME",
            &[
                ("←/→", "move"),
                ("Enter", "open"),
                ("S", "settings"),
                ("R", "reload"),
                ("Ctrl+C", "quit"),
            ],
        );
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
        area,
    );

    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Title
            Constraint::Min(0),     // Toast
            Constraint::Length(30), // Badges
        ])
        .split(inner);

    if let [title, toast, badges] = &chunks[..] {
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    "Home",
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
            ])),
            *title,
        );
        if let Some(message) = app.status_toast_message() {
            components::render_status_toast(f, *toast, message);
        }
        components::render_badges(f, *badges, &app.scene().badges);
    }
}
