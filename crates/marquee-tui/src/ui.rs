use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};

use crate::app::{App, AppLayout, Focus};
use crate::widgets::{MarqueeWidget, SliderWidget, StatusBarWidget};

/// Split the screen into slider rows, the marquee and the status bar
pub fn layout(area: Rect) -> (Rect, AppLayout) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(main_layout[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Velocity slider
            Constraint::Length(1), // Item count slider
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Marquee
            Constraint::Min(0),
        ])
        .split(inner);

    (
        main_layout[0],
        AppLayout {
            velocity: rows[0],
            item_count: rows[1],
            marquee: rows[3],
            status: main_layout[1],
        },
    )
}

/// Draw the whole demo screen and record the hit areas
pub fn draw(frame: &mut Frame, app: &mut App) {
    let (content, areas) = layout(frame.area());
    app.layout = areas;

    let block = Block::default()
        .title(" Marquee ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.grey0))
        .style(Style::default().bg(app.theme.bg0));
    frame.render_widget(block, content);

    SliderWidget::render(
        frame,
        areas.velocity,
        &app.velocity,
        app.focus == Focus::Velocity,
        &app.theme,
    );
    SliderWidget::render(
        frame,
        areas.item_count,
        &app.item_count,
        app.focus == Focus::ItemCount,
        &app.theme,
    );
    MarqueeWidget::render(frame, areas.marquee, app);
    StatusBarWidget::render(frame, areas.status, app);
}
