use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = if app.marquee.is_dragging() {
            "SCRUB"
        } else {
            "RUN"
        };

        let status_text = format!(
            " {} | Velocity: {:.0} | Items: {}",
            mode_str,
            app.velocity.value(),
            app.items.len()
        );

        let help_hint = " q:quit tab:focus h/l:adjust o:offset drag:scrub ";
        let padding_len = area.width.saturating_sub(
            status_text.chars().count() as u16 + help_hint.len() as u16,
        ) as usize;

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
