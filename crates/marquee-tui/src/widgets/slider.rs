use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::slider::Slider;
use crate::theme::Theme;

pub struct SliderWidget;

impl SliderWidget {
    /// Columns reserved for the label on the left
    const LABEL_WIDTH: u16 = 18;
    /// Columns reserved for the value on the right
    const VALUE_WIDTH: u16 = 8;

    /// The clickable track inside a slider row
    pub fn track_area(area: Rect) -> Rect {
        let x = area.x.saturating_add(Self::LABEL_WIDTH.min(area.width));
        let width = area
            .width
            .saturating_sub(Self::LABEL_WIDTH + Self::VALUE_WIDTH);
        Rect::new(x, area.y, width, area.height.min(1))
    }

    /// Slider position for a pointer column, clamped to the track
    pub fn ratio_at(area: Rect, column: u16) -> f64 {
        let track = Self::track_area(area);
        if track.width <= 1 {
            return 0.0;
        }
        let column = column.clamp(track.x, track.right() - 1);
        (column - track.x) as f64 / (track.width - 1) as f64
    }

    pub fn render(frame: &mut Frame, area: Rect, slider: &Slider, focused: bool, theme: &Theme) {
        let track = Self::track_area(area);
        let width = track.width as usize;
        let knob = if width == 0 {
            0
        } else {
            (slider.ratio() * (width - 1) as f64).round() as usize
        };

        let label_style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg0)
        };
        let marker = if focused { "▶ " } else { "  " };

        let mut spans = vec![Span::styled(
            format!(
                "{:<width$}",
                format!("{}{}", marker, slider.label()),
                width = Self::LABEL_WIDTH as usize
            ),
            label_style,
        )];

        if width > 0 {
            spans.push(Span::styled("━".repeat(knob), Style::default().fg(theme.fill)));
            spans.push(Span::styled("●", Style::default().fg(theme.knob)));
            spans.push(Span::styled(
                "─".repeat(width - knob - 1),
                Style::default().fg(theme.track),
            ));
        }

        spans.push(Span::styled(
            format!("{:>width$.0}", slider.value(), width = Self::VALUE_WIDTH as usize),
            Style::default().fg(theme.grey1),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
