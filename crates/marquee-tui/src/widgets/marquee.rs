use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::marquee::Marquee;
use crate::theme::Theme;

/// Rows of one chip: padding row, label row, padding row
const CHIP_ROWS: usize = 3;
/// Blank columns on each side of a chip label
const CHIP_PADDING: usize = 2;

pub struct MarqueeWidget;

impl MarqueeWidget {
    /// Lay out, measure and draw the marquee row
    ///
    /// Measured widths are reported to the engine before drawing, so the
    /// tile count always reflects the current layout.
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let gap = app.marquee.config().spacing.max(0.0) as usize;
        let rows = content_rows(&app.items, gap, &app.theme);
        let content_width = rows.first().map(Line::width).unwrap_or(0);

        app.marquee.report_content_width(content_width as f64);
        app.marquee.report_container_width(area.width as f64);

        let unit = (content_width + gap) as i64;
        let shift = app.marquee.offset().floor() as i64;
        let instances = 1 + app.marquee.extra_instances();
        let top = area.y + area.height.saturating_sub(CHIP_ROWS as u16) / 2;

        let buf = frame.buffer_mut();
        for instance in 0..instances {
            let x = area.x as i64 + shift + instance as i64 * unit;
            for (row, line) in rows.iter().enumerate() {
                let y = top + row as u16;
                if y >= area.bottom() {
                    break;
                }
                draw_line_clipped(buf, area, x, y, line);
            }
        }

        if app.show_offset {
            render_offset_overlay(frame, area, &app.marquee, &app.theme);
        }
    }
}

/// Build the content rows: one chip per item, `gap` columns apart
///
/// Every row has the same display width.
pub fn content_rows(items: &[String], gap: usize, theme: &Theme) -> Vec<Line<'static>> {
    let chip = Style::default().fg(theme.chip_fg).bg(theme.chip_bg);
    let mut rows = vec![Vec::new(); CHIP_ROWS];

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            for row in rows.iter_mut() {
                row.push(Span::raw(" ".repeat(gap)));
            }
        }

        let label = format!("{pad}{item}{pad}", pad = " ".repeat(CHIP_PADDING));
        let blank = " ".repeat(Line::from(label.as_str()).width());
        for (r, row) in rows.iter_mut().enumerate() {
            let text = if r == CHIP_ROWS / 2 {
                label.clone()
            } else {
                blank.clone()
            };
            row.push(Span::styled(text, chip));
        }
    }

    rows.into_iter().map(Line::from).collect()
}

/// Draw `line` starting at column `x` (may be negative), clipped to `area`
fn draw_line_clipped(buf: &mut Buffer, area: Rect, x: i64, y: u16, line: &Line) {
    let (left, right) = (area.left() as i64, area.right() as i64);
    let mut col = x;

    for span in &line.spans {
        let style = line.style.patch(span.style);
        for ch in span.content.chars() {
            let width = ch.width().unwrap_or(0) as i64;
            if width == 0 {
                continue;
            }
            if col >= right {
                return;
            }
            if col >= left && col + width <= right {
                if let Some(cell) = buf.cell_mut((col as u16, y)) {
                    cell.set_char(ch).set_style(style);
                }
            }
            col += width;
        }
    }
}

/// Raw offset and measured widths, for debugging the layout pass
fn render_offset_overlay(frame: &mut Frame, area: Rect, marquee: &Marquee, theme: &Theme) {
    let text = format!(
        "{:.3} [{}/{}]",
        marquee.offset(),
        marquee.content_width().unwrap_or(0.0),
        marquee.container_width().unwrap_or(0.0)
    );
    let width = (text.len() as u16).min(area.width);
    if width == 0 || area.height == 0 {
        return;
    }

    let overlay = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height / 2,
        width,
        1,
    );
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.overlay_fg).bg(theme.overlay_bg));
    frame.render_widget(paragraph, overlay);
}
