//! Widgets for the partition view: header counters, the histogram canvas
//! with boundary markers, and the band-count footer.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::histogram::HistogramBin;
use crate::ingest::Meta;
use crate::markers::Markers;
use crate::scale::Scale;

pub fn draw_header(frame: &mut Frame, area: Rect, meta: &Meta) {
    let text = format!(
        " {} files   score {:.2} – {:.2}",
        meta.count, meta.min, meta.max
    );
    let header = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("scorebands"));
    frame.render_widget(header, area);
}

/// Histogram bars with the boundary markers drawn over them. Bars are
/// summed per terminal column (several sparse bins can share a column) and
/// scaled against the tallest column.
pub struct HistogramView<'a> {
    pub bins: &'a [HistogramBin],
    pub scale: &'a Scale,
    pub markers: &'a Markers,
    pub highlight: Option<usize>,
}

impl Widget for HistogramView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;

        let mut columns = vec![0usize; width];
        for bin in self.bins {
            let x = self.scale.to_pixel(bin.score).round();
            let x = x.clamp(0.0, (width - 1) as f64) as usize;
            columns[x] += bin.count;
        }

        let tallest = columns.iter().copied().max().unwrap_or(0);
        if tallest > 0 {
            let bar = Style::default().fg(Color::Green);
            for (x, &count) in columns.iter().enumerate() {
                if count == 0 {
                    continue;
                }
                let height = (count * area.height as usize).div_ceil(tallest);
                let height = height.min(area.height as usize) as u16;
                for dy in 0..height {
                    let y = area.y + area.height - 1 - dy;
                    buf.set_string(area.x + x as u16, y, "\u{2588}", bar);
                }
            }
        }

        for (index, pos) in self.markers.positions().iter().enumerate() {
            let x = pos.round().clamp(0.0, (width - 1) as f64) as u16;
            let style = if self.highlight == Some(index) {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            for y in area.y..area.y + area.height {
                buf.set_string(area.x + x, y, "\u{2502}", style);
            }
        }
    }
}

pub fn draw_footer(
    frame: &mut Frame,
    area: Rect,
    labels: &[String],
    band_counts: &[usize],
    excluded: usize,
    status: Option<&str>,
) {
    let mut spans: Vec<Span<'_>> = vec![Span::raw(" ")];
    for (label, count) in labels.iter().zip(band_counts) {
        spans.push(Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!("{count}   ")));
    }
    if excluded > 0 {
        spans.push(Span::styled(
            format!("out of range: {excluded}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let hint = match status {
        Some(status) => format!(" {status}"),
        None => " drag markers \u{b7} e export \u{b7} q quit".to_string(),
    };

    let footer = Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(footer, area);
}
