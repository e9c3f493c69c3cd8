//! Application state for the interactive partition view.
//!
//! Single-threaded and event-driven: mutation happens inside key/mouse
//! handlers, rendering only reads. Accepted boundary moves request a
//! repartition through the throttle; `tick` runs the pending work at most
//! once per interval.

use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::widgets::{Block, Borders};

use super::drag::{DragController, DragState};
use super::render;
use super::throttle::{REPARTITION_INTERVAL, Throttle};
use crate::histogram::{self, Histogram};
use crate::ingest::{Dataset, Meta, ScoredRecord};
use crate::markers::Markers;
use crate::partition;
use crate::scale::Scale;

/// Pixel value guaranteed to miss every hit-test window; used when the
/// pointer leaves the canvas.
const OFF_CANVAS: f64 = f64::MIN;

pub struct App {
    records: Vec<ScoredRecord>,
    meta: Meta,
    histogram: Histogram,
    scale: Scale,
    markers: Markers,
    controller: DragController,
    throttle: Throttle,
    labels: Vec<String>,
    band_counts: Vec<usize>,
    excluded: usize,
    /// Inner rectangle of the histogram canvas from the last render; maps
    /// mouse columns to local pixels.
    canvas: Rect,
    output: PathBuf,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(dataset: Dataset, labels: Vec<String>, output: PathBuf) -> Self {
        let histogram = histogram::aggregate(&dataset.records);
        let scale = Scale::new(histogram.max_score, 1.0);
        let markers = Markers::new(labels.len() + 1, 1.0);

        let mut app = Self {
            records: dataset.records,
            meta: dataset.meta,
            histogram,
            scale,
            markers,
            controller: DragController::new(),
            throttle: Throttle::new(REPARTITION_INTERVAL),
            labels,
            band_counts: Vec::new(),
            excluded: 0,
            canvas: Rect::default(),
            output,
            status: None,
            should_quit: false,
        };
        app.repartition();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Adopt a new canvas width: rescale the pixel mapping and reposition
    /// the markers proportionally. No-op while the width is unchanged.
    pub(crate) fn sync_width(&mut self, width: f64) {
        if (width - self.scale.width()).abs() < f64::EPSILON {
            return;
        }
        self.scale.set_width(width);
        self.markers.rescale(width);
    }

    /// Reclassify the full dataset against the current boundaries.
    fn repartition(&mut self) {
        let boundaries = self.markers.scores(&self.scale);
        let result = partition::classify(&self.records, &boundaries);
        self.band_counts = result.band_counts();
        self.excluded = result.excluded;
    }

    /// Run pending throttled work.
    pub fn tick(&mut self, now: Instant) {
        if self.throttle.poll(now) {
            self.repartition();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('e') => self.export(),
            _ => {}
        }
    }

    fn export(&mut self) {
        let boundaries = self.markers.scores(&self.scale);
        let result = partition::classify(&self.records, &boundaries);
        self.status = Some(
            match partition::report::write_json(
                &self.output,
                &self.records,
                &result,
                &self.labels,
                &boundaries,
            ) {
                Ok(()) => format!("wrote {}", self.output.display()),
                Err(err) => format!("export failed: {err}"),
            },
        );
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.canvas.width == 0 {
            return;
        }
        let inside = self
            .canvas
            .contains(Position::new(event.column, event.row));

        // Presses only start on the canvas; moves off it clear the hover.
        // Drag/release pass through so a captured marker is never stranded.
        let pixel = match event.kind {
            MouseEventKind::Down(MouseButton::Left) if !inside => return,
            MouseEventKind::Moved if !inside => OFF_CANVAS,
            _ => f64::from(event.column) - f64::from(self.canvas.x),
        };

        let change = self
            .controller
            .on_mouse(event.kind, pixel, &mut self.markers, &self.scale);
        if change.is_some() {
            self.throttle.request();
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(frame.area());

        render::draw_header(frame, chunks[0], &self.meta);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("score distribution");
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        self.sync_width(f64::from(inner.width));
        self.canvas = inner;

        let highlight = match self.controller.state() {
            DragState::Hovering(index) | DragState::Dragging(index) => Some(index),
            DragState::Idle => None,
        };
        frame.render_widget(
            render::HistogramView {
                bins: &self.histogram.bins,
                scale: &self.scale,
                markers: &self.markers,
                highlight,
            },
            inner,
        );

        render::draw_footer(
            frame,
            chunks[2],
            &self.labels,
            &self.band_counts,
            self.excluded,
            self.status.as_deref(),
        );
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
