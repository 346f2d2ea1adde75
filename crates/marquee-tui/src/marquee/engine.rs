//! L3 Molecular Layer: Marquee controller
//!
//! Owns the scroll offset, the measured widths and the drag state. The
//! frame loop calls `tick()` once per frame with the current time; the
//! layout pass reports widths; pointer events feed the drag methods.

use std::time::Instant;

use tracing::debug;

use super::config::{MarqueeConfig, MarqueeConfigExt};
use super::drag::DragState;
use super::period::{extra_instances, normalize_offset};
use super::probe::WidthProbe;

/// Per-widget marquee state
#[derive(Debug, Clone)]
pub struct MarqueeState {
    /// Horizontal shift of the tiled row, in columns
    pub offset: f64,
    /// Time of the previous tick
    pub previous_tick: Instant,
    /// Width of one content row, once measured
    pub content_width: Option<f64>,
    /// Width of the area the marquee is drawn into, once measured
    pub container_width: Option<f64>,
    /// Drag-to-scrub gesture
    pub drag: DragState,
}

impl MarqueeState {
    pub fn new(now: Instant) -> Self {
        Self {
            offset: 0.0,
            previous_tick: now,
            content_width: None,
            container_width: None,
            drag: DragState::default(),
        }
    }
}

/// Marquee controller
///
/// Create it when the marquee is first shown, passing the current time.
#[derive(Debug, Clone)]
pub struct Marquee {
    config: MarqueeConfig,
    state: MarqueeState,
    content_probe: WidthProbe,
    container_probe: WidthProbe,
}

impl Marquee {
    pub fn new(config: MarqueeConfig, now: Instant) -> Self {
        Self {
            config,
            state: MarqueeState::new(now),
            content_probe: WidthProbe::new(),
            container_probe: WidthProbe::new(),
        }
    }

    /// Update only the velocity, effective from the next tick
    pub fn set_velocity(&mut self, velocity: f64) {
        self.config.velocity = velocity;
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.state.offset
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.state.drag.is_dragging()
    }

    #[inline]
    pub fn content_width(&self) -> Option<f64> {
        self.state.content_width
    }

    #[inline]
    pub fn container_width(&self) -> Option<f64> {
        self.state.container_width
    }

    /// Advance the marquee to `now`
    ///
    /// While dragging the offset follows the pointer; otherwise it moves by
    /// `velocity` columns per second. The result is folded into one period
    /// once the content width is known and non-zero.
    pub fn tick(&mut self, now: Instant) {
        let delta = now
            .saturating_duration_since(self.state.previous_tick)
            .as_secs_f64();
        self.state.previous_tick = now;

        self.state.offset = match self.state.drag.tracked_offset() {
            Some(offset) => offset,
            None => self.state.offset - self.config.travel(delta),
        };

        self.normalize();
    }

    /// Pointer moved during a drag; `translation` is cumulative since the press
    pub fn drag_changed(&mut self, translation: f64) {
        self.state.drag.changed(self.state.offset, translation);
    }

    /// Pointer released; commits the final translation
    pub fn drag_ended(&mut self, translation: f64) {
        if let Some(offset) = self.state.drag.ended(translation) {
            self.state.offset = offset;
        }
    }

    /// Layout pass: width of one content row
    pub fn report_content_width(&mut self, width: f64) {
        if let Some(width) = self.content_probe.measure(width) {
            debug!(width, "Content width measured");
            self.state.content_width = Some(width);
        }
    }

    /// Layout pass: width of the marquee's area
    pub fn report_container_width(&mut self, width: f64) {
        if let Some(width) = self.container_probe.measure(width) {
            debug!(width, "Container width measured");
            self.state.container_width = Some(width);
        }
    }

    /// Copies to draw after the primary content instance
    pub fn extra_instances(&self) -> usize {
        extra_instances(
            self.state.content_width,
            self.state.container_width,
            self.config.spacing,
        )
    }

    fn normalize(&mut self) {
        let Some(content_width) = self.state.content_width else {
            return;
        };
        if content_width <= 0.0 {
            return;
        }
        self.state.offset = normalize_offset(self.state.offset, self.config.period(content_width));
    }
}
