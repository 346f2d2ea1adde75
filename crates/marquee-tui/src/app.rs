use std::time::Instant;

use marquee_core::AppConfig;
use ratatui::layout::{Position, Rect};
use tracing::debug;

use crate::input::Action;
use crate::marquee::Marquee;
use crate::slider::Slider;
use crate::theme::Theme;
use crate::widgets::SliderWidget;

/// Which slider receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Velocity,
    ItemCount,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Velocity => Focus::ItemCount,
            Focus::ItemCount => Focus::Velocity,
        }
    }
}

/// Screen regions from the last draw, used for pointer hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    pub velocity: Rect,
    pub item_count: Rect,
    pub marquee: Rect,
    pub status: Rect,
}

/// What the current pointer gesture is operating on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerTarget {
    Slider(Focus),
    /// Scrubbing the marquee; column where the press landed
    Marquee { origin: u16 },
}

/// Demo application state
pub struct App {
    /// Colors
    pub theme: Theme,
    /// The marquee engine
    pub marquee: Marquee,
    /// Velocity in columns per second
    pub velocity: Slider,
    /// Number of items (value truncated to an integer)
    pub item_count: Slider,
    /// Labels currently fed into the marquee
    pub items: Vec<String>,
    /// Focused slider
    pub focus: Focus,
    /// Draw the raw offset over the marquee
    pub show_offset: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Regions from the last draw
    pub layout: AppLayout,
    pointer: Option<PointerTarget>,
}

impl App {
    /// Create the demo; `now` starts the marquee clock
    pub fn new(config: &AppConfig, theme: Theme, now: Instant) -> Self {
        let demo = &config.demo;
        let mut marquee_config = config.marquee;
        // Terminal layout works in whole columns
        marquee_config.spacing = marquee_config.spacing.round();

        let velocity = Slider::new(
            "Velocity",
            marquee_config.velocity,
            demo.velocity_min,
            demo.velocity_max,
            demo.velocity_step,
        );
        let item_count = Slider::new(
            "Number Of Items",
            demo.item_count,
            demo.item_count_min,
            demo.item_count_max,
            1.0,
        );

        let mut app = Self {
            show_offset: config.ui.show_offset,
            theme,
            marquee: Marquee::new(marquee_config, now),
            velocity,
            item_count,
            items: Vec::new(),
            focus: Focus::Velocity,
            should_quit: false,
            layout: AppLayout::default(),
            pointer: None,
        };
        app.regenerate_items();
        app
    }

    /// Current item count
    pub fn item_count(&self) -> usize {
        self.item_count.value().trunc().max(0.0) as usize
    }

    /// Rebuild the item labels for the current item count
    pub fn regenerate_items(&mut self) {
        self.items = item_labels(self.item_count());
        debug!(count = self.items.len(), "Items regenerated");
    }

    /// One animation frame: pass the velocity in and advance the marquee
    pub fn on_frame(&mut self, now: Instant) {
        self.marquee.set_velocity(self.velocity.value());
        self.marquee.tick(now);
    }

    fn focused_slider_mut(&mut self) -> &mut Slider {
        match self.focus {
            Focus::Velocity => &mut self.velocity,
            Focus::ItemCount => &mut self.item_count,
        }
    }

    /// Apply an input action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusNext | Action::FocusPrev => self.focus = self.focus.toggle(),
            Action::Increment => self.adjust(|s| s.step_by(1.0)),
            Action::Decrement => self.adjust(|s| s.step_by(-1.0)),
            Action::PageIncrement => self.adjust(|s| s.step_by(10.0)),
            Action::PageDecrement => self.adjust(|s| s.step_by(-10.0)),
            Action::ToMin => self.adjust(Slider::to_min),
            Action::ToMax => self.adjust(Slider::to_max),
            Action::ToggleOffset => self.show_offset = !self.show_offset,
            Action::PointerDown(column, row) => self.pointer_down(column, row),
            Action::PointerDrag(column, _) => self.pointer_drag(column),
            Action::PointerUp(column, _) => self.pointer_up(column),
            Action::None => {}
        }
    }

    fn adjust(&mut self, f: impl FnOnce(&mut Slider) -> bool) {
        let focus = self.focus;
        if f(self.focused_slider_mut()) {
            self.slider_changed(focus);
        }
    }

    fn slider_changed(&mut self, which: Focus) {
        if which == Focus::ItemCount && self.item_count() != self.items.len() {
            self.regenerate_items();
        }
    }

    fn slider_area(&self, which: Focus) -> Rect {
        match which {
            Focus::Velocity => self.layout.velocity,
            Focus::ItemCount => self.layout.item_count,
        }
    }

    fn set_slider_from_column(&mut self, which: Focus, column: u16) {
        let ratio = SliderWidget::ratio_at(self.slider_area(which), column);
        let slider = match which {
            Focus::Velocity => &mut self.velocity,
            Focus::ItemCount => &mut self.item_count,
        };
        if slider.set_ratio(ratio) {
            self.slider_changed(which);
        }
    }

    fn pointer_down(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);

        if self.layout.marquee.contains(position) {
            self.pointer = Some(PointerTarget::Marquee { origin: column });
            self.marquee.drag_changed(0.0);
            return;
        }

        for which in [Focus::Velocity, Focus::ItemCount] {
            if SliderWidget::track_area(self.slider_area(which)).contains(position) {
                self.focus = which;
                self.pointer = Some(PointerTarget::Slider(which));
                self.set_slider_from_column(which, column);
                return;
            }
        }
    }

    fn pointer_drag(&mut self, column: u16) {
        match self.pointer {
            Some(PointerTarget::Marquee { origin }) => {
                self.marquee.drag_changed(translation(origin, column));
            }
            Some(PointerTarget::Slider(which)) => self.set_slider_from_column(which, column),
            None => {}
        }
    }

    fn pointer_up(&mut self, column: u16) {
        match self.pointer.take() {
            Some(PointerTarget::Marquee { origin }) => {
                self.marquee.drag_ended(translation(origin, column));
            }
            Some(PointerTarget::Slider(which)) => self.set_slider_from_column(which, column),
            None => {}
        }
    }
}

fn translation(origin: u16, column: u16) -> f64 {
    column as f64 - origin as f64
}

/// Labels "Item 0" .. "Item n-1"
pub fn item_labels(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Item {}", i)).collect()
}
