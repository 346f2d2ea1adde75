mod marquee;
mod slider;
mod status_bar;

pub use marquee::MarqueeWidget;
pub use slider::SliderWidget;
pub use status_bar::StatusBarWidget;
