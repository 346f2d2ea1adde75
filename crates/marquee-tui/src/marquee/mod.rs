//! Endless horizontal marquee engine
//!
//! Scrolls a content row at a constant velocity, tiles copies of it so the
//! container is always covered, and lets a pointer drag scrub the offset.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `period` - Offset normalization and tile counting (pure functions)
//! - `probe` - Width probes for the explicit layout pass
//! - `drag` - Drag gesture state machine
//! - `config` - Configuration types (re-exported from marquee-core)
//!
//! ## L3 Molecular Layer
//! - `engine` - The `Marquee` controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use marquee_tui::marquee::{Marquee, MarqueeConfig};
//!
//! let mut marquee = Marquee::new(MarqueeConfig::default(), Instant::now());
//!
//! // Layout pass reports measured widths
//! marquee.report_content_width(60.0);
//! marquee.report_container_width(250.0);
//!
//! // Each frame
//! marquee.tick(Instant::now());
//! let x = marquee.offset();
//! let copies = marquee.extra_instances();
//! ```

// L4 Atomic Layer
pub mod config;
pub mod drag;
pub mod period;
pub mod probe;

// L3 Molecular Layer
pub mod engine;

pub use config::{MarqueeConfig, MarqueeConfigExt};
pub use drag::DragState;
pub use engine::{Marquee, MarqueeState};
pub use period::{extra_instances, normalize_offset};
pub use probe::WidthProbe;
