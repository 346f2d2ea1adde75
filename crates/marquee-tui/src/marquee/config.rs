//! L4 Atomic Layer: Configuration types for the marquee
//!
//! Re-exports configuration from marquee-core and provides additional utilities.

// Re-export config types from core
pub use marquee_core::MarqueeConfig;

/// Extension trait for MarqueeConfig with layout helpers
pub trait MarqueeConfigExt {
    /// Repeat distance for a content row of the given width
    fn period(&self, content_width: f64) -> f64;

    /// Distance travelled over `secs` seconds of free running
    fn travel(&self, secs: f64) -> f64;
}

impl MarqueeConfigExt for MarqueeConfig {
    #[inline]
    fn period(&self, content_width: f64) -> f64 {
        content_width + self.spacing
    }

    #[inline]
    fn travel(&self, secs: f64) -> f64 {
        secs * self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_adds_spacing() {
        let config = MarqueeConfig {
            velocity: 50.0,
            spacing: 10.0,
        };
        assert_eq!(config.period(60.0), 70.0);
        assert_eq!(config.period(0.0), 10.0);
    }

    #[test]
    fn test_travel_is_signed() {
        let config = MarqueeConfig {
            velocity: -30.0,
            ..Default::default()
        };
        assert!((config.travel(0.5) + 15.0).abs() < 1e-9);
    }
}
