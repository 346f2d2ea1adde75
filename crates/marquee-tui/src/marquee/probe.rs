//! L4 Atomic Layer: Width probes
//!
//! The layout pass measures a region every frame and hands the width to a
//! probe. The probe only reports when the width is new: on the first
//! measurement and whenever it changes afterwards.

/// Remembers the last width measured for one region
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidthProbe {
    last: Option<f64>,
}

impl WidthProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a measured width, returning it if it should be reported
    pub fn measure(&mut self, width: f64) -> Option<f64> {
        if self.last == Some(width) {
            return None;
        }
        self.last = Some(width);
        Some(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_first_measurement() {
        let mut width = WidthProbe::new();
        assert_eq!(width.measure(80.0), Some(80.0));
    }

    #[test]
    fn test_reports_zero_on_first_measurement() {
        let mut width = WidthProbe::new();
        assert_eq!(width.measure(0.0), Some(0.0));
        assert_eq!(width.measure(0.0), None);
    }

    #[test]
    fn test_reports_only_changes() {
        let mut width = WidthProbe::new();
        width.measure(80.0);
        assert_eq!(width.measure(80.0), None);
        assert_eq!(width.measure(100.0), Some(100.0));
        assert_eq!(width.measure(100.0), None);
        assert_eq!(width.measure(0.0), Some(0.0));
    }
}
