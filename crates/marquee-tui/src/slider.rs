/// A bounded numeric input
///
/// The value is always clamped into `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    label: &'static str,
    value: f64,
    min: f64,
    max: f64,
    step: f64,
}

impl Slider {
    pub fn new(label: &'static str, value: f64, min: f64, max: f64, step: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            label,
            value: value.clamp(min, max),
            min,
            max,
            step: step.abs(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value, clamped into range; returns whether it changed
    pub fn set(&mut self, value: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        let value = value.clamp(self.min, self.max);
        let changed = value != self.value;
        self.value = value;
        changed
    }

    /// Move by a number of steps (negative moves down)
    pub fn step_by(&mut self, steps: f64) -> bool {
        self.set(self.value + steps * self.step)
    }

    pub fn to_min(&mut self) -> bool {
        self.set(self.min)
    }

    pub fn to_max(&mut self) -> bool {
        self.set(self.max)
    }

    /// Position of the value within the range, in `[0, 1]`
    pub fn ratio(&self) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            0.0
        } else {
            (self.value - self.min) / span
        }
    }

    /// Set the value from a position within the range
    pub fn set_ratio(&mut self, ratio: f64) -> bool {
        let ratio = ratio.clamp(0.0, 1.0);
        self.set(self.min + ratio * (self.max - self.min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn velocity() -> Slider {
        Slider::new("Velocity", 50.0, -300.0, 300.0, 10.0)
    }

    #[test]
    fn test_initial_value_clamped() {
        let slider = Slider::new("Items", 50.0, 1.0, 20.0, 1.0);
        assert_eq!(slider.value(), 20.0);
    }

    #[test]
    fn test_set_clamps_and_reports_change() {
        let mut slider = velocity();
        assert!(slider.set(-1000.0));
        assert_eq!(slider.value(), -300.0);
        assert!(!slider.set(-400.0));
        assert!(!slider.set(f64::NAN));
        assert_eq!(slider.value(), -300.0);
    }

    #[test]
    fn test_step_by() {
        let mut slider = velocity();
        slider.step_by(1.0);
        assert_eq!(slider.value(), 60.0);
        slider.step_by(-10.0);
        assert_eq!(slider.value(), -40.0);
        slider.step_by(100.0);
        assert_eq!(slider.value(), 300.0);
    }

    #[test]
    fn test_ratio() {
        let mut slider = velocity();
        slider.set(0.0);
        assert!((slider.ratio() - 0.5).abs() < 1e-9);
        slider.set_ratio(1.0);
        assert_eq!(slider.value(), 300.0);
        slider.set_ratio(-3.0);
        assert_eq!(slider.value(), -300.0);
    }

    #[test]
    fn test_degenerate_range() {
        let mut slider = Slider::new("Fixed", 3.0, 3.0, 3.0, 1.0);
        assert_eq!(slider.ratio(), 0.0);
        assert!(!slider.step_by(1.0));
        assert!(!slider.set_ratio(0.7));
    }
}
