//! L4 Atomic Layer: Offset normalization and tiling arithmetic
//!
//! Pure functions shared by the engine and the marquee widget.

/// Fold an offset into `(-period, 0]`
///
/// Takes the truncating remainder (the result keeps the sign of `offset`),
/// then steps back one period while the offset is still positive.
/// A non-positive or non-finite period leaves the offset untouched.
#[inline]
pub fn normalize_offset(offset: f64, period: f64) -> f64 {
    if !period.is_finite() || period <= 0.0 || !offset.is_finite() {
        return offset;
    }

    let mut offset = offset % period;
    while offset > 0.0 {
        offset -= period;
    }

    // Rounding can land exactly on -period, which is the same phase as 0
    if offset <= -period {
        offset = 0.0;
    }
    offset
}

/// Number of tiled copies needed after the primary instance to cover
/// `container_width`
///
/// Unmeasured widths count as zero. Returns 0 when one tile unit
/// (`content_width + spacing`) is not positive.
#[inline]
pub fn extra_instances(
    content_width: Option<f64>,
    container_width: Option<f64>,
    spacing: f64,
) -> usize {
    let unit = content_width.unwrap_or(0.0) + spacing;
    if !unit.is_finite() || unit <= 0.0 {
        return 0;
    }

    let container = container_width.unwrap_or(0.0);
    if !container.is_finite() || container <= 0.0 {
        return 0;
    }

    (container / unit).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bound() {
        for content_width in [1.0, 7.5, 60.0, 333.0] {
            for spacing in [0.0, 1.0, 10.0] {
                let period = content_width + spacing;
                for step in -200..=200 {
                    let offset = step as f64 * 13.37;
                    let n = normalize_offset(offset, period);
                    assert!(
                        n > -period && n <= 0.0,
                        "offset {} with period {} normalized to {}",
                        offset,
                        period,
                        n
                    );
                }
            }
        }
    }

    #[test]
    fn test_normalize_preserves_phase() {
        let period = 70.0;
        for offset in [-500.25, -70.0, -12.5, 0.0, 3.0, 69.5, 140.0, 1234.5] {
            let n = normalize_offset(offset, period);
            let shift = (offset - n) / period;
            assert!((shift - shift.round()).abs() < 1e-9, "{} -> {}", offset, n);
        }
    }

    #[test]
    fn test_normalize_examples() {
        assert_eq!(normalize_offset(-75.0, 70.0), -5.0);
        assert_eq!(normalize_offset(5.0, 70.0), -65.0);
        assert_eq!(normalize_offset(-30.0, 70.0), -30.0);
        assert_eq!(normalize_offset(0.0, 70.0), 0.0);
    }

    #[test]
    fn test_normalize_zero_period_is_noop() {
        assert_eq!(normalize_offset(-1234.0, 0.0), -1234.0);
        assert_eq!(normalize_offset(42.0, -5.0), 42.0);
        assert_eq!(normalize_offset(42.0, f64::NAN), 42.0);
    }

    #[test]
    fn test_tile_coverage() {
        // unit = 70, ceil(250 / 70) = 4
        assert_eq!(extra_instances(Some(60.0), Some(250.0), 10.0), 4);
        assert_eq!(extra_instances(Some(60.0), Some(280.0), 10.0), 4);
        assert_eq!(extra_instances(Some(60.0), Some(281.0), 10.0), 5);
    }

    #[test]
    fn test_tile_coverage_is_sufficient() {
        let (content, spacing, container) = (60.0, 10.0, 250.0);
        let unit = content + spacing;
        let copies = extra_instances(Some(content), Some(container), spacing);
        // Worst case offset just above -unit: row must still reach the right edge
        let reach = -unit + 1e-6 + (copies as f64 + 1.0) * unit - spacing;
        assert!(reach >= container);
    }

    #[test]
    fn test_unmeasured_widths() {
        assert_eq!(extra_instances(None, None, 10.0), 0);
        assert_eq!(extra_instances(None, Some(100.0), 10.0), 10);
        assert_eq!(extra_instances(Some(60.0), None, 10.0), 0);
        assert_eq!(extra_instances(None, Some(100.0), 0.0), 0);
    }
}
