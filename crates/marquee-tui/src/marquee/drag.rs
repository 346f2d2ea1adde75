//! L4 Atomic Layer: Drag gesture state machine
//!
//! Idle while `start_offset` is `None`. The first gesture event snapshots
//! the current offset and moves to Dragging; release commits the final
//! translation and returns to Idle.

use tracing::debug;

/// Drag-to-scrub state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Offset at the moment the gesture began, `Some` exactly while dragging
    start_offset: Option<f64>,
    /// Cumulative horizontal translation since the gesture began
    translation: f64,
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.start_offset.is_some()
    }

    /// Offset the pointer currently dictates, if dragging
    #[inline]
    pub fn tracked_offset(&self) -> Option<f64> {
        self.start_offset.map(|start| start + self.translation)
    }

    /// Gesture moved (any movement counts, including the initial press)
    ///
    /// `offset` is the engine's current offset, used only when this event
    /// starts the gesture.
    pub fn changed(&mut self, offset: f64, translation: f64) {
        if self.start_offset.is_none() {
            debug!(offset, "Drag started");
            self.start_offset = Some(offset);
        }
        self.translation = translation;
    }

    /// Gesture released, returning the committed offset
    ///
    /// Returns `None` if no gesture was in progress.
    pub fn ended(&mut self, translation: f64) -> Option<f64> {
        let start = self.start_offset.take()?;
        self.translation = 0.0;
        let committed = start + translation;
        debug!(offset = committed, "Drag ended");
        Some(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.tracked_offset(), None);
    }

    #[test]
    fn test_snapshot_taken_once() {
        let mut drag = DragState::default();
        drag.changed(-12.0, 0.0);
        drag.changed(-40.0, 5.0);
        // Snapshot stays at -12, not -40
        assert_eq!(drag.tracked_offset(), Some(-7.0));
    }

    #[test]
    fn test_end_commits_and_resets() {
        let mut drag = DragState::default();
        drag.changed(-12.0, 3.0);
        assert_eq!(drag.ended(8.0), Some(-4.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn test_end_without_start_is_ignored() {
        let mut drag = DragState::default();
        assert_eq!(drag.ended(8.0), None);
    }
}
