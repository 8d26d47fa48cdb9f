use crate::layout::{DEFAULT_SIDEBAR_WIDTH, clamp_sidebar_width};

/// Callbacks the drag controller drives during a resize gesture.
pub(crate) trait DragHooks {
    /// Return the width currently committed to configuration.
    fn committed_width(&self) -> f32;

    /// Return the width the reset gesture restores.
    fn reset_width(&self) -> f32 {
        DEFAULT_SIDEBAR_WIDTH
    }

    /// Map a raw pointer delta to a bounded width.
    ///
    /// Always measured against the gesture's start width and the fixed
    /// bounds, never against the previous frame.
    fn limit(&self, start_width: f32, delta: f32) -> f32 {
        clamp_sidebar_width(start_width + delta)
    }

    /// Apply a freshly computed width.
    fn drag_move(&mut self, next_width: f32);
}

/// One live resize gesture, from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragSession {
    start_width: f32,
    start_pointer_x: f32,
}

impl DragSession {
    pub(crate) fn start_width(&self) -> f32 {
        self.start_width
    }

    pub(crate) fn start_pointer_x(&self) -> f32 {
        self.start_pointer_x
    }
}

/// Converts pointer gestures into clamped sidebar widths.
///
/// The pointer listeners live exactly as long as the session: the app only
/// subscribes to global pointer events while [`DragController::is_dragging`]
/// holds, so dropping the session releases them on every exit path.
#[derive(Debug, Default)]
pub(crate) struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub(crate) fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Begin a gesture anchored at `start_width` and `pointer_x`.
    ///
    /// A session left over from a lost release is replaced.
    pub(crate) fn start_drag(
        &mut self,
        start_width: f32,
        pointer_x: f32,
    ) -> DragSession {
        let session = DragSession {
            start_width,
            start_pointer_x: pointer_x,
        };
        self.session = Some(session);
        session
    }

    /// Recompute the width for a pointer position and hand it to the hooks.
    ///
    /// Returns `None` without touching the hooks when no gesture is live.
    pub(crate) fn drag_move(
        &self,
        pointer_x: f32,
        hooks: &mut impl DragHooks,
    ) -> Option<f32> {
        let session = self.session?;
        let delta = pointer_x - session.start_pointer_x;
        let next_width = hooks.limit(session.start_width, delta);
        hooks.drag_move(next_width);
        Some(next_width)
    }

    /// End the gesture. Nothing is emitted.
    pub(crate) fn end_drag(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    /// Restore the default width, independent of any live gesture.
    ///
    /// A live gesture is re-anchored at the reset width so the next move does
    /// not jump back to the pre-reset width.
    pub(crate) fn reset(&mut self, hooks: &mut impl DragHooks) -> f32 {
        let width = hooks.reset_width();
        hooks.drag_move(width);
        if let Some(session) = self.session.as_mut() {
            session.start_width = width;
        }
        width
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{DragController, DragHooks};
    use crate::layout::{
        DEFAULT_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH,
    };

    /// Hooks double that records every width written.
    #[derive(Debug)]
    pub(crate) struct RecordingHooks {
        pub(crate) committed: f32,
        pub(crate) moves: Vec<f32>,
    }

    impl RecordingHooks {
        pub(crate) fn with_committed(committed: f32) -> Self {
            Self {
                committed,
                moves: Vec::new(),
            }
        }
    }

    impl DragHooks for RecordingHooks {
        fn committed_width(&self) -> f32 {
            self.committed
        }

        fn drag_move(&mut self, next_width: f32) {
            self.committed = next_width;
            self.moves.push(next_width);
        }
    }

    #[test]
    fn given_drag_from_committed_width_when_pointer_moves_then_width_tracks_and_clamps()
     {
        let mut hooks = RecordingHooks::with_committed(300.0);
        let mut controller = DragController::default();
        controller.start_drag(hooks.committed_width(), 100.0);

        assert_eq!(controller.drag_move(150.0, &mut hooks), Some(350.0));
        assert_eq!(controller.drag_move(1000.0, &mut hooks), Some(500.0));
        assert_eq!(controller.drag_move(-1000.0, &mut hooks), Some(200.0));
        assert!(controller.end_drag().is_some());
        assert_eq!(controller.drag_move(150.0, &mut hooks), None);

        assert_eq!(hooks.moves, vec![350.0, 500.0, 200.0]);
    }

    #[test]
    fn given_any_delta_when_limited_then_width_stays_within_bounds() {
        let hooks = RecordingHooks::with_committed(DEFAULT_SIDEBAR_WIDTH);

        for step in -400..=400 {
            let delta = step as f32 * 7.5;
            let width = hooks.limit(DEFAULT_SIDEBAR_WIDTH, delta);
            assert!((MIN_SIDEBAR_WIDTH..=MAX_SIDEBAR_WIDTH).contains(&width));
        }
    }

    #[test]
    fn given_increasing_delta_when_limited_then_width_never_decreases() {
        let hooks = RecordingHooks::with_committed(DEFAULT_SIDEBAR_WIDTH);
        let mut previous = f32::MIN;

        for step in -100..=100 {
            let width = hooks.limit(DEFAULT_SIDEBAR_WIDTH, step as f32 * 5.0);
            assert!(width >= previous);
            previous = width;
        }
        assert_eq!(previous, MAX_SIDEBAR_WIDTH);
    }

    #[test]
    fn given_same_move_twice_when_applied_then_both_writes_are_identical() {
        let mut hooks = RecordingHooks::with_committed(300.0);
        let mut controller = DragController::default();
        controller.start_drag(300.0, 40.0);

        let first = controller.drag_move(95.0, &mut hooks);
        let second = controller.drag_move(95.0, &mut hooks);

        assert_eq!(first, second);
        assert_eq!(hooks.moves, vec![355.0, 355.0]);
    }

    #[test]
    fn given_no_session_when_pointer_moves_then_hooks_are_untouched() {
        let mut hooks = RecordingHooks::with_committed(300.0);
        let mut controller = DragController::default();

        assert_eq!(controller.drag_move(480.0, &mut hooks), None);
        assert!(controller.end_drag().is_none());

        assert!(hooks.moves.is_empty());
        assert_eq!(hooks.committed, 300.0);
    }

    #[test]
    fn given_press_and_release_without_move_when_ended_then_nothing_is_written()
     {
        let hooks = RecordingHooks::with_committed(300.0);
        let mut controller = DragController::default();

        controller.start_drag(hooks.committed_width(), 12.0);
        assert!(controller.is_dragging());
        controller.end_drag();

        assert!(!controller.is_dragging());
        assert!(hooks.moves.is_empty());
    }

    #[test]
    fn given_any_prior_width_when_reset_then_width_is_default() {
        for prior in [MIN_SIDEBAR_WIDTH, 333.0, MAX_SIDEBAR_WIDTH] {
            let mut hooks = RecordingHooks::with_committed(prior);
            let mut controller = DragController::default();

            let width = controller.reset(&mut hooks);

            assert_eq!(width, DEFAULT_SIDEBAR_WIDTH);
            assert_eq!(hooks.committed, DEFAULT_SIDEBAR_WIDTH);
        }
    }

    #[test]
    fn given_live_gesture_when_reset_then_next_move_starts_from_default() {
        let mut hooks = RecordingHooks::with_committed(450.0);
        let mut controller = DragController::default();
        controller.start_drag(hooks.committed_width(), 100.0);

        controller.reset(&mut hooks);
        let next = controller.drag_move(110.0, &mut hooks);

        assert_eq!(next, Some(DEFAULT_SIDEBAR_WIDTH + 10.0));
        assert!(controller.is_dragging());
    }
}
