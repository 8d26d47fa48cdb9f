use std::time::Duration;

use iced::Point;
use iced::time::Instant;

use super::drag::DragController;
use super::responsive::SlidePosition;

const PANEL_SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Internal runtime state for the menu layout.
#[derive(Debug)]
pub(super) struct MenuLayoutState {
    show_panel: bool,
    is_narrow: bool,
    cursor: Point,
    is_handle_hovered: bool,
    drag: DragController,
    slide: PanelSlide,
}

impl MenuLayoutState {
    pub(super) fn new(is_narrow: bool) -> Self {
        Self {
            show_panel: false,
            is_narrow,
            cursor: Point::ORIGIN,
            is_handle_hovered: false,
            drag: DragController::default(),
            slide: PanelSlide::settled(target_position(false)),
        }
    }

    pub(super) fn show_panel(&self) -> bool {
        self.show_panel
    }

    pub(super) fn is_narrow(&self) -> bool {
        self.is_narrow
    }

    pub(super) fn cursor(&self) -> Point {
        self.cursor
    }

    pub(super) fn is_handle_hovered(&self) -> bool {
        self.is_handle_hovered
    }

    pub(super) fn set_handle_hovered(&mut self, value: bool) {
        self.is_handle_hovered = value;
    }

    pub(super) fn drag(&self) -> &DragController {
        &self.drag
    }

    pub(super) fn drag_mut(&mut self) -> &mut DragController {
        &mut self.drag
    }

    pub(super) fn slide_fraction(&self) -> f32 {
        self.slide.fraction
    }

    pub(super) fn is_sliding(&self) -> bool {
        self.slide.transition.is_some()
    }

    pub(super) fn update_cursor(&mut self, position: Point) {
        self.cursor = position;
    }

    /// Set panel visibility; narrow mode animates the change from `now`.
    pub(super) fn set_show_panel(&mut self, value: bool, now: Instant) {
        if self.show_panel == value {
            return;
        }

        self.show_panel = value;
        let target = target_position(value);
        if self.is_narrow {
            self.slide.start(target, now);
        } else {
            self.slide = PanelSlide::settled(target);
        }
    }

    /// Apply a viewport mode and return whether it changed.
    pub(super) fn set_narrow(&mut self, is_narrow: bool) -> bool {
        if self.is_narrow == is_narrow {
            return false;
        }

        self.is_narrow = is_narrow;
        self.is_handle_hovered = false;
        self.slide = PanelSlide::settled(target_position(self.show_panel));
        true
    }

    pub(super) fn advance_slide(&mut self, now: Instant) {
        self.slide.advance(now);
    }
}

fn target_position(show_panel: bool) -> SlidePosition {
    if show_panel {
        SlidePosition::OnScreen
    } else {
        SlidePosition::OffScreen
    }
}

/// Current narrow-mode panel offset and any running transition.
#[derive(Debug, Clone, Copy)]
struct PanelSlide {
    fraction: f32,
    transition: Option<SlideTransition>,
}

#[derive(Debug, Clone, Copy)]
struct SlideTransition {
    from: f32,
    to: f32,
    started_at: Instant,
}

impl PanelSlide {
    fn settled(position: SlidePosition) -> Self {
        Self {
            fraction: position.fraction(),
            transition: None,
        }
    }

    fn start(&mut self, target: SlidePosition, now: Instant) {
        self.transition = Some(SlideTransition {
            from: self.fraction,
            to: target.fraction(),
            started_at: now,
        });
    }

    fn advance(&mut self, now: Instant) {
        let Some(transition) = self.transition else {
            return;
        };

        let elapsed = now.saturating_duration_since(transition.started_at);
        let progress = (elapsed.as_secs_f32()
            / PANEL_SLIDE_DURATION.as_secs_f32())
        .min(1.0);
        let eased = 1.0 - (1.0 - progress).powi(3);

        self.fraction =
            transition.from + (transition.to - transition.from) * eased;
        if progress >= 1.0 {
            self.fraction = transition.to;
            self.transition = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::time::Instant;

    use super::MenuLayoutState;

    #[test]
    fn given_narrow_state_when_panel_shown_then_slide_runs_to_on_screen() {
        let mut state = MenuLayoutState::new(true);
        let start = Instant::now();
        assert_eq!(state.slide_fraction(), 1.0);

        state.set_show_panel(true, start);
        assert!(state.is_sliding());

        state.advance_slide(start + Duration::from_millis(150));
        let midway = state.slide_fraction();
        assert!(midway > 0.0 && midway < 1.0);

        state.advance_slide(start + Duration::from_millis(300));
        assert_eq!(state.slide_fraction(), 0.0);
        assert!(!state.is_sliding());
    }

    #[test]
    fn given_wide_state_when_panel_shown_then_no_transition_runs() {
        let mut state = MenuLayoutState::new(false);

        state.set_show_panel(true, Instant::now());

        assert!(state.show_panel());
        assert!(!state.is_sliding());
        assert_eq!(state.slide_fraction(), 0.0);
    }

    #[test]
    fn given_running_slide_when_mode_flips_then_slide_settles() {
        let mut state = MenuLayoutState::new(true);
        state.set_show_panel(true, Instant::now());

        assert!(state.set_narrow(false));

        assert!(!state.is_sliding());
        assert_eq!(state.slide_fraction(), 0.0);
        assert!(!state.set_narrow(false));
    }
}
