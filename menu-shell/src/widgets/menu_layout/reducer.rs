use iced::time::Instant;

use super::drag::DragHooks;
use super::event::{MenuLayoutEffect, MenuLayoutIntent};
use super::pane::{MenuPane, PaneCtx};
use super::state::MenuLayoutState;
use crate::navigation::Path;

/// Both panes composed by the layout, borrowed for one reduction.
pub(super) struct Panes<'a, L, P> {
    pub(super) list: &'a mut L,
    pub(super) panel: &'a mut P,
}

/// Reduce a menu layout intent into state updates and an optional effect.
///
/// `now` stamps the start of any panel slide the intent triggers.
pub(super) fn reduce<L, P>(
    state: &mut MenuLayoutState,
    panes: Panes<'_, L, P>,
    intent: MenuLayoutIntent<L::Event, P::Event>,
    hooks: &mut impl DragHooks,
    now: Instant,
) -> Option<MenuLayoutEffect>
where
    L: MenuPane,
    P: MenuPane<Shared = L::Shared>,
{
    match intent {
        MenuLayoutIntent::List(event) => {
            let mut ctx = PaneCtx::new(state.show_panel());
            panes.list.reduce(event, &mut ctx);
            apply_pane_ctx(state, ctx, now)
        },
        MenuLayoutIntent::Panel(event) => {
            let mut ctx = PaneCtx::new(state.show_panel());
            panes.panel.reduce(event, &mut ctx);
            apply_pane_ctx(state, ctx, now)
        },
        MenuLayoutIntent::ListBackgroundPressed => {
            Some(MenuLayoutEffect::Navigate(Path::Home))
        },
        MenuLayoutIntent::CursorMoved { position } => {
            state.update_cursor(position);
            None
        },
        MenuLayoutIntent::HandlePressed => {
            if state.is_narrow() {
                return None;
            }

            let start_width = hooks.committed_width();
            let pointer_x = state.cursor().x;
            let session = state.drag_mut().start_drag(start_width, pointer_x);
            log::debug!(
                "sidebar drag started: width={} x={}",
                session.start_width(),
                session.start_pointer_x()
            );
            None
        },
        MenuLayoutIntent::HandleDoubleClicked => {
            let width = state.drag_mut().reset(hooks);
            log::debug!("sidebar width reset to {width}");
            None
        },
        MenuLayoutIntent::HandleHovered(value) => {
            state.set_handle_hovered(value);
            None
        },
        MenuLayoutIntent::PointerMoved { x } => {
            if let Some(width) = state.drag().drag_move(x, hooks) {
                log::trace!("sidebar width {width}");
            }
            None
        },
        MenuLayoutIntent::PointerReleased => {
            if state.drag_mut().end_drag().is_some() {
                log::debug!("sidebar drag ended");
            }
            None
        },
        MenuLayoutIntent::PointerCaptureLost => {
            if state.drag_mut().end_drag().is_some() {
                log::debug!("sidebar drag cancelled: pointer capture lost");
            }
            None
        },
        MenuLayoutIntent::ViewportChanged { is_narrow } => {
            if state.set_narrow(is_narrow)
                && is_narrow
                && state.drag_mut().end_drag().is_some()
            {
                log::debug!("sidebar drag cancelled: viewport became narrow");
            }
            None
        },
        MenuLayoutIntent::Frame(at) => {
            state.advance_slide(at);
            None
        },
    }
}

fn apply_pane_ctx(
    state: &mut MenuLayoutState,
    ctx: PaneCtx,
    now: Instant,
) -> Option<MenuLayoutEffect> {
    let (show_panel, navigate_to) = ctx.into_parts();
    state.set_show_panel(show_panel, now);
    navigate_to.map(MenuLayoutEffect::Navigate)
}

#[cfg(test)]
pub(crate) mod tests {
    use iced::time::Instant;
    use iced::widget::text;
    use iced::{Element, Point, Theme};

    use super::{Panes, reduce};
    use crate::layout::DEFAULT_SIDEBAR_WIDTH;
    use crate::navigation::Path;
    use crate::widgets::menu_layout::drag::DragHooks;
    use crate::widgets::menu_layout::drag::tests::RecordingHooks;
    use crate::widgets::menu_layout::event::{
        MenuLayoutEffect, MenuLayoutIntent,
    };
    use crate::widgets::menu_layout::pane::{MenuPane, PaneCtx, PaneProps};
    use crate::widgets::menu_layout::state::MenuLayoutState;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) enum StubPaneEvent {
        ItemPressed,
        Open(u64),
        Hide,
    }

    /// Minimal pane used to drive the layout reducer.
    #[derive(Debug, Default)]
    pub(crate) struct StubPane {
        pub(crate) reduced: usize,
    }

    impl MenuPane for StubPane {
        type Shared = ();
        type Event = StubPaneEvent;

        fn reduce(&mut self, event: Self::Event, ctx: &mut PaneCtx) {
            self.reduced += 1;
            match event {
                StubPaneEvent::ItemPressed => {},
                StubPaneEvent::Open(id) => {
                    ctx.set_show_panel(true);
                    ctx.navigate(Path::Session(id));
                },
                StubPaneEvent::Hide => ctx.set_show_panel(false),
            }
        }

        fn view<'a>(
            &'a self,
            _props: PaneProps<'a, ()>,
        ) -> Element<'a, Self::Event, Theme, iced::Renderer> {
            text("stub").into()
        }
    }

    type StubIntent = MenuLayoutIntent<StubPaneEvent, StubPaneEvent>;

    struct Harness {
        state: MenuLayoutState,
        list: StubPane,
        panel: StubPane,
        hooks: RecordingHooks,
    }

    impl Harness {
        fn new(is_narrow: bool) -> Self {
            Self {
                state: MenuLayoutState::new(is_narrow),
                list: StubPane::default(),
                panel: StubPane::default(),
                hooks: RecordingHooks::with_committed(DEFAULT_SIDEBAR_WIDTH),
            }
        }

        fn send(&mut self, intent: StubIntent) -> Option<MenuLayoutEffect> {
            reduce(
                &mut self.state,
                Panes {
                    list: &mut self.list,
                    panel: &mut self.panel,
                },
                intent,
                &mut self.hooks,
                Instant::now(),
            )
        }
    }

    #[test]
    fn given_wide_layout_when_list_background_and_item_pressed_then_home_navigates_once()
     {
        let mut harness = Harness::new(false);
        let mut effects = Vec::new();

        effects.extend(harness.send(MenuLayoutIntent::ListBackgroundPressed));
        effects.extend(
            harness.send(MenuLayoutIntent::List(StubPaneEvent::ItemPressed)),
        );

        assert_eq!(effects, vec![MenuLayoutEffect::Navigate(Path::Home)]);
        assert_eq!(harness.list.reduced, 1);
    }

    #[test]
    fn given_pane_requests_panel_when_reduced_then_visibility_and_route_follow() {
        let mut harness = Harness::new(true);

        let effect =
            harness.send(MenuLayoutIntent::List(StubPaneEvent::Open(7)));

        assert_eq!(effect, Some(MenuLayoutEffect::Navigate(Path::Session(7))));
        assert!(harness.state.show_panel());
        assert!(harness.state.is_sliding());

        let effect = harness.send(MenuLayoutIntent::Panel(StubPaneEvent::Hide));
        assert_eq!(effect, None);
        assert!(!harness.state.show_panel());
    }

    #[test]
    fn given_config_changed_between_gestures_when_handle_pressed_then_start_width_is_fresh()
     {
        let mut harness = Harness::new(false);
        harness.send(MenuLayoutIntent::CursorMoved {
            position: Point::new(300.0, 40.0),
        });
        harness.send(MenuLayoutIntent::HandlePressed);
        harness.send(MenuLayoutIntent::PointerMoved { x: 340.0 });
        harness.send(MenuLayoutIntent::PointerReleased);
        assert_eq!(harness.hooks.committed_width(), 340.0);

        harness.hooks.committed = 420.0;
        harness.send(MenuLayoutIntent::HandlePressed);
        harness.send(MenuLayoutIntent::PointerMoved { x: 310.0 });

        assert_eq!(harness.hooks.moves, vec![340.0, 430.0]);
    }

    #[test]
    fn given_live_gesture_when_viewport_turns_narrow_then_gesture_ends() {
        let mut harness = Harness::new(false);
        harness.send(MenuLayoutIntent::HandlePressed);
        assert!(harness.state.drag().is_dragging());

        harness.send(MenuLayoutIntent::ViewportChanged { is_narrow: true });
        harness.send(MenuLayoutIntent::PointerMoved { x: 900.0 });

        assert!(!harness.state.drag().is_dragging());
        assert!(harness.hooks.moves.is_empty());
        assert_eq!(harness.hooks.committed_width(), DEFAULT_SIDEBAR_WIDTH);
    }

    #[test]
    fn given_narrow_layout_when_handle_pressed_then_no_gesture_starts() {
        let mut harness = Harness::new(true);

        harness.send(MenuLayoutIntent::HandlePressed);

        assert!(!harness.state.drag().is_dragging());
    }

    #[test]
    fn given_live_gesture_when_capture_lost_then_later_moves_are_ignored() {
        let mut harness = Harness::new(false);
        harness.send(MenuLayoutIntent::HandlePressed);

        harness.send(MenuLayoutIntent::PointerCaptureLost);
        harness.send(MenuLayoutIntent::PointerMoved { x: 120.0 });

        assert!(harness.hooks.moves.is_empty());
    }

    #[test]
    fn given_live_gesture_when_pointer_moves_then_each_move_writes_a_bounded_width()
     {
        let mut harness = Harness::new(false);
        harness.send(MenuLayoutIntent::CursorMoved {
            position: Point::new(300.0, 40.0),
        });
        harness.send(MenuLayoutIntent::HandlePressed);

        let effects = [
            harness.send(MenuLayoutIntent::PointerMoved { x: 50.0 }),
            harness.send(MenuLayoutIntent::PointerMoved { x: 360.0 }),
            harness.send(MenuLayoutIntent::PointerMoved { x: 900.0 }),
        ];

        assert!(effects.iter().all(Option::is_none));
        assert_eq!(harness.hooks.moves, vec![200.0, 360.0, 500.0]);
        assert!(harness.state.drag().is_dragging());
    }
}
