mod drag;
mod event;
mod model;
mod pane;
mod reducer;
mod responsive;
mod state;
pub(crate) mod view;

pub(crate) use drag::DragHooks;
pub(crate) use event::{MenuLayoutEffect, MenuLayoutEvent, MenuLayoutIntent};
use iced::time::Instant;
use iced::{Element, Size, Task, Theme};
use model::MenuLayoutViewModel;
pub(crate) use pane::{MenuPane, PaneCtx, PaneProps};
use reducer::Panes;
use state::MenuLayoutState;

/// Event type of a layout composed from panes `L` and `P`.
pub(crate) type MenuLayoutEventOf<L, P> =
    MenuLayoutEvent<<L as MenuPane>::Event, <P as MenuPane>::Event>;

/// Intent type of a layout composed from panes `L` and `P`.
pub(crate) type MenuLayoutIntentOf<L, P> =
    MenuLayoutIntent<<L as MenuPane>::Event, <P as MenuPane>::Event>;

/// Two-pane layout widget with a resizable list/panel split.
///
/// Owns both panes, the narrow-mode panel visibility and the drag gesture.
/// The sidebar width itself lives with the caller and is reached through
/// [`DragHooks`].
pub(crate) struct MenuLayoutWidget<L, P> {
    state: MenuLayoutState,
    list: L,
    panel: P,
}

impl<L, P> MenuLayoutWidget<L, P>
where
    L: MenuPane,
    P: MenuPane<Shared = L::Shared>,
{
    /// Construct the layout with the panel hidden.
    pub(crate) fn new(list: L, panel: P, is_narrow: bool) -> Self {
        Self {
            state: MenuLayoutState::new(is_narrow),
            list,
            panel,
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        intent: MenuLayoutIntentOf<L, P>,
        hooks: &mut impl DragHooks,
    ) -> Task<MenuLayoutEventOf<L, P>> {
        let effect = reducer::reduce(
            &mut self.state,
            Panes {
                list: &mut self.list,
                panel: &mut self.panel,
            },
            intent,
            hooks,
            Instant::now(),
        );

        match effect {
            Some(effect) => Task::done(MenuLayoutEvent::Effect(effect)),
            None => Task::none(),
        }
    }

    /// Build a read-only view model for a viewport and live menu width.
    pub(crate) fn vm(
        &self,
        viewport: Size,
        menu_width: f32,
    ) -> MenuLayoutViewModel {
        let layout = responsive::select_layout(
            self.state.is_narrow(),
            self.state.show_panel(),
        );
        let geometry = responsive::resolve_geometry(
            &layout,
            viewport,
            menu_width,
            self.state.slide_fraction(),
        );

        MenuLayoutViewModel {
            layout,
            geometry,
            show_panel: self.state.show_panel(),
            is_dragging: self.state.drag().is_dragging(),
            is_handle_hovered: self.state.is_handle_hovered(),
        }
    }

    /// Return whether a resize gesture is live.
    pub(crate) fn is_dragging(&self) -> bool {
        self.state.drag().is_dragging()
    }

    /// Return whether the narrow-mode panel is mid-transition.
    pub(crate) fn is_animating(&self) -> bool {
        self.state.is_sliding()
    }

    /// Render both panes inside the split view.
    pub(crate) fn view<'a>(
        &'a self,
        vm: MenuLayoutViewModel,
        shared: &'a L::Shared,
    ) -> Element<'a, MenuLayoutEventOf<L, P>, Theme, iced::Renderer> {
        let props = PaneProps {
            shared,
            show_panel: vm.show_panel,
            is_narrow: vm.is_narrow(),
        };

        let list = self
            .list
            .view(props)
            .map(|event| MenuLayoutEvent::Intent(MenuLayoutIntent::List(event)));
        let panel = self.panel.view(props).map(|event| {
            MenuLayoutEvent::Intent(MenuLayoutIntent::Panel(event))
        });

        view::split_view::view(view::split_view::SplitViewProps {
            vm,
            list,
            panel,
        })
    }
}
