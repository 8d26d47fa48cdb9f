use iced::widget::{container, mouse_area, opaque, row, stack};
use iced::{Element, Length, Theme, alignment};

use super::drag_handle::{self, DragHandleEvent, DragHandleProps};
use super::slide_offset::{self, SlideOffsetProps};
use crate::style::{list_pane_style, panel_pane_style};
use crate::widgets::menu_layout::event::{MenuLayoutEvent, MenuLayoutIntent};
use crate::widgets::menu_layout::model::MenuLayoutViewModel;
use crate::widgets::menu_layout::responsive::PanelPresentation;

/// Props for the split view: the layout snapshot and both rendered panes.
pub(crate) struct SplitViewProps<'a, L, P, Renderer> {
    pub(crate) vm: MenuLayoutViewModel,
    pub(crate) list: Element<'a, MenuLayoutEvent<L, P>, Theme, Renderer>,
    pub(crate) panel: Element<'a, MenuLayoutEvent<L, P>, Theme, Renderer>,
}

/// Render the list and panel panes for the active layout mode.
pub(crate) fn view<'a, L, P, Renderer>(
    props: SplitViewProps<'a, L, P, Renderer>,
) -> Element<'a, MenuLayoutEvent<L, P>, Theme, Renderer>
where
    L: Clone + 'static,
    P: Clone + 'static,
    Renderer: iced::advanced::Renderer + 'a,
{
    let SplitViewProps { vm, list, panel } = props;

    let list_width = vm
        .geometry
        .list_width
        .map_or(Length::Fill, Length::Fixed);
    let list_height = vm
        .geometry
        .list_max_height
        .map_or(Length::Fill, Length::Fixed);

    // A covered list keeps its widget tree but stops routing home.
    let mut list_area =
        mouse_area(container(list).width(Length::Fill).height(Length::Fill));
    if vm.layout.list_visible {
        list_area = list_area.on_press(MenuLayoutEvent::Intent(
            MenuLayoutIntent::ListBackgroundPressed,
        ));
    }
    let list = container(list_area)
        .width(list_width)
        .height(list_height)
        .style(list_pane_style);

    let panel_width = vm
        .geometry
        .panel_width
        .map_or(Length::Fill, Length::Fixed);
    let panel = container(panel)
        .width(panel_width)
        .height(Length::Fill)
        .style(panel_pane_style);

    match vm.layout.panel {
        PanelPresentation::Fill => {
            if !vm.layout.has_drag_handle {
                return row![list, panel]
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into();
            }

            let handle = drag_handle::view(DragHandleProps {
                is_active: vm.is_handle_active(),
            })
            .map(|event| {
                MenuLayoutEvent::Intent(match event {
                    DragHandleEvent::Pressed => MenuLayoutIntent::HandlePressed,
                    DragHandleEvent::DoubleClicked => {
                        MenuLayoutIntent::HandleDoubleClicked
                    },
                    DragHandleEvent::Hovered(value) => {
                        MenuLayoutIntent::HandleHovered(value)
                    },
                })
            });

            let list_with_handle = stack![
                list,
                container(handle)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            ]
            .width(list_width)
            .height(Length::Fill);

            row![list_with_handle, panel]
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        },
        PanelPresentation::Slide => {
            let sliding_panel = container(slide_offset::view(SlideOffsetProps {
                offset_x: vm.geometry.panel_offset_x,
                content: opaque(panel),
            }))
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true);

            stack![list, sliding_panel]
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        },
    }
}
