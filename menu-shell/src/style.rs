use iced::widget::container;
use iced::{Border, Color, Theme};

const HANDLE_ACTIVE_ALPHA: f32 = 0.6;
const DIVIDER_ALPHA: f32 = 0.3;

/// Background of the list pane.
pub(crate) fn list_pane_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Opaque background of the panel pane, so a slid-in panel covers the list.
pub(crate) fn panel_pane_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let mut divider = palette.background.strong.color;
    divider.a = DIVIDER_ALPHA;

    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: divider,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Drag handle: transparent at rest, accent-tinted while hovered or dragging.
pub(crate) fn drag_handle_style(
    is_active: bool,
) -> impl Fn(&Theme) -> container::Style + 'static {
    move |theme: &Theme| {
        let background = if is_active {
            let mut color = theme.extended_palette().primary.base.color;
            color.a = HANDLE_ACTIVE_ALPHA;
            color
        } else {
            Color::TRANSPARENT
        };

        container::Style {
            background: Some(background.into()),
            ..Default::default()
        }
    }
}

/// Selected or hovered row in the session list.
pub(crate) fn list_row_style(
    is_selected: bool,
) -> impl Fn(&Theme) -> container::Style + 'static {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let background = is_selected.then(|| palette.primary.weak.color.into());

        container::Style {
            background,
            text_color: Some(if is_selected {
                palette.primary.weak.text
            } else {
                palette.background.weak.text
            }),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
