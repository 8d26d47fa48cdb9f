pub(crate) mod drag_handle;
pub(crate) mod slide_offset;
pub(crate) mod split_view;
