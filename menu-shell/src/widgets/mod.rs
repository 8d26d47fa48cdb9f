pub(crate) mod menu_layout;
pub(crate) mod session_list;
pub(crate) mod session_panel;
