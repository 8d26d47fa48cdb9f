pub(crate) mod session_panel;
