pub(crate) mod session_list;
