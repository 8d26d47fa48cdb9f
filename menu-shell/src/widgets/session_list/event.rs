/// Events emitted by the session list pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionListEvent {
    /// The filter input changed.
    FilterChanged(String),
    /// A session row was pressed.
    Select(u64),
}
