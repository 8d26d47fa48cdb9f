/// Events emitted by the session panel pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionPanelEvent {
    /// Return to the list in narrow mode.
    Back,
    /// Close the session and go home.
    Close,
}
