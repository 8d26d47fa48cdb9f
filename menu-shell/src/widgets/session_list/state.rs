/// Internal state for the session list.
#[derive(Debug, Default)]
pub(super) struct SessionListState {
    filter: String,
}

impl SessionListState {
    pub(super) fn filter(&self) -> &str {
        &self.filter
    }

    pub(super) fn set_filter(&mut self, value: String) {
        self.filter = value;
    }
}
