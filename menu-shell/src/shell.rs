use crate::navigation::{Navigator, Path};

/// One entry listed in the session pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Session {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) summary: String,
}

impl Session {
    fn new(id: u64, title: &str, summary: &str) -> Self {
        Self {
            id,
            title: String::from(title),
            summary: String::from(summary),
        }
    }
}

/// Data shared by both panes: the session catalog and the active route.
#[derive(Debug, Default)]
pub(crate) struct Shell {
    sessions: Vec<Session>,
    navigator: Navigator,
}

impl Shell {
    pub(crate) fn new(sessions: Vec<Session>) -> Self {
        Self {
            sessions,
            navigator: Navigator::default(),
        }
    }

    /// Shell seeded with the built-in sample sessions.
    pub(crate) fn with_samples() -> Self {
        Self::new(vec![
            Session::new(1, "Release planning", "Milestones for the next cut."),
            Session::new(2, "Bug triage", "Open crash reports from the beta."),
            Session::new(3, "Design review", "Sidebar and panel spacing pass."),
            Session::new(4, "Standup notes", "Blockers and follow-ups."),
            Session::new(5, "Retrospective", "What went well this sprint."),
        ])
    }

    pub(crate) fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub(crate) fn route(&self) -> Path {
        self.navigator.current()
    }

    /// Session shown for the current route, if any.
    pub(crate) fn active_session(&self) -> Option<&Session> {
        match self.route() {
            Path::Home => None,
            Path::Session(id) => self.find(id),
        }
    }

    pub(crate) fn find(&self, id: u64) -> Option<&Session> {
        self.sessions.iter().find(|session| session.id == id)
    }

    /// Sessions whose title contains `filter`, ignoring case.
    pub(crate) fn matching<'a>(
        &'a self,
        filter: &str,
    ) -> impl Iterator<Item = &'a Session> + 'a {
        let needle = filter.trim().to_lowercase();
        self.sessions.iter().filter(move |session| {
            needle.is_empty() || session.title.to_lowercase().contains(&needle)
        })
    }
}
