/// Routes the shell can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Path {
    #[default]
    Home,
    Session(u64),
}

/// Current route plus back-history.
#[derive(Debug, Default)]
pub(crate) struct Navigator {
    current: Path,
    history: Vec<Path>,
}

impl Navigator {
    pub(crate) fn current(&self) -> Path {
        self.current
    }

    /// Move to `path`, remembering the previous route.
    ///
    /// Navigating to the current route leaves history untouched.
    pub(crate) fn navigate(&mut self, path: Path) {
        if path == self.current {
            return;
        }

        log::debug!("navigate: {:?} -> {path:?}", self.current);
        self.history.push(self.current);
        self.current = path;
    }

    /// Return to the previous route, if any.
    pub(crate) fn back(&mut self) -> Option<Path> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(previous)
    }
}
