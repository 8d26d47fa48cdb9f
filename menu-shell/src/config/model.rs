use serde::Serialize;

use crate::layout::DEFAULT_SIDEBAR_WIDTH;

/// Persisted application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub(crate) struct AppConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    sidebar_width: Option<f32>,
}

impl AppConfig {
    /// Return the committed sidebar width, falling back to the default.
    pub(crate) fn sidebar_width(&self) -> f32 {
        self.sidebar_width.unwrap_or(DEFAULT_SIDEBAR_WIDTH)
    }

    /// Store a sidebar width as given.
    ///
    /// Bounds are the caller's job; the resize hooks only ever pass clamped
    /// values.
    pub(crate) fn set_sidebar_width(&mut self, width: f32) {
        self.sidebar_width = Some(width);
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use crate::layout::DEFAULT_SIDEBAR_WIDTH;

    #[test]
    fn given_empty_config_when_sidebar_width_then_returns_default() {
        let config = AppConfig::default();

        assert!(serde_json::to_string(&config)
            .expect("config serializes")
            .contains("{}"));
        assert_eq!(config.sidebar_width(), DEFAULT_SIDEBAR_WIDTH);
    }
}
