//! Rendering configuration.
//!
//! The grammar itself has no knobs; everything configurable lives on the output side.

/// Configuration for [`HtmlRenderer`](crate::render::HtmlRenderer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Prefix for every CSS class the renderer emits (`{prefix}step`, `{prefix}ingredient`, ...)
    pub class_prefix: String,
    /// Duration dialect used to compute `data-seconds` on timers (`"en"`, `"sv"`, or `""` for symbolic units)
    pub duration_dialect: String,
    /// Whether to render the metadata view as a `<dl>` header
    pub include_metadata: bool,
    /// Whether to annotate timers with their approximate length in seconds
    pub include_timer_seconds: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            class_prefix: "cook-".to_string(),
            duration_dialect: "en".to_string(),
            include_metadata: false,
            include_timer_seconds: true,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the duration dialect
    pub fn with_duration_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.duration_dialect = dialect.into();
        self
    }

    /// Render (or skip) the metadata header
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Emit (or skip) `data-seconds` on timers
    pub fn with_timer_seconds(mut self, include: bool) -> Self {
        self.include_timer_seconds = include;
        self
    }

    /// Full class name for a role, e.g. `class("step")` → `cook-step`.
    pub fn class(&self, role: &str) -> String {
        format!("{}{}", self.class_prefix, role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_class_prefix() {
        assert_eq!(RenderConfig::default().class_prefix, "cook-");
    }

    #[test]
    fn test_default_duration_dialect() {
        assert_eq!(RenderConfig::default().duration_dialect, "en");
    }

    #[test]
    fn test_default_flags() {
        let config = RenderConfig::default();
        assert!(!config.include_metadata);
        assert!(config.include_timer_seconds);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(RenderConfig::new(), RenderConfig::default());
    }

    // ========================================
    // Builder tests
    // ========================================

    #[test]
    fn test_with_class_prefix() {
        let config = RenderConfig::new().with_class_prefix("recipe__");
        assert_eq!(config.class("timer"), "recipe__timer");
    }

    #[test]
    fn test_empty_class_prefix() {
        let config = RenderConfig::new().with_class_prefix("");
        assert_eq!(config.class("step"), "step");
    }

    #[test]
    fn test_builder_chaining() {
        let config = RenderConfig::new()
            .with_duration_dialect("sv")
            .with_metadata(true)
            .with_timer_seconds(false);
        assert_eq!(config.duration_dialect, "sv");
        assert!(config.include_metadata);
        assert!(!config.include_timer_seconds);
        assert_eq!(config.class_prefix, "cook-");
    }
}
