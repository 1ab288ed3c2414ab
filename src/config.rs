//! Configuration for Roster
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a Roster session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Number of records the store reserves room for up front
    pub initial_capacity: usize,

    // -------------------------------------------------------------------------
    // Session Configuration
    // -------------------------------------------------------------------------
    /// Print the short info block (no marks/research area) when viewing all
    pub brief_listing: bool,

    /// Heading shown above the menu, e.g. `===== {title} =====`
    pub menu_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            brief_listing: false,
            menu_title: "Student Management Menu".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the initial store capacity
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Use the brief info block for view-all
    pub fn brief_listing(mut self, brief: bool) -> Self {
        self.config.brief_listing = brief;
        self
    }

    /// Set the menu heading
    pub fn menu_title(mut self, title: impl Into<String>) -> Self {
        self.config.menu_title = title.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
