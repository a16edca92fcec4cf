//! Curator configuration.

/// Configuration for how a [`Curator`](crate::Curator) populates and accepts
/// characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuratorConfig {
    /// Populate the store from the subject at construction.
    pub eager: bool,
    /// Reject writes to undeclared characteristics in `try_set` and import.
    pub strict: bool,
    /// Treat a `null` accessor result as "no value" during population.
    pub skip_null: bool,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            eager: true,
            strict: false,
            skip_null: true,
        }
    }
}

impl CuratorConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defer population until `refresh` or an explicit write.
    pub fn lazy(mut self) -> Self {
        self.eager = false;
        self
    }

    /// Reject undeclared characteristic names on fallible writes.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Store `null` accessor results instead of skipping them.
    pub fn keep_null(mut self) -> Self {
        self.skip_null = false;
        self
    }
}
