//! Store configuration

/// Configuration for the chain-document store connection.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database path or URL
    pub path: String,
    /// Authentication token for remote databases
    pub auth_token: Option<String>,
}

impl StoreConfig {
    /// Create a new store configuration with default settings
    pub fn new<P: Into<String>>(path: P) -> Self {
        Self {
            path: path.into(),
            auth_token: None,
        }
    }

    /// Set authentication token
    pub fn with_auth_token(mut self, token: String) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Check if this is an in-memory database
    pub fn is_memory(&self) -> bool {
        self.path == ":memory:" || self.path.contains("mode=memory")
    }

    /// Get database type description
    pub fn database_type(&self) -> &'static str {
        if self.is_memory() {
            "in-memory SQLite"
        } else {
            "local SQLite"
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new("xbridge.db")
    }
}

impl<P: Into<String>> From<P> for StoreConfig {
    fn from(path: P) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_config() {
        let config = StoreConfig::new("test.db");
        assert_eq!(config.path, "test.db");
        assert!(config.auth_token.is_none());
        assert_eq!(config.database_type(), "local SQLite");
    }

    #[test]
    fn memory_config() {
        let config = StoreConfig::new(":memory:");
        assert!(config.is_memory());
        assert_eq!(config.database_type(), "in-memory SQLite");
    }

    #[test]
    fn from_path() {
        let config: StoreConfig = "chains.db".into();
        assert_eq!(config.path, "chains.db");
    }
}
