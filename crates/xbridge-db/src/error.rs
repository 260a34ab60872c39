//! Store error handling
//!
//! Error types for store operations with context preserved via `thiserror`
//! sources and constructor helpers.

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, DatabaseError>;

/// Store error types
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Connection-related errors
    #[error("Database connection failed: {message}")]
    ConnectionError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Query execution errors
    #[error("Query execution failed: {query}")]
    QueryError {
        query: String,
        #[source]
        source: turso::Error,
    },

    /// Schema-related errors
    #[error("Schema error: {message}")]
    SchemaError { message: String },

    /// Filesystem I/O errors
    #[error("Filesystem error: {path}")]
    FilesystemError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Row decoding errors
    #[error("Row decoding failed: {message}")]
    RowError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DatabaseError {
    /// Create a new connection error with source
    pub fn connection_with_source<
        S: Into<String>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::ConnectionError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new query error
    pub fn query<S: Into<String>>(query: S, source: turso::Error) -> Self {
        Self::QueryError {
            query: query.into(),
            source,
        }
    }

    /// Create a new schema error
    pub fn schema<S: Into<String>>(message: S) -> Self {
        Self::SchemaError {
            message: message.into(),
        }
    }

    /// Create a new filesystem error
    pub fn filesystem<P: Into<String>>(path: P, source: std::io::Error) -> Self {
        Self::FilesystemError {
            path: path.into(),
            source,
        }
    }

    /// Create a new serialization error
    pub fn serialization<S: Into<String>>(message: S, source: serde_json::Error) -> Self {
        Self::SerializationError {
            message: message.into(),
            source,
        }
    }

    /// Create a new row decoding error with source
    pub fn row_with_source<
        S: Into<String>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::RowError {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

impl From<turso::Error> for DatabaseError {
    fn from(err: turso::Error) -> Self {
        Self::QueryError {
            query: "unknown".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: "JSON serialization failed".to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for DatabaseError {
    fn from(err: std::io::Error) -> Self {
        Self::FilesystemError {
            path: "unknown".to_string(),
            source: err,
        }
    }
}
