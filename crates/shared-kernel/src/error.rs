// crates/shared-kernel/src/error.rs
use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum MultigroupError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<MultigroupError>,
    },

    #[error("Grouping error: {0}")]
    Grouping(#[from] GroupingError),
}

pub type Result<T> = std::result::Result<T, MultigroupError>;

/// Errors raised by the grouping operation and its accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupingError {
    /// Grouping was requested with zero dimensions.
    #[error("no iteratees provided for grouping")]
    NoIterateesProvided,

    #[error("key value not found: {name}")]
    KeyValueNotFound { name: String },
}

impl GroupingError {
    pub fn key_value_not_found(name: impl Into<String>) -> Self {
        Self::KeyValueNotFound { name: name.into() }
    }
}

pub type GroupingResult<T> = std::result::Result<T, GroupingError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<MultigroupError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| MultigroupError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MultigroupError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
