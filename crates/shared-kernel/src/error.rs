// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SalesSummaryError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SalesSummaryError>,
    },

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, SalesSummaryError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to discover sales files: {reason}")]
    DiscoveryFailed {
        reason: String,
        #[source]
        source: Option<Box<SalesSummaryError>>,
    },

    #[error("Failed to write sales report: {reason}")]
    ReportFailed {
        reason: String,
        #[source]
        source: Option<Box<SalesSummaryError>>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// An entry below an existing input root could not be read.
    #[error("Failed to walk '{root}': {details}")]
    Walk { root: PathBuf, details: String },

    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },

    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::Io { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for SalesSummaryError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Wraps a failure with a description of the operation that was running.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<SalesSummaryError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| SalesSummaryError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| SalesSummaryError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
