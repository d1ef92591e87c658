//! Executor error taxonomy.
//!
//! Nothing here escapes to the framework: [`crate::HttpTestProcessor`]
//! absorbs every variant into a logged message plus an empty
//! `TestResponse`. The enum exists so each failure class is named once and
//! logged with its own message.

use restep_core::BlockError;
use thiserror::Error;

/// Failure classes for one test-step execution.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Client/TLS setup failed before any network activity.
    #[error("Failed to set up HTTP client: {0}")]
    Setup(#[source] reqwest::Error),

    #[error("Endpoint '{0}' contains a property that has not been expanded")]
    UnresolvedEndpoint(String),

    #[error(transparent)]
    Block(#[from] BlockError),

    #[error("Operation '{0}' is not a REST operation")]
    UnsupportedOperation(String),

    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}
