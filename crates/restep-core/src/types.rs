//! Restep Core Types
//!
//! This module contains the request/response envelope the surrounding test
//! framework exchanges with a processor. Both values are created fresh per
//! invocation and carry no state across calls.

use serde::{Deserialize, Serialize};

/// One test step as supplied by the surrounding framework.
///
/// `endpoint` must be a fully resolved URL: the framework is expected to have
/// expanded any `${...}` templating before handing the step to a processor.
/// `test_block` is the raw tagged text described by [`crate::block`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestRequest {
    pub endpoint: String,
    pub test_block: String,
}

impl TestRequest {
    pub fn new(endpoint: impl Into<String>, test_block: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            test_block: test_block.into(),
        }
    }
}

/// The normalized outcome of one test step.
///
/// A response carrying a status code always represents a completed HTTP
/// exchange; 4xx/5xx are real server answers, not errors at this layer. A
/// response with every field unset is the uniform failure signal - the cause
/// is reported through the log, not through this record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_headers: Option<String>,
}

impl TestResponse {
    /// The unified "no usable result" value returned on any fatal condition.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the step produced no usable result.
    ///
    /// Callers must treat an empty response as unconditional failure of the
    /// test step and inspect the log for the specific cause.
    pub fn is_empty(&self) -> bool {
        self.body.is_none() && self.status_code.is_none() && self.response_headers.is_none()
    }
}
