//! # Restep HTTP Transport
//!
//! Reqwest-based executor for restep test blocks.
//!
//! This crate provides:
//! - [`HttpTestProcessor`], a blocking [`restep_core::TestProcessor`]
//!   implementation that issues one HTTP(S) round trip per test step
//! - [`ExecutorConfig`] for TLS relaxation and optional deadlines
//!
//! ## Example
//!
//! ```ignore
//! use restep_core::{TestProcessor, TestRequest};
//! use restep_http::HttpTestProcessor;
//!
//! let processor = HttpTestProcessor::default();
//! let request = TestRequest::new(
//!     "https://localhost:8993/services/query",
//!     "<operation>GET</operation>",
//! );
//! let response = processor.execute_test(&request);
//! assert_eq!(response.status_code, Some(200));
//! ```

mod error;
mod executor;

pub use error::ExecError;
pub use executor::{ExecutorConfig, HttpTestProcessor, PROCESSOR_NAME};
