//! # Restep Core
//!
//! Test-block grammar and the processor contract for restep, a REST
//! test-step processor.
//!
//! This crate provides:
//! - Type definitions for test requests and the normalized test response
//! - The tagged test-block parser (`<operation>`, `<body>`, `<header>`,
//!   `<media>` sections)
//! - The `TestProcessor` trait and a registry for host frameworks
//!
//! ## Example
//!
//! ```rust,ignore
//! use restep_core::parse_test_block;
//!
//! let block = parse_test_block(
//!     "<operation>POST</operation><body>{\"q\": 1}</body>",
//! )?;
//! assert_eq!(block.operation, "POST");
//! ```

pub mod block;
pub mod media;
pub mod processor;
pub mod types;

// Re-exports for convenience
pub use block::*;
pub use media::*;
pub use processor::*;
pub use types::*;
