//! Tagged test-block parsing.
//!
//! A test block is semi-structured text containing a mandatory
//! `<operation>...</operation>` section and optional `<body>`, `<header>`
//! and `<media>` sections. Scanning is first-opening-tag /
//! first-closing-tag: nested or repeated sections are not supported, and
//! only the first pair of each tag is captured.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing::{debug, error};

use crate::media::MediaType;

/// Errors raised while extracting sections from a test block.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("Test block is missing an <operation>...</operation> section")]
    MissingOperation,

    #[error("Section <{0}> is opened but never closed")]
    UnterminatedSection(&'static str),
}

/// One parsed `Name: Value` header line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Structured form of one test block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestBlock {
    /// HTTP verb token, trimmed but with its original case preserved.
    /// Dispatch matches it case-insensitively.
    pub operation: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Ordered as authored; duplicate names allowed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
}

impl TestBlock {
    /// Re-serialize the parsed headers back into `Name: Value` lines.
    pub fn header_lines(&self) -> Vec<String> {
        self.headers.iter().map(Header::to_string).collect()
    }
}

/// Parse one raw test block into its structured form.
///
/// # Errors
///
/// Returns `BlockError` when the `<operation>` section is absent or when any
/// opened section has no closing tag. Malformed header lines and
/// unrecognized media types are recovered locally and never fail the block.
pub fn parse_test_block(text: &str) -> Result<TestBlock, BlockError> {
    let operation = section(text, "operation")?
        .ok_or(BlockError::MissingOperation)?
        .to_string();
    debug!(operation = %operation, "REST operation");

    let body = section(text, "body")?.map(str::to_string);
    if let Some(body) = &body {
        debug!(bytes = body.len(), "REST body");
    }

    let headers = match section(text, "header")? {
        Some(block) => {
            debug!(header_block = %block, "REST header");
            parse_header_lines(block)
        }
        None => Vec::new(),
    };

    let media_type = match section(text, "media")? {
        Some(label) => {
            debug!(media = %label, "media type");
            let media = MediaType::from_label(label);
            if media.is_none() {
                debug!(media = %label, "media type not recognized, ignoring");
            }
            media
        }
        None => None,
    };

    Ok(TestBlock {
        operation,
        body,
        headers,
        media_type,
    })
}

/// Extract the trimmed text between the first `<tag>` and the first
/// `</tag>`.
///
/// Returns `Ok(None)` when the section is absent. A closing tag that is
/// missing, or that appears before the opening tag, is reported as
/// unterminated rather than producing an out-of-range slice.
fn section<'a>(text: &'a str, tag: &'static str) -> Result<Option<&'a str>, BlockError> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let Some(start) = text.find(&open) else {
        return Ok(None);
    };
    let value_start = start + open.len();

    match text.find(&close) {
        Some(end) if end >= value_start => Ok(Some(text[value_start..end].trim())),
        _ => Err(BlockError::UnterminatedSection(tag)),
    }
}

/// Split a `<header>` section into `Name: Value` pairs.
///
/// The format assumes exactly one space after the colon: the value starts
/// two characters past the first colon, so a `Name:Value` line silently
/// loses the first character of its value. A line ending at the colon
/// yields an empty value. Lines without a colon are logged and skipped;
/// they never abort the block.
fn parse_header_lines(block: &str) -> Vec<Header> {
    let mut headers = Vec::new();
    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match line.find(':') {
            Some(colon) => {
                let value = line.get(colon + 2..).unwrap_or("");
                headers.push(Header::new(&line[..colon], value));
            }
            None => {
                error!(
                    line = %line,
                    "headers must be provided in the following format -> Header_Type: Header_Value"
                );
            }
        }
    }
    headers
}
