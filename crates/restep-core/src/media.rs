//! Media types recognized by the `<media>` section.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Content-type classification applied to an outgoing request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    #[serde(rename = "application/json")]
    Json,
    #[serde(rename = "application/xml")]
    Xml,
    #[serde(rename = "application/octet-stream")]
    OctetStream,
    #[serde(rename = "text/xml")]
    TextXml,
    #[serde(rename = "multipart/form-data")]
    MultipartFormData,
}

impl MediaType {
    /// Canonical content-type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::Xml => "application/xml",
            MediaType::OctetStream => "application/octet-stream",
            MediaType::TextXml => "text/xml",
            MediaType::MultipartFormData => "multipart/form-data",
        }
    }

    /// Case-insensitive match against the recognized set.
    ///
    /// Unrecognized labels yield `None`; the `<media>` section is then
    /// ignored and no content type is set on the request.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "application/json" => Some(MediaType::Json),
            "application/xml" => Some(MediaType::Xml),
            "application/octet-stream" => Some(MediaType::OctetStream),
            "text/xml" => Some(MediaType::TextXml),
            "multipart/form-data" => Some(MediaType::MultipartFormData),
            _ => None,
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
