//! Response envelope returned by every client operation

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Decoded response body
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Body {
    /// JSON value decoded from the response body (or synthesized by the client)
    Json(Value),
    /// Plain text, e.g. the declared content type of a binary response
    Text(String),
}

/// Successful transport-level outcome of a call
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// HTTP status code, including 4xx/5xx
    pub status_code: u16,
    pub data: Body,
    /// Raw response bytes, present only for the translate-to-image call
    pub image_data: Option<Vec<u8>>,
}

/// Outcome of one client operation
///
/// `Success` means the request completed and its body decoded; it says
/// nothing about the HTTP status, which callers inspect separately.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success(Reply),
    Failure { error: String },
}

impl Envelope {
    pub fn success(status_code: u16, data: Body) -> Self {
        Self::Success(Reply {
            status_code,
            data,
            image_data: None,
        })
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Success(reply) => Some(reply.status_code),
            Self::Failure { .. } => None,
        }
    }

    pub fn data(&self) -> Option<&Body> {
        match self {
            Self::Success(reply) => Some(&reply.data),
            Self::Failure { .. } => None,
        }
    }

    pub fn image_data(&self) -> Option<&[u8]> {
        match self {
            Self::Success(reply) => reply.image_data.as_deref(),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error } => Some(error.as_str()),
        }
    }
}

/// Serializes as `{"success", "status_code", "data"}` or `{"success", "error"}`.
/// Image bytes are reported by length only.
impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Envelope::Success(reply) => {
                let len = if reply.image_data.is_some() { 4 } else { 3 };
                let mut map = serializer.serialize_map(Some(len))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("status_code", &reply.status_code)?;
                map.serialize_entry("data", &reply.data)?;
                if let Some(bytes) = &reply.image_data {
                    map.serialize_entry("image_bytes", &bytes.len())?;
                }
                map.end()
            }
            Envelope::Failure { error } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}
