use std::collections::HashMap;

use axum::http::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::core::error::Result;
use crate::shared::constants::{ALLOW_ANY_ORIGIN, CORS_ALLOWED_HEADERS, JSON_CONTENT_TYPE};

const CONTENT_TYPE: &str = "Content-Type";
const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
const ACCESS_CONTROL_ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

// =============================================================================
// EVENT ENVELOPE
// =============================================================================

/// One HTTP-shaped invocation of a handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpEvent {
    #[serde(default = "default_method")]
    pub http_method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    /// Set when the transport body was not UTF-8. Only `json_body` reports it.
    #[serde(skip)]
    pub body_error: Option<std::str::Utf8Error>,
}

fn default_method() -> String {
    "GET".to_string()
}

impl Default for HttpEvent {
    fn default() -> Self {
        Self {
            http_method: default_method(),
            headers: HashMap::new(),
            query_string_parameters: None,
            body: None,
            body_error: None,
        }
    }
}

impl HttpEvent {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            http_method: method.into(),
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Header lookup. An exact match on `name` wins, then any casing of it.
    pub fn header(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.headers.get(name) {
            return Some(value.as_str());
        }

        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }

    /// Decode the JSON body. An absent or blank body reads as `{}`.
    pub fn json_body<T: DeserializeOwned>(&self) -> Result<T> {
        if let Some(err) = self.body_error {
            return Err(err.into());
        }

        let raw = match self.body.as_deref() {
            Some(body) if !body.trim().is_empty() => body,
            _ => "{}",
        };
        Ok(serde_json::from_str(raw)?)
    }
}

/// Response envelope returned by every handler. The body is always UTF-8 JSON
/// text (or empty for preflight), never base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl HttpResponse {
    /// JSON response with the content type and CORS origin every non-preflight
    /// response carries
    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<Self> {
        let headers = HashMap::from([
            (CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string()),
            (
                ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                ALLOW_ANY_ORIGIN.to_string(),
            ),
        ]);

        Ok(Self {
            status_code: status.as_u16(),
            headers,
            body: serde_json::to_string(body)?,
            is_base64_encoded: false,
        })
    }

    /// Empty 200 answering a CORS preflight
    pub fn preflight(allow_methods: &str) -> Self {
        let headers = HashMap::from([
            (
                ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                ALLOW_ANY_ORIGIN.to_string(),
            ),
            (
                ACCESS_CONTROL_ALLOW_METHODS.to_string(),
                allow_methods.to_string(),
            ),
            (
                ACCESS_CONTROL_ALLOW_HEADERS.to_string(),
                CORS_ALLOWED_HEADERS.to_string(),
            ),
        ]);

        Self {
            status_code: StatusCode::OK.as_u16(),
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// What an HTTP method asks a resource handler to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Preflight,
    Create,
    List,
    Update,
    Delete,
}

impl Operation {
    /// Methods are matched exactly; anything else is not a known operation.
    pub fn from_method(method: &str) -> Option<Self> {
        match method {
            "OPTIONS" => Some(Self::Preflight),
            "POST" => Some(Self::Create),
            "GET" => Some(Self::List),
            "PUT" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// Row id as sent by clients: a JSON number or a string.
///
/// Ids are handed to the store as text, so a value that matches no row simply
/// updates or deletes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Integer(i64),
    Text(String),
}

impl RecordId {
    pub fn as_store_key(&self) -> String {
        match self {
            RecordId::Integer(id) => id.to_string(),
            RecordId::Text(id) => id.clone(),
        }
    }
}

// =============================================================================
// RESPONSE BODIES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of a 201 after a row was inserted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedBody {
    pub id: i32,
    pub message: String,
}

impl CreatedBody {
    pub fn new(id: i32, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}
