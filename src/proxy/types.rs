use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The proxy integration event a serverless HTTP trigger hands to the relay.
///
/// Only the fields the relay consumes are modeled; unknown event fields are
/// ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProxyRequest {
    #[serde(rename = "queryStringParameters", default)]
    pub query_string_parameters: HashMap<String, String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(rename = "isBase64Encoded")]
    pub is_base64_encoded: bool,
    pub body: String,
    pub headers: HashMap<String, String>,
}

impl ProxyRequest {
    /// Returns a query parameter value, treating an empty string as absent.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_string_parameters
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Returns the caller's `origin` header, or an empty string when missing.
    pub fn origin(&self) -> &str {
        self.headers.get("origin").map(String::as_str).unwrap_or("")
    }
}

impl ProxyResponse {
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            is_base64_encoded: false,
            body: body.into(),
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn base64_encoded(mut self) -> Self {
        self.is_base64_encoded = true;
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
