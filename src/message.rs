//! Request/response contract of the extraction channel.
//!
//! The invoking side sends `{"action": "GET_PAGE_CONTENT"}` and always gets
//! `{"contentItems": [...]}` back; extraction itself never signals failure.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::ContentItem;
use crate::error::{Error, Result};
use crate::Options;

/// A request arriving over the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum Request {
    /// Extract the page's content items.
    #[serde(rename = "GET_PAGE_CONTENT")]
    GetPageContent,
}

/// The reply to a `GetPageContent` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "contentItems")]
    pub content_items: Vec<ContentItem>,
}

/// Serve `request` against the HTML snapshot `html`.
#[must_use]
pub fn handle_request(html: &str, request: &Request, options: &Options) -> Response {
    match request {
        Request::GetPageContent => Response {
            content_items: crate::extract_with_options(html, options),
        },
    }
}

/// Decode a JSON request, serve it, and encode the response.
///
/// # Errors
///
/// - `Error::UnsupportedAction` when the request names another action
/// - `Error::InvalidRequest` when the request is not a JSON object with an
///   `action`
/// - `Error::Serialization` if the response cannot be encoded
pub fn respond_json(html: &str, raw_request: &str, options: &Options) -> Result<String> {
    let value: Value = serde_json::from_str(raw_request).map_err(Error::InvalidRequest)?;

    let request = match Request::deserialize(&value) {
        Ok(request) => request,
        Err(err) => {
            return Err(match value.get("action").and_then(Value::as_str) {
                Some(action) => Error::UnsupportedAction(action.to_string()),
                None => Error::InvalidRequest(err),
            });
        }
    };

    let response = handle_request(html, &request, options);
    serde_json::to_string(&response).map_err(Error::Serialization)
}
