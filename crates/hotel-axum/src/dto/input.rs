//! Request input parsing.
//!
//! Handlers see one flat field map built from the query string and the
//! body. Body fields win over query parameters with the same name. The
//! body parser is picked from `Content-Type`: form-encoded bodies go
//! through `serde_urlencoded`, everything else is read as JSON.

use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use crate::error::HttpError;

const FORM_MIME: &str = "application/x-www-form-urlencoded";

/// Merge query parameters and the request body into one field map.
pub fn parse_input(
    headers: &HeaderMap,
    query: Option<&str>,
    body: &[u8],
) -> Result<Map<String, Value>, HttpError> {
    let mut fields = match query {
        Some(query) => parse_form(query.as_bytes())?,
        None => Map::new(),
    };

    let body = if is_form(headers) {
        parse_form(body)?
    } else {
        parse_body(body)?
    };
    fields.extend(body);

    Ok(fields)
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_MIME))
}

/// Parse `application/x-www-form-urlencoded` pairs. Values stay strings;
/// a repeated key keeps its last value.
fn parse_form(bytes: &[u8]) -> Result<Map<String, Value>, HttpError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(bytes)
        .map_err(|e| HttpError::BadRequest(format!("Malformed form body: {e}")))?;

    Ok(pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect())
}

/// Parse a raw request body into a JSON object.
///
/// An empty body is treated as `{}` so that it reaches validation and
/// reports the first missing field. Anything that is not a JSON object is
/// a bad request.
pub fn parse_body(bytes: &[u8]) -> Result<Map<String, Value>, HttpError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(HttpError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
        Err(e) => Err(HttpError::BadRequest(format!("Malformed JSON body: {e}"))),
    }
}
