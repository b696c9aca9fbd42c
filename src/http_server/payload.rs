//! Request body to payload conversion
//!
//! - Empty body, or a `Content-Type` that is not JSON: empty payload
//! - JSON that fails to parse: `ApiError::MalformedBody`
//! - JSON that is not an object: empty payload

use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use serde_json::{Map, Value};

use super::errors::{ApiError, ApiResult};

/// Extract the payload object from a request body.
pub fn payload_from_body(headers: &HeaderMap, body: &Bytes) -> ApiResult<Map<String, Value>> {
    if body.is_empty() || !is_json(headers) {
        return Ok(Map::new());
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

/// `application/json` or any `+json` media type
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn json_headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_object_body() {
        let body = Bytes::from_static(br#"{"name":"John"}"#);
        let map = payload_from_body(&json_headers("application/json"), &body).unwrap();
        assert_eq!(Value::Object(map), json!({"name": "John"}));
    }

    #[test]
    fn test_charset_and_suffix_accepted() {
        let body = Bytes::from_static(br#"{"a":1}"#);
        assert_eq!(
            payload_from_body(&json_headers("application/json; charset=utf-8"), &body)
                .unwrap()
                .len(),
            1
        );
        assert_eq!(
            payload_from_body(&json_headers("application/vnd.api+json"), &body)
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_empty_body_is_empty_payload() {
        let map = payload_from_body(&json_headers("application/json"), &Bytes::new()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_non_json_content_type_ignored() {
        let body = Bytes::from_static(br#"{"name":"John"}"#);
        let map = payload_from_body(&json_headers("text/plain"), &body).unwrap();
        assert!(map.is_empty());

        let map = payload_from_body(&HeaderMap::new(), &body).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let body = Bytes::from_static(b"{\"name\":");
        let err = payload_from_body(&json_headers("application/json"), &body).unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody(_)));
    }

    #[test]
    fn test_non_object_json_is_empty_payload() {
        let body = Bytes::from_static(b"[1,2,3]");
        let map = payload_from_body(&json_headers("application/json"), &body).unwrap();
        assert!(map.is_empty());
    }
}
