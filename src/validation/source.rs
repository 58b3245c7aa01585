//! Request data extraction for the validation gate.
//!
//! # Responsibilities
//! - Name the request parts a gate can inspect (body, query, path params)
//! - Turn each part into a [`FieldMap`] for the presence check
//!
//! # Design Decisions
//! - Extraction never fails: an absent, unreadable, or unparseable container
//!   yields the empty map, which the gate reports as all fields missing
//! - Bodies are understood as JSON or urlencoded forms by Content-Type; any
//!   other media type is treated as an absent container
//! - Query and path parameters surface as strings, so only the absent and
//!   blank-after-trim rules can fire for them

use axum::extract::RawPathParams;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Uri};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

use crate::validation::fields::FieldMap;

/// Which part of an incoming request a gate inspects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// The request body (JSON object or urlencoded form).
    #[default]
    Body,
    /// The URI query string.
    Query,
    /// Path parameters captured by the router.
    Params,
}

/// Extract fields from a buffered request body.
///
/// Only JSON objects and urlencoded forms produce fields; a JSON body that
/// is not an object (array, bare string, malformed) counts as absent.
pub fn from_body(headers: &HeaderMap, body: &[u8]) -> FieldMap {
    match media_type(headers) {
        Some(t) if t.eq_ignore_ascii_case("application/json") => {
            match serde_json::from_slice::<Value>(body) {
                Ok(Value::Object(map)) => map,
                _ => FieldMap::new(),
            }
        }
        Some(t) if t.eq_ignore_ascii_case("application/x-www-form-urlencoded") => {
            form_urlencoded::parse(body)
                .into_owned()
                .map(|(name, value)| (name, Value::String(value)))
                .collect()
        }
        _ => FieldMap::new(),
    }
}

/// Extract fields from the URI query string.
pub fn from_query(uri: &Uri) -> FieldMap {
    match uri.query() {
        Some(query) => form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .map(|(name, value)| (name, Value::String(value)))
            .collect(),
        None => FieldMap::new(),
    }
}

/// Extract fields from the router's captured path parameters.
pub fn from_params(params: Option<&RawPathParams>) -> FieldMap {
    match params {
        Some(params) => params
            .iter()
            .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
            .collect(),
        None => FieldMap::new(),
    }
}

/// The media type of the request, without parameters like `charset`.
fn media_type(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    Some(value.split(';').next().unwrap_or("").trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_json_object_body() {
        let body = br#"{"name": "Ann", "count": 3}"#;
        let map = from_body(&headers("application/json"), body);

        assert_eq!(map.get("name"), Some(&json!("Ann")));
        assert_eq!(map.get("count"), Some(&json!(3)));
    }

    #[test]
    fn test_json_with_charset_parameter() {
        let body = br#"{"name": "Ann"}"#;
        let map = from_body(&headers("application/json; charset=utf-8"), body);

        assert_eq!(map.get("name"), Some(&json!("Ann")));
    }

    #[test]
    fn test_malformed_json_is_empty() {
        let map = from_body(&headers("application/json"), b"{not json");
        assert!(map.is_empty());
    }

    #[test]
    fn test_non_object_json_is_empty() {
        let map = from_body(&headers("application/json"), b"[1, 2, 3]");
        assert!(map.is_empty());
    }

    #[test]
    fn test_urlencoded_form_body() {
        let body = b"name=Ann%20Lee&email=a%40b.com";
        let map = from_body(&headers("application/x-www-form-urlencoded"), body);

        assert_eq!(map.get("name"), Some(&json!("Ann Lee")));
        assert_eq!(map.get("email"), Some(&json!("a@b.com")));
    }

    #[test]
    fn test_unsupported_media_type_is_empty() {
        let map = from_body(&headers("text/plain"), b"name=Ann");
        assert!(map.is_empty());
    }

    #[test]
    fn test_missing_content_type_is_empty() {
        let map = from_body(&HeaderMap::new(), br#"{"name": "Ann"}"#);
        assert!(map.is_empty());
    }

    #[test]
    fn test_query_fields() {
        let uri: Uri = "/submit?token=abc&note=%20".parse().unwrap();
        let map = from_query(&uri);

        assert_eq!(map.get("token"), Some(&json!("abc")));
        assert_eq!(map.get("note"), Some(&json!(" ")));
    }

    #[test]
    fn test_absent_query_is_empty() {
        let uri: Uri = "/submit".parse().unwrap();
        assert!(from_query(&uri).is_empty());
    }

    #[test]
    fn test_valueless_query_key_is_blank() {
        let uri: Uri = "/submit?token".parse().unwrap();
        let map = from_query(&uri);

        assert_eq!(map.get("token"), Some(&json!("")));
    }

    #[test]
    fn test_absent_params_is_empty() {
        assert!(from_params(None).is_empty());
    }

    #[test]
    fn test_source_names_deserialize() {
        assert_eq!(
            serde_json::from_str::<DataSource>(r#""body""#).unwrap(),
            DataSource::Body
        );
        assert_eq!(
            serde_json::from_str::<DataSource>(r#""query""#).unwrap(),
            DataSource::Query
        );
        assert_eq!(
            serde_json::from_str::<DataSource>(r#""params""#).unwrap(),
            DataSource::Params
        );
    }
}
