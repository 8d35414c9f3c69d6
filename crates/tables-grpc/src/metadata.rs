// ABOUTME: Call metadata helpers for Tables RPCs.
// ABOUTME: Builds the routing header and client info header attached to each request.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tonic::metadata::{MetadataKey, MetadataMap, MetadataValue};

use crate::error::GrpcClientError;

/// Header carrying resource routing parameters for the backend.
pub const ROUTING_HEADER: &str = "x-goog-request-params";

/// Header identifying the client library and its version.
pub const API_CLIENT_HEADER: &str = "x-goog-api-client";

/// Characters escaped in routing header values. Unreserved characters and
/// the path separator stay literal; spaces become `+` (form encoding).
const ROUTING_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Encode routing parameters as `key=value` pairs joined by `&`.
pub fn routing_header(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_value(value: &str) -> String {
    value
        .split(' ')
        .map(|part| utf8_percent_encode(part, ROUTING_VALUE).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Append the routing header for `params` to `metadata`.
///
/// An empty parameter list leaves the metadata untouched.
pub fn with_routing_header(
    mut metadata: MetadataMap,
    params: &[(&str, &str)],
) -> Result<MetadataMap, GrpcClientError> {
    if params.is_empty() {
        return Ok(metadata);
    }
    let encoded = routing_header(params);
    let value = MetadataValue::try_from(encoded.as_str()).map_err(|e| {
        GrpcClientError::InvalidMetadata {
            key: ROUTING_HEADER.to_string(),
            reason: e.to_string(),
        }
    })?;
    metadata.insert(ROUTING_HEADER, value);
    Ok(metadata)
}

/// Build a metadata map from ordered key/value pairs.
///
/// Keys repeated in `pairs` are appended, not replaced, so every value
/// reaches the server.
pub fn metadata_from_pairs(pairs: &[(&str, &str)]) -> Result<MetadataMap, GrpcClientError> {
    let mut metadata = MetadataMap::new();
    for (key, value) in pairs {
        let name = MetadataKey::from_bytes(key.to_ascii_lowercase().as_bytes()).map_err(|e| {
            GrpcClientError::InvalidMetadata {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;
        let value = MetadataValue::try_from(*value).map_err(|e| {
            GrpcClientError::InvalidMetadata {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })?;
        metadata.append(name, value);
    }
    Ok(metadata)
}

/// Value for the client info header.
pub fn client_info_value(library_version: &str) -> String {
    format!("gl-rust gapic/{}", library_version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_header_single_pair() {
        assert_eq!(
            routing_header(&[("name", "tables/abc/rows/r1")]),
            "name=tables/abc/rows/r1"
        );
    }

    #[test]
    fn test_routing_header_escapes_reserved() {
        assert_eq!(
            routing_header(&[("parent", "tables/a b&c=d")]),
            "parent=tables/a+b%26c%3Dd"
        );
    }

    #[test]
    fn test_routing_header_form_encodes_spaces_and_plus() {
        assert_eq!(
            routing_header(&[("name", "tables/My Table/rows/a+b")]),
            "name=tables/My+Table/rows/a%2Bb"
        );
        assert_eq!(routing_header(&[("name", " lead  ")]), "name=+lead++");
        assert_eq!(routing_header(&[("name", "tables/é~x")]), "name=tables/%C3%A9~x");
    }

    #[test]
    fn test_routing_header_multiple_pairs() {
        assert_eq!(
            routing_header(&[("parent", "tables/t1"), ("row.name", "tables/t1/rows/r1")]),
            "parent=tables/t1&row.name=tables/t1/rows/r1"
        );
    }

    #[test]
    fn test_with_routing_header_sets_value() {
        let metadata = with_routing_header(MetadataMap::new(), &[("name", "tables/t1")]).unwrap();
        assert_eq!(
            metadata.get(ROUTING_HEADER).unwrap().to_str().unwrap(),
            "name=tables/t1"
        );
    }

    #[test]
    fn test_with_routing_header_empty_params() {
        let metadata = with_routing_header(MetadataMap::new(), &[]).unwrap();
        assert!(metadata.get(ROUTING_HEADER).is_none());
    }

    #[test]
    fn test_with_routing_header_keeps_existing_entries() {
        let base = metadata_from_pairs(&[("x-trace", "abc")]).unwrap();
        let metadata = with_routing_header(base, &[("parent", "tables/t1")]).unwrap();
        assert_eq!(metadata.get("x-trace").unwrap().to_str().unwrap(), "abc");
        assert!(metadata.get(ROUTING_HEADER).is_some());
    }

    #[test]
    fn test_metadata_from_pairs_appends_duplicates() {
        let metadata = metadata_from_pairs(&[("X-Tag", "a"), ("x-tag", "b")]).unwrap();
        let values: Vec<_> = metadata
            .get_all("x-tag")
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_metadata_from_pairs_rejects_bad_key() {
        let err = metadata_from_pairs(&[("bad key", "v")]).unwrap_err();
        assert!(matches!(err, GrpcClientError::InvalidMetadata { ref key, .. } if key == "bad key"));
    }

    #[test]
    fn test_metadata_from_pairs_rejects_bad_value() {
        let err = metadata_from_pairs(&[("x-ok", "line\nbreak")]).unwrap_err();
        assert!(matches!(err, GrpcClientError::InvalidMetadata { .. }));
    }

    #[test]
    fn test_client_info_value() {
        assert_eq!(client_info_value("0.3.1"), "gl-rust gapic/0.3.1");
    }
}
