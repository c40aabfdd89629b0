/*
 * Copyright (c) 2026 the Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Nonce, query-encoding and signature helpers shared by the REST and
//! OAuth call paths.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha1::Sha1;
use std::collections::BTreeMap;

const NONCE_BYTES: usize = 32;

/// Fixed OAuth 1.0a protocol constants mandated by the service.
pub(crate) const OAUTH_SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub(crate) const OAUTH_VERSION: &str = "1.0";

/// Random URL-safe base64 nonce for OAuth requests.
pub(crate) fn nonce() -> String {
    let mut buf = [0u8; NONCE_BYTES];
    rand::rng().fill_bytes(&mut buf);
    URL_SAFE.encode(buf)
}

/// Current Unix time as the `oauth_timestamp` string.
pub(crate) fn timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}

/// Serializes the parameter map as `k=enc(v)` pairs joined with `&`.
///
/// The map iterates in ascending byte order of its keys, so the output is
/// deterministic for a given parameter set.
pub(crate) fn encode_query(args: &BTreeMap<String, String>) -> String {
    args.iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Base64 encoded HMAC with SHA1 hash.
pub(crate) fn base64_hmac_sha1(key: &[u8], content: &[u8]) -> String {
    // HMAC's new_from_slice accepts any key length
    let mut h = Hmac::<Sha1>::new_from_slice(key).unwrap();
    h.update(content);
    STANDARD.encode(h.finalize().into_bytes())
}

/// Computes the OAuth 1.0a base-string signature over `args`.
///
/// All parameters are included regardless of value, unlike the
/// shared-secret MD5 scheme which skips empty values. The two algorithms
/// are distinct on the wire and must not be unified.
pub(crate) fn oauth_signature(
    endpoint: &str,
    args: &BTreeMap<String, String>,
    method: &str,
    key: &str,
) -> String {
    let base_string = encode_query(args);
    let encoded_params = urlencoding::encode(&base_string).into_owned();
    let encoded_endpoint =
        urlencoding::encode(&format!("{}{}", endpoint.replace('?', ""), method)).into_owned();

    let sig_string = format!("GET&{encoded_endpoint}&{encoded_params}");
    base64_hmac_sha1(key.as_bytes(), sig_string.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_args() -> BTreeMap<String, String> {
        [
            ("oauth_nonce", "abc"),
            ("oauth_timestamp", "1000"),
            ("oauth_consumer_key", "ck"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_version", "1.0"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn oauth_signature_golden_value() {
        let sig = oauth_signature(
            "https://example.com/services/oauth/",
            &fixture_args(),
            "request_token",
            "secret&",
        );
        // Computed independently from the documented base-string algorithm.
        assert_eq!(sig, "ADFXpju3l2sGKJXnwYGgiY9ETKQ=");
    }

    #[test]
    fn oauth_signature_strips_query_marker() {
        let with_marker = oauth_signature(
            "https://example.com/services/rest/?",
            &fixture_args(),
            "",
            "secret&",
        );
        let without_marker = oauth_signature(
            "https://example.com/services/rest/",
            &fixture_args(),
            "",
            "secret&",
        );
        assert_eq!(with_marker, without_marker);
    }

    #[test]
    fn encode_query_sorts_and_escapes() {
        let mut args = BTreeMap::new();
        args.insert("b".to_string(), "two words".to_string());
        args.insert("a".to_string(), "1".to_string());
        assert_eq!(encode_query(&args), "a=1&b=two%20words");
    }

    #[test]
    fn nonce_is_padded_base64_of_32_bytes() {
        let n = nonce();
        assert_eq!(n.len(), 44);
        assert_ne!(n, nonce());
    }
}
