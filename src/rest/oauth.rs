/*
 * Copyright (c) 2026 the Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Token-endpoint response handling for the OAuth 1.0a handshake.

use crate::rest::errors::FlickrError;
use std::collections::HashMap;

const OAUTH_TOKEN_KEY: &str = "oauth_token";
const OAUTH_TOKEN_SECRET_KEY: &str = "oauth_token_secret";

/// A token pair returned by the request-token or access-token endpoint.
#[derive(Debug, Clone)]
pub struct TokenResponse {
    pub oauth_token: String,
    pub oauth_token_secret: String,
    /// Remaining response keys, e.g. `oauth_callback_confirmed` for a
    /// request token or `fullname`/`user_nsid`/`username` for an access
    /// token.
    pub remain: HashMap<String, String>,
}

/// Parses an `&`-delimited `key=value` token-endpoint body.
///
/// The access-token endpoint percent-encodes its values (`decode` is set
/// on that path); values that fail to decode are tolerated as empty
/// strings rather than failing the whole response.
pub(crate) fn parse_token_body(body: &str, decode: bool) -> Result<TokenResponse, FlickrError> {
    let mut destructured = body
        .split('&')
        .map(|pair| {
            let mut kv = pair.splitn(2, '=');
            let key = kv.next().unwrap_or_default().to_string();
            let value = kv.next().unwrap_or_default();
            let value = if decode {
                urlencoding::decode(value)
                    .map(|v| v.into_owned())
                    .unwrap_or_default()
            } else {
                value.to_string()
            };
            (key, value)
        })
        .collect::<HashMap<String, String>>();

    let oauth_token = destructured
        .remove(OAUTH_TOKEN_KEY)
        .ok_or(FlickrError::TokenKeyMissing(OAUTH_TOKEN_KEY))?;
    let oauth_token_secret = destructured
        .remove(OAUTH_TOKEN_SECRET_KEY)
        .ok_or(FlickrError::TokenKeyMissing(OAUTH_TOKEN_SECRET_KEY))?;

    Ok(TokenResponse {
        oauth_token,
        oauth_token_secret,
        remain: destructured,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_request_token_body() {
        let body = "oauth_callback_confirmed=true&oauth_token=72157654304937659&oauth_token_secret=fccb68c4e6103197";
        let parsed = parse_token_body(body, false).unwrap();
        assert_eq!(parsed.oauth_token, "72157654304937659");
        assert_eq!(parsed.oauth_token_secret, "fccb68c4e6103197");
        assert_eq!(
            parsed.remain.get("oauth_callback_confirmed").unwrap(),
            "true"
        );
    }

    #[test]
    fn parse_access_token_body_decodes_values() {
        let body =
            "fullname=Jamal%20Fanaian&oauth_token=72157626318069415&oauth_token_secret=a202d1f853ec69de&user_nsid=21207597%40N07&username=jamalfanaian";
        let parsed = parse_token_body(body, true).unwrap();
        assert_eq!(parsed.oauth_token, "72157626318069415");
        assert_eq!(parsed.remain.get("fullname").unwrap(), "Jamal Fanaian");
        assert_eq!(parsed.remain.get("user_nsid").unwrap(), "21207597@N07");
    }

    #[test]
    fn parse_token_missing_token_key() {
        let parsed = parse_token_body("oauth_token_secret=abc", false);
        assert!(matches!(
            parsed,
            Err(FlickrError::TokenKeyMissing("oauth_token"))
        ));
    }

    #[test]
    fn parse_token_missing_secret_key() {
        let parsed = parse_token_body("oauth_token=abc", false);
        assert!(matches!(
            parsed,
            Err(FlickrError::TokenKeyMissing("oauth_token_secret"))
        ));
    }

    #[test]
    fn parse_token_tolerates_valueless_pairs() {
        let parsed = parse_token_body("oauth_token&oauth_token_secret&extra", false).unwrap();
        assert_eq!(parsed.oauth_token, "");
        assert_eq!(parsed.oauth_token_secret, "");
        assert_eq!(parsed.remain.get("extra").unwrap(), "");
    }
}
