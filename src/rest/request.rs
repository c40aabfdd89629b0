/*
 * Copyright (c) 2026 the Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::client::Endpoints;
use crate::rest::sign;
use std::collections::BTreeMap;

/// A single API call: method name plus its parameters.
///
/// Parameters live in a [`BTreeMap`] so they always iterate in ascending
/// byte order of their keys. Both signature schemes require that order,
/// and it makes the computed signatures independent of insertion order.
#[derive(Default, Clone)]
pub struct Request {
    pub api_key: String,
    pub method: String,
    pub params: BTreeMap<String, String>,
    pub oauth: Option<OAuthCreds>,
}

/// Credentials for the OAuth 1.0a call paths.
///
/// `token`/`token_secret` stay empty until the three-legged handshake has
/// produced an access token.
#[derive(Default, Clone)]
pub struct OAuthCreds {
    pub consumer_secret: String,
    pub callback: String,
    pub token: String,
    pub token_secret: String,
}

impl std::fmt::Debug for OAuthCreds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCreds")
            .field("consumer_secret", &"xxx")
            .field("callback", &self.callback)
            .field("token", &"xxx")
            .field("token_secret", &"xxx")
            .finish()
    }
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("api_key", &"xxx")
            .field("method", &self.method)
            .field("params", &self.params)
            .field("oauth", &self.oauth)
            .finish()
    }
}

impl Request {
    /// Creates a new request for the given API method
    pub fn new(api_key: &str, method: &str) -> Self {
        Self {
            api_key: api_key.into(),
            method: method.into(),
            ..Default::default()
        }
    }

    /// Sets a call parameter
    pub fn param(&mut self, key: &str, value: &str) -> &mut Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Computes the legacy shared-secret signature and stores it under
    /// `api_sig`.
    ///
    /// The digest covers `secret + key1 + value1 + …` over the sorted
    /// parameter set with `api_key` and `method` mixed in, skipping pairs
    /// whose value is empty. Any pre-existing `api_sig` is removed first
    /// so the signature never covers itself.
    pub fn sign(&mut self, secret: &str) {
        self.params.remove("api_sig");

        let mut args = self.params.clone();
        args.insert("api_key".to_string(), self.api_key.clone());
        args.insert("method".to_string(), self.method.clone());

        let mut base = String::from(secret);
        for (key, value) in &args {
            if !value.is_empty() {
                base.push_str(key);
                base.push_str(value);
            }
        }

        let digest = md5::compute(base.as_bytes());
        self.params
            .insert("api_sig".to_string(), format!("{digest:x}"));
    }

    /// Builds the full REST call URL, re-injecting `api_key` and `method`.
    pub fn url(&self, endpoints: &Endpoints) -> String {
        let mut args = self.params.clone();
        args.insert("api_key".to_string(), self.api_key.clone());
        args.insert("method".to_string(), self.method.clone());

        format!(
            "{}?{}",
            endpoints.rest.trim_end_matches('?'),
            sign::encode_query(&args)
        )
    }
}
