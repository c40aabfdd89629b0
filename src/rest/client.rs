/*
 * Copyright (c) 2026 the Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::errors::FlickrError;
use crate::rest::multipart::{BOUNDARY, MultipartBody};
use crate::rest::oauth::{TokenResponse, parse_token_body};
use crate::rest::request::Request;
use crate::rest::response::{RestResponse, check_json_status, parse_rest_response};
use crate::rest::sign;
use log::debug;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use std::collections::BTreeMap;
use std::path::Path;
use strum_macros::{EnumString, IntoStaticStr};

/// Service endpoints used by a [`Client`].
///
/// Injected configuration rather than process-wide constants; the default
/// points at the production Flickr service.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub rest: String,
    pub upload: String,
    pub replace: String,
    pub oauth: String,
    pub authorize: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            rest: "https://api.flickr.com/services/rest/".to_string(),
            upload: "https://api.flickr.com/services/upload/".to_string(),
            replace: "https://api.flickr.com/services/replace/".to_string(),
            oauth: "https://www.flickr.com/services/oauth/".to_string(),
            authorize: "https://www.flickr.com/services/oauth/authorize".to_string(),
        }
    }
}

/// Permission scope requested on the authorization URL.
#[derive(Debug, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Perms {
    Read,
    Write,
    Delete,
}

/// Directly communicates with the API.
#[derive(Default, Debug, Clone)]
pub struct Client {
    endpoints: Endpoints,
    https_client: reqwest::Client,
}

impl Client {
    /// Creates a client against the production service endpoints
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    /// Creates a client against custom endpoints, e.g. a test server
    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self {
            endpoints,
            https_client: reqwest::Client::new(),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Performs the unauthenticated REST call and returns the raw body.
    ///
    /// Fails with a configuration error before any network access when
    /// the API key or method name is empty.
    pub async fn execute(&self, request: &Request) -> Result<String, FlickrError> {
        if request.api_key.is_empty() || request.method.is_empty() {
            return Err(FlickrError::MissingConfig());
        }

        let req_url = request.url(&self.endpoints);
        debug!("GET {}", request.method);
        let body = self.https_client.get(&req_url).send().await?.text().await?;
        Ok(body)
    }

    /// Performs the OAuth-signed REST call and returns the raw JSON body.
    ///
    /// The service reports failures inside the JSON envelope; a `"fail"`
    /// status is translated into an API error carrying the numeric code
    /// and message.
    pub async fn execute_authenticated(&self, request: &Request) -> Result<String, FlickrError> {
        let oauth = request.oauth.as_ref().ok_or(FlickrError::MissingOAuth())?;

        let mut args = request.params.clone();
        args.insert("oauth_nonce".to_string(), sign::nonce());
        args.insert("oauth_timestamp".to_string(), sign::timestamp());
        args.insert("oauth_consumer_key".to_string(), request.api_key.clone());
        args.insert(
            "oauth_signature_method".to_string(),
            sign::OAUTH_SIGNATURE_METHOD.to_string(),
        );
        args.insert("oauth_version".to_string(), sign::OAUTH_VERSION.to_string());
        args.insert("method".to_string(), request.method.clone());
        args.insert("oauth_token".to_string(), oauth.token.clone());

        let key = format!("{}&{}", oauth.consumer_secret, oauth.token_secret);
        let signature = sign::oauth_signature(&self.endpoints.rest, &args, "", &key);
        args.insert("oauth_signature".to_string(), signature);

        let req_url = format!("{}?{}", self.endpoints.rest, sign::encode_query(&args));
        debug!("GET {} (authenticated)", request.method);
        let body = self.https_client.get(&req_url).send().await?.text().await?;

        check_json_status(&body)?;
        Ok(body)
    }

    /// First leg of the handshake: obtains a temporary request token.
    pub async fn request_token(&self, request: &Request) -> Result<TokenResponse, FlickrError> {
        let oauth = request.oauth.as_ref().ok_or(FlickrError::MissingOAuth())?;

        let mut args = BTreeMap::new();
        args.insert("oauth_nonce".to_string(), sign::nonce());
        args.insert("oauth_timestamp".to_string(), sign::timestamp());
        args.insert("oauth_consumer_key".to_string(), request.api_key.clone());
        args.insert(
            "oauth_signature_method".to_string(),
            sign::OAUTH_SIGNATURE_METHOD.to_string(),
        );
        args.insert("oauth_version".to_string(), sign::OAUTH_VERSION.to_string());
        args.insert("oauth_callback".to_string(), oauth.callback.clone());

        let key = format!("{}&", oauth.consumer_secret);
        let signature = sign::oauth_signature(&self.endpoints.oauth, &args, "request_token", &key);
        args.insert("oauth_signature".to_string(), signature);

        let req_url = format!(
            "{}request_token?{}",
            self.endpoints.oauth,
            sign::encode_query(&args)
        );
        debug!("GET request_token");
        let body = self.https_client.get(&req_url).send().await?.text().await?;

        parse_token_body(&body, false)
    }

    /// Second leg: the URL the user must visit to grant `perms`.
    pub fn authorize_url(&self, token: &TokenResponse, perms: Perms) -> String {
        let perms: &str = perms.into();
        format!(
            "{}?oauth_token={}&perms={}",
            self.endpoints.authorize, token.oauth_token, perms
        )
    }

    /// Third leg: exchanges the verified request token for an access
    /// token. Response values arrive percent-encoded and are decoded.
    pub async fn access_token(
        &self,
        request: &Request,
        token: &str,
        verifier: &str,
        token_secret: &str,
    ) -> Result<TokenResponse, FlickrError> {
        let oauth = request.oauth.as_ref().ok_or(FlickrError::MissingOAuth())?;

        let mut args = BTreeMap::new();
        args.insert("oauth_nonce".to_string(), sign::nonce());
        args.insert("oauth_timestamp".to_string(), sign::timestamp());
        args.insert("oauth_verifier".to_string(), verifier.to_string());
        args.insert("oauth_consumer_key".to_string(), request.api_key.clone());
        args.insert(
            "oauth_signature_method".to_string(),
            sign::OAUTH_SIGNATURE_METHOD.to_string(),
        );
        args.insert("oauth_version".to_string(), sign::OAUTH_VERSION.to_string());
        args.insert("oauth_token".to_string(), token.to_string());

        let key = format!("{}&{}", oauth.consumer_secret, token_secret);
        let signature = sign::oauth_signature(&self.endpoints.oauth, &args, "access_token", &key);
        args.insert("oauth_signature".to_string(), signature);

        let req_url = format!(
            "{}access_token?{}",
            self.endpoints.oauth,
            sign::encode_query(&args)
        );
        debug!("GET access_token");
        let body = self.https_client.get(&req_url).send().await?.text().await?;

        parse_token_body(&body, true)
    }

    /// Uploads the file at `path` as a new photo.
    ///
    /// A pre-computed `api_sig` left in the parameter map by
    /// [`Request::sign`] rides along as a regular form part.
    pub async fn upload(
        &self,
        request: &Request,
        path: impl AsRef<Path>,
        filetype: &str,
    ) -> Result<RestResponse, FlickrError> {
        self.send_multipart(&self.endpoints.upload, request, path.as_ref(), filetype)
            .await
    }

    /// Replaces an existing photo with the file at `path`.
    pub async fn replace(
        &self,
        request: &Request,
        path: impl AsRef<Path>,
        filetype: &str,
    ) -> Result<RestResponse, FlickrError> {
        self.send_multipart(&self.endpoints.replace, request, path.as_ref(), filetype)
            .await
    }

    async fn send_multipart(
        &self,
        endpoint: &str,
        request: &Request,
        path: &Path,
        filetype: &str,
    ) -> Result<RestResponse, FlickrError> {
        let req_url = url::Url::parse(endpoint)?;

        let mut args = request.params.clone();
        args.insert("api_key".to_string(), request.api_key.clone());

        let body = MultipartBody::from_file(&args, path, filetype).await?;
        let content_length = body.content_length();
        debug!("POST {} byte multipart body to {}", content_length, req_url);

        let raw_body = self
            .https_client
            .post(req_url)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(CONTENT_LENGTH, content_length)
            .body(reqwest::Body::wrap_stream(body.into_stream()))
            .send()
            .await?
            .text()
            .await?;

        parse_rest_response(&raw_body)
    }
}
