/*
 * Copyright (c) 2026 the Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! A client library for the Flickr REST/OAuth API.
//!
//! For further details on the Rest API refer to the
//! [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Legacy shared-secret request signing (`api_sig`)
//! - Unauthenticated REST calls
//! - Three-legged OAuth 1.0a handshake and OAuth-signed calls
//! - Photo upload and replace over streaming multipart bodies
//!
//! *Endpoints are injected configuration on [`rest::Client`]; the default
//! points at the production service.*
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using
//! the API**
//!
//! ```rust
//! use flickr::rest::{Client, OAuthCreds, Perms, Request};
//!
//! async fn fetch_photo_info(api_key: &str, api_secret: &str) -> anyhow::Result<String> {
//!     let client = Client::new();
//!
//!     let mut request = Request::new(api_key, "flickr.photos.getInfo");
//!     request.param("photo_id", "5336400553");
//!     request.sign(api_secret);
//!
//!     Ok(client.execute(&request).await?)
//! }
//!
//! async fn authorize(api_key: &str, consumer_secret: &str) -> anyhow::Result<()> {
//!     let client = Client::new();
//!
//!     let mut request = Request::new(api_key, "");
//!     request.oauth = Some(OAuthCreds {
//!         consumer_secret: consumer_secret.into(),
//!         callback: "https://example.com/callback".into(),
//!         ..Default::default()
//!     });
//!
//!     let temporary = client.request_token(&request).await?;
//!     println!(
//!         "visit {} to grant access",
//!         client.authorize_url(&temporary, Perms::Read)
//!     );
//!
//!     // After the user grants access, the verifier comes back on the
//!     // callback URL.
//!     let verifier = "...";
//!     let access = client
//!         .access_token(
//!             &request,
//!             &temporary.oauth_token,
//!             verifier,
//!             &temporary.oauth_token_secret,
//!         )
//!         .await?;
//!     println!("authorized as {:?}", access.remain.get("username"));
//!     Ok(())
//! }
//! ```
pub mod rest;
