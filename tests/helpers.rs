/*
 * Copyright (c) 2026 the Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use flickr::rest::{OAuthCreds, Request};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Deserialize, Debug)]
struct FlickrOauth1Token {
    token: String,
    secret: String,
}

fn get_flickr_tokens(path: PathBuf) -> anyhow::Result<FlickrOauth1Token> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

#[allow(dead_code)]
pub(crate) fn get_unauthenticated_request(method: &str) -> anyhow::Result<Request> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    Ok(Request::new(&api_key, method))
}

#[allow(dead_code)]
pub(crate) fn get_signing_secret() -> anyhow::Result<String> {
    Ok(std::env::var("FLICKR_API_SECRET")?)
}

#[allow(dead_code)]
pub(crate) fn get_authenticated_request(method: &str) -> anyhow::Result<Request> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let consumer_secret = std::env::var("FLICKR_API_SECRET")?;
    let token_cache = std::env::var("FLICKR_AUTH_CACHE")?;
    let tokens = get_flickr_tokens(token_cache.into())?;

    let mut request = Request::new(&api_key, method);
    request.oauth = Some(OAuthCreds {
        consumer_secret,
        callback: String::new(),
        token: tokens.token,
        token_secret: tokens.secret,
    });
    Ok(request)
}
