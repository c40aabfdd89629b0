/*
 * Copyright (c) 2026 the Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Need both API key and method")]
    MissingConfig(),

    #[error("OAuth credentials are not configured")]
    MissingOAuth(),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("XML parse error")]
    Xml(#[from] quick_xml::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("API response was error: code: {0}; message: {1}")]
    ApiResponse(i64, String),

    #[error("API response is malformed: {0}")]
    MalformedResponse(&'static str),

    #[error("Token response missing key: {0}")]
    TokenKeyMissing(&'static str),
}
