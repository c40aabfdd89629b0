/*
 * Copyright (c) 2026 the Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Response envelope parsing for the XML (upload/replace) and JSON
//! (authenticated REST) call paths.

use crate::rest::errors::FlickrError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::Deserialize;

/// The `<rsp>` envelope returned by the upload and replace endpoints.
#[derive(Debug)]
pub struct RestResponse {
    /// `"ok"` or `"fail"`.
    pub stat: String,
    pub error: Option<RestError>,
    /// Raw inner XML of the envelope, kept opaque for the caller.
    pub payload: String,
}

impl RestResponse {
    pub fn is_ok(&self) -> bool {
        self.stat == "ok"
    }
}

/// The `<err code=".." msg="..">` element of a failed envelope.
#[derive(Debug)]
pub struct RestError {
    pub code: String,
    pub message: String,
}

/// Parses a `<rsp stat="..">...</rsp>` body.
pub fn parse_rest_response(body: &str) -> Result<RestResponse, FlickrError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"rsp" => {
                let stat = attr_value(&e, "stat")?
                    .ok_or(FlickrError::MalformedResponse("rsp element missing stat"))?;
                let payload = reader.read_text(e.name())?.trim().to_string();
                let error = if stat == "fail" {
                    parse_err_element(&payload)?
                } else {
                    None
                };
                return Ok(RestResponse {
                    stat,
                    error,
                    payload,
                });
            }
            Event::Empty(e) if e.name().as_ref() == b"rsp" => {
                let stat = attr_value(&e, "stat")?
                    .ok_or(FlickrError::MalformedResponse("rsp element missing stat"))?;
                return Ok(RestResponse {
                    stat,
                    error: None,
                    payload: String::new(),
                });
            }
            Event::Eof => return Err(FlickrError::MalformedResponse("missing rsp element")),
            _ => {}
        }
    }
}

// Scans the envelope payload for the <err> element of a failed response.
fn parse_err_element(payload: &str) -> Result<Option<RestError>, FlickrError> {
    let mut reader = Reader::from_str(payload);
    reader.config_mut().trim_text(true);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"err" => {
                let code = attr_value(&e, "code")?.unwrap_or_default();
                let message = attr_value(&e, "msg")?.unwrap_or_default();
                return Ok(Some(RestError { code, message }));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn attr_value(e: &BytesStart, name: &str) -> Result<Option<String>, FlickrError> {
    let attr = e
        .try_get_attribute(name)
        .map_err(|_| FlickrError::MalformedResponse("malformed attribute"))?;
    match attr {
        Some(a) => {
            let value = a
                .unescape_value()
                .map_err(|_| FlickrError::MalformedResponse("malformed attribute value"))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

// Status fields of a JSON-encoded REST response.
#[derive(Deserialize, Debug)]
struct JsonStatus {
    stat: String,
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

/// Checks the `{stat, code, message}` fields of a JSON body, translating
/// a `"fail"` status into an API error.
pub(crate) fn check_json_status(body: &str) -> Result<(), FlickrError> {
    let status: JsonStatus = serde_json::from_str(body)?;
    if status.stat == "fail" {
        return Err(FlickrError::ApiResponse(status.code, status.message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ok_envelope_keeps_raw_payload() {
        let body = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok"><photoid>1234</photoid></rsp>"#;
        let resp = parse_rest_response(body).unwrap();
        assert!(resp.is_ok());
        assert!(resp.error.is_none());
        assert_eq!(resp.payload, "<photoid>1234</photoid>");
    }

    #[test]
    fn parse_fail_envelope_extracts_error() {
        let body = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="fail"><err code="5" msg="Filetype was not recognised" /></rsp>"#;
        let resp = parse_rest_response(body).unwrap();
        assert!(!resp.is_ok());
        let err = resp.error.unwrap();
        assert_eq!(err.code, "5");
        assert_eq!(err.message, "Filetype was not recognised");
    }

    #[test]
    fn parse_empty_envelope() {
        let resp = parse_rest_response(r#"<rsp stat="ok"/>"#).unwrap();
        assert!(resp.is_ok());
        assert!(resp.payload.is_empty());
    }

    #[test]
    fn parse_body_without_envelope_is_malformed() {
        let resp = parse_rest_response("<not-an-envelope/>");
        assert!(matches!(resp, Err(FlickrError::MalformedResponse(_))));
    }

    #[test]
    fn json_fail_status_carries_code_and_message() {
        let body = r#"{"stat":"fail","code":1,"message":"Photo not found"}"#;
        let err = check_json_status(body).unwrap_err();
        match err {
            FlickrError::ApiResponse(code, message) => {
                assert_eq!(code, 1);
                assert_eq!(message, "Photo not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn json_ok_status_passes() {
        let body = r#"{"stat":"ok","photos":{"page":1}}"#;
        assert!(check_json_status(body).is_ok());
    }

    #[test]
    fn json_garbage_is_a_parse_error() {
        assert!(matches!(
            check_json_status("not json"),
            Err(FlickrError::Deserialization(_))
        ));
    }
}
