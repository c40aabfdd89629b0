/*
 * Copyright (c) 2026 the Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Incremental multipart/form-data bodies for the upload and replace
//! endpoints.
//!
//! The body is header bytes, file bytes and footer bytes in sequence. The
//! file is never buffered whole; it is streamed in chunks behind the
//! pre-computed content length.

use crate::rest::errors::FlickrError;
use async_stream::try_stream;
use bytes::Bytes;
use futures::Stream;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

pub(crate) const BOUNDARY: &str = "----###---###--flickr-client";

const CRLF: &str = "\r\n";
const FILE_READ_CHUNK: usize = 64 * 1024;

/// A multipart body with its content length known up front.
pub(crate) struct MultipartBody {
    header: Bytes,
    footer: Bytes,
    file: File,
    file_len: u64,
}

impl MultipartBody {
    /// Frames the parameter set and the file at `path` into body sections.
    ///
    /// File open and stat errors surface here, before any network work.
    pub(crate) async fn from_file(
        args: &BTreeMap<String, String>,
        path: &Path,
        filetype: &str,
    ) -> Result<Self, FlickrError> {
        let file = File::open(path).await?;
        let file_len = file.metadata().await?.len();

        let mut header = String::new();
        for (key, value) in args {
            header.push_str(&format!("--{BOUNDARY}{CRLF}"));
            header.push_str(&format!(
                "Content-Disposition: form-data; name=\"{key}\"{CRLF}{CRLF}"
            ));
            header.push_str(value);
            header.push_str(CRLF);
        }
        header.push_str(&format!("--{BOUNDARY}{CRLF}"));
        header.push_str(&format!(
            "Content-Disposition: form-data; name=\"photo\"; filename=\"photo.jpg\"{CRLF}"
        ));
        header.push_str(&format!("Content-Type: {filetype}{CRLF}{CRLF}"));

        let footer = format!("{CRLF}--{BOUNDARY}--{CRLF}");

        Ok(Self {
            header: Bytes::from(header),
            footer: Bytes::from(footer),
            file,
            file_len,
        })
    }

    /// Exact length of the body: header + file + footer.
    pub(crate) fn content_length(&self) -> u64 {
        self.header.len() as u64 + self.file_len + self.footer.len() as u64
    }

    /// Single-pass stream of body chunks.
    ///
    /// A file read error mid-body ends the stream with that error, which
    /// the HTTP client surfaces as a failed request rather than a partial
    /// success. The file handle is dropped on every exit path.
    pub(crate) fn into_stream(self) -> impl Stream<Item = Result<Bytes, io::Error>> {
        let MultipartBody {
            header,
            footer,
            mut file,
            ..
        } = self;
        try_stream! {
            yield header;
            let mut buf = vec![0u8; FILE_READ_CHUNK];
            loop {
                let n = file.read(&mut buf).await?;
                if n == 0 {
                    break;
                }
                yield Bytes::copy_from_slice(&buf[..n]);
            }
            yield footer;
        }
    }
}
