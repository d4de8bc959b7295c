//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Response header evaluation

use crate::core::{Error, Result};
use crate::provider::MapImage;
use percent_encoding::percent_decode_str;
use md5::{Digest, Md5};
use std::path::Path;

/// File extension from a media type, e.g. `png` for `image/png; charset=binary`
pub fn file_extension(content_type: &str) -> Option<String> {
    let media_type = content_type.split(';').next()?.trim();
    let mut parts = media_type.splitn(2, '/');
    let _type = parts.next().filter(|t| !t.is_empty())?;
    let subtype = parts.next()?.trim();
    if subtype.is_empty() || subtype.contains('/') {
        return None;
    }
    Some(subtype.to_lowercase())
}

/// `filename` parameter of a Content-Disposition header
pub fn disposition_filename(content_disposition: &str) -> Option<String> {
    let mut extended = None;
    for param in header_params(content_disposition) {
        // The disposition type has no value
        let mut kv = param.splitn(2, '=');
        let key = kv.next().unwrap_or_default().trim().to_lowercase();
        let value = match kv.next() {
            Some(value) => unquote(value.trim()),
            None => continue,
        };
        match key.as_str() {
            "filename" if !value.is_empty() => {
                return sanitize_filename(value);
            }
            "filename*" => {
                // RFC 5987: charset'language'percent-encoded
                let encoded = value.rsplit('\'').next().unwrap_or(value);
                extended = percent_decode_str(encoded)
                    .decode_utf8()
                    .ok()
                    .and_then(|name| sanitize_filename(&name));
            }
            _ => {}
        }
    }
    extended
}

/// Split header parameters at `;` outside of quoted strings
fn header_params(header: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut start = 0;
    let mut quoted = false;
    for (i, c) in header.char_indices() {
        match c {
            '"' => quoted = !quoted,
            ';' if !quoted => {
                params.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    params.push(&header[start..]);
    params
}

fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Strip directory components
fn sanitize_filename(name: &str) -> Option<String> {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
}

/// File name for a downloaded image.
///
/// An explicit name gets the extension of the content type. Without explicit name, the
/// Content-Disposition filename is used, or the MD5 hash of the request URL.
pub fn image_filename(image: &MapImage, filename: Option<&str>) -> Result<String> {
    let extension = image
        .content_type
        .as_ref()
        .and_then(|ct| file_extension(ct))
        .ok_or_else(|| {
            Error::network(
                &image.url,
                format!("invalid content type {:?}", image.content_type),
            )
        })?;
    if let Some(name) = filename {
        return Ok(format!("{}.{}", name, extension));
    }
    if let Some(name) = image
        .content_disposition
        .as_ref()
        .and_then(|cd| disposition_filename(cd))
    {
        return Ok(name);
    }
    let hash = Md5::digest(image.url.as_bytes());
    warn!("No file name for {}, using URL hash", image.url);
    Ok(format!("{:x}.{}", hash, extension))
}
