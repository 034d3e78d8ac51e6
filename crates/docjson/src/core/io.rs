//! Payload decoding and file I/O utilities.
//!
//! Attachments travel as base64 strings. This module turns them back into
//! bytes, and builds input items from files on disk for the file-based entry
//! points.

use crate::types::{BinaryData, InputItem};
use crate::{DocjsonError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;
use tokio::fs;

/// MIME type used when the extension gives no hint.
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Decode a base64 attachment payload.
///
/// Surrounding whitespace and line breaks (as produced by MIME-style
/// encoders) are ignored.
///
/// # Errors
///
/// Returns `DocjsonError::Decode` if the payload is not valid base64.
pub fn decode_payload(data: &str) -> Result<Vec<u8>> {
    if data.bytes().any(|b| b.is_ascii_whitespace()) {
        let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        return Ok(STANDARD.decode(compact)?);
    }
    Ok(STANDARD.decode(data)?)
}

/// Encode raw bytes as a base64 attachment payload.
pub fn encode_payload(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Find the attachment named `property` on an item.
///
/// # Errors
///
/// Returns `DocjsonError::MissingBinaryData` if the item has no such attachment.
pub fn attachment<'a>(item: &'a InputItem, property: &str) -> Result<&'a BinaryData> {
    item.binary
        .get(property)
        .ok_or_else(|| DocjsonError::missing_binary_data(property))
}

/// Read a file asynchronously.
///
/// # Errors
///
/// Returns `DocjsonError::Io` for I/O errors (these always bubble up).
pub async fn read_file_async(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    fs::read(path.as_ref()).await.map_err(DocjsonError::Io)
}

/// Guess a MIME type from a path's extension.
pub fn guess_mime_type(path: impl AsRef<Path>) -> String {
    mime_guess::from_path(path.as_ref())
        .first_raw()
        .unwrap_or(FALLBACK_MIME_TYPE)
        .to_string()
}

/// Build an input item from a file on disk.
///
/// The attachment is stored under `property`, its file name is the path's
/// final component and its MIME type is `mime_type` or, when `None`, a guess
/// from the extension.
pub async fn item_from_path(path: impl AsRef<Path>, property: &str, mime_type: Option<&str>) -> Result<InputItem> {
    let path = path.as_ref();
    let bytes = read_file_async(path).await?;
    let mime_type = match mime_type {
        Some(mime) => mime.to_string(),
        None => guess_mime_type(path),
    };
    let file_name = path.file_name().map(|name| name.to_string_lossy().into_owned());

    Ok(InputItem::with_binary(
        property,
        BinaryData::from_bytes(&bytes, mime_type, file_name),
    ))
}
