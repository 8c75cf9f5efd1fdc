use crate::error::{RateError, Result};
use flate2::read::GzDecoder;
use std::io::Read;

pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
pub const UTF8_BOM: [u8; 3] = [0xef, 0xbb, 0xbf];

pub fn is_gzipped(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Turns a raw response body into text, inflating it first when it carries
/// the gzip magic number. A leading byte order mark on plain bodies is
/// dropped.
pub fn decode_body(bytes: &[u8]) -> Result<String> {
    if is_gzipped(bytes) {
        let mut text = String::new();
        GzDecoder::new(bytes)
            .read_to_string(&mut text)
            .map_err(|e| RateError::DecodeError(format!("gzip: {}", e)))?;
        return Ok(text);
    }

    let bytes = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    String::from_utf8(bytes.to_vec()).map_err(|e| RateError::DecodeError(format!("utf-8: {}", e)))
}
