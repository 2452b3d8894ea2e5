//! Cover-art loading.
//!
//! Fetches a cover image URL and reports the image's pixel dimensions, or a
//! typed failure. Only width and height are needed for display decisions,
//! so the headers of the common web formats (PNG, GIF, JPEG) are read
//! directly instead of decoding the image.

use std::fmt;

use log::debug;

use crate::core::text::{MessageId, UiText};

/// A successfully loaded cover: its reported pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverArt {
    pub width: u32,
    pub height: u32,
}

/// Why a cover could not be displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum CoverError {
    /// The fetched image reports degenerate dimensions (either axis <= 1).
    /// Open Library serves a 1x1 placeholder when no cover exists.
    InvalidImageSize,
    /// The fetch or header read failed for any other reason.
    LoadFailed(String),
}

impl CoverError {
    pub fn to_ui_text(&self) -> UiText {
        match self {
            CoverError::InvalidImageSize => UiText::resource(MessageId::CoverInvalidSize),
            CoverError::LoadFailed(_) => UiText::resource(MessageId::CoverLoadFailed),
        }
    }
}

impl fmt::Display for CoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverError::InvalidImageSize => write!(f, "cover image has invalid dimensions"),
            CoverError::LoadFailed(msg) => write!(f, "cover failed to load: {msg}"),
        }
    }
}

impl std::error::Error for CoverError {}

/// Downloads a cover and validates its dimensions.
pub async fn fetch_cover(client: &reqwest::Client, url: &str) -> Result<CoverArt, CoverError> {
    if url.is_empty() {
        return Err(CoverError::LoadFailed("no cover url".to_string()));
    }

    debug!("Fetching cover {url}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CoverError::LoadFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CoverError::LoadFailed(format!("HTTP {}", status.as_u16())));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| CoverError::LoadFailed(e.to_string()))?;

    let (width, height) = image_dimensions(&bytes)
        .ok_or_else(|| CoverError::LoadFailed("unrecognized image format".to_string()))?;

    if width <= 1 || height <= 1 {
        return Err(CoverError::InvalidImageSize);
    }

    Ok(CoverArt { width, height })
}

/// Reads pixel dimensions from a PNG, GIF, or JPEG header.
fn image_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    png_dimensions(bytes)
        .or_else(|| gif_dimensions(bytes))
        .or_else(|| jpeg_dimensions(bytes))
}

/// PNG: 8-byte signature, then the IHDR chunk with width/height as the
/// first two big-endian u32 fields of its data.
fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];
    if bytes.len() < 24 || bytes[..8] != SIGNATURE || &bytes[12..16] != b"IHDR" {
        return None;
    }
    let width = u32::from_be_bytes(bytes[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(bytes[20..24].try_into().ok()?);
    Some((width, height))
}

/// GIF: "GIF87a"/"GIF89a", then logical screen width/height as little-endian u16.
fn gif_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.len() < 10 || (!bytes.starts_with(b"GIF87a") && !bytes.starts_with(b"GIF89a")) {
        return None;
    }
    let width = u16::from_le_bytes([bytes[6], bytes[7]]) as u32;
    let height = u16::from_le_bytes([bytes[8], bytes[9]]) as u32;
    Some((width, height))
}

/// JPEG: walk the marker segments until a start-of-frame marker, which
/// carries height then width as big-endian u16 after the precision byte.
fn jpeg_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.len() < 4 || bytes[0] != 0xFF || bytes[1] != 0xD8 {
        return None;
    }

    let mut i = 2;
    while i + 3 < bytes.len() {
        if bytes[i] != 0xFF {
            return None;
        }
        let marker = bytes[i + 1];

        // Standalone markers (RSTn, TEM, EOI) carry no length segment.
        if marker == 0x01 || (0xD0..=0xD9).contains(&marker) {
            i += 2;
            continue;
        }

        let length = u16::from_be_bytes([bytes[i + 2], bytes[i + 3]]) as usize;

        // SOF0..SOF15 except the DHT/JPG/DAC markers interleaved in that range.
        let is_sof = matches!(marker, 0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF);
        if is_sof {
            if i + 9 <= bytes.len() {
                let height = u16::from_be_bytes([bytes[i + 5], bytes[i + 6]]) as u32;
                let width = u16::from_be_bytes([bytes[i + 7], bytes[i + 8]]) as u32;
                return Some((width, height));
            }
            return None;
        }

        i += 2 + length;
    }
    None
}

#[cfg(test)]
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];
    bytes.extend_from_slice(&13u32.to_be_bytes()); // IHDR data length
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]); // bit depth, color type, etc.
    bytes
}
