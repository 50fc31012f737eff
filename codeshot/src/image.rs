// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encoded output.

const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// Reads the pixel size from the `IHDR` chunk of a PNG stream without decoding it.
///
/// Returns `None` if `bytes` does not start with a PNG signature followed by an `IHDR` chunk.
///
/// ```
/// # use codeshot::image::png_dimensions;
/// let mut header = b"\x89PNG\r\n\x1a\n\0\0\0\x0dIHDR".to_vec();
/// header.extend_from_slice(&2400_u32.to_be_bytes());
/// header.extend_from_slice(&1888_u32.to_be_bytes());
/// assert_eq!(png_dimensions(&header), Some((2400, 1888)));
/// assert_eq!(png_dimensions(b"GIF89a"), None);
/// ```
pub fn png_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    if bytes.get(..8)? != PNG_SIGNATURE || bytes.get(12..16)? != b"IHDR" {
        return None;
    }
    let word = |at: usize| -> Option<u32> {
        let raw: [u8; 4] = bytes.get(at..at + 4)?.try_into().ok()?;
        Some(u32::from_be_bytes(raw))
    };
    Some((word(16)?, word(20)?))
}

/// A rendered snippet as PNG bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct RenderedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl core::fmt::Debug for RenderedImage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}

impl RenderedImage {
    pub(crate) fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            width,
            height,
        }
    }

    /// Wraps PNG bytes produced elsewhere, taking the size from the header.
    pub fn from_png(bytes: Vec<u8>) -> Option<Self> {
        let (width, height) = png_dimensions(&bytes)?;
        Some(Self::new(bytes, width, height))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The encoded PNG stream.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Takes the encoded PNG stream.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for RenderedImage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
