// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color parsing and the small amount of color arithmetic the chrome needs.
//!
//! All arithmetic happens on 8-bit channels and truncates toward zero, so a given input always
//! produces the same pixels.

use peniko::Color;
use peniko::color::Rgba8;

/// Threshold on the red channel below which a background counts as dark.
pub const DARK_RED_THRESHOLD: u8 = 128;

/// Parses `#RRGGBB` or `#AARRGGBB`.
///
/// Anything else, including malformed hex digits, yields opaque white.
///
/// ```
/// use codeshot::color::parse_hex;
/// use peniko::Color;
///
/// assert_eq!(parse_hex("#1e1e1e"), Color::from_rgb8(0x1e, 0x1e, 0x1e));
/// assert_eq!(parse_hex("#80ff0000"), Color::from_rgba8(0xff, 0, 0, 0x80));
/// assert_eq!(parse_hex("1e1e1e"), Color::WHITE);
/// ```
pub fn parse_hex(source: &str) -> Color {
    try_parse_hex(source).unwrap_or(Color::WHITE)
}

fn try_parse_hex(source: &str) -> Option<Color> {
    let hex = source.strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    let [b3, b2, b1, b0] = value.to_be_bytes();
    match hex.len() {
        6 => Some(Color::from_rgb8(b2, b1, b0)),
        // Alpha comes first in the eight digit form.
        8 => Some(Color::from_rgba8(b2, b1, b0, b3)),
        _ => None,
    }
}

/// Returns the 8-bit channels of `color`.
pub fn rgba8(color: Color) -> Rgba8 {
    color.to_rgba8()
}

/// Builds an opaque color from a packed `0xRRGGBB` value.
pub fn from_packed_rgb(rgb: u32) -> Color {
    let [_, r, g, b] = rgb.to_be_bytes();
    Color::from_rgb8(r, g, b)
}

/// Whether `color` should be treated as a dark background.
///
/// Only the red channel is consulted.
pub fn is_dark(color: Color) -> bool {
    rgba8(color).r < DARK_RED_THRESHOLD
}

/// Scales the color channels toward black by `factor`, keeping alpha.
pub fn darken(color: Color, factor: f32) -> Color {
    let c = rgba8(color);
    let scale = |v: u8| (f32::from(v) * (1.0 - factor)) as u8;
    Color::from_rgba8(scale(c.r), scale(c.g), scale(c.b), c.a)
}

/// Linear blend of all four channels; `ratio` is the weight of `other`.
pub fn blend(color: Color, other: Color, ratio: f32) -> Color {
    let a = rgba8(color);
    let b = rgba8(other);
    let inv = 1.0 - ratio;
    let mix = |x: u8, y: u8| (f32::from(x) * inv + f32::from(y) * ratio) as u8;
    Color::from_rgba8(
        mix(a.r, b.r),
        mix(a.g, b.g),
        mix(a.b, b.b),
        mix(a.a, b.a),
    )
}

/// Replaces the alpha channel.
pub fn with_alpha8(color: Color, alpha: u8) -> Color {
    let c = rgba8(color);
    Color::from_rgba8(c.r, c.g, c.b, alpha)
}

/// Converts to the rasterizer's color type.
pub(crate) fn to_tiny_skia(color: Color) -> tiny_skia::Color {
    let c = rgba8(color);
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}
