// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content size estimation for auto-sized output.

/// A step function keyed by a count or width.
///
/// `steps` are `(threshold, value)` pairs in descending threshold order. Lookup returns the value
/// of the first step whose threshold the key is strictly above, or `base`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierTable<V: 'static> {
    /// Descending thresholds and their values.
    pub steps: &'static [(usize, V)],
    /// Value for keys at or below every threshold.
    pub base: V,
}

impl<V: Copy> TierTable<V> {
    /// The value for `key`.
    pub fn lookup(&self, key: usize) -> V {
        self.steps
            .iter()
            .find(|(threshold, _)| key > *threshold)
            .map_or(self.base, |(_, value)| *value)
    }
}

/// Sizing rules for the code body of one design system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyMetrics {
    /// Width of the line number gutter.
    pub gutter_width: u32,
    /// Space between the gutter and the code.
    pub content_padding: u32,
    /// Space above the first line.
    pub top_padding: u32,
    /// Space below the last line.
    pub bottom_padding: u32,
    /// Extra breathing room as a fraction of the widest line, keyed by its length in chars.
    pub padding_tiers: TierTable<f32>,
    /// Minimum content width, keyed by the widest line in pixels.
    pub min_width_tiers: TierTable<u32>,
    /// Minimum content height, keyed by the number of lines less one.
    ///
    /// Keys are offset by one so the "at most N lines" rules map onto strict thresholds.
    pub min_height_tiers: TierTable<u32>,
}

/// Measurements of a single code face.
///
/// Implementations may cache; every method takes `&mut self`.
pub trait FontMetrics {
    /// Natural distance between consecutive baselines.
    fn line_spacing(&mut self) -> f32;
    /// Distance from the top of a line to its baseline.
    fn ascent(&mut self) -> f32;
    /// Sum of the advances of each character shaped on its own.
    fn advance_sum(&mut self, text: &str) -> f32;
    /// Advance of the whole string shaped at once.
    fn string_width(&mut self, text: &str) -> f32;
    /// Width of the union of the glyph ink boxes.
    fn ink_width(&mut self, text: &str) -> f32;

    /// Line advance after applying `multiplier`, in whole pixels.
    fn line_height(&mut self, multiplier: f32) -> u32 {
        (self.line_spacing() * multiplier).floor().max(0.0) as u32
    }
}

/// Content size in logical pixels, excluding the header and the outer margin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    /// Content width.
    pub width: u32,
    /// Content height.
    pub height: u32,
}

/// Widest rendering of `line` among the three ways of measuring it.
fn line_width(line: &str, metrics: &mut impl FontMetrics) -> f32 {
    metrics
        .advance_sum(line)
        .max(metrics.string_width(line))
        .max(metrics.ink_width(line))
}

/// Estimates the content size needed to show `lines` without clipping.
///
/// The result never shrinks when lines are added or lengthened.
pub fn estimate_dimensions<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    metrics: &mut impl FontMetrics,
    line_height_multiplier: f32,
    body: &BodyMetrics,
) -> Dimensions {
    let mut line_count = 0_usize;
    let mut longest_chars = 0_usize;
    let mut widest = 0.0_f32;
    for line in lines {
        line_count += 1;
        longest_chars = longest_chars.max(line.chars().count());
        widest = widest.max(line_width(line, metrics));
    }
    let max_line_width = widest.ceil().max(0.0) as u32;

    let padding_pct = body.padding_tiers.lookup(longest_chars);
    let breathing = (max_line_width as f32 * padding_pct).floor() as u32;
    let total_width =
        body.gutter_width + 2 * body.content_padding + max_line_width + breathing;
    let width = body
        .min_width_tiers
        .lookup(max_line_width as usize)
        .max(total_width);

    let line_height = metrics.line_height(line_height_multiplier);
    let content_height = saturating_u32(line_count).saturating_mul(line_height)
        + body.top_padding
        + body.bottom_padding;
    let height = body
        .min_height_tiers
        .lookup(line_count.saturating_sub(1))
        .max(content_height);

    log::debug!(
        "estimated {width}x{height} for {line_count} lines, widest {max_line_width}px"
    );
    Dimensions { width, height }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
