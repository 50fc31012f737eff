// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font resolution, shaping and measurement on top of Parley.
//!
//! This is the only module that talks to Parley directly. It hands out shaped [`Layout`]s for
//! drawing and implements [`FontMetrics`] for the size estimator.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use parley::fontique::{Blob, Collection, CollectionOptions, SourceCache};
use parley::{
    FontContext, FontFamily, FontWeight, GenericFamily, GlyphRun, Layout, LayoutContext,
    PositionedLayoutItem, StyleProperty,
};
use peniko::Color;
use skrifa::instance::{LocationRef, NormalizedCoord, Size};
use skrifa::raw::FontRef as ReadFontsRef;
use skrifa::{GlyphId, MetadataProvider};

use crate::estimate::FontMetrics;

/// The brush carried through Parley layouts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBrush {
    /// Fill color of the glyphs.
    pub color: Color,
}

impl ColorBrush {
    /// A brush painting `color`.
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for ColorBrush {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
        }
    }
}

/// A family picked from a fallback chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FamilyChoice {
    /// An installed family.
    Named(String),
    /// None of the candidates were installed.
    Generic(GenericFamily),
}

/// A font family, size and weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    /// The family to shape with.
    pub family: FamilyChoice,
    /// Size in logical pixels.
    pub size: f32,
    /// Whether to use the bold weight.
    pub bold: bool,
}

impl Face {
    /// The same face at a different size.
    #[must_use]
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// The same face, bold or not.
    #[must_use]
    pub fn with_bold(&self, bold: bool) -> Self {
        Self {
            bold,
            ..self.clone()
        }
    }
}

/// Owns the font collection and the shaping scratch space.
///
/// Both are expensive to build and cheap to reuse, so keep one per thread.
pub struct Typesetter {
    font_cx: FontContext,
    layout_cx: LayoutContext<ColorBrush>,
}

impl core::fmt::Debug for Typesetter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Typesetter").finish_non_exhaustive()
    }
}

impl Default for Typesetter {
    fn default() -> Self {
        Self::new()
    }
}

impl Typesetter {
    /// A typesetter that can use the fonts installed on the system.
    pub fn new() -> Self {
        Self::with_font_context(FontContext::new())
    }

    /// A typesetter that only knows the fonts registered through
    /// [`font_context_mut`](Self::font_context_mut).
    pub fn without_system_fonts() -> Self {
        Self::with_font_context(FontContext {
            collection: Collection::new(CollectionOptions {
                shared: false,
                system_fonts: false,
            }),
            source_cache: SourceCache::default(),
        })
    }

    /// A typesetter over an existing font context.
    pub fn with_font_context(font_cx: FontContext) -> Self {
        Self {
            font_cx,
            layout_cx: LayoutContext::new(),
        }
    }

    /// The font context, for registering additional fonts.
    pub fn font_context_mut(&mut self) -> &mut FontContext {
        &mut self.font_cx
    }

    /// Adds the fonts in `data` to the collection and appends their families to each of
    /// `generics`.
    ///
    /// Returns the number of families registered.
    pub fn register_fonts(&mut self, data: Vec<u8>, generics: &[GenericFamily]) -> usize {
        let collection = &mut self.font_cx.collection;
        let families: Vec<_> = collection
            .register_fonts(Blob::new(Arc::new(data)), None)
            .into_iter()
            .map(|(family, _)| family)
            .collect();
        for generic in generics {
            collection.append_generic_families(*generic, families.iter().copied());
        }
        log::debug!("registered {} font families", families.len());
        families.len()
    }

    /// Picks the first installed family in `candidates`, or `generic`.
    pub fn resolve_family<'a>(
        &mut self,
        candidates: impl IntoIterator<Item = &'a str>,
        generic: GenericFamily,
    ) -> FamilyChoice {
        let mut tried = Vec::new();
        for name in candidates {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if self.font_cx.collection.family_id(name).is_some() {
                return FamilyChoice::Named(name.to_owned());
            }
            tried.push(name);
        }
        log::debug!("no font in {tried:?} is installed, using generic {generic:?}");
        FamilyChoice::Generic(generic)
    }

    /// Shapes `text` as a single unwrapped line.
    pub fn layout(&mut self, text: &str, face: &Face, brush: ColorBrush) -> Layout<ColorBrush> {
        let mut builder = self
            .layout_cx
            .ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::Brush(brush));
        builder.push_default(StyleProperty::FontSize(face.size));
        builder.push_default(StyleProperty::FontWeight(if face.bold {
            FontWeight::BOLD
        } else {
            FontWeight::NORMAL
        }));
        match &face.family {
            FamilyChoice::Named(name) => {
                builder.push_default(FontFamily::Named(Cow::Borrowed(name.as_str())));
            }
            FamilyChoice::Generic(generic) => builder.push_default(*generic),
        }
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Advance of `text` including trailing whitespace.
    pub fn advance(&mut self, text: &str, face: &Face) -> f32 {
        self.layout(text, face, ColorBrush::default()).full_width()
    }

    /// Metrics for `face`, borrowing this typesetter for shaping.
    pub fn measure(&mut self, face: Face) -> MeasuredFace<'_> {
        MeasuredFace {
            typesetter: self,
            face,
            vertical: None,
            advances: HashMap::new(),
        }
    }
}

/// Vertical metrics of a face in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalMetrics {
    /// Top of the line to baseline.
    pub ascent: f32,
    /// Baseline to bottom of the line.
    pub descent: f32,
    /// Extra gap between lines.
    pub leading: f32,
}

impl VerticalMetrics {
    /// Proportions used when no font could be loaded at all.
    fn fallback(size: f32) -> Self {
        Self {
            ascent: size * 0.8,
            descent: size * 0.2,
            leading: size * 0.2,
        }
    }

    /// Natural baseline-to-baseline distance.
    pub fn line_spacing(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}

/// A [`Face`] with cached measurements.
pub struct MeasuredFace<'a> {
    typesetter: &'a mut Typesetter,
    face: Face,
    vertical: Option<VerticalMetrics>,
    advances: HashMap<char, f32>,
}

impl core::fmt::Debug for MeasuredFace<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MeasuredFace")
            .field("face", &self.face)
            .field("vertical", &self.vertical)
            .finish_non_exhaustive()
    }
}

impl MeasuredFace<'_> {
    /// The vertical metrics of the face.
    pub fn vertical(&mut self) -> VerticalMetrics {
        if let Some(vertical) = self.vertical {
            return vertical;
        }
        let layout = self
            .typesetter
            .layout("Mg", &self.face, ColorBrush::default());
        let vertical = layout
            .lines()
            .next()
            .map(|line| {
                let m = line.metrics();
                VerticalMetrics {
                    ascent: m.ascent,
                    descent: m.descent,
                    leading: m.leading,
                }
            })
            .filter(|m| m.line_spacing() > 0.0)
            .unwrap_or_else(|| {
                log::debug!("no vertical metrics for {:?}, estimating", self.face.family);
                VerticalMetrics::fallback(self.face.size)
            });
        self.vertical = Some(vertical);
        vertical
    }

    fn char_advance(&mut self, ch: char) -> f32 {
        if let Some(advance) = self.advances.get(&ch) {
            return *advance;
        }
        let mut buf = [0_u8; 4];
        let advance = self.typesetter.advance(ch.encode_utf8(&mut buf), &self.face);
        self.advances.insert(ch, advance);
        advance
    }
}

impl FontMetrics for MeasuredFace<'_> {
    fn line_spacing(&mut self) -> f32 {
        self.vertical().line_spacing()
    }

    fn ascent(&mut self) -> f32 {
        self.vertical().ascent
    }

    fn advance_sum(&mut self, text: &str) -> f32 {
        text.chars().map(|ch| self.char_advance(ch)).sum()
    }

    fn string_width(&mut self, text: &str) -> f32 {
        self.typesetter.advance(text, &self.face)
    }

    fn ink_width(&mut self, text: &str) -> f32 {
        let layout = self.typesetter.layout(text, &self.face, ColorBrush::default());
        ink_extent(&layout).map_or(0.0, |(min, max)| max - min)
    }
}

/// Offset of the first baseline from the top of `layout`.
pub(crate) fn first_baseline(layout: &Layout<ColorBrush>) -> f32 {
    layout
        .lines()
        .next()
        .map_or(0.0, |line| line.metrics().baseline)
}

/// Horizontal extent of the union of the glyph bounding boxes.
fn ink_extent(layout: &Layout<ColorBrush>) -> Option<(f32, f32)> {
    let mut extent: Option<(f32, f32)> = None;
    for line in layout.lines() {
        for item in line.items() {
            let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                continue;
            };
            let Some(font) = RunFont::new(&glyph_run) else {
                continue;
            };
            let glyph_metrics = font
                .font_ref
                .glyph_metrics(Size::new(font.size), LocationRef::new(&font.coords));
            for glyph in glyph_run.positioned_glyphs() {
                let Some(bounds) = glyph_metrics.bounds(GlyphId::from(glyph.id)) else {
                    continue;
                };
                let (lo, hi) = (glyph.x + bounds.x_min, glyph.x + bounds.x_max);
                extent = Some(match extent {
                    Some((min, max)) => (min.min(lo), max.max(hi)),
                    None => (lo, hi),
                });
            }
        }
    }
    extent
}

/// The font data behind a glyph run, ready for Skrifa.
pub(crate) struct RunFont<'a> {
    pub(crate) font_ref: ReadFontsRef<'a>,
    pub(crate) size: f32,
    pub(crate) coords: Vec<NormalizedCoord>,
}

impl<'a> RunFont<'a> {
    pub(crate) fn new(glyph_run: &'a GlyphRun<'a, ColorBrush>) -> Option<Self> {
        let run = glyph_run.run();
        let font = run.font();
        let font_ref = match ReadFontsRef::from_index(font.data.as_ref(), font.index) {
            Ok(font_ref) => font_ref,
            Err(err) => {
                log::debug!("skipping glyph run with unreadable font: {err}");
                return None;
            }
        };
        let coords = run
            .normalized_coords()
            .iter()
            .map(|coord| NormalizedCoord::from_bits(*coord))
            .collect();
        Some(Self {
            font_ref,
            size: run.font_size(),
            coords,
        })
    }
}

#[cfg(test)]
impl Typesetter {
    /// A typesetter that only knows the bundled development fonts, which also stand in for
    /// the generic monospace and sans-serif families.
    pub(crate) fn with_test_fonts() -> Self {
        let mut typesetter = Self::without_system_fonts();
        for data in codeshot_dev::font_data().unwrap() {
            typesetter.register_fonts(data, &[GenericFamily::Monospace, GenericFamily::SansSerif]);
        }
        typesetter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face() -> Face {
        Face {
            family: FamilyChoice::Generic(GenericFamily::Monospace),
            size: 18.0,
            bold: false,
        }
    }

    #[test]
    fn unknown_families_fall_back_to_generic() {
        let mut typesetter = Typesetter::without_system_fonts();
        let choice = typesetter.resolve_family(
            ["No Such Family", "", "Another Missing Face"],
            GenericFamily::Monospace,
        );
        assert_eq!(choice, FamilyChoice::Generic(GenericFamily::Monospace));
    }

    #[test]
    fn metrics_are_usable_without_any_fonts() {
        let mut typesetter = Typesetter::without_system_fonts();
        let mut measured = typesetter.measure(face());
        assert!(measured.line_spacing() > 0.0, "line spacing must be positive");
        assert!(measured.ascent() > 0.0, "ascent must be positive");
        assert!(measured.line_height(1.4) >= 1, "line height must be positive");
        assert_eq!(measured.ink_width(""), 0.0);
    }

    #[test]
    fn advance_sum_is_cached_per_char() {
        let mut typesetter = Typesetter::without_system_fonts();
        let mut measured = typesetter.measure(face());
        let first = measured.advance_sum("abcabc");
        let second = measured.advance_sum("abcabc");
        assert_eq!(first, second);
        assert!(measured.advances.len() <= 3, "one entry per distinct char");
    }

    #[test]
    fn registered_fonts_resolve_by_name() {
        let mut typesetter = Typesetter::with_test_fonts();
        let choice = typesetter.resolve_family(
            ["No Such Family", codeshot_dev::FONT_FAMILIES[0]],
            GenericFamily::Monospace,
        );
        assert_eq!(
            choice,
            FamilyChoice::Named(codeshot_dev::FONT_FAMILIES[0].to_owned())
        );
    }

    #[test]
    fn register_fonts_reports_new_families() {
        let mut typesetter = Typesetter::without_system_fonts();
        let registered: usize = codeshot_dev::font_data()
            .unwrap()
            .into_iter()
            .map(|data| typesetter.register_fonts(data, &[]))
            .sum();
        assert!(registered >= 1, "no family registered");
    }

    #[test]
    fn monospace_measurements_agree() {
        let mut typesetter = Typesetter::with_test_fonts();
        let mut measured = typesetter.measure(face());
        let text = "let total = 42;";
        let summed = measured.advance_sum(text);
        let whole = measured.string_width(text);
        let ink = measured.ink_width(text);
        let cell = measured.advance_sum("m");

        assert!(cell > 5.0 && cell < 18.0, "cell advance {cell}");
        assert!((summed - whole).abs() < 0.5, "summed {summed} vs whole {whole}");
        assert!((summed - cell * text.len() as f32).abs() < 0.5, "not monospaced");
        assert!(ink > 0.0 && ink <= whole, "ink {ink} vs advance {whole}");
    }

    #[test]
    fn real_fonts_give_real_vertical_metrics() {
        let mut typesetter = Typesetter::with_test_fonts();
        let vertical = typesetter.measure(face()).vertical();
        assert_ne!(vertical, VerticalMetrics::fallback(18.0));
        assert!(vertical.ascent > 10.0 && vertical.ascent < 18.0, "{vertical:?}");
    }

    #[test]
    fn face_variants_keep_the_family() {
        let bold = face().with_bold(true).with_size(12.0);
        assert!(bold.bold);
        assert_eq!(bold.size, 12.0);
        assert_eq!(bold.family, face().family);
    }
}
