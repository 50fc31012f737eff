// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scaled drawing surface over a Tiny-Skia pixmap.
//!
//! All coordinates are logical pixels relative to the current origin. The surface maps them to
//! device pixels with a fixed scale factor.

use parley::{Layout, PositionedLayoutItem};
use peniko::Color;
use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::{GlyphId, MetadataProvider, OutlineGlyph};
use tiny_skia::{
    FillRule, GradientStop, IntSize, LinearGradient, Mask, Paint, Path, PathBuilder, Pixmap,
    Point, Rect, SpreadMode, Stroke, Transform,
};

use crate::color::to_tiny_skia;
use crate::render::RenderError;
use crate::typeset::{ColorBrush, RunFont, first_baseline};

/// Control point distance for approximating a quarter circle with a cubic.
const KAPPA: f32 = 0.552_284_8;

/// Logical rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl Bounds {
    pub(crate) fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Grows or shrinks the size, keeping the origin.
    pub(crate) fn resized(self, dw: f32, dh: f32) -> Self {
        Self::new(self.x, self.y, self.width + dw, self.height + dh)
    }

    pub(crate) fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    fn rect(self) -> Option<Rect> {
        Rect::from_xywh(self.x, self.y, self.width, self.height)
    }
}

pub(crate) struct Canvas {
    pixmap: Pixmap,
    scale: f32,
    origin: (f32, f32),
    clip: Option<Mask>,
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("scale", &self.scale)
            .field("origin", &self.origin)
            .field("clipped", &self.clip.is_some())
            .finish()
    }
}

impl Canvas {
    /// Allocates a transparent surface of `logical_width` by `logical_height` at `scale`.
    ///
    /// Pixel storage is reserved fallibly so oversized requests surface as an error.
    pub(crate) fn new(
        logical_width: u32,
        logical_height: u32,
        scale: u32,
    ) -> Result<Self, RenderError> {
        let width = logical_width.saturating_mul(scale);
        let height = logical_height.saturating_mul(scale);
        let alloc_error = || RenderError::CanvasAllocation { width, height };

        let size = IntSize::from_wh(width, height).ok_or_else(alloc_error)?;
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(alloc_error)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| alloc_error())?;
        data.resize(len, 0);
        let pixmap = Pixmap::from_vec(data, size).ok_or_else(alloc_error)?;

        Ok(Self {
            pixmap,
            scale: scale as f32,
            origin: (0.0, 0.0),
            clip: None,
        })
    }

    pub(crate) fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub(crate) fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Moves the origin by a logical offset.
    pub(crate) fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale).pre_translate(self.origin.0, self.origin.1)
    }

    fn fill(&mut self, path: &Path, paint: &Paint<'_>) {
        let transform = self.transform();
        self.pixmap
            .fill_path(path, paint, FillRule::Winding, transform, self.clip.as_ref());
    }

    fn stroke(&mut self, path: &Path, width: f32, color: Color) {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        let transform = self.transform();
        self.pixmap
            .stroke_path(path, &solid(color), &stroke, transform, self.clip.as_ref());
    }

    pub(crate) fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        if let Some(rect) = bounds.rect() {
            self.fill(&PathBuilder::from_rect(rect), &solid(color));
        }
    }

    pub(crate) fn fill_round_rect(&mut self, bounds: Bounds, radius: f32, color: Color) {
        if let Some(path) = round_rect(bounds, radius) {
            self.fill(&path, &solid(color));
        }
    }

    pub(crate) fn stroke_round_rect(
        &mut self,
        bounds: Bounds,
        radius: f32,
        width: f32,
        color: Color,
    ) {
        if let Some(path) = round_rect(bounds, radius) {
            self.stroke(&path, width, color);
        }
    }

    pub(crate) fn stroke_rect(&mut self, bounds: Bounds, width: f32, color: Color) {
        if let Some(rect) = bounds.rect() {
            self.stroke(&PathBuilder::from_rect(rect), width, color);
        }
    }

    pub(crate) fn fill_oval(&mut self, bounds: Bounds, color: Color) {
        if let Some(path) = bounds.rect().and_then(PathBuilder::from_oval) {
            self.fill(&path, &solid(color));
        }
    }

    pub(crate) fn stroke_oval(&mut self, bounds: Bounds, width: f32, color: Color) {
        if let Some(path) = bounds.rect().and_then(PathBuilder::from_oval) {
            self.stroke(&path, width, color);
        }
    }

    pub(crate) fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.0, from.1);
        pb.line_to(to.0, to.1);
        if let Some(path) = pb.finish() {
            self.stroke(&path, width, color);
        }
    }

    /// Fills `bounds`, optionally rounded, with a gradient running from `y0` to `y1`.
    pub(crate) fn fill_vertical_gradient(
        &mut self,
        bounds: Bounds,
        radius: f32,
        y0: f32,
        y1: f32,
        stops: &[(f32, Color)],
    ) {
        let stops = stops
            .iter()
            .map(|(offset, color)| GradientStop::new(*offset, to_tiny_skia(*color)))
            .collect();
        let Some(shader) = LinearGradient::new(
            Point::from_xy(0.0, y0),
            Point::from_xy(0.0, y1),
            stops,
            SpreadMode::Pad,
            Transform::identity(),
        ) else {
            return;
        };
        let Some(path) = round_rect(bounds, radius) else {
            return;
        };
        let paint = Paint {
            shader,
            ..Paint::default()
        };
        self.fill(&path, &paint);
    }

    /// Restricts drawing to a rounded rectangle until [`clear_clip`](Self::clear_clip).
    ///
    /// Replaces any clip already in place.
    pub(crate) fn clip_round_rect(&mut self, bounds: Bounds, radius: f32) {
        self.clip = None;
        let Some(path) = round_rect(bounds, radius) else {
            return;
        };
        let Some(mut mask) = Mask::new(self.pixmap.width(), self.pixmap.height()) else {
            return;
        };
        mask.fill_path(&path, FillRule::Winding, true, self.transform());
        self.clip = Some(mask);
    }

    pub(crate) fn clear_clip(&mut self) {
        self.clip = None;
    }

    /// Draws every glyph of `layout`, placing the first baseline at `(x, baseline)`.
    pub(crate) fn draw_layout(&mut self, layout: &Layout<ColorBrush>, x: f32, baseline: f32) {
        let y = baseline - first_baseline(layout);
        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let color = glyph_run.style().brush.color;
                let Some(font) = RunFont::new(&glyph_run) else {
                    continue;
                };
                let outlines = font.font_ref.outline_glyphs();
                let mut pen = GlyphPen::new();
                for glyph in glyph_run.positioned_glyphs() {
                    let Some(outline) = outlines.get(GlyphId::from(glyph.id)) else {
                        continue;
                    };
                    pen.set_origin(x + glyph.x, y + glyph.y);
                    pen.draw_glyph(&outline, &font);
                }
                if let Some(path) = pen.finish() {
                    self.fill(&path, &solid(color));
                }
            }
        }
    }

    pub(crate) fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let bytes = self.pixmap.encode_png().map_err(RenderError::Encoding)?;
        if bytes.is_empty() {
            return Err(RenderError::EmptyOutput);
        }
        Ok(bytes)
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Option<tiny_skia::ColorU8> {
        self.pixmap.pixel(x, y).map(|p| p.demultiply())
    }
}

fn solid(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_tiny_skia(color));
    paint
}

/// A rectangle with circular corners of `radius`, clamped to half the shorter side.
fn round_rect(bounds: Bounds, radius: f32) -> Option<Path> {
    let Bounds {
        x,
        y,
        width: w,
        height: h,
    } = bounds;
    if !(w > 0.0 && h > 0.0) {
        return None;
    }
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    if r == 0.0 {
        return Some(PathBuilder::from_rect(bounds.rect()?));
    }
    let c = r * KAPPA;
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.cubic_to(x + w - r + c, y, x + w, y + r - c, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.cubic_to(x + w, y + h - r + c, x + w - r + c, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.cubic_to(x + r - c, y + h, x, y + h - r + c, x, y + h - r);
    pb.line_to(x, y + r);
    pb.cubic_to(x, y + r - c, x + r - c, y, x + r, y);
    pb.close();
    pb.finish()
}

/// Collects glyph outlines of one run into a single path.
///
/// Font units point up, so y is flipped around the glyph origin.
struct GlyphPen {
    x: f32,
    y: f32,
    open_path: PathBuilder,
}

impl GlyphPen {
    fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            open_path: PathBuilder::new(),
        }
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn draw_glyph(&mut self, glyph: &OutlineGlyph<'_>, font: &RunFont<'_>) {
        let settings = DrawSettings::unhinted(Size::new(font.size), LocationRef::new(&font.coords));
        if let Err(err) = glyph.draw(settings, self) {
            log::debug!("failed to draw glyph outline: {err}");
        }
    }

    fn finish(self) -> Option<Path> {
        self.open_path.finish()
    }
}

impl OutlinePen for GlyphPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.open_path.move_to(self.x + x, self.y - y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.open_path.line_to(self.x + x, self.y - y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.open_path
            .quad_to(self.x + cx0, self.y - cy0, self.x + x, self.y - y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.open_path.cubic_to(
            self.x + cx0,
            self.y - cy0,
            self.x + cx1,
            self.y - cy1,
            self.x + x,
            self.y - y,
        );
    }

    fn close(&mut self) {
        self.open_path.close();
    }
}
