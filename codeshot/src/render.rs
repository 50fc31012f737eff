// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compositing a highlighted snippet into a PNG.

use parley::GenericFamily;
use thiserror::Error;

use crate::canvas::Canvas;
use crate::chrome::{Chrome, Frame};
use crate::estimate::{Dimensions, FontMetrics, estimate_dimensions};
use crate::highlight::{HighlightedCode, SpanError};
use crate::image::RenderedImage;
use crate::style::StyleConfig;
use crate::text::TextCompositor;
use crate::typeset::{Face, Typesetter};

/// Device pixels per logical pixel.
pub const SCALE: u32 = 2;

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// A highlight span does not fit the code.
    #[error("invalid highlight span")]
    InvalidSpan(#[from] SpanError),
    /// Pixel storage for the canvas could not be reserved.
    #[error("cannot allocate a {width}x{height} pixel canvas")]
    CanvasAllocation {
        /// Requested width in device pixels.
        width: u32,
        /// Requested height in device pixels.
        height: u32,
    },
    /// The PNG encoder failed.
    #[error("PNG encoding failed")]
    Encoding(#[source] png::EncodingError),
    /// The PNG encoder returned no bytes.
    #[error("PNG encoder produced no output")]
    EmptyOutput,
}

/// Renders snippets, reusing font and shaping caches between calls.
///
/// A `Renderer` is not shared between threads; keep one per worker.
#[derive(Debug, Default)]
pub struct Renderer {
    typesetter: Typesetter,
}

impl Renderer {
    /// A renderer that can use the fonts installed on the system.
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer over a prepared [`Typesetter`].
    pub fn with_typesetter(typesetter: Typesetter) -> Self {
        Self { typesetter }
    }

    /// The typesetter, for registering fonts.
    pub fn typesetter_mut(&mut self) -> &mut Typesetter {
        &mut self.typesetter
    }

    /// The code face `config` resolves to under `chrome`.
    fn code_face(&mut self, chrome: Chrome, config: &StyleConfig) -> Face {
        let family = self
            .typesetter
            .resolve_family(chrome.code_families(&config.font_family), GenericFamily::Monospace);
        Face {
            family,
            size: config.font_size,
            bold: false,
        }
    }

    /// Content size for `code`, excluding header and margins.
    ///
    /// Explicit dimensions in `config` are used only when both are set. If either is unset,
    /// both come from the estimate.
    pub fn content_size(&mut self, code: &HighlightedCode, config: &StyleConfig) -> Dimensions {
        let chrome = Chrome::select(config);
        let face = self.code_face(chrome, config);
        self.content_size_with(code, config, chrome, face)
    }

    fn content_size_with(
        &mut self,
        code: &HighlightedCode,
        config: &StyleConfig,
        chrome: Chrome,
        face: Face,
    ) -> Dimensions {
        if let (Some(width), Some(height)) = (config.fixed_width(), config.fixed_height()) {
            return Dimensions { width, height };
        }
        let mut measured = self.typesetter.measure(face);
        estimate_dimensions(
            code.lines(),
            &mut measured,
            config.line_height,
            &chrome.metrics().body,
        )
    }

    /// Renders `code` as a PNG.
    pub fn render(
        &mut self,
        code: &HighlightedCode,
        config: &StyleConfig,
    ) -> Result<RenderedImage, RenderError> {
        let lines = code.project()?;
        let chrome = Chrome::select(config);
        let metrics = chrome.metrics();
        let face = self.code_face(chrome, config);

        let (line_height, ascent) = {
            let mut measured = self.typesetter.measure(face.clone());
            (measured.line_height(config.line_height), measured.ascent())
        };
        let content = self.content_size_with(code, config, chrome, face.clone());

        let frame_height = content.height.saturating_add(metrics.header_height);
        let margins = 2 * metrics.outer_margin;
        let canvas_width = content.width.saturating_add(margins);
        let canvas_height = frame_height.saturating_add(margins);
        log::debug!(
            "rendering {} lines into a {canvas_width}x{canvas_height} canvas at {SCALE}x",
            code.line_count()
        );
        let mut canvas = Canvas::new(canvas_width, canvas_height, SCALE)?;

        chrome.draw_backdrop(
            &mut canvas,
            config.background_theme,
            canvas_width as f32,
            canvas_height as f32,
        );
        let margin = metrics.outer_margin as f32;
        canvas.translate(margin, margin);
        let frame = Frame {
            width: content.width as f32,
            height: frame_height as f32,
            background: config.background(),
            title: config.visible_title(),
        };
        chrome.draw_frame(&mut canvas, &mut self.typesetter, &frame);

        TextCompositor {
            typesetter: &mut self.typesetter,
            face,
            line_height: line_height as f32,
            ascent,
            metrics,
            palette: chrome.body_palette(config),
        }
        .draw(&mut canvas, &lines);

        let bytes = canvas.encode_png()?;
        Ok(RenderedImage::new(bytes, canvas.width(), canvas.height()))
    }
}

/// Renders `code` with a throwaway [`Renderer`].
///
/// Prefer keeping a [`Renderer`] around when rendering more than once.
pub fn render_png(
    code: &HighlightedCode,
    config: &StyleConfig,
) -> Result<RenderedImage, RenderError> {
    Renderer::new().render(code, config)
}
