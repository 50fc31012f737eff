// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame drawn around the code: backdrop, shadow, window or card body and header.
//!
//! Each [`DesignSystem`] has one [`Chrome`] variant. [`Chrome::select`] is the only place that
//! maps configuration to a variant; everything else matches on the closed enum.

mod elevated;
mod material;

use parley::GenericFamily;
use peniko::Color;

use crate::canvas::{Bounds, Canvas};
use crate::estimate::{BodyMetrics, TierTable};
use crate::style::{DesignSystem, StyleConfig};
use crate::theme::BackgroundTheme;
use crate::typeset::{ColorBrush, Face, Typesetter};

/// Fixed geometry of one design system, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeMetrics {
    /// Radius of the window or card corners.
    pub corner_radius: f32,
    /// Height of the header band.
    pub header_height: u32,
    /// Space between the frame and the canvas edge.
    pub outer_margin: u32,
    /// Gap between the right edge of a line number and the gutter separator.
    pub line_number_inset: f32,
    /// Sizing rules for the code body.
    pub body: BodyMetrics,
}

impl ChromeMetrics {
    /// Desktop window geometry.
    pub const ELEVATED: Self = Self {
        corner_radius: 7.0,
        header_height: 44,
        outer_margin: 100,
        line_number_inset: 10.0,
        body: BodyMetrics {
            gutter_width: 60,
            content_padding: 20,
            top_padding: 20,
            bottom_padding: 15,
            padding_tiers: TierTable {
                steps: &[(50, 0.35), (30, 0.30), (20, 0.25)],
                base: 0.20,
            },
            min_width_tiers: TierTable {
                steps: &[(500, 1200), (350, 1000), (250, 850), (150, 700)],
                base: 600,
            },
            min_height_tiers: TierTable {
                steps: &[(29, 210), (14, 190), (4, 170)],
                base: 150,
            },
        },
    };

    /// Material card geometry.
    pub const MATERIAL: Self = Self {
        corner_radius: 6.0,
        header_height: 56,
        outer_margin: 80,
        line_number_inset: 12.0,
        body: BodyMetrics {
            gutter_width: 64,
            content_padding: 16,
            top_padding: 16,
            bottom_padding: 16,
            padding_tiers: TierTable {
                steps: &[(50, 0.30), (30, 0.25), (20, 0.20)],
                base: 0.15,
            },
            min_width_tiers: TierTable {
                steps: &[(500, 1200), (350, 1000), (250, 856), (150, 704)],
                base: 600,
            },
            min_height_tiers: TierTable {
                steps: &[(29, 256), (14, 224), (4, 192)],
                base: 160,
            },
        },
    };
}

/// Colors of the code body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct BodyPalette {
    pub(crate) text: Color,
    pub(crate) line_number: Color,
    pub(crate) gutter: Color,
    pub(crate) separator: Color,
}

/// Font preferences for header titles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TitleStyle {
    pub(crate) family: &'static str,
    pub(crate) size: f32,
    pub(crate) bold: bool,
}

/// What the frame needs to know about the snippet being drawn.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Frame<'a> {
    /// Content width.
    pub(crate) width: f32,
    /// Content height plus header.
    pub(crate) height: f32,
    pub(crate) background: Color,
    pub(crate) title: Option<&'a str>,
}

impl Frame<'_> {
    fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width, self.height)
    }
}

/// The frame style of a rendered snippet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chrome {
    /// Desktop window with traffic lights and a layered shadow.
    ElevatedWindow,
    /// Material 3 card with toolbar actions.
    MaterialCard,
}

impl Chrome {
    /// The chrome for `config`.
    pub fn select(config: &StyleConfig) -> Self {
        match config.design_system {
            DesignSystem::ElevatedWindow => Self::ElevatedWindow,
            DesignSystem::MaterialCard => Self::MaterialCard,
        }
    }

    /// Geometry of this chrome.
    pub fn metrics(self) -> &'static ChromeMetrics {
        match self {
            Self::ElevatedWindow => &ChromeMetrics::ELEVATED,
            Self::MaterialCard => &ChromeMetrics::MATERIAL,
        }
    }

    /// Code font candidates, most preferred first. Generic monospace follows them all.
    pub fn code_families<'a>(self, configured: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let fallbacks: &'a [&'a str] = match self {
            Self::ElevatedWindow => elevated::CODE_FAMILIES,
            Self::MaterialCard => material::CODE_FAMILIES,
        };
        core::iter::once(configured).chain(fallbacks.iter().copied())
    }

    pub(crate) fn title_style(self) -> TitleStyle {
        match self {
            Self::ElevatedWindow => elevated::TITLE,
            Self::MaterialCard => material::TITLE,
        }
    }

    pub(crate) fn body_palette(self, config: &StyleConfig) -> BodyPalette {
        match self {
            Self::ElevatedWindow => elevated::body_palette(config),
            Self::MaterialCard => material::body_palette(config),
        }
    }

    /// Fills the whole canvas with the theme gradient. Drawn before the origin moves.
    pub(crate) fn draw_backdrop(
        self,
        canvas: &mut Canvas,
        theme: BackgroundTheme,
        width: f32,
        height: f32,
    ) {
        let bounds = Bounds::new(0.0, 0.0, width, height);
        canvas.fill_vertical_gradient(bounds, 0.0, 0.0, height, &theme.gradient_stops());
        if self == Self::ElevatedWindow {
            elevated::draw_scan_lines(canvas, width, height);
        }
    }

    /// Draws shadow, body, header, header actions and title, with the origin at the frame's
    /// top left corner.
    pub(crate) fn draw_frame(
        self,
        canvas: &mut Canvas,
        typesetter: &mut Typesetter,
        frame: &Frame<'_>,
    ) {
        let metrics = self.metrics();
        let bounds = frame.bounds();
        let header = metrics.header_height as f32;
        match self {
            Self::ElevatedWindow => {
                elevated::draw_shadow(canvas, bounds, metrics.corner_radius);
                elevated::draw_body(canvas, bounds, metrics.corner_radius, frame.background);
                elevated::draw_header(canvas, bounds, metrics.corner_radius, header, frame.background);
                elevated::draw_traffic_lights(canvas, header);
            }
            Self::MaterialCard => {
                let tokens = material::Tokens::for_background(frame.background);
                material::draw_shadow(canvas, bounds, metrics.corner_radius);
                material::draw_body(canvas, bounds, metrics.corner_radius, frame.background, &tokens);
                material::draw_header(canvas, bounds, metrics.corner_radius, header, &tokens);
                material::draw_actions(canvas, bounds, header, &tokens);
            }
        }
        if let Some(title) = frame.title {
            let color = match self {
                Self::ElevatedWindow => elevated::title_color(frame.background),
                Self::MaterialCard => material::Tokens::for_background(frame.background).on_surface,
            };
            self.draw_title(canvas, typesetter, frame.width, header, title, color);
        }
    }

    /// Draws `title` centered in the header band.
    fn draw_title(
        self,
        canvas: &mut Canvas,
        typesetter: &mut Typesetter,
        width: f32,
        header: f32,
        title: &str,
        color: Color,
    ) {
        let style = self.title_style();
        let family = typesetter.resolve_family([style.family], GenericFamily::SansSerif);
        let face = Face {
            family,
            size: style.size,
            bold: style.bold,
        };
        let ascent = typesetter.measure(face.clone()).vertical().ascent;
        let layout = typesetter.layout(title, &face, ColorBrush::new(color));
        let x = ((width - layout.full_width()) / 2.0).floor();
        let baseline = (header / 2.0 + ascent / 2.0 - 1.0).floor();
        canvas.draw_layout(&layout, x, baseline);
    }
}
