// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Material 3 card chrome.

use peniko::Color;

use super::{BodyPalette, TitleStyle};
use crate::canvas::{Bounds, Canvas};
use crate::color::{is_dark, with_alpha8};
use crate::style::StyleConfig;

pub(super) const CODE_FAMILIES: &[&str] =
    &["Roboto Mono", "JetBrains Mono", "Fira Code", "SF Mono"];

pub(super) const TITLE: TitleStyle = TitleStyle {
    family: "Roboto",
    size: 16.0,
    bold: true,
};

const ELEVATION: f32 = 8.0;
const KEY_SHADOW_ALPHA: u8 = 30;
const AMBIENT_SHADOW_ALPHA: u8 = 15;

const ACTION_SIZE: f32 = 24.0;
const ACTION_MARGIN: f32 = 16.0;
const ACTION_GAP: f32 = 8.0;
const ICON_SIZE: f32 = 12.0;

/// Material 3 color roles for one polarity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Tokens {
    pub(super) surface_variant: Color,
    pub(super) on_surface: Color,
    pub(super) primary: Color,
    pub(super) outline: Color,
}

impl Tokens {
    const DARK: Self = Self {
        surface_variant: Color::from_rgb8(73, 69, 79),
        on_surface: Color::from_rgb8(230, 225, 229),
        primary: Color::from_rgb8(208, 188, 255),
        outline: Color::from_rgb8(147, 143, 153),
    };

    const LIGHT: Self = Self {
        surface_variant: Color::from_rgb8(231, 224, 236),
        on_surface: Color::from_rgb8(28, 27, 31),
        primary: Color::from_rgb8(103, 80, 164),
        outline: Color::from_rgb8(121, 116, 126),
    };

    pub(super) fn for_background(background: Color) -> Self {
        if is_dark(background) {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

pub(super) fn body_palette(config: &StyleConfig) -> BodyPalette {
    let tokens = Tokens::for_background(config.background());
    BodyPalette {
        text: tokens.on_surface,
        line_number: with_alpha8(tokens.on_surface, 150),
        gutter: tokens.surface_variant,
        separator: tokens.outline,
    }
}

/// Key light below the card and ambient light around it.
pub(super) fn draw_shadow(canvas: &mut Canvas, card: Bounds, radius: f32) {
    let key = card.offset(ELEVATION / 2.0, ELEVATION);
    canvas.fill_round_rect(key, radius, with_alpha8(Color::BLACK, KEY_SHADOW_ALPHA));
    let ambient = card.offset(ELEVATION / 4.0, ELEVATION / 4.0);
    canvas.fill_round_rect(ambient, radius, with_alpha8(Color::BLACK, AMBIENT_SHADOW_ALPHA));
}

pub(super) fn draw_body(
    canvas: &mut Canvas,
    card: Bounds,
    radius: f32,
    background: Color,
    tokens: &Tokens,
) {
    canvas.fill_round_rect(card, radius, background);
    canvas.stroke_round_rect(card, radius, 1.0, tokens.outline);
}

pub(super) fn draw_header(
    canvas: &mut Canvas,
    card: Bounds,
    radius: f32,
    height: f32,
    tokens: &Tokens,
) {
    canvas.clip_round_rect(card, radius);
    canvas.fill_rect(
        Bounds::new(card.x, card.y, card.width, height),
        tokens.surface_variant,
    );
    canvas.clear_clip();

    let divider_y = card.y + height - 1.0;
    canvas.stroke_line(
        (card.x, divider_y),
        (card.x + card.width, divider_y),
        1.0,
        tokens.outline,
    );
}

/// Close, minimize and fullscreen icons, laid out from the right edge.
pub(super) fn draw_actions(canvas: &mut Canvas, card: Bounds, header: f32, tokens: &Tokens) {
    let color = tokens.primary;
    let y = card.y + (header / 2.0).floor();
    let half = ICON_SIZE / 2.0;

    let close_x = card.x + card.width - ACTION_MARGIN - ACTION_SIZE;
    canvas.stroke_line((close_x, y - half), (close_x + ICON_SIZE, y + half), 2.0, color);
    canvas.stroke_line((close_x + ICON_SIZE, y - half), (close_x, y + half), 2.0, color);

    let minimize_x = close_x - ACTION_SIZE - ACTION_GAP;
    canvas.stroke_line((minimize_x, y), (minimize_x + ICON_SIZE, y), 2.0, color);

    let fullscreen_x = minimize_x - ACTION_SIZE - ACTION_GAP;
    canvas.stroke_rect(
        Bounds::new(fullscreen_x, y - half, ICON_SIZE, ICON_SIZE),
        1.5,
        color,
    );
}
