// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Desktop window chrome.

use peniko::Color;

use super::{BodyPalette, TitleStyle};
use crate::canvas::{Bounds, Canvas};
use crate::color::{darken, is_dark, with_alpha8};
use crate::style::StyleConfig;

pub(super) const CODE_FAMILIES: &[&str] =
    &["JetBrains Mono", "Fira Code", "SF Mono", "Menlo", "Monaco"];

pub(super) const TITLE: TitleStyle = TitleStyle {
    family: "SF Pro Display",
    size: 13.0,
    bold: false,
};

const HEADER_DARK: Color = Color::from_rgba8(46, 46, 46, 240);
const HEADER_LIGHT: Color = Color::from_rgba8(246, 246, 246, 240);
const DIVIDER_DARK: Color = Color::from_rgba8(80, 80, 80, 120);
const DIVIDER_LIGHT: Color = Color::from_rgba8(200, 200, 200, 120);

const LIGHT_RED: Color = Color::from_rgb8(255, 95, 87);
const LIGHT_YELLOW: Color = Color::from_rgb8(255, 189, 46);
const LIGHT_GREEN: Color = Color::from_rgb8(40, 205, 65);
const LIGHT_SIZE: f32 = 14.0;
const LIGHT_MARGIN: f32 = 20.0;
const LIGHT_SPACING: f32 = 20.0;

/// `(dx, dy, dw, dh, alpha, extra radius)`, drawn outermost first.
const SHADOW_LAYERS: [(f32, f32, f32, f32, u8, f32); 4] = [
    (16.0, 16.0, -32.0, -32.0, 25, 2.0),
    (12.0, 12.0, -24.0, -24.0, 40, 1.0),
    (6.0, 8.0, -12.0, -16.0, 60, 0.0),
    (2.0, 4.0, -4.0, -8.0, 80, 0.0),
];

const SCAN_LINE_STEP: usize = 4;

fn white(alpha: u8) -> Color {
    with_alpha8(Color::WHITE, alpha)
}

fn black(alpha: u8) -> Color {
    with_alpha8(Color::BLACK, alpha)
}

pub(super) fn body_palette(config: &StyleConfig) -> BodyPalette {
    let text = config.text();
    BodyPalette {
        text,
        line_number: with_alpha8(text, 120),
        gutter: darken(config.background(), 0.1),
        separator: white(30),
    }
}

pub(super) fn title_color(background: Color) -> Color {
    if is_dark(background) {
        white(180)
    } else {
        black(140)
    }
}

/// Faint horizontal lines across the whole canvas.
pub(super) fn draw_scan_lines(canvas: &mut Canvas, width: f32, height: f32) {
    let rows = height.max(0.0) as usize;
    for y in (0..rows).step_by(SCAN_LINE_STEP) {
        let y = y as f32;
        canvas.stroke_line((0.0, y), (width, y), 1.0, white(3));
    }
}

pub(super) fn draw_shadow(canvas: &mut Canvas, window: Bounds, radius: f32) {
    for (dx, dy, dw, dh, alpha, dr) in SHADOW_LAYERS {
        let layer = window.offset(dx, dy).resized(dw, dh);
        canvas.fill_round_rect(layer, radius + dr, black(alpha));
    }
}

pub(super) fn draw_body(canvas: &mut Canvas, window: Bounds, radius: f32, background: Color) {
    canvas.fill_round_rect(window, radius, background);
    canvas.stroke_round_rect(window, radius, 1.0, white(15));
}

pub(super) fn draw_header(
    canvas: &mut Canvas,
    window: Bounds,
    radius: f32,
    height: f32,
    background: Color,
) {
    let dark = is_dark(background);
    let band = Bounds::new(window.x, window.y, window.width, height);

    canvas.clip_round_rect(window, radius);
    canvas.fill_rect(band, if dark { HEADER_DARK } else { HEADER_LIGHT });
    canvas.fill_vertical_gradient(
        band,
        0.0,
        window.y,
        window.y + 10.0,
        &[(0.0, white(30)), (1.0, white(0))],
    );
    canvas.clear_clip();

    let divider_y = window.y + height - 1.0;
    canvas.stroke_line(
        (window.x, divider_y),
        (window.x + window.width, divider_y),
        1.0,
        if dark { DIVIDER_DARK } else { DIVIDER_LIGHT },
    );
}

pub(super) fn draw_traffic_lights(canvas: &mut Canvas, header: f32) {
    let top = (header / 2.0).floor() - LIGHT_SIZE / 2.0;
    for (i, color) in [LIGHT_RED, LIGHT_YELLOW, LIGHT_GREEN].into_iter().enumerate() {
        let x = LIGHT_MARGIN + LIGHT_SPACING * i as f32;
        let button = Bounds::new(x, top, LIGHT_SIZE, LIGHT_SIZE);
        canvas.fill_oval(button.offset(1.0, 1.0), black(30));
        canvas.fill_oval(button, color);
        canvas.fill_oval(
            Bounds::new(x + 2.0, top + 2.0, LIGHT_SIZE - 6.0, LIGHT_SIZE - 6.0),
            white(50),
        );
        canvas.stroke_oval(button, 0.5, black(40));
    }
}
