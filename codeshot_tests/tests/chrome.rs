// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixels of the window and card frames.

use codeshot::color::rgba8;
use codeshot::{DesignSystem, HighlightedCode, StyleConfig};

use crate::test_name;
use crate::util::samples::HELLO;
use crate::util::{Rendered, TestEnv};

fn render(test_name: &str, config: &StyleConfig) -> Rendered {
    TestEnv::new(test_name).render(&HighlightedCode::plain(HELLO), config)
}

#[test]
fn chrome_elevated_body_and_gutter() {
    let rendered = render(test_name!(), &StyleConfig::default().with_size(1000, 700));

    // Window at (100, 100), header 44 tall, gutter 60 wide.
    rendered.assert_logical_pixel(1000, 744, [30, 30, 30], 1);
    rendered.assert_logical_pixel(130, 154, [27, 27, 27], 1);
}

#[test]
fn chrome_elevated_header_follows_polarity() {
    let dark = render(test_name!(), &StyleConfig::default().with_size(1000, 700));
    dark.assert_logical_pixel(600, 130, [45, 45, 45], 2);

    let light = render(test_name!(), &StyleConfig::light().with_size(1000, 700));
    light.assert_logical_pixel(600, 130, [246, 246, 246], 2);
}

#[test]
fn chrome_elevated_traffic_lights() {
    let rendered = render(test_name!(), &StyleConfig::default().with_size(1000, 700));

    let [r, g, _, a] = rendered.rgba(2 * 127, 2 * 122);
    assert!(r > 200 && g < 140 && a == 255, "close button is ({r}, {g}, {a})");
    let [r, g, _, _] = rendered.rgba(2 * 167, 2 * 122);
    assert!(g > 180 && r < 100, "zoom button is ({r}, {g})");
}

#[test]
fn chrome_material_header_and_body() {
    let config = StyleConfig::default()
        .with_size(1000, 700)
        .with_design_system(DesignSystem::MaterialCard);
    let rendered = render(test_name!(), &config);

    // Card at (80, 80), header 56 tall in the dark surface variant.
    rendered.assert_logical_pixel(380, 90, [73, 69, 79], 1);
    rendered.assert_logical_pixel(600, 500, [30, 30, 30], 1);
}

#[test]
fn chrome_material_shadow_falls_below_the_card() {
    let config = StyleConfig::default()
        .with_size(1000, 700)
        .with_design_system(DesignSystem::MaterialCard);
    let rendered = render(test_name!(), &config);

    // The card ends at y = 80 + 56 + 700; the key shadow is offset 8 down.
    let [shadow, ..] = rendered.rgba(2 * 500, 2 * 840);
    let [backdrop, ..] = rendered.rgba(2 * 40, 2 * 840);
    assert!(shadow < backdrop, "shadow {shadow} is not darker than {backdrop}");
}

#[test]
fn chrome_unknown_design_system_is_elevated() {
    let config = StyleConfig::default()
        .with_size(1000, 700)
        .with_design_system(DesignSystem::from_name("windows95"));
    let rendered = render(test_name!(), &config);

    assert_eq!((rendered.image.width(), rendered.image.height()), (2400, 1888));
    let gutter = rgba8(codeshot::color::darken(config.background(), 0.1));
    rendered.assert_logical_pixel(130, 154, [gutter.r, gutter.g, gutter.b], 1);
}
