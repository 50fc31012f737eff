// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas size for fixed and auto-sized output.

use codeshot::image::png_dimensions;
use codeshot::render::SCALE;
use codeshot::{ChromeMetrics, DesignSystem, HighlightedCode, StyleConfig};

use crate::test_name;
use crate::util::TestEnv;
use crate::util::samples::{HELLO, RUST_MAIN};

/// Smallest canvas an elevated window can produce.
fn elevated_floor() -> (u32, u32) {
    let m = ChromeMetrics::ELEVATED;
    let width = m.body.min_width_tiers.base + 2 * m.outer_margin;
    let height = m.body.min_height_tiers.base + m.header_height + 2 * m.outer_margin;
    (width * SCALE, height * SCALE)
}

#[test]
fn sizing_fixed_elevated_window() {
    let mut env = TestEnv::new(test_name!());
    let config = StyleConfig::default().with_size(1000, 700);
    let rendered = env.render(&HighlightedCode::plain(HELLO), &config);

    assert_eq!((rendered.image.width(), rendered.image.height()), (2400, 1888));
    assert_eq!(png_dimensions(rendered.image.bytes()), Some((2400, 1888)));
    assert_eq!((rendered.pixmap.width(), rendered.pixmap.height()), (2400, 1888));
}

#[test]
fn sizing_fixed_material_card() {
    let mut env = TestEnv::new(test_name!());
    let config = StyleConfig::default()
        .with_size(1000, 700)
        .with_design_system(DesignSystem::MaterialCard);
    let rendered = env.render(&HighlightedCode::plain(HELLO), &config);

    // 80 margin on each side, 56 header.
    assert_eq!((rendered.image.width(), rendered.image.height()), (2320, 1832));
}

#[test]
fn sizing_auto_single_line() {
    let code = HighlightedCode::plain(HELLO);
    let config = StyleConfig::default();
    let first = TestEnv::new(test_name!()).render(&code, &config);
    let second = TestEnv::new(test_name!()).render(&code, &config);

    let (min_width, min_height) = elevated_floor();
    assert_eq!(min_width, 1600);
    assert!(first.image.width() >= min_width, "width {}", first.image.width());
    assert!(first.image.height() >= min_height, "height {}", first.image.height());
    assert_eq!(first.image, second.image, "output is not reproducible");
}

#[test]
fn sizing_empty_code_is_a_valid_image() {
    let mut env = TestEnv::new(test_name!());
    let rendered = env.render(&HighlightedCode::plain(""), &StyleConfig::default());

    let (min_width, min_height) = elevated_floor();
    assert!(rendered.image.width() >= min_width);
    assert!(rendered.image.height() >= min_height);
}

#[test]
fn sizing_one_unset_axis_estimates_both() {
    let mut env = TestEnv::new(test_name!());
    let code = HighlightedCode::plain(RUST_MAIN);
    let estimated = env.renderer().content_size(&code, &StyleConfig::default());
    let config = StyleConfig::default().with_size(1200, 0);
    let rendered = env.render(&code, &config);

    assert_ne!(estimated.width, 1200);
    assert_eq!(rendered.image.width(), (estimated.width + 200) * SCALE);
    assert_eq!(rendered.image.height(), (estimated.height + 44 + 200) * SCALE);
}

#[test]
fn sizing_long_lines_widen_the_window() {
    let mut env = TestEnv::new(test_name!());
    let config = StyleConfig::default();
    let short = env
        .renderer()
        .content_size(&HighlightedCode::plain("M".repeat(60)), &config);
    let long_code = HighlightedCode::plain("M".repeat(120));
    let long = env.renderer().content_size(&long_code, &config);

    // Sixty more glyphs of a real font, plus the breathing room they add.
    assert!(long.width > short.width + 60 * 5, "{short:?} -> {long:?}");
    assert!(long.width > 1200, "{long:?}");
    let rendered = env.render(&long_code, &config);
    assert_eq!(rendered.image.width(), (long.width + 200) * SCALE);
}

#[test]
fn sizing_more_lines_never_shrink() {
    let mut env = TestEnv::new(test_name!());
    let config = StyleConfig::default();
    let mut previous = env
        .renderer()
        .content_size(&HighlightedCode::plain(""), &config);
    let mut code = String::new();
    for line in RUST_MAIN.lines().cycle().take(40) {
        if !code.is_empty() {
            code.push('\n');
        }
        code.push_str(line);
        let size = env
            .renderer()
            .content_size(&HighlightedCode::plain(code.as_str()), &config);
        assert!(size.width >= previous.width, "width shrank at {code:?}");
        assert!(size.height >= previous.height, "height shrank at {code:?}");
        previous = size;
    }
}
