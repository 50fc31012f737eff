// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyphs drawn with the bundled test fonts.

use codeshot::{HighlightSpan, HighlightStyle, HighlightedCode, StyleConfig};

use crate::test_name;
use crate::util::{Rendered, TestEnv};

/// Device pixels in the logical rectangle `x0..x1`, `y0..y1` that satisfy `pred`.
fn count(
    rendered: &Rendered,
    (x0, x1, y0, y1): (u32, u32, u32, u32),
    pred: impl Fn([u8; 4]) -> bool,
) -> usize {
    let mut hits = 0;
    for y in 2 * y0..2 * y1 {
        for x in 2 * x0..2 * x1 {
            if pred(rendered.rgba(x, y)) {
                hits += 1;
            }
        }
    }
    hits
}

fn is_red([r, g, b, _]: [u8; 4]) -> bool {
    r > 180 && g < 100 && b < 100
}

fn is_white([r, g, b, _]: [u8; 4]) -> bool {
    r > 180 && g > 180 && b > 180
}

#[test]
fn text_span_colors_reach_the_image() {
    let mut env = TestEnv::new(test_name!());
    let config = StyleConfig::default().with_size(1000, 700);
    let code = "MMMMMMMMMM";
    let red = HighlightedCode::new(
        code,
        vec![HighlightSpan::new(0, code.len(), HighlightStyle::rgb(0xff3030))],
    );
    let colored = env.render(&red, &config);
    let plain = env.render(&HighlightedCode::plain(code), &config);

    // Code starts after the window margin, gutter and padding; the first line sits
    // below the header and top padding.
    let line = (170, 400, 160, 195);
    assert!(count(&colored, line, is_red) > 100, "no red glyph pixels");
    assert_eq!(count(&colored, line, is_white), 0);
    assert_eq!(count(&plain, line, is_red), 0);
    assert!(count(&plain, line, is_white) > 100, "no white glyph pixels");
}

#[test]
fn text_line_numbers_stay_in_the_gutter() {
    let mut env = TestEnv::new(test_name!());
    let config = StyleConfig::default().with_size(1000, 700);
    let rendered = env.render(&HighlightedCode::plain("a\nb\nc"), &config);

    // Line numbers are gray and brighter than the gutter fill.
    let lit = |[r, _, _, _]: [u8; 4]| r > 70;
    assert!(count(&rendered, (100, 160, 160, 240), lit) > 20, "no line number pixels");
    // Nothing left of the right-aligned column.
    assert_eq!(count(&rendered, (100, 125, 160, 240), lit), 0);
}

#[test]
fn text_title_is_centered_in_the_header() {
    let mut env = TestEnv::new(test_name!());
    let config = StyleConfig::default()
        .with_size(1000, 700)
        .with_title("main.rs");
    let rendered = env.render(&HighlightedCode::plain("x"), &config);

    // Window spans logical x 100..1100, header y 100..144. Skip the traffic lights.
    let columns: Vec<u32> = (2 * 200..2 * 1100)
        .filter(|&x| (2 * 102..2 * 142).any(|y| rendered.rgba(x, y)[0] > 110))
        .collect();
    let (Some(&first), Some(&last)) = (columns.first(), columns.last()) else {
        panic!("no title pixels");
    };
    assert!(last - first > 40, "title spans only {first}..{last}");
    let center = (first + last) / 2;
    assert!(center.abs_diff(2 * 600) <= 8, "title centered at {center}, not 1200");
}
