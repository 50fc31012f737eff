// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlight spans as seen through the renderer.

use codeshot::{
    HighlightSpan, HighlightStyle, HighlightedCode, RenderError, Renderer, SpanError,
    StyleConfig, Typesetter,
};

use crate::test_name;
use crate::util::TestEnv;
use crate::util::samples::HELLO;

#[test]
fn highlight_straddling_span_is_rejected() {
    let code = HighlightedCode::new(
        "let x = 1;",
        vec![HighlightSpan::new(4, 40, HighlightStyle::Bold)],
    );
    let mut renderer = Renderer::with_typesetter(Typesetter::without_system_fonts());
    let err = renderer
        .render(&code, &StyleConfig::default())
        .unwrap_err();

    assert!(
        matches!(
            err,
            RenderError::InvalidSpan(SpanError::OutOfBounds { start: 4, end: 40, len: 10 })
        ),
        "unexpected error {err:?}"
    );
}

#[test]
fn highlight_span_past_the_end_is_ignored() {
    let mut env = TestEnv::new(test_name!());
    let code = HighlightedCode::new(
        HELLO,
        vec![HighlightSpan::new(HELLO.len(), HELLO.len() + 3, HighlightStyle::Bold)],
    );
    let rendered = env.render(&code, &StyleConfig::default());
    assert!(rendered.image.width() > 0);
}

#[test]
fn highlight_spans_do_not_change_the_size() {
    let mut env = TestEnv::new(test_name!());
    let config = StyleConfig::default();
    let plain = env.render(&HighlightedCode::plain(HELLO), &config);
    let styled = env.render(
        &HighlightedCode::new(
            HELLO,
            vec![
                HighlightSpan::new(0, 3, HighlightStyle::rgb(0xcc7832)),
                HighlightSpan::new(1, 9, HighlightStyle::Bold),
                HighlightSpan::new(14, 27, HighlightStyle::rgb(0x6a8759)),
            ],
        ),
        &config,
    );

    assert_eq!(
        (plain.image.width(), plain.image.height()),
        (styled.image.width(), styled.image.height())
    );
}
