// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a highlighted Kotlin snippet with the fonts installed on this machine.
//!
//! Usage: `render_snippet [theme] [design system]`, e.g. `render_snippet nord material`.
//! Set `RUST_LOG=debug` to see font and theme fallbacks.

use codeshot::{
    BackgroundTheme, DesignSystem, HighlightSpan, HighlightStyle, HighlightedCode, Renderer,
    StyleConfig,
};

const SNIPPET: &str = "fun main() {\n    val greeting = \"Hello\"\n    // Say hi\n    println(greeting)\n}";

fn spans() -> Vec<HighlightSpan> {
    let keyword = HighlightStyle::rgb(0xcc7832);
    let string = HighlightStyle::rgb(0x6a8759);
    let comment = HighlightStyle::rgb(0x808080);
    let function = HighlightStyle::rgb(0xffc66d);
    let find = |needle: &str| SNIPPET.find(needle).unwrap();
    let span = |needle: &str, style| {
        let start = find(needle);
        HighlightSpan::new(start, start + needle.len(), style)
    };
    vec![
        span("fun", keyword),
        span("main", function),
        span("main", HighlightStyle::Bold),
        span("val", keyword),
        span("\"Hello\"", string),
        span("// Say hi", comment),
    ]
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let theme = BackgroundTheme::from_name(&args.next().unwrap_or_default());
    let design_system = DesignSystem::from_name(&args.next().unwrap_or_default());

    let code = HighlightedCode::new(SNIPPET, spans());
    let config = StyleConfig::default()
        .with_title("Main.kt")
        .with_background_theme(theme)
        .with_design_system(design_system);

    let mut renderer = Renderer::new();
    let image = match renderer.render(&code, &config) {
        Ok(image) => image,
        Err(err) => {
            log::error!("rendering failed: {err}");
            std::process::exit(1);
        }
    };

    // Write image to PNG file in demos/_output dir
    let output_path = {
        let mut path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.pop();
        path.push("_output");
        let _ = std::fs::create_dir(path.clone());
        path.push(format!(
            "render_snippet_{}_{}.png",
            theme.name(),
            design_system.name()
        ));
        path
    };
    let (width, height) = (image.width(), image.height());
    std::fs::write(&output_path, image.into_bytes()).unwrap();
    log::info!("wrote {width}x{height} image to {}", output_path.display());
}
