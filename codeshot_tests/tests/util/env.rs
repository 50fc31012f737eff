// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use codeshot::parley::GenericFamily;
use codeshot::{HighlightedCode, RenderedImage, Renderer, StyleConfig, Typesetter};
use tiny_skia::Pixmap;

fn output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("_output")
}

fn keep_output() -> bool {
    std::env::var_os("CODESHOT_TEST_OUTPUT").is_some_and(|v| !v.is_empty() && v != "0")
}

/// A rendered image together with its decoded pixels.
pub(crate) struct Rendered {
    pub(crate) image: RenderedImage,
    pub(crate) pixmap: Pixmap,
    test_name: String,
}

impl Rendered {
    /// Straight-alpha RGBA of the device pixel at `(x, y)`.
    pub(crate) fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let pixel = self
            .pixmap
            .pixel(x, y)
            .unwrap_or_else(|| {
                panic!(
                    "{}: pixel ({x}, {y}) outside {}x{}",
                    self.test_name,
                    self.pixmap.width(),
                    self.pixmap.height()
                )
            })
            .demultiply();
        [pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()]
    }

    /// Asserts that the pixel at logical `(x, y)` is opaque and within `tolerance` of `rgb`.
    pub(crate) fn assert_logical_pixel(&self, x: u32, y: u32, rgb: [u8; 3], tolerance: u8) {
        let [r, g, b, a] = self.rgba(x * 2, y * 2);
        assert_eq!(a, 255, "{}: pixel ({x}, {y}) is not opaque", self.test_name);
        for (channel, (actual, expected)) in ["red", "green", "blue"]
            .into_iter()
            .zip([r, g, b].into_iter().zip(rgb))
        {
            assert!(
                actual.abs_diff(expected) <= tolerance,
                "{}: {channel} at ({x}, {y}) is {actual}, expected {expected} +/- {tolerance}",
                self.test_name
            );
        }
    }
}

/// Per-test renderer that only sees the bundled test fonts.
pub(crate) struct TestEnv {
    test_name: String,
    renderer: Renderer,
}

impl TestEnv {
    pub(crate) fn new(test_name: &str) -> Self {
        let mut renderer = Renderer::with_typesetter(Typesetter::without_system_fonts());
        // Every family the chrome asks for falls back to the bundled monospace font.
        let generics = [GenericFamily::Monospace, GenericFamily::SansSerif];
        let fonts = codeshot_dev::font_data()
            .unwrap_or_else(|err| panic!("{test_name}: cannot read test fonts: {err}"));
        for data in fonts {
            renderer.typesetter_mut().register_fonts(data, &generics);
        }
        Self {
            test_name: test_name.to_owned(),
            renderer,
        }
    }

    pub(crate) fn renderer(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    /// Renders `code`, failing the test on any error.
    pub(crate) fn render(&mut self, code: &HighlightedCode, config: &StyleConfig) -> Rendered {
        let image = self
            .renderer
            .render(code, config)
            .unwrap_or_else(|err| panic!("{}: render failed: {err}", self.test_name));
        if keep_output() {
            self.save(&image);
        }
        let pixmap = Pixmap::decode_png(image.bytes())
            .unwrap_or_else(|err| panic!("{}: output is not a PNG: {err}", self.test_name));
        Rendered {
            image,
            pixmap,
            test_name: self.test_name.clone(),
        }
    }

    fn save(&self, image: &RenderedImage) {
        let dir = output_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{}.png", self.test_name)), image.bytes()).unwrap();
    }
}
