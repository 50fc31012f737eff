// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Codeshot renders syntax-highlighted code snippets into framed PNG images.
//!
//! The input is a [`HighlightedCode`]: plain source text plus byte-range [`HighlightSpan`]s
//! produced by an external highlighter. A [`Renderer`] lays the code out with
//! [Parley](parley), draws a desktop window or a Material card around it on a gradient
//! backdrop, and encodes the result at twice the logical size.
//!
//! ```no_run
//! use codeshot::{HighlightSpan, HighlightStyle, HighlightedCode, Renderer, StyleConfig};
//!
//! let code = HighlightedCode::new(
//!     "fn main() {}",
//!     vec![HighlightSpan::new(0, 2, HighlightStyle::rgb(0xcc7832))],
//! );
//! let config = StyleConfig::default().with_title("main.rs");
//! let image = Renderer::new().render(&code, &config)?;
//! std::fs::write("main.png", image.bytes())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `system` (enabled by default): Look up installed fonts. Without it only fonts
//!   registered through [`Typesetter::register_fonts`] are available.
//! - `serde`: Implement `Serialize` and `Deserialize` for the configuration types. Design
//!   systems and themes use their lookup names, so unknown names fall back like
//!   [`BackgroundTheme::from_name`] does.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use parley;
pub use peniko;

mod canvas;
mod text;

pub mod chrome;
pub mod color;
pub mod estimate;
pub mod highlight;
pub mod image;
pub mod render;
pub mod style;
pub mod theme;
pub mod typeset;

pub use chrome::{Chrome, ChromeMetrics};
pub use estimate::Dimensions;
pub use highlight::{HighlightSpan, HighlightStyle, HighlightedCode, SpanError};
pub use image::RenderedImage;
pub use render::{RenderError, Renderer, render_png};
pub use style::{DesignSystem, StyleConfig};
pub use theme::BackgroundTheme;
pub use typeset::Typesetter;
