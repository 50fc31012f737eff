// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Codeshot Dev
//!
//! This crate provides the fonts that Codeshot's tests render with, so results do not depend
//! on what is installed on the host.

use std::path::{Path, PathBuf};

/// The directories that contain the font files.
pub fn font_dirs() -> impl Iterator<Item = PathBuf> {
    let assets_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
    [assets_dir.join("dejavu_fonts")].into_iter()
}

/// The font families that are available in the assets/fonts directory.
pub const FONT_FAMILIES: &[&str] = &["DejaVu Sans Mono"];

/// Reads every font file in [`font_dirs`].
pub fn font_data() -> std::io::Result<Vec<Vec<u8>>> {
    let mut fonts = Vec::new();
    for dir in font_dirs() {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.metadata()?.is_file() {
                continue;
            }
            let path = entry.path();
            if path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_none_or(|ext| !["ttf", "otf", "ttc", "otc"].contains(&ext))
            {
                continue;
            }
            paths.push(path);
        }
        // Directory order is platform dependent.
        paths.sort();
        for path in paths {
            fonts.push(std::fs::read(&path)?);
        }
    }
    Ok(fonts)
}
