// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `codeshot`.
//!
//! - The `util` module contains the shared [`TestEnv`](util::TestEnv) and helpers for decoding
//!   and probing rendered images.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so every module can share `util`.
//! - Put the "topic" of a test at the start of its name, e.g. `chrome_material_header`
//!   rather than `material_header_chrome`.
//! - Every test renders with the fonts bundled in `codeshot_dev` instead of system fonts, so
//!   results do not depend on the host. Set `CODESHOT_TEST_OUTPUT=1` to keep the rendered
//!   images under `_output/`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod chrome;
mod highlight;
mod sizing;
mod text;
#[macro_use]
mod util;
