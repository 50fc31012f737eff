// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A one line Kotlin snippet.
pub(crate) const HELLO: &str = "fun hello() = println(\"Hi\")";

/// A short Rust function over several lines.
pub(crate) const RUST_MAIN: &str = "fn main() {\n    let answer = 42;\n    println!(\"{answer}\");\n}";
