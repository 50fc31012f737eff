// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Highlighted source text and its projection onto lines of styled runs.
//!
//! A highlighter produces [`HighlightSpan`]s over byte offsets of the whole snippet. Spans may
//! overlap and may cross line breaks. [`HighlightedCode::project`] turns them into one
//! [`ProjectedLine`] per source line, each holding runs that exactly tile the line text:
//!
//! ```
//! use codeshot::{HighlightSpan, HighlightStyle, HighlightedCode};
//!
//! let code = HighlightedCode::new(
//!     "let x = 1;\nx",
//!     vec![HighlightSpan::new(0, 3, HighlightStyle::Bold)],
//! );
//! let lines = code.project().unwrap();
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[0].runs[0].text, "let");
//! assert_eq!(lines[0].runs[1].text, " x = 1;");
//! assert_eq!(lines[1].runs[0].style, HighlightStyle::Plain);
//! ```

use core::ops::Range;

use peniko::Color;
use thiserror::Error;

use crate::color::from_packed_rgb;

/// How a span of code is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HighlightStyle {
    /// Drawn in the given color.
    Color(Color),
    /// Drawn in bold, keeping whichever color the pen currently holds.
    Bold,
    /// Drawn in the default text color.
    Plain,
}

impl HighlightStyle {
    /// A [`HighlightStyle::Color`] from a packed `0xRRGGBB` value.
    pub fn rgb(rgb: u32) -> Self {
        Self::Color(from_packed_rgb(rgb))
    }
}

/// A styled byte range of the whole snippet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightSpan {
    /// First byte of the span.
    pub start: usize,
    /// One past the last byte of the span.
    pub end: usize,
    /// How the span is drawn.
    pub style: HighlightStyle,
}

impl HighlightSpan {
    /// Creates a span covering `start..end`.
    pub fn new(start: usize, end: usize, style: HighlightStyle) -> Self {
        Self { start, end, style }
    }

    fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Source text together with its highlight spans.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HighlightedCode {
    /// The snippet. Lines are separated by `'\n'`.
    pub code: String,
    /// Highlight spans in any order.
    pub spans: Vec<HighlightSpan>,
}

/// A maximal piece of one line drawn with a single style.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRun<'a> {
    /// The text of the run.
    pub text: &'a str,
    /// Byte range of the run relative to the start of its line.
    pub range: Range<usize>,
    /// How the run is drawn.
    pub style: HighlightStyle,
}

/// One source line split into styled runs.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedLine<'a> {
    /// The line text, without its terminating `'\n'`.
    pub text: &'a str,
    /// Runs in order. They concatenate to exactly [`text`](Self::text).
    pub runs: Vec<StyledRun<'a>>,
}

/// A highlight span that cannot be applied to its text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SpanError {
    /// The span starts inside the text but ends past it.
    #[error("span {start}..{end} out of bounds for len {len}")]
    OutOfBounds {
        /// Start of the offending span.
        start: usize,
        /// End of the offending span.
        end: usize,
        /// Length of the text in bytes.
        len: usize,
    },
    /// The span has `start > end`.
    #[error("invalid span {start}..{end}: start > end")]
    InvertedRange {
        /// Start of the offending span.
        start: usize,
        /// End of the offending span.
        end: usize,
    },
    /// One endpoint splits a UTF-8 encoded character.
    #[error("span {start}..{end}: index {index} not on a UTF-8 boundary")]
    NotOnCharBoundary {
        /// Start of the offending span.
        start: usize,
        /// End of the offending span.
        end: usize,
        /// The offending endpoint.
        index: usize,
    },
}

impl HighlightedCode {
    /// Creates highlighted code from text and spans.
    pub fn new(code: impl Into<String>, spans: Vec<HighlightSpan>) -> Self {
        Self {
            code: code.into(),
            spans,
        }
    }

    /// Code without any highlighting.
    pub fn plain(code: impl Into<String>) -> Self {
        Self::new(code, Vec::new())
    }

    /// The source lines. An empty snippet has one empty line.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ + Clone {
        self.code.split('\n')
    }

    /// Number of source lines.
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Splits every line into styled runs.
    ///
    /// Spans are ordered by start offset, keeping the given order for equal starts. Where spans
    /// overlap, the earlier one wins and the overlapping prefix of the later one is dropped.
    /// Spans that start at or past the end of the text are ignored.
    pub fn project(&self) -> Result<Vec<ProjectedLine<'_>>, SpanError> {
        let spans = self.checked_spans()?;
        let mut lines = Vec::new();
        let mut line_start = 0;
        for text in self.lines() {
            let line_end = line_start + text.len();
            lines.push(project_line(text, line_start..line_end, &spans));
            line_start = line_end + 1;
        }
        Ok(lines)
    }

    /// Validates the spans and returns the applicable ones in start order.
    fn checked_spans(&self) -> Result<Vec<HighlightSpan>, SpanError> {
        let len = self.code.len();
        let mut spans = Vec::with_capacity(self.spans.len());
        for span in &self.spans {
            let Range { start, end } = span.range();
            if start > end {
                return Err(SpanError::InvertedRange { start, end });
            }
            if start >= len {
                log::trace!("ignoring span {start}..{end} past the end of {len} bytes");
                continue;
            }
            if end > len {
                return Err(SpanError::OutOfBounds { start, end, len });
            }
            for index in [start, end] {
                if !self.code.is_char_boundary(index) {
                    return Err(SpanError::NotOnCharBoundary { start, end, index });
                }
            }
            if start < end {
                spans.push(*span);
            }
        }
        spans.sort_by_key(|span| span.start);
        Ok(spans)
    }
}

fn project_line<'a>(
    text: &'a str,
    line: Range<usize>,
    spans: &[HighlightSpan],
) -> ProjectedLine<'a> {
    let mut runs = Vec::new();
    let mut push = |range: Range<usize>, style| {
        runs.push(StyledRun {
            text: &text[range.clone()],
            range,
            style,
        });
    };

    let mut consumed = 0;
    for span in spans
        .iter()
        .filter(|span| span.start < line.end && span.end > line.start)
    {
        let start = span.start.max(line.start) - line.start;
        let end = span.end.min(line.end) - line.start;
        if start > consumed {
            push(consumed..start, HighlightStyle::Plain);
        }
        let start = start.max(consumed);
        if start < end {
            push(start..end, span.style);
            consumed = end;
        }
    }
    if consumed < text.len() {
        push(consumed..text.len(), HighlightStyle::Plain);
    }

    ProjectedLine { text, runs }
}
