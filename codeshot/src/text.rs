// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line numbers and highlighted code inside the frame.

use crate::canvas::{Bounds, Canvas};
use crate::chrome::{BodyPalette, ChromeMetrics};
use crate::highlight::{HighlightStyle, ProjectedLine};
use crate::typeset::{ColorBrush, Face, Typesetter};

/// Draws the code body with the origin at the frame's top left corner.
#[derive(Debug)]
pub(crate) struct TextCompositor<'a> {
    pub(crate) typesetter: &'a mut Typesetter,
    pub(crate) face: Face,
    /// Baseline to baseline, in whole pixels.
    pub(crate) line_height: f32,
    pub(crate) ascent: f32,
    pub(crate) metrics: &'static ChromeMetrics,
    pub(crate) palette: BodyPalette,
}

impl TextCompositor<'_> {
    pub(crate) fn draw(&mut self, canvas: &mut Canvas, lines: &[ProjectedLine<'_>]) {
        let header = self.metrics.header_height as f32;
        let top = header + self.metrics.body.content_padding as f32;
        self.draw_gutter(canvas, lines.len());
        for (index, line) in lines.iter().enumerate() {
            let baseline = top + index as f32 * self.line_height + self.ascent.round();
            self.draw_line_number(canvas, index + 1, baseline);
            self.draw_runs(canvas, line, baseline);
        }
    }

    fn draw_gutter(&mut self, canvas: &mut Canvas, line_count: usize) {
        let header = self.metrics.header_height as f32;
        let gutter = self.metrics.body.gutter_width as f32;
        let height =
            line_count as f32 * self.line_height + self.metrics.body.content_padding as f32;
        canvas.fill_rect(Bounds::new(0.0, header, gutter, height), self.palette.gutter);
        canvas.stroke_line(
            (gutter, header),
            (gutter, header + height),
            1.0,
            self.palette.separator,
        );
    }

    /// Right aligns `number` against the gutter, one size step below the code.
    fn draw_line_number(&mut self, canvas: &mut Canvas, number: usize, baseline: f32) {
        let face = self.face.with_size((self.face.size - 1.0).max(1.0));
        let label = number.to_string();
        let layout = self
            .typesetter
            .layout(&label, &face, ColorBrush::new(self.palette.line_number));
        let right = self.metrics.body.gutter_width as f32 - self.metrics.line_number_inset;
        canvas.draw_layout(&layout, right - layout.full_width(), baseline);
    }

    /// Draws the runs of one line left to right.
    ///
    /// Bold keeps whatever color the previous run left on the pen.
    fn draw_runs(&mut self, canvas: &mut Canvas, line: &ProjectedLine<'_>, baseline: f32) {
        let metrics = self.metrics;
        let mut x = (metrics.body.gutter_width + metrics.body.content_padding) as f32;
        let mut pen = self.palette.text;
        for run in &line.runs {
            let bold = match run.style {
                HighlightStyle::Color(color) => {
                    pen = color;
                    false
                }
                HighlightStyle::Bold => true,
                HighlightStyle::Plain => {
                    pen = self.palette.text;
                    false
                }
            };
            let face = self.face.with_bold(bold);
            let layout = self.typesetter.layout(run.text, &face, ColorBrush::new(pen));
            canvas.draw_layout(&layout, x, baseline);
            x += layout.full_width();
        }
    }
}
