//! Shared fixtures for unit tests.

use crate::color::Color;
use crate::surface::Surface;

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Save,
    Restore,
    FillStyle(Color),
    StrokeStyle(Color),
    LineWidth(f64),
    ClearRect(f64, f64, f64, f64),
    FillRect(f64, f64, f64, f64),
    StrokeRect(f64, f64, f64, f64),
    BeginPath,
    ClosePath,
    Arc { cx: f64, cy: f64, radius: f64 },
    Fill,
    Stroke,
}

/// A surface that records calls instead of rasterizing.
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn clears(&self) -> usize {
        self.count(|op| matches!(op, Op::ClearRect(..)))
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }

    fn set_fill_style(&mut self, color: Color) {
        self.ops.push(Op::FillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.ops.push(Op::StrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::ClearRect(x, y, width, height));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::FillRect(x, y, width, height));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(Op::StrokeRect(x, y, width, height));
    }

    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }

    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, _start_angle: f64, _end_angle: f64, _anticlockwise: bool) {
        self.ops.push(Op::Arc { cx, cy, radius });
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }

    fn read_pixel(&self, _x: f64, _y: f64) -> Option<Color> {
        None
    }
}
