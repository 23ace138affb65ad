// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    /// Plot area of a `width` x `height` canvas after removing `insets`.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let (w, h) = insets.plot_size(width, height);
        Self::from_ltwh(insets.left as i32, insets.top as i32, w as i32, h as i32)
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

/// Round to the nearest half pixel so 1px strokes land crisply on pixel centers.
#[inline]
pub fn crisp(v: f64) -> f32 {
    (v.round() + 0.5) as f32
}
