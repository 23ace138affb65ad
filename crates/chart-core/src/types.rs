// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Width and height of the plot area inside a `width` x `height` canvas.
    /// Never negative; an inset larger than the canvas yields zero.
    pub fn plot_size(&self, width: i32, height: i32) -> (f64, f64) {
        let w = (width as i64 - self.hsum() as i64).max(0) as f64;
        let h = (height as i64 - self.vsum() as i64).max(0) as f64;
        (w, h)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 30, 50, 60)
    }
}
