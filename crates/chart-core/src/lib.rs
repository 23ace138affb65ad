// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports scales, axes and the Skia-backed chart renderer.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod text;

pub use chart::{Chart, RenderError, RenderOptions, XScale};
pub use series::{Series, SeriesType};
pub use axis::{Axis, TickFormat};
pub use scale::{BandScale, LinearScale};
pub use theme::Theme;
pub use text::TextShaper;
pub use types::Insets;
