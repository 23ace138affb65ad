// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG/RGBA rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;
use thiserror::Error;
use tracing::{debug, warn};

use crate::axis::Axis;
use crate::geometry::{crisp, RectI32};
use crate::scale::{BandScale, LinearScale};
use crate::series::{Series, SeriesType};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const TICK_SIZE: f32 = 6.0;
const TICK_PADDING: f32 = 3.0;
const TICK_FONT: f32 = 10.0;
const LABEL_FONT: f32 = 14.0;
const TITLE_FONT: f32 = 18.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("writing {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw text (title, axis labels, tick labels). Off for pixel-stable tests.
    pub draw_labels: bool,
    pub line_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            line_width: 3.0,
        }
    }
}

/// Horizontal scale of a chart: continuous for line charts, banded for bar charts.
#[derive(Clone, Debug)]
pub enum XScale {
    Linear(LinearScale),
    Band(BandScale),
}

/// A single chart: one pair of scales in plot-local pixels (origin at the
/// top-left of the plot area, y growing downward) plus the series drawn with them.
pub struct Chart {
    pub title: String,
    pub x_scale: XScale,
    pub y_scale: LinearScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(title: impl Into<String>, x_scale: XScale, y_scale: LinearScale) -> Self {
        Self {
            title: title.into(),
            x_scale,
            y_scale,
            x_axis: Axis::new(""),
            y_axis: Axis::new(""),
            series: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|source| RenderError::Io { path: parent.to_path_buf(), source })?;
        }
        std::fs::write(path, bytes)
            .map_err(|source| RenderError::Io { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), "wrote chart png");
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts);

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut surface = skia::surfaces::raster(&info, None, None)
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts);

        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let (pw, ph) = (plot.width() as f32, plot.height() as f32);
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        canvas.save();
        canvas.translate((plot.left as f32, plot.top as f32));

        for s in &self.series {
            match (s.series_type, &self.x_scale) {
                (SeriesType::Line, XScale::Linear(x)) => {
                    draw_line_series(canvas, x, &self.y_scale, s, theme, opts.line_width)
                }
                (SeriesType::Bars, XScale::Band(x)) => {
                    draw_bar_series(canvas, x, &self.y_scale, s, theme, ph)
                }
                (kind, _) => warn!(?kind, "series does not match the chart's x scale; skipped"),
            }
        }

        draw_bottom_axis(canvas, &self.x_scale, &self.x_axis, ph, theme, shaper.as_ref());
        draw_left_axis(canvas, &self.y_scale, &self.y_axis, theme, shaper.as_ref());

        if let Some(shaper) = &shaper {
            let m = &opts.insets;
            shaper.draw(
                canvas, &self.title, pw * 0.5, -(m.top as f32) * 0.5,
                TITLE_FONT, theme.title, Anchor::Middle, true,
            );
            shaper.draw(
                canvas, &self.x_axis.label, pw * 0.5, ph + m.bottom as f32 * 0.5 + 10.0,
                LABEL_FONT, theme.axis_label, Anchor::Middle, false,
            );
            shaper.draw_vertical(
                canvas, &self.y_axis.label, -(m.left as f32) * 0.5, ph * 0.5,
                LABEL_FONT, theme.axis_label,
            );
        }

        canvas.restore();
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_line_series(
    canvas: &skia::Canvas,
    x_scale: &LinearScale,
    y_scale: &LinearScale,
    series: &Series,
    theme: &Theme,
    width: f32,
) {
    let data = &series.data_xy;
    if data.len() < 2 {
        return;
    }

    let mut path = skia::PathBuilder::new();
    let (x0, y0) = data[0];
    path.move_to((x_scale.map(x0) as f32, y_scale.map(y0) as f32));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((x_scale.map(x) as f32, y_scale.map(y) as f32));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_color(theme.line_stroke);

    canvas.draw_path(&path.detach(), &stroke);
}

fn draw_bar_series(
    canvas: &skia::Canvas,
    x_scale: &BandScale,
    y_scale: &LinearScale,
    series: &Series,
    theme: &Theme,
    plot_height: f32,
) {
    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);
    body.set_color(theme.bar_fill);

    let bw = x_scale.bandwidth() as f32;
    for (category, value) in &series.data_bands {
        let Some(x) = x_scale.position(category) else {
            debug!(%category, "bar category outside band domain");
            continue;
        };
        let top = y_scale.map(*value) as f32;
        let rect = skia::Rect::from_xywh(x as f32, top, bw, plot_height - top);
        canvas.draw_rect(rect, &body);
    }
}

fn axis_paint(theme: &Theme) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    paint
}

fn draw_bottom_axis(
    canvas: &skia::Canvas,
    scale: &XScale,
    axis: &Axis,
    plot_height: f32,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let paint = axis_paint(theme);
    let y = crisp(plot_height as f64);

    let (r0, r1, ticks): (f64, f64, Vec<(f64, String)>) = match scale {
        XScale::Linear(s) => {
            let values = axis.tick_values.clone().unwrap_or_else(|| s.ticks(axis.tick_count));
            let ticks = values.into_iter().map(|v| (s.map(v), axis.format.format(v))).collect();
            (s.range.0, s.range.1, ticks)
        }
        XScale::Band(s) => {
            let ticks = s
                .categories()
                .iter()
                .filter_map(|c| s.center(c).map(|x| (x, c.clone())))
                .collect();
            (s.range().0, s.range().1, ticks)
        }
    };

    canvas.draw_line((r0 as f32, y), (r1 as f32, y), &paint);
    for (px, label) in ticks {
        let x = crisp(px);
        canvas.draw_line((x, y), (x, y + TICK_SIZE), &paint);
        if let Some(shaper) = shaper {
            shaper.draw(
                canvas, &label, x, y + TICK_SIZE + TICK_PADDING + TICK_FONT,
                TICK_FONT, theme.tick_label, Anchor::Middle, false,
            );
        }
    }
}

fn draw_left_axis(
    canvas: &skia::Canvas,
    scale: &LinearScale,
    axis: &Axis,
    theme: &Theme,
    shaper: Option<&TextShaper>,
) {
    let paint = axis_paint(theme);
    let x = crisp(0.0) - 1.0;

    canvas.draw_line((x, scale.range.0 as f32), (x, scale.range.1 as f32), &paint);
    let values = axis.tick_values.clone().unwrap_or_else(|| scale.ticks(axis.tick_count));
    for v in values {
        let y = crisp(scale.map(v));
        canvas.draw_line((x - TICK_SIZE, y), (x, y), &paint);
        if let Some(shaper) = shaper {
            shaper.draw(
                canvas, &axis.format.format(v), x - TICK_SIZE - TICK_PADDING, y + TICK_FONT * 0.35,
                TICK_FONT, theme.tick_label, Anchor::End, false,
            );
        }
    }
}
