use std::ops::Range;
use std::path::PathBuf;

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use thiserror::Error;

use crate::color::trace_colors;
use crate::data::model::TimeSeries;
use crate::style::PlotStyle;

/// Pixels per display unit, so the default 5.0 x 3.5 figure is 500 x 350 px.
const PIXELS_PER_UNIT: f64 = 100.0;

// ---------------------------------------------------------------------------
// Plot inputs
// ---------------------------------------------------------------------------

/// One trace and its legend entry.
#[derive(Debug, Clone)]
pub struct LabeledSeries {
    pub label: String,
    pub series: TimeSeries,
}

/// Figure dimensions in display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width: f64,
    pub height: f64,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 3.5,
        }
    }
}

impl FigureSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Backend dimensions, at least 1 x 1.
    pub fn pixels(self) -> (u32, u32) {
        let to_px = |units: f64| ((units * PIXELS_PER_UNIT).round() as u32).max(1);
        (to_px(self.width), to_px(self.height))
    }
}

/// Everything one chart needs.  Constructed immediately before rendering and
/// discarded after; nothing in here outlives the call.
#[derive(Debug, Clone)]
pub struct PlotSpec {
    pub series_a: LabeledSeries,
    pub series_b: LabeledSeries,
    pub x_label: String,
    pub y_label: String,
    pub out_path: PathBuf,
    pub size: FigureSize,
}

// ---------------------------------------------------------------------------
// RenderError
// ---------------------------------------------------------------------------

/// A chart could not be written.  Like parse failures these abort the run;
/// the inputs are static and retrying cannot help.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("output directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("{}: unsupported output format (expected .svg or .png)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("{}: {message}", .path.display())]
    Backend { path: PathBuf, message: String },
}

// ---------------------------------------------------------------------------
// plot_comparison
// ---------------------------------------------------------------------------

/// Render two labeled series as line traces on shared axes and write the
/// chart to `spec.out_path`, backend chosen by extension (`.svg` vector,
/// `.png` bitmap).
///
/// Every call owns its backend and drawing area and drops them before
/// returning, so consecutive calls cannot contaminate each other.  Empty
/// series produce an empty-but-valid chart.
pub fn plot_comparison(spec: &PlotSpec, style: &PlotStyle) -> Result<(), RenderError> {
    if let Some(parent) = spec.out_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(RenderError::MissingDirectory(parent.to_path_buf()));
        }
    }

    let extension = spec
        .out_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let size = spec.size.pixels();

    match extension.as_str() {
        "svg" => {
            let root = SVGBackend::new(&spec.out_path, size).into_drawing_area();
            draw_chart(root, spec, style).map_err(|e| backend_error(spec, e))
        }
        "png" => {
            let root = BitMapBackend::new(&spec.out_path, size).into_drawing_area();
            draw_chart(root, spec, style).map_err(|e| backend_error(spec, e))
        }
        _ => Err(RenderError::UnsupportedFormat(spec.out_path.clone())),
    }
}

fn backend_error<E: std::error::Error + Send + Sync>(
    spec: &PlotSpec,
    error: DrawingAreaErrorKind<E>,
) -> RenderError {
    RenderError::Backend {
        path: spec.out_path.clone(),
        message: error.to_string(),
    }
}

fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    spec: &PlotSpec,
    style: &PlotStyle,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (x_range, y_range) = axis_ranges(&spec.series_a.series, &spec.series_b.series);
    let font = FontDesc::new(
        font_family(&style.font_family),
        style.base_font_size,
        FontStyle::Normal,
    );

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .label_style(font.clone())
        .axis_desc_style(font.clone())
        .draw()?;

    let colors = trace_colors(2);
    for (trace, color) in [&spec.series_a, &spec.series_b].into_iter().zip(colors) {
        let stroke = color.stroke_width(style.line_width);
        chart
            .draw_series(LineSeries::new(trace.series.points.iter().copied(), stroke))?
            .label(trace.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stroke));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(font)
        .draw()?;

    root.present()?;
    Ok(())
}

fn font_family(name: &str) -> FontFamily<'_> {
    match name {
        "serif" => FontFamily::Serif,
        "sans-serif" => FontFamily::SansSerif,
        "monospace" => FontFamily::Monospace,
        other => FontFamily::Name(other),
    }
}

// ---------------------------------------------------------------------------
// Axis ranges
// ---------------------------------------------------------------------------

/// Union of both series' extents, padded slightly so traces do not sit on
/// the frame.  Empty input falls back to a unit range so the chart is still
/// well-formed.
fn axis_ranges(a: &TimeSeries, b: &TimeSeries) -> (Range<f64>, Range<f64>) {
    let x = merge_bounds(a.time_bounds(), b.time_bounds());
    let y = merge_bounds(a.value_bounds(), b.value_bounds());
    (padded(x), padded(y))
}

fn merge_bounds(a: Option<(f64, f64)>, b: Option<(f64, f64)>) -> Option<(f64, f64)> {
    match (a, b) {
        (Some((alo, ahi)), Some((blo, bhi))) => Some((alo.min(blo), ahi.max(bhi))),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

fn padded(bounds: Option<(f64, f64)>) -> Range<f64> {
    match bounds {
        None => 0.0..1.0,
        Some((lo, hi)) => {
            let span = hi - lo;
            let pad = if span > 0.0 {
                span * 0.03
            } else {
                // Single distinct value: open up a window around it.
                lo.abs().max(1.0) * 0.05
            };
            (lo - pad)..(hi + pad)
        }
    }
}
