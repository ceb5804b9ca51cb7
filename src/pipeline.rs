use anyhow::{Context, Result};
use log::info;

use crate::cli::Args;
use crate::data::correct::apply_time_shift;
use crate::data::reader::read_stats;
use crate::plot::comparison::{plot_comparison, FigureSize, LabeledSeries, PlotSpec};
use crate::style::PlotStyle;

// ---------------------------------------------------------------------------
// Batch pipeline: read -> correct -> plot, once per run
// ---------------------------------------------------------------------------

/// Run the whole comparison: parse both statistics files, apply the time
/// correction to the X3D record, and render the two charts.  Straight-line
/// and synchronous; any failure aborts with a diagnostic naming the file and
/// the stage.
pub fn run(args: &Args) -> Result<()> {
    let style = match &args.style {
        Some(path) => PlotStyle::load(path).context("style stage")?,
        None => PlotStyle::default(),
    };

    let mut x3d = read_stats(&args.x3d, args.x3d_format.into())
        .with_context(|| format!("parse stage: {}", args.x3d.display()))?;
    info!("parsed {} rows from {}", x3d.len(), args.x3d.display());

    let e3d = read_stats(&args.e3d, args.e3d_format.into())
        .with_context(|| format!("parse stage: {}", args.e3d.display()))?;
    info!("parsed {} rows from {}", e3d.len(), args.e3d.display());

    if args.time_offset != 0.0 {
        info!("shifting X3D times by {:+e}", args.time_offset);
    }
    apply_time_shift(&mut x3d, args.time_offset);

    let size = FigureSize::new(args.fig_width, args.fig_height);

    let enstrophy = PlotSpec {
        series_a: LabeledSeries {
            label: args.x3d_label.clone(),
            series: x3d.enstrophy_series(),
        },
        series_b: LabeledSeries {
            label: args.e3d_label.clone(),
            series: e3d.enstrophy_series(),
        },
        x_label: args.time_label.clone(),
        y_label: args.enstrophy_label.clone(),
        out_path: args.enstrophy_out.clone(),
        size,
    };
    plot_comparison(&enstrophy, &style)
        .with_context(|| format!("render stage: {}", args.enstrophy_out.display()))?;
    info!("wrote {}", args.enstrophy_out.display());

    let kinetic_energy = PlotSpec {
        series_a: LabeledSeries {
            label: args.x3d_label.clone(),
            series: x3d.kinetic_energy_series(),
        },
        series_b: LabeledSeries {
            label: args.e3d_label.clone(),
            series: e3d.kinetic_energy_series(),
        },
        x_label: args.time_label.clone(),
        y_label: args.ke_label.clone(),
        out_path: args.ke_out.clone(),
        size,
    };
    plot_comparison(&kinetic_energy, &style)
        .with_context(|| format!("render stage: {}", args.ke_out.display()))?;
    info!("wrote {}", args.ke_out.display());

    Ok(())
}
