use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::model::StatsFormat;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// X3D statistics file
    #[arg(long, value_name = "PATH")]
    pub x3d: PathBuf,

    /// e3d statistics file
    #[arg(long, value_name = "PATH")]
    pub e3d: PathBuf,

    /// Row convention of the X3D file
    #[arg(long, value_enum, default_value_t = FormatOpt::Comment)]
    pub x3d_format: FormatOpt,

    /// Row convention of the e3d file
    #[arg(long, value_enum, default_value_t = FormatOpt::Comment)]
    pub e3d_format: FormatOpt,

    /// Additive correction applied to every X3D time value
    #[arg(long, default_value_t = 0.0)]
    pub time_offset: f64,

    /// Output path for the enstrophy chart (.svg or .png)
    #[arg(long, value_name = "PATH", default_value = "tgv_enstrophy.svg")]
    pub enstrophy_out: PathBuf,

    /// Output path for the kinetic-energy chart (.svg or .png)
    #[arg(long, value_name = "PATH", default_value = "tgv_ke.svg")]
    pub ke_out: PathBuf,

    /// Legend label for the X3D series
    #[arg(long, default_value = "X3D")]
    pub x3d_label: String,

    /// Legend label for the e3d series
    #[arg(long, default_value = "Eric")]
    pub e3d_label: String,

    /// X-axis label shared by both charts
    #[arg(long, default_value = "t")]
    pub time_label: String,

    /// Y-axis label for the enstrophy chart
    #[arg(long, default_value = "enstrophy")]
    pub enstrophy_label: String,

    /// Y-axis label for the kinetic-energy chart
    #[arg(long, default_value = "kinetic energy")]
    pub ke_label: String,

    /// Figure width in display units (100 px each)
    #[arg(long, default_value_t = 5.0)]
    pub fig_width: f64,

    /// Figure height in display units (100 px each)
    #[arg(long, default_value_t = 3.5)]
    pub fig_height: f64,

    /// Path to a JSON typesetting configuration
    #[arg(long, value_name = "PATH")]
    pub style: Option<PathBuf>,
}

/// CLI spelling of the input row conventions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatOpt {
    /// Lines starting with '#' are comments; kinetic energy in column 3
    Comment,
    /// First line is a header; kinetic energy in column 2
    Header,
}

impl From<FormatOpt> for StatsFormat {
    fn from(value: FormatOpt) -> Self {
        match value {
            FormatOpt::Comment => StatsFormat::CommentPrefixed,
            FormatOpt::Header => StatsFormat::HeaderPrefixed,
        }
    }
}
