// ---------------------------------------------------------------------------
// TimeSeries – one sampled quantity over time
// ---------------------------------------------------------------------------

/// An ordered sequence of (time, value) pairs.
///
/// Insertion order is file order, which the solvers write chronologically;
/// monotonicity of the time axis is assumed, not enforced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeries {
    pub points: Vec<(f64, f64)>,
}

impl TimeSeries {
    /// Pair up a time column with a value column.
    pub fn from_columns(time: &[f64], values: &[f64]) -> Self {
        TimeSeries {
            points: time.iter().copied().zip(values.iter().copied()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// (min, max) over the time axis, None when empty.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.points.iter().map(|&(t, _)| t))
    }

    /// (min, max) over the value axis, None when empty.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.points.iter().map(|&(_, v)| v))
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

// ---------------------------------------------------------------------------
// StatsRecord – the parsed contents of one statistics file
// ---------------------------------------------------------------------------

/// Three parallel columns sharing one time axis.  The invariant
/// `time.len() == enstrophy.len() == kinetic_energy.len()` is upheld by the
/// reader: one entry per valid data row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatsRecord {
    pub time: Vec<f64>,
    pub enstrophy: Vec<f64>,
    pub kinetic_energy: Vec<f64>,
}

impl StatsRecord {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Enstrophy as a function of time.
    pub fn enstrophy_series(&self) -> TimeSeries {
        TimeSeries::from_columns(&self.time, &self.enstrophy)
    }

    /// Kinetic energy as a function of time.
    pub fn kinetic_energy_series(&self) -> TimeSeries {
        TimeSeries::from_columns(&self.time, &self.kinetic_energy)
    }
}

// ---------------------------------------------------------------------------
// StatsFormat – per-file row convention and column schema
// ---------------------------------------------------------------------------

/// Which of the two observed file conventions a statistics file follows.
///
/// The two solvers place the kinetic-energy column at different indices, so
/// the schema is selected explicitly per file rather than inferred; the
/// conventions are not distinguishable from the bytes alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsFormat {
    /// Rows whose first character is `#` are metadata; data rows carry at
    /// least four columns with kinetic energy at index 3.
    CommentPrefixed,
    /// The first line is a non-numeric header, skipped unconditionally; data
    /// rows carry at least three columns with kinetic energy at index 2.
    HeaderPrefixed,
}

impl StatsFormat {
    pub fn layout(self) -> ColumnLayout {
        match self {
            StatsFormat::CommentPrefixed => ColumnLayout {
                time: 0,
                enstrophy: 1,
                kinetic_energy: 3,
            },
            StatsFormat::HeaderPrefixed => ColumnLayout {
                time: 0,
                enstrophy: 1,
                kinetic_energy: 2,
            },
        }
    }
}

/// Named column mapping for one file convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub time: usize,
    pub enstrophy: usize,
    pub kinetic_energy: usize,
}

impl ColumnLayout {
    /// Minimum number of whitespace-separated tokens a data row must have.
    pub fn min_columns(self) -> usize {
        self.time.max(self.enstrophy).max(self.kinetic_energy) + 1
    }
}
