/// Data layer: core types, file parsing, and the time-shift correction.
///
/// Architecture:
/// ```text
///  time_evol.dat (X3D / e3d)
///        │
///        ▼
///   ┌──────────┐
///   │  reader   │  parse rows under a StatsFormat → StatsRecord
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ StatsRecord   │  time / enstrophy / kinetic_energy columns
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ correct   │  additive time shift (driver-level patch)
///   └──────────┘
/// ```

pub mod correct;
pub mod model;
pub mod reader;
