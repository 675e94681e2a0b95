//! Non-linear axis scale engine.
//!
//! A pure function of the visible range: the host supplies `[min, max]` on
//! every layout pass and receives major/minor tick metadata to draw. No
//! state is kept beyond the mode + threshold configuration.

pub mod labels;
pub mod ticks;
pub mod transform;

pub use labels::format_tick;
pub use ticks::compute_ticks;
pub use transform::{Axis, AxisInfo, Transform};

/// One axis graduation: a position in data units and its label. Minor ticks
/// carry empty labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f32,
    pub label: String,
}

/// Computed tick output. `major` and `minor` are each sorted ascending and
/// disjoint as position sets (a position present in both is kept as major).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickSet {
    pub major: Vec<Tick>,
    pub minor: Vec<Tick>,
}

impl TickSet {
    pub fn is_empty(&self) -> bool {
        self.major.is_empty() && self.minor.is_empty()
    }

    pub fn major_positions(&self) -> Vec<f32> {
        self.major.iter().map(|t| t.position).collect()
    }

    pub fn minor_positions(&self) -> Vec<f32> {
        self.minor.iter().map(|t| t.position).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Evenly spaced ticks at threshold/5 (major) and threshold/20 (minor)
    /// over the part of the range inside `[0, threshold]`.
    Linear,
    /// Decade ticks over the whole range; values <= 0 are clamped to a small
    /// epsilon before the logarithm.
    Logarithmic,
    /// Linear below the threshold, decades above it.
    LinearThenLog,
    /// Bi-exponential: linear inside `[-threshold, threshold]`, decades in
    /// magnitude on both sides.
    SymmetricLog,
}

/// Mode + threshold packaged as a value, for hosts that keep one per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub mode: ScaleMode,
    pub linear_threshold: f32,
}

impl AxisScale {
    pub fn new(mode: ScaleMode) -> Self {
        Self {
            mode,
            linear_threshold: 100.0,
        }
    }

    pub fn with_threshold(mode: ScaleMode, linear_threshold: f32) -> Self {
        Self {
            mode,
            linear_threshold,
        }
    }

    pub fn compute_ticks(&self, visible_min: f32, visible_max: f32) -> TickSet {
        ticks::compute_ticks(visible_min, visible_max, self.mode, self.linear_threshold)
    }
}

/// Index-labeled axis: one major tick per entry, positioned at its index.
/// Used for category-like axes (e.g. a detector wavelength per channel).
pub fn indexed_ticks<S: AsRef<str>>(labels: &[S]) -> TickSet {
    TickSet {
        major: labels
            .iter()
            .enumerate()
            .map(|(index, label)| Tick {
                position: index as f32,
                label: label.as_ref().to_string(),
            })
            .collect(),
        minor: vec![],
    }
}
