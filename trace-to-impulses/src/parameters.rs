use crate::impulse_detection::{Real, crossing_detector::CrossingSettings};
use clap::Parser;
use std::path::PathBuf;

/// Detection thresholds. The defaults are the values the acquisition rig
/// was calibrated with.
#[derive(Debug, Clone, Parser)]
pub(crate) struct DetectionParameters {
    /// Force level treated as "no load"; crossings of it delimit segments.
    #[clap(long, default_value = "0.0")]
    pub(crate) baseline: Real,

    /// Minimum time in seconds between two accepted segment boundaries.
    #[clap(long, default_value = "0.3")]
    pub(crate) min_meantime: Real,

    /// Convergence threshold for the impulse-tail outlier trim.
    #[clap(long, default_value = "0.05")]
    pub(crate) max_std_dev: Real,
}

impl DetectionParameters {
    pub(crate) fn crossing_settings(&self) -> CrossingSettings {
        CrossingSettings {
            baseline: self.baseline,
            min_meantime: self.min_meantime,
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct PlotParameters {
    /// Number of samples rendered per plot window.
    #[clap(long, default_value = "200")]
    pub(crate) plot_interval_size: usize,

    /// Directory receiving one plot{N}.png per window; created if absent.
    #[clap(long, default_value = "plots")]
    pub(crate) plot_path: PathBuf,
}
