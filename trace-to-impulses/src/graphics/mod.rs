mod bounds;
mod png;

use crate::impulse_detection::{Real, TimeValue};
use crate::parameters::PlotParameters;
use crate::processing::Analysis;
use forceplate_common::{Sample, Trace, window_count, window_range};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub(crate) use bounds::{Bound, Bounds};
pub(crate) use png::PngSaver;

pub(crate) const PLOT_SIZE: (u32, u32) = (800, 600);

#[derive(Debug, Error)]
pub(crate) enum GraphicsError {
    #[error("Drawing Error: {0}")]
    Drawing(String),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphicsError {
    pub(crate) fn drawing<E: std::fmt::Display>(error: E) -> Self {
        Self::Drawing(error.to_string())
    }
}

/// One window of the raw signal.
pub(crate) struct TraceWindow<'a> {
    pub(crate) times: &'a [Real],
    pub(crate) forces: &'a [Real],
}

impl TraceWindow<'_> {
    pub(crate) fn points(&self) -> impl Iterator<Item = (Real, Real)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.forces.iter().copied())
    }

    /// The exact time span of the window; overlays are filtered against it.
    pub(crate) fn time_bound(&self) -> Bound {
        Bound::of(self.times)
    }

    /// Padded axis ranges, drawable even for flat or single-point windows.
    pub(crate) fn bounds(&self) -> Bounds {
        Bounds {
            time: self.time_bound().padded(),
            force: Bound::of(self.forces).padded(),
        }
    }
}

/// Everything drawn on top of the raw signal in one window.
pub(crate) struct Overlays<'a> {
    pub(crate) baseline: Real,
    pub(crate) boundaries: &'a [Real],
    pub(crate) minimums: &'a [Sample],
    pub(crate) maximums: &'a [Sample],
    pub(crate) tail_points: &'a [TimeValue],
}

/// The drawing sink: consumes one window of the raw series plus its
/// overlays and emits an image. The analysis pipeline never touches the
/// rendering library directly.
pub(crate) trait GraphSaver: Default {
    fn save_window(
        window: &TraceWindow,
        overlays: &Overlays,
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), GraphicsError>;
}

/// Renders one image per `plot_interval_size` samples into the plot
/// directory (created if absent), named `plot{N}.png`. Returns the paths
/// written, in window order.
pub(crate) fn render_windows<G: GraphSaver>(
    trace: &Trace,
    analysis: &Analysis,
    baseline: Real,
    plot: &PlotParameters,
) -> Result<Vec<PathBuf>, GraphicsError> {
    std::fs::create_dir_all(&plot.plot_path)?;

    let tail_points: Vec<TimeValue> = analysis
        .impulses
        .iter()
        .flat_map(|impulse| impulse.tail.iter().copied())
        .collect();
    let overlays = Overlays {
        baseline,
        boundaries: &analysis.boundaries,
        minimums: &analysis.minimums,
        maximums: &analysis.maximums,
        tail_points: &tail_points,
    };

    let mut paths = Vec::new();
    for window in 0..window_count(trace.len(), plot.plot_interval_size) {
        let (begin, end) = window_range(trace.len(), plot.plot_interval_size, window);
        let window_trace = TraceWindow {
            times: &trace.times()[begin..end],
            forces: &trace.forces()[begin..end],
        };
        let path = plot.plot_path.join(format!("plot{window}.png"));
        G::save_window(&window_trace, &overlays, &path, PLOT_SIZE)?;
        paths.push(path);
    }
    Ok(paths)
}
