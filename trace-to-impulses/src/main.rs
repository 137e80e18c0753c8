mod graphics;
mod impulse_detection;
mod parameters;
mod processing;

use anyhow::Result;
use clap::Parser;
use graphics::PngSaver;
use impulse_detection::SaveToFileFilter;
use parameters::{DetectionParameters, PlotParameters};
use std::path::PathBuf;
use trace_reader::load_trace_file;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Trace file to analyse: two header lines, then one "<time> <force>"
    /// pair per line, comma decimal separator.
    #[clap(short, long)]
    file_name: PathBuf,

    #[clap(flatten)]
    detection: DetectionParameters,

    #[clap(flatten)]
    plot: PlotParameters,

    /// If set, detected impulses are also written to this file as CSV.
    #[clap(long)]
    save_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!("Args: {:?}", cli);

    let trace_file = load_trace_file(&cli.file_name)?;
    let analysis = processing::process(&trace_file.trace, &cli.detection);

    let plots = graphics::render_windows::<PngSaver>(
        &trace_file.trace,
        &analysis,
        cli.detection.baseline,
        &cli.plot,
    )?;
    info!(
        "Wrote {0} plots to {1}",
        plots.len(),
        cli.plot.plot_path.display()
    );

    if let Some(save_file) = &cli.save_file {
        analysis.impulses.iter().save_to_file(save_file)?;
        info!(
            "Wrote {0} impulses to {1}",
            analysis.impulses.len(),
            save_file.display()
        );
    }

    Ok(())
}
