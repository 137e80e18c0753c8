use forceplate_common::{Force, Time, Trace};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    num::ParseFloatError,
    path::Path,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceLoadError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line {line}: expected two fields, found {found}")]
    MissingField { line: usize, found: usize },
    #[error("Line {line}: invalid number {token:?}")]
    InvalidNumber {
        line: usize,
        token: String,
        source: ParseFloatError,
    },
}

/// The two metadata lines at the top of a trace file. Carried through
/// verbatim; the analysis does not interpret them.
#[derive(Default, Debug, Clone)]
pub struct TraceFileHeader {
    pub run_descript: String,
    pub column_labels: String,
}

#[derive(Default, Debug)]
pub struct TraceFile {
    pub header: TraceFileHeader,
    pub trace: Trace,
}

impl TraceFile {
    pub fn num_samples(&self) -> usize {
        self.trace.len()
    }
}

pub fn load_trace_file(path: &Path) -> Result<TraceFile, TraceLoadError> {
    let file = File::open(path)?;
    let trace_file = read_trace(BufReader::new(file))?;
    tracing::info!(
        "Loaded {0} samples from {1}",
        trace_file.num_samples(),
        path.display()
    );
    Ok(trace_file)
}

/// Parses trace data from any buffered reader. Header lines are consumed
/// verbatim; each remaining line must hold a time and a force value,
/// whitespace separated, with `,` accepted as the decimal separator.
pub fn read_trace<R: BufRead>(reader: R) -> Result<TraceFile, TraceLoadError> {
    let mut header = TraceFileHeader::default();
    let mut times = Vec::<Time>::new();
    let mut forces = Vec::<Force>::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match index {
            0 => header.run_descript = line,
            1 => header.column_labels = line,
            _ => {
                let (time, force) = parse_data_line(&line, index + 1)?;
                times.push(time);
                forces.push(force);
            }
        }
    }

    Ok(TraceFile {
        header,
        trace: Trace::new(times, forces),
    })
}

fn parse_data_line(line: &str, line_number: usize) -> Result<(Time, Force), TraceLoadError> {
    let normalized = line.replace(',', ".");
    let mut fields = normalized.split_whitespace();
    let time = parse_field(fields.next(), line_number, 0)?;
    let force = parse_field(fields.next(), line_number, 1)?;
    Ok((time, force))
}

fn parse_field(
    token: Option<&str>,
    line_number: usize,
    found: usize,
) -> Result<f64, TraceLoadError> {
    let token = token.ok_or(TraceLoadError::MissingField {
        line: line_number,
        found,
    })?;
    token
        .parse()
        .map_err(|source| TraceLoadError::InvalidNumber {
            line: line_number,
            token: token.to_owned(),
            source,
        })
}
