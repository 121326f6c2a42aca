//! CSV trial file adapter.
//!
//! Layout, one header line then one line per trial:
//!
//! ```text
//! Forest,Dam,Embankment,Relocation,Run,upstream_cost,downstream_cost,cumulative_damage,final_ecosystem
//! True,False,False,True,1,2000000,3000000000,1.2e10,101.7
//! ```
//!
//! Columns are located by header name, so their order is free. Measure
//! flags are true when the cell reads "true" in any letter case.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::payoff::{DownstreamMeasures, Measurement, TrialRecord, UpstreamMeasures};
use crate::ports::{TrialSink, TrialSource};

const FOREST: &str = "Forest";
const DAM: &str = "Dam";
const EMBANKMENT: &str = "Embankment";
const RELOCATION: &str = "Relocation";
const RUN: &str = "Run";

/// Trial records stored as a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvTrialFile {
    path: PathBuf,
}

impl CsvTrialFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrialSource for CsvTrialFile {
    fn load_trials(&self) -> Result<Vec<TrialRecord>, DomainError> {
        let text = fs::read_to_string(&self.path).map_err(|e| io_error(&self.path, e))?;
        let records = parse_trials(&text)?;
        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "Loaded trial records"
        );
        Ok(records)
    }
}

impl TrialSink for CsvTrialFile {
    fn write_trials(&self, records: &[TrialRecord]) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
        }
        fs::write(&self.path, format_trials(records)).map_err(|e| io_error(&self.path, e))?;
        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "Wrote trial records"
        );
        Ok(())
    }
}

/// Column positions resolved from the header line.
struct Columns {
    forest: usize,
    dam: usize,
    embankment: usize,
    relocation: usize,
    run: usize,
    measurements: [usize; 4],
    width: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self, DomainError> {
        let names: Vec<&str> = header.split(',').map(str::trim).collect();
        let find = |name: &str| {
            names.iter().position(|n| *n == name).ok_or_else(|| {
                invalid_record(1, format!("header has no '{}' column", name))
            })
        };

        let mut measurements = [0; 4];
        for (slot, measurement) in measurements.iter_mut().zip(Measurement::ALL) {
            *slot = find(measurement.column())?;
        }

        Ok(Self {
            forest: find(FOREST)?,
            dam: find(DAM)?,
            embankment: find(EMBANKMENT)?,
            relocation: find(RELOCATION)?,
            run: find(RUN)?,
            measurements,
            width: names.len(),
        })
    }

    fn parse_row(&self, line_no: usize, line: &str) -> Result<TrialRecord, DomainError> {
        let cells: Vec<&str> = line.split(',').map(str::trim).collect();
        if cells.len() < self.width {
            return Err(invalid_record(
                line_no,
                format!("expected {} fields, found {}", self.width, cells.len()),
            ));
        }

        let number = |idx: usize, name: &str| {
            cells[idx].parse::<f64>().map_err(|_| {
                invalid_record(line_no, format!("'{}' is not a number: '{}'", name, cells[idx]))
            })
        };
        let [upstream_cost, downstream_cost, cumulative_damage, final_ecosystem] = [
            number(self.measurements[0], Measurement::UpstreamCost.column())?,
            number(self.measurements[1], Measurement::DownstreamCost.column())?,
            number(self.measurements[2], Measurement::CumulativeDamage.column())?,
            number(self.measurements[3], Measurement::FinalEcosystem.column())?,
        ];

        let run = cells[self.run].parse::<u32>().map_err(|_| {
            invalid_record(line_no, format!("'{}' is not a run number: '{}'", RUN, cells[self.run]))
        })?;

        Ok(TrialRecord {
            upstream: UpstreamMeasures {
                forest: flag(cells[self.forest]),
                dam: flag(cells[self.dam]),
            },
            downstream: DownstreamMeasures {
                embankment: flag(cells[self.embankment]),
                relocation: flag(cells[self.relocation]),
            },
            run,
            upstream_cost,
            downstream_cost,
            cumulative_damage,
            final_ecosystem,
        })
    }
}

/// Parses trial CSV text. Blank lines are skipped.
///
/// # Errors
/// `ErrorCode::InvalidTrialRecord` naming the 1-based line of the first bad row.
pub fn parse_trials(text: &str) -> Result<Vec<TrialRecord>, DomainError> {
    let mut lines = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let Some((_, header)) = lines.next() else {
        return Err(invalid_record(1, "file has no header line"));
    };
    let columns = Columns::from_header(header)?;

    lines
        .map(|(idx, line)| columns.parse_row(idx + 1, line))
        .collect()
}

/// Formats records in the layout `parse_trials` reads.
pub fn format_trials(records: &[TrialRecord]) -> String {
    let mut out = String::new();
    let mut header = vec![FOREST, DAM, EMBANKMENT, RELOCATION, RUN];
    header.extend(Measurement::ALL.iter().map(|m| m.column()));
    out.push_str(&header.join(","));
    out.push('\n');

    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            bool_cell(r.upstream.forest),
            bool_cell(r.upstream.dam),
            bool_cell(r.downstream.embankment),
            bool_cell(r.downstream.relocation),
            r.run,
            r.upstream_cost,
            r.downstream_cost,
            r.cumulative_damage,
            r.final_ecosystem,
        ));
    }
    out
}

fn flag(cell: &str) -> bool {
    cell.eq_ignore_ascii_case("true")
}

fn bool_cell(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn invalid_record(line: usize, reason: impl Into<String>) -> DomainError {
    let reason = reason.into();
    DomainError::new(
        ErrorCode::InvalidTrialRecord,
        format!("Invalid trial record on line {}: {}", line, reason),
    )
    .with_detail("line", line.to_string())
}

fn io_error(path: &Path, err: std::io::Error) -> DomainError {
    DomainError::new(ErrorCode::IoError, format!("{}: {}", path.display(), err))
        .with_detail("path", path.display().to_string())
}
