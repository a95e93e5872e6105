use crate::bed::BedInterval;
use crate::config::Config;
use crate::error::{RecordError, Result};
use crate::fimo::{self, FimoRecord, FimoSchema};
use crate::memory::max_mem_usage_mb;
use hashbrown::HashSet;
use std::io::{BufRead, BufWriter, Write};
use std::time::{Duration, Instant};

/// Summary statistics for a conversion run.
#[derive(Debug, Clone, Copy)]
pub struct RunStats {
    /// Wall clock time spent in the conversion.
    pub elapsed: Duration,
    /// Delta in maximum RSS memory usage, in MB.
    pub mem_delta_mb: f64,
    /// Data lines read (comments and the header excluded).
    pub lines: u64,
    /// Records parsed and converted.
    pub parsed: u64,
    /// Lines skipped as malformed.
    pub malformed: u64,
    /// Records dropped for invalid intervals.
    pub invalid: u64,
    /// Records removed by deduplication.
    pub duplicates: u64,
    /// Records written to the output.
    pub emitted: u64,
}

/// Runs a conversion with the provided configuration.
///
/// Reads FIMO TSV from `input` to exhaustion, converts each record to a
/// BED interval, applies the configured transforms, then sorts,
/// deduplicates and writes the collected intervals to `output`.
/// Malformed lines and invalid intervals are logged on the diagnostic
/// stream and skipped; they never abort the run.
///
/// # Errors
///
/// Returns an error on I/O failure or on an unusable FIMO header.
///
/// # Example
///
/// ```rust, ignore
/// use fimo2bed::{run, Config};
///
/// let stats = run(&config, std::io::stdin().lock(), std::io::stdout().lock())?;
/// eprintln!("emitted {} records", stats.emitted);
/// ```
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, output: W) -> Result<RunStats> {
    let start = Instant::now();
    let start_mem = max_mem_usage_mb();

    let mut stats = Counters::default();
    let intervals = collect_intervals(config, input, &mut stats)?;
    let intervals = finalize_intervals(config, intervals, &mut stats);
    emit_intervals(&intervals, &config.set, output)?;
    stats.emitted = intervals.len() as u64;

    Ok(RunStats {
        elapsed: start.elapsed(),
        mem_delta_mb: (max_mem_usage_mb() - start_mem).max(0.0),
        lines: stats.lines,
        parsed: stats.parsed,
        malformed: stats.malformed,
        invalid: stats.invalid,
        duplicates: stats.duplicates,
        emitted: stats.emitted,
    })
}

#[derive(Debug, Default)]
struct Counters {
    lines: u64,
    parsed: u64,
    malformed: u64,
    invalid: u64,
    duplicates: u64,
    emitted: u64,
}

/// Reads the input to exhaustion and collects converted intervals.
///
/// The schema is taken from a FIMO header when one leads the stream;
/// comment lines (`#`) and blank lines are ignored throughout.
fn collect_intervals<R: BufRead>(
    config: &Config,
    input: R,
    stats: &mut Counters,
) -> Result<Vec<BedInterval>> {
    let mut schema = FimoSchema::default();
    let mut intervals = Vec::new();
    let mut seen_data = false;

    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !seen_data && fimo::is_header(line) {
            schema = FimoSchema::from_header(line)?;
            continue;
        }
        seen_data = true;
        stats.lines += 1;

        match convert_line(line, &schema, config) {
            Ok(interval) => {
                stats.parsed += 1;
                intervals.push(interval);
            }
            Err(RecordError::Malformed(reason)) => {
                stats.malformed += 1;
                log::warn!("line {}: malformed record: {}", lineno + 1, reason);
            }
            Err(RecordError::InvalidInterval(reason)) => {
                stats.invalid += 1;
                log::warn!("line {}: invalid interval: {}", lineno + 1, reason);
            }
        }
    }

    Ok(intervals)
}

/// Converts one data line into its final, transformed interval.
fn convert_line(
    line: &str,
    schema: &FimoSchema,
    config: &Config,
) -> std::result::Result<BedInterval, RecordError> {
    let record = FimoRecord::parse(line, schema)?;
    let mut interval = BedInterval::from_record(&record)?;
    if config.shift {
        interval.shift_to_motif(&record)?;
    }
    if let Some(width) = config.center {
        interval.center(width)?;
    }
    Ok(interval)
}

/// Applies the whole-list phases: sort, then dedup.
fn finalize_intervals(
    config: &Config,
    mut intervals: Vec<BedInterval>,
    stats: &mut Counters,
) -> Vec<BedInterval> {
    if config.sort {
        // Stable, so input order survives full-key ties.
        intervals.sort_by(|a, b| {
            a.chrom
                .cmp(&b.chrom)
                .then(a.start.cmp(&b.start))
                .then(a.end.cmp(&b.end))
        });
    }

    if config.drop_duplicates {
        let before = intervals.len();
        let mut seen = HashSet::with_capacity(intervals.len());
        intervals.retain(|interval| seen.insert(interval.dedup_key()));
        stats.duplicates = (before - intervals.len()) as u64;
    }

    intervals
}

/// Writes the surviving intervals, assigning serials in output order.
fn emit_intervals<W: Write>(intervals: &[BedInterval], set: &str, output: W) -> Result<()> {
    let mut writer = BufWriter::with_capacity(256 * 1024, output);
    for (serial, interval) in intervals.iter().enumerate() {
        interval.write_to(&mut writer, set, serial as u64 + 1)?;
    }
    writer.flush()?;
    Ok(())
}
