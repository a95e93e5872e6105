//! # fimo2bed
//!
//! Converts FIMO motif-scan output into BED intervals.
//!
//! ## Features
//!
//! - Reads FIMO TSV from stdin, writes six-column BED to stdout
//! - Handles both headered and headerless FIMO output
//! - Optional shift of each interval onto its motif match
//! - Optional fixed-width recentering around the interval midpoint
//! - Optional sorting by (chrom, start, end) and duplicate removal
//! - Diagnostics and summary counts on stderr only
//!
//! ## Usage
//!
//! ```bash
//! fimo2bed --set <NAME> [OPTIONS] < fimo.tsv > out.bed
//!
//! Required arguments:
//!       --set <NAME>       Set label attached to every emitted record
//!
//! Optional arguments:
//!       --sort             Sort output by (chrom, start, end)
//!       --drop-duplicates  Drop duplicate intervals
//!       --shift            Shift each interval onto its motif
//!       --center <WIDTH>   Recenter each interval to WIDTH bases
//!   -h, --help             Print help
//!   -V, --version          Print version
//! ```
//!
//! ## Examples
//!
//! ### Basic conversion
//!
//! ```bash
//! fimo2bed --set ctcf_mcf7 < fimo.tsv > ctcf_mcf7.bed
//! ```
//!
//! ### Centered, sorted, deduplicated fragments
//!
//! ```bash
//! fimo2bed --set ctcf_mcf7 --shift --center 100 --sort --drop-duplicates \
//!     < fimo.tsv > ctcf_mcf7.bed
//! ```
use clap::Parser;
use fimo2bed::{run, Args, Config};
use log::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(Level::Info).unwrap();

    let args = Args::parse();
    args.check()?;
    log::info!("{:?}", args);

    let config = Config::from_args(&args);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let stats = run(&config, stdin.lock(), stdout.lock())?;

    log::info!(
        "lines: {} parsed: {} malformed: {} invalid: {} duplicates: {} emitted: {}",
        stats.lines,
        stats.parsed,
        stats.malformed,
        stats.invalid,
        stats.duplicates,
        stats.emitted
    );
    log::info!("Elapsed: {:.4?} secs", stats.elapsed.as_secs_f32());
    log::info!("Memory: {:.2} MB", stats.mem_delta_mb);

    Ok(())
}
