//! # fimo2bed
//!
//! Converts FIMO motif-scan output into BED intervals.
//!
//! This library reads FIMO's tab-separated output from any buffered
//! reader, maps each match to a six-column BED record, and optionally
//! shifts each interval onto its motif, recenters it to a fixed width,
//! sorts the result and drops duplicate intervals. Diagnostics go
//! through the `log` facade; data never does.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use fimo2bed::{run, Config};
//!
//! let config = Config {
//!     set: "ctcf_mcf7".to_string(),
//!     sort: true,
//!     drop_duplicates: true,
//!     shift: false,
//!     center: Some(100),
//! };
//!
//! let stats = run(&config, std::io::stdin().lock(), std::io::stdout().lock())?;
//! eprintln!("emitted {} records", stats.emitted);
//! ```
//!
//! ## Coordinate conventions
//!
//! FIMO reports 1-based inclusive match coordinates; BED is 0-based
//! half-open. When a sequence name embeds a genomic window
//! (`chrom:start-end`, the naming convention of extracted-fragment
//! scans), the emitted interval is the window itself and the match
//! coordinates are treated as offsets within it.

pub mod bed;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod fimo;
pub mod memory;

pub use bed::BedInterval;
pub use cli::{ArgError, Args};
pub use config::Config;
pub use convert::{run, RunStats};
pub use error::{Fimo2BedError, RecordError, Result};
pub use fimo::{FimoRecord, FimoSchema, SequenceName};
pub use memory::max_mem_usage_mb;
