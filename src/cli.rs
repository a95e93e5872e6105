use clap::Parser;
use thiserror::Error;

#[derive(Parser, Debug)]
#[clap(
    name = "fimo2bed",
    version = env!("CARGO_PKG_VERSION"),
    about = "converts FIMO motif-scan output on stdin to BED on stdout"
)]
pub struct Args {
    /// Set label attached to every emitted record.
    ///
    /// Incorporated into the BED name column, identifying the source
    /// experiment or condition of this run.
    #[clap(
        long = "set",
        help = "Set label attached to every emitted record",
        value_name = "NAME",
        required = true
    )]
    pub set: String,

    /// Sorts output by chromosome, then start, then end.
    #[clap(long = "sort", help = "Sort output by (chrom, start, end)")]
    pub sort: bool,

    /// Drops records identical on chromosome, start, end and strand,
    /// keeping the first occurrence.
    #[clap(long = "drop-duplicates", help = "Drop duplicate intervals")]
    pub drop_duplicates: bool,

    /// Recenters each interval on its motif match, keeping the width.
    #[clap(long = "shift", help = "Shift each interval onto its motif")]
    pub shift: bool,

    /// Recenters each interval to a fixed width around its midpoint.
    #[clap(
        long = "center",
        help = "Recenter each interval to WIDTH bases",
        value_name = "WIDTH"
    )]
    pub center: Option<u64>,
}

impl Args {
    /// Checks all the arguments for validity using validate_args()
    pub fn check(&self) -> Result<(), ArgError> {
        self.validate_args()
    }

    /// Checks the set label. An empty label would produce unusable name
    /// columns downstream.
    fn check_set(&self) -> Result<(), ArgError> {
        if self.set.trim().is_empty() {
            Err(ArgError::InvalidSet("set label must not be empty".to_string()))
        } else {
            Ok(())
        }
    }

    /// Checks the centering width. Zero-width intervals violate BED.
    fn check_center(&self) -> Result<(), ArgError> {
        if self.center == Some(0) {
            let err = "centering width must be greater than 0".to_string();
            Err(ArgError::InvalidCenter(err))
        } else {
            Ok(())
        }
    }

    /// Validates all the arguments
    fn validate_args(&self) -> Result<(), ArgError> {
        self.check_set()?;
        self.check_center()?;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ArgError {
    /// The set label is empty.
    #[error("Invalid set label: {0}")]
    InvalidSet(String),

    /// The centering width is zero.
    #[error("Invalid centering width: {0}")]
    InvalidCenter(String),
}
