use crate::cli::Args;

/// Normalized configuration for a conversion run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Set label attached to every emitted record.
    pub set: String,
    /// Sort output by (chrom, start, end).
    pub sort: bool,
    /// Drop duplicate intervals, keeping the first occurrence.
    pub drop_duplicates: bool,
    /// Shift each interval onto its motif match.
    pub shift: bool,
    /// Recenter each interval to this width, when set.
    pub center: Option<u64>,
}

impl Config {
    /// Builds a conversion config from CLI arguments.
    pub fn from_args(args: &Args) -> Self {
        Self {
            set: args.set.clone(),
            sort: args.sort,
            drop_duplicates: args.drop_duplicates,
            shift: args.shift,
            center: args.center,
        }
    }
}
