use crate::error::RecordError;
use crate::fimo::FimoRecord;
use std::io::Write;

/// One output interval in 0-based half-open BED coordinates.
///
/// The name column is not stored here: it is a function of the final
/// coordinates, the run's set label, and a serial number assigned in
/// output order, so it is rendered at emit time by [`write_to`].
///
/// [`write_to`]: BedInterval::write_to
#[derive(Debug, Clone, PartialEq)]
pub struct BedInterval {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub score: f64,
    pub strand: char,
}

impl BedInterval {
    /// Builds the base interval for a FIMO record.
    ///
    /// The interval is the record's match window: the embedded fragment
    /// window when the sequence name carries one, otherwise the match
    /// coordinates converted to 0-based half-open.
    pub fn from_record(record: &FimoRecord) -> Result<Self, RecordError> {
        let (start, end) = record.window_span()?;
        Ok(Self {
            chrom: record.sequence.chrom.clone(),
            start,
            end,
            score: record.score,
            strand: record.strand,
        })
    }

    /// Width of the interval in bases.
    pub fn width(&self) -> u64 {
        self.end - self.start
    }

    /// Floor midpoint of the interval.
    pub fn midpoint(&self) -> u64 {
        (self.start + self.end) / 2
    }

    /// Translates the interval so its midpoint lands on the motif's.
    ///
    /// Width is preserved. For a record without an embedded window the
    /// match window is the motif span itself and this is a no-op.
    pub fn shift_to_motif(&mut self, record: &FimoRecord) -> Result<(), RecordError> {
        let (motif_start, motif_end) = record.motif_span()?;
        let motif_mid = (motif_start + motif_end) / 2;
        let delta = motif_mid as i64 - self.midpoint() as i64;

        let start = self.start as i64 + delta;
        if start < 0 {
            return Err(RecordError::InvalidInterval(format!(
                "{}: shift moves interval below coordinate 0",
                self.chrom
            )));
        }

        let width = self.width();
        self.start = start as u64;
        self.end = self.start + width;
        Ok(())
    }

    /// Recenters the interval to exactly `width` bases around its
    /// floor midpoint.
    pub fn center(&mut self, width: u64) -> Result<(), RecordError> {
        let start = self.midpoint().checked_sub(width / 2).ok_or_else(|| {
            RecordError::InvalidInterval(format!(
                "{}: centering to {} moves interval below coordinate 0",
                self.chrom, width
            ))
        })?;
        self.start = start;
        self.end = start + width;
        Ok(())
    }

    /// Key identifying the interval for deduplication.
    pub fn dedup_key(&self) -> (String, u64, u64, char) {
        (self.chrom.clone(), self.start, self.end, self.strand)
    }

    /// Writes the interval as one six-column BED line.
    ///
    /// Name format is `chrom:start-end|set_serial`, matching the
    /// convention of the fragment pipelines downstream of this tool.
    pub fn write_to<W: Write>(&self, writer: &mut W, set: &str, serial: u64) -> std::io::Result<()> {
        writeln!(
            writer,
            "{chrom}\t{start}\t{end}\t{chrom}:{start}-{end}|{set}_{serial}\t{score}\t{strand}",
            chrom = self.chrom,
            start = self.start,
            end = self.end,
            set = set,
            serial = serial,
            score = self.score,
            strand = self.strand,
        )
    }
}
