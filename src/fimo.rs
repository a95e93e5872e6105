use crate::error::{Fimo2BedError, RecordError};

/// Column layout of a FIMO TSV stream.
///
/// FIMO's column order has shifted between releases (5.x inserts
/// `motif_alt_id` after `motif_id`), so when a header line is present the
/// schema is taken from it, the same way a header-driven TSV reader
/// would. Without a header the classic 9-column layout applies.
#[derive(Debug, Clone)]
pub struct FimoSchema {
    motif_id: usize,
    sequence_name: usize,
    start: usize,
    stop: usize,
    strand: usize,
    score: usize,
    pvalue: Option<usize>,
    qvalue: Option<usize>,
    matched_sequence: Option<usize>,
    /// Minimum number of tab-separated fields a data line must carry.
    min_fields: usize,
}

impl Default for FimoSchema {
    /// Headerless layout: motif_id, sequence_name, start, stop, strand,
    /// score, p-value, q-value, matched_sequence.
    fn default() -> Self {
        Self {
            motif_id: 0,
            sequence_name: 1,
            start: 2,
            stop: 3,
            strand: 4,
            score: 5,
            pvalue: Some(6),
            qvalue: Some(7),
            matched_sequence: Some(8),
            min_fields: 6,
        }
    }
}

impl FimoSchema {
    /// Builds a schema from a FIMO header line.
    ///
    /// # Errors
    ///
    /// Returns [`Fimo2BedError::Header`] when a required column
    /// (motif_id, sequence_name, start, stop, strand, score) is absent.
    pub fn from_header(line: &str) -> crate::error::Result<Self> {
        let find = |name: &str| line.split('\t').position(|col| col.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| Fimo2BedError::Header(format!("missing column '{name}'")))
        };

        let motif_id = require("motif_id")?;
        let sequence_name = require("sequence_name")?;
        let start = require("start")?;
        let stop = require("stop")?;
        let strand = require("strand")?;
        let score = require("score")?;

        let min_fields = 1 + [motif_id, sequence_name, start, stop, strand, score]
            .into_iter()
            .max()
            .unwrap_or(0);

        Ok(Self {
            motif_id,
            sequence_name,
            start,
            stop,
            strand,
            score,
            pvalue: find("p-value"),
            qvalue: find("q-value"),
            matched_sequence: find("matched_sequence"),
            min_fields,
        })
    }
}

/// Returns true when the line is a FIMO header line.
pub fn is_header(line: &str) -> bool {
    line.split('\t').next().map(str::trim) == Some("motif_id")
}

/// A FIMO sequence name, optionally carrying an embedded genomic window.
///
/// Motif scans over extracted fragments name each sequence after its
/// source window, `chrom:start-end` in BED-style 0-based half-open
/// coordinates. A name without a parseable `:start-end` suffix is a
/// plain chromosome name.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceName {
    pub chrom: String,
    pub window: Option<(u64, u64)>,
}

impl SequenceName {
    pub fn parse(raw: &str) -> Self {
        if let Some((chrom, span)) = raw.rsplit_once(':') {
            if let Some((lo, hi)) = span.split_once('-') {
                if let (Ok(lo), Ok(hi)) = (lo.parse::<u64>(), hi.parse::<u64>()) {
                    return Self {
                        chrom: chrom.to_string(),
                        window: Some((lo, hi)),
                    };
                }
            }
        }
        Self {
            chrom: raw.to_string(),
            window: None,
        }
    }
}

/// One parsed line of FIMO output.
///
/// `start`/`stop` are FIMO's 1-based inclusive match coordinates,
/// relative to the fragment when the sequence name embeds a window and
/// genomic otherwise.
#[derive(Debug, Clone)]
pub struct FimoRecord {
    pub motif_id: String,
    pub sequence: SequenceName,
    pub start: u64,
    pub stop: u64,
    pub strand: char,
    pub score: f64,
    pub pvalue: Option<f64>,
    pub qvalue: Option<f64>,
    pub matched_sequence: Option<String>,
}

impl FimoRecord {
    /// Parses one data line against the given schema.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Malformed`] when the line has too few
    /// fields, when start/stop/score are not numeric, when start is 0
    /// (FIMO coordinates are 1-based), or when strand is not one of
    /// `+`, `-`, `.`.
    pub fn parse(line: &str, schema: &FimoSchema) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < schema.min_fields {
            return Err(RecordError::Malformed(format!(
                "expected at least {} fields, got {}",
                schema.min_fields,
                fields.len()
            )));
        }

        let start = parse_number::<u64>(fields[schema.start], "start")?;
        let stop = parse_number::<u64>(fields[schema.stop], "stop")?;
        let score = parse_number::<f64>(fields[schema.score], "score")?;

        if start == 0 {
            return Err(RecordError::Malformed(
                "start must be >= 1 (FIMO coordinates are 1-based)".to_string(),
            ));
        }

        let strand = match fields[schema.strand].trim() {
            "+" => '+',
            "-" => '-',
            "." => '.',
            other => {
                return Err(RecordError::Malformed(format!("invalid strand '{other}'")));
            }
        };

        let optional_number =
            |idx: Option<usize>| idx.and_then(|i| fields.get(i)).and_then(|v| v.parse().ok());

        Ok(Self {
            motif_id: fields[schema.motif_id].to_string(),
            sequence: SequenceName::parse(fields[schema.sequence_name]),
            start,
            stop,
            strand,
            score,
            pvalue: optional_number(schema.pvalue),
            qvalue: optional_number(schema.qvalue),
            matched_sequence: schema
                .matched_sequence
                .and_then(|i| fields.get(i))
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string()),
        })
    }

    /// Half-open genomic span of the full match window.
    ///
    /// For a windowed sequence name this is the fragment window itself;
    /// for a plain chromosome it is the match coordinates converted from
    /// 1-based inclusive to 0-based half-open.
    pub fn window_span(&self) -> Result<(u64, u64), RecordError> {
        let (lo, hi) = match self.sequence.window {
            Some(window) => window,
            None => (self.start - 1, self.stop),
        };
        if lo >= hi {
            return Err(RecordError::InvalidInterval(format!(
                "{}: start {} >= end {}",
                self.sequence.chrom, lo, hi
            )));
        }
        Ok((lo, hi))
    }

    /// Half-open genomic span of the motif match itself.
    ///
    /// Inside a window the match coordinates count from the window's 5'
    /// end, so on `-` the offsets are mirrored onto the other edge.
    pub fn motif_span(&self) -> Result<(u64, u64), RecordError> {
        let Some((lo, hi)) = self.sequence.window else {
            return self.window_span();
        };

        let span = if self.strand == '-' {
            (hi.checked_sub(self.stop), hi.checked_sub(self.start - 1))
        } else {
            (Some(lo + self.start - 1), Some(lo + self.stop))
        };

        match span {
            (Some(ms), Some(me)) if ms < me && ms >= lo && me <= hi => Ok((ms, me)),
            _ => Err(RecordError::InvalidInterval(format!(
                "{}: motif match {}..{} falls outside the window {}-{}",
                self.sequence.chrom, self.start, self.stop, lo, hi
            ))),
        }
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, column: &str) -> Result<T, RecordError> {
    value
        .trim()
        .parse()
        .map_err(|_| RecordError::Malformed(format!("unparseable {column} '{value}'")))
}
