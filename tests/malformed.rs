use fimo2bed::{run, Config, RunStats};
use indoc::indoc;
use std::io::Cursor;

fn convert(config: &Config, input: &str) -> (Vec<String>, RunStats) {
    let mut output = Vec::new();
    let stats = run(config, Cursor::new(input), &mut output).unwrap();
    let text = String::from_utf8(output).unwrap();
    (text.lines().map(|line| line.to_string()).collect(), stats)
}

fn config(set: &str) -> Config {
    Config {
        set: set.to_string(),
        sort: false,
        drop_duplicates: false,
        shift: false,
        center: None,
    }
}

/// A line with too few fields is skipped; the run still succeeds.
#[test]
fn too_few_fields_is_skipped() {
    let fimo = "CTCF\tchr1\t101\n";

    let (lines, stats) = convert(&config("s"), fimo);

    assert!(lines.is_empty());
    assert_eq!(stats.malformed, 1);
    assert_eq!(stats.emitted, 0);
}

/// Non-numeric start/stop/score are malformed records.
#[test]
fn unparseable_numbers_are_skipped() {
    let fimo = indoc! {"
        CTCF\tchr1\tabc\t150\t+\t9\t1e-5\t0.01\tAAAA
        CTCF\tchr1\t101\txyz\t+\t9\t1e-5\t0.01\tAAAA
        CTCF\tchr1\t101\t150\t+\tnot-a-score\t1e-5\t0.01\tAAAA
    "};

    let (lines, stats) = convert(&config("s"), fimo);

    assert!(lines.is_empty());
    assert_eq!(stats.malformed, 3);
}

/// FIMO coordinates are 1-based; a start of 0 is malformed.
#[test]
fn zero_start_is_skipped() {
    let fimo = "CTCF\tchr1\t0\t150\t+\t9\t1e-5\t0.01\tAAAA\n";

    let (_, stats) = convert(&config("s"), fimo);

    assert_eq!(stats.malformed, 1);
    assert_eq!(stats.emitted, 0);
}

/// Strand must be one of `+`, `-`, `.`.
#[test]
fn invalid_strand_is_skipped() {
    let fimo = "CTCF\tchr1\t101\t150\t*\t9\t1e-5\t0.01\tAAAA\n";

    let (_, stats) = convert(&config("s"), fimo);

    assert_eq!(stats.malformed, 1);
}

/// start > stop converts to an empty-or-inverted interval and is
/// dropped as invalid, not malformed.
#[test]
fn inverted_interval_is_dropped() {
    let fimo = "CTCF\tchr1\t150\t100\t+\t9\t1e-5\t0.01\tAAAA\n";

    let (lines, stats) = convert(&config("s"), fimo);

    assert!(lines.is_empty());
    assert_eq!(stats.malformed, 0);
    assert_eq!(stats.invalid, 1);
}

/// With --shift, motif offsets past the window edge are invalid; the
/// same record converts fine when the window itself is emitted.
#[test]
fn motif_outside_window_is_invalid_only_when_shifting() {
    let fimo = "CTCF\tchr1:1000-1100\t11\t300\t+\t9\t1e-5\t0.01\tAAAA\n";

    let (lines, stats) = convert(&config("s"), fimo);
    assert_eq!(lines.len(), 1);
    assert_eq!(stats.invalid, 0);

    let mut shifted = config("s");
    shifted.shift = true;
    let (lines, stats) = convert(&shifted, fimo);
    assert!(lines.is_empty());
    assert_eq!(stats.invalid, 1);
}

/// Bad lines never poison their neighbors; counts add up.
#[test]
fn valid_records_survive_mixed_input() {
    let fimo = indoc! {"
        CTCF\tchr1\t101\t150\t+\t16.3\t1e-5\t0.01\tAAAA
        CTCF\tchr1\tbroken
        CTCF\tchr2\t150\t100\t+\t9\t1e-5\t0.01\tAAAA
        CTCF\tchr2\t501\t540\t-\t12.5\t1e-5\t0.01\tAAAA
    "};

    let (lines, stats) = convert(&config("s"), fimo);

    assert_eq!(
        lines,
        vec![
            "chr1\t100\t150\tchr1:100-150|s_1\t16.3\t+",
            "chr2\t500\t540\tchr2:500-540|s_2\t12.5\t-",
        ]
    );
    assert_eq!(stats.lines, 4);
    assert_eq!(stats.parsed, 2);
    assert_eq!(stats.malformed, 1);
    assert_eq!(stats.invalid, 1);
    assert_eq!(stats.emitted, 2);
}
