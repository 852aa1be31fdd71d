//! End-to-end tests of the assembly-stats binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn mapped_record(name: &str, start: u64, mapped_length: u64, edit: u64, bases: usize) -> String {
    format!(
        ">ContigName={name},ContigLength={bases},MappedStartPositionInContig=1,ReferenceID=chr1,\
         MappedStartPositionInReference={start},MappedLength={mapped_length},Insertion=0,\
         Deletion=0,Mismatch={edit},EditDistance={edit}\n{}\n",
        "A".repeat(bases)
    )
}

fn cmd() -> Command {
    Command::cargo_bin("assembly-stats").unwrap()
}

/// The data row of a stat file, split into columns
fn stat_row(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).unwrap();
    let mut lines = text.lines();
    lines.next().unwrap();
    lines.next().unwrap().split('\t').map(String::from).collect()
}

#[test]
fn test_denovo_three_contigs() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "contigs.fa",
        &format!(
            ">c1\n{}\n>c2\n{}\n>c3\n{}\n",
            "A".repeat(100),
            "C".repeat(50),
            "G".repeat(25)
        ),
    );

    cmd()
        .args(["denovo", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("n\tn:N50\tmin\tN80\tN50\tN20\tN50M"));

    let row = stat_row(&dir.path().join("contigs.stat.txt"));
    assert_eq!(row.len(), 16);
    assert_eq!(&row[..6], &["3", "0", "25", "50", "100", "100"]);
    assert_eq!(row[13], "100");
    assert_eq!(row[14], "175");
    assert_eq!(row[15], input.display().to_string());
    assert!(!dir.path().join("contigs.filtered.fasta").exists());
}

#[test]
fn test_denovo_min_length_writes_filtered_fasta() {
    let dir = TempDir::new().unwrap();
    let input = write(
        dir.path(),
        "contigs.fa",
        ">keep\nACGTACGTACGT\n>drop\nACG\n",
    );

    cmd()
        .args(["denovo", "-m", "10", "-i"])
        .arg(&input)
        .assert()
        .success();

    let filtered = fs::read_to_string(dir.path().join("contigs.filtered.fasta")).unwrap();
    assert!(filtered.contains(">keep"));
    assert!(!filtered.contains(">drop"));

    let row = stat_row(&dir.path().join("contigs.stat.txt"));
    assert_eq!(row[0], "1");
    assert_eq!(row[14], "12");
}

#[test]
fn test_denovo_empty_input_reports_zeros() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "empty.fa", "");

    cmd().args(["denovo", "-i"]).arg(&input).assert().success();

    let row = stat_row(&dir.path().join("empty.stat.txt"));
    assert!(row[..15].iter().all(|v| v == "0"));
}

#[test]
fn test_mapped_coverage_ten_percent() {
    let dir = TempDir::new().unwrap();
    let reference = write(dir.path(), "ref.fa", &format!(">chr1\n{}\n", "A".repeat(1000)));
    let input = write(dir.path(), "mapped.fa", &mapped_record("c1", 501, 100, 0, 100));

    cmd()
        .args(["mapped", "-i"])
        .arg(&input)
        .arg("-r")
        .arg(&reference)
        .assert()
        .success();

    let row = stat_row(&dir.path().join("mapped.stat.txt"));
    assert_eq!(row.len(), 10);
    assert_eq!(row[8], "10.00");
}

#[test]
fn test_mapped_identity_filter() {
    let dir = TempDir::new().unwrap();
    let reference = write(dir.path(), "ref.fa", &format!(">chr1\n{}\n", "A".repeat(1000)));
    let input = write(
        dir.path(),
        "mapped.fa",
        &format!(
            "{}{}",
            mapped_record("low", 1, 100, 10, 100),
            mapped_record("high", 101, 100, 2, 100)
        ),
    );

    cmd()
        .args(["mapped", "-q", "0.95", "-i"])
        .arg(&input)
        .arg("-r")
        .arg(&reference)
        .assert()
        .success();

    let filtered = fs::read_to_string(dir.path().join("mapped.filtered.fasta")).unwrap();
    assert!(filtered.contains("ContigName=high"));
    assert!(!filtered.contains("ContigName=low"));

    let row = stat_row(&dir.path().join("mapped.stat.txt"));
    assert_eq!(row[0], "1");
    assert_eq!(row[8], "10.00");
}

#[test]
fn test_mapped_all_rejected_reports_zeros() {
    let dir = TempDir::new().unwrap();
    let reference = write(dir.path(), "ref.fa", &format!(">chr1\n{}\n", "A".repeat(1000)));
    let input = write(dir.path(), "mapped.fa", &mapped_record("half", 1, 100, 50, 100));

    cmd()
        .args(["mapped", "-q", "0.9", "-i"])
        .arg(&input)
        .arg("-r")
        .arg(&reference)
        .assert()
        .success();

    let filtered = dir.path().join("mapped.filtered.fasta");
    assert!(filtered.exists());
    assert!(fs::read_to_string(filtered).unwrap().is_empty());

    let row = stat_row(&dir.path().join("mapped.stat.txt"));
    assert_eq!(&row[..9], &["0", "0", "0", "0", "0", "0", "0", "0", "0.00"]);
    assert_eq!(row[9], input.display().to_string());
}

#[test]
fn test_mapped_empty_input_reports_zeros() {
    let dir = TempDir::new().unwrap();
    let reference = write(dir.path(), "ref.fa", &format!(">chr1\n{}\n", "A".repeat(1000)));
    let input = write(dir.path(), "mapped.fa", "");

    cmd()
        .args(["mapped", "-i"])
        .arg(&input)
        .arg("-r")
        .arg(&reference)
        .assert()
        .success();

    let row = stat_row(&dir.path().join("mapped.stat.txt"));
    assert_eq!(&row[..9], &["0", "0", "0", "0", "0", "0", "0", "0", "0.00"]);
    assert!(!dir.path().join("mapped.filtered.fasta").exists());
}

#[test]
fn test_mapped_malformed_description_aborts() {
    let dir = TempDir::new().unwrap();
    let reference = write(dir.path(), "ref.fa", ">chr1\nACGTACGTAC\n");
    let input = write(
        dir.path(),
        "mapped.fa",
        ">ContigName=c1,ContigLength=4,MappedStartPositionInContig=1,ReferenceID=chr1,\
         MappedStartPositionInReference=1,MappedLength=4,Insertion=0,Deletion=0,Mismatch=0\nACGT\n",
    );

    cmd()
        .args(["mapped", "-i"])
        .arg(&input)
        .arg("-r")
        .arg(&reference)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expected 10 comma-separated fields, found 9"));

    assert!(!dir.path().join("mapped.stat.txt").exists());
}

#[test]
fn test_mapped_unknown_reference_aborts() {
    let dir = TempDir::new().unwrap();
    let reference = write(dir.path(), "ref.fa", ">chr2\nACGTACGTAC\n");
    let input = write(dir.path(), "mapped.fa", &mapped_record("c1", 1, 4, 0, 4));

    cmd()
        .args(["mapped", "-i"])
        .arg(&input)
        .arg("-r")
        .arg(&reference)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown reference sequence 'chr1'"));

    assert!(!dir.path().join("mapped.stat.txt").exists());
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write(dir.path(), "contigs.fa", ">a\nACGTACGT\n");

    let output = cmd()
        .args(["--format", "json", "denovo", "-i"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["report"]["n50"], 8);
    assert_eq!(value["report"]["mode"], "denovo");
    assert!(value["filtered_file"].is_null());
}

#[test]
fn test_missing_input_is_usage_error() {
    cmd().arg("denovo").assert().failure().code(2);
}

#[test]
fn test_mapped_missing_reference_is_usage_error() {
    cmd()
        .args(["mapped", "-i", "contigs.fa"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_unknown_mode_is_usage_error() {
    cmd().args(["scaffold", "-i", "x.fa"]).assert().code(2);
}

#[test]
fn test_help_exits_with_usage_code() {
    cmd()
        .args(["denovo", "--help"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--min-length"));
}

#[test]
fn test_version_flags_exit_zero() {
    for flag in ["-v", "-V", "--version"] {
        cmd()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

#[test]
fn test_bad_min_length_is_rejected_before_io() {
    let dir = TempDir::new().unwrap();
    cmd()
        .args(["denovo", "-m", "ten", "-i"])
        .arg(dir.path().join("contigs.fa"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("ten"));

    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}
