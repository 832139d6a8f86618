// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// File: cli.rs

use std::fs;
use std::process::Command;

#[test]
fn crack_run_prints_matches_and_summary() {
	let dir = tempfile::tempdir().expect("create temp dir");
	let wordlist = dir.path().join("words.txt");
	let digests = dir.path().join("hashes.txt");
	fs::write(&wordlist, "password\nabc\n").expect("write words");
	fs::write(&digests, "900150983cd24fb0d6963f7d28e17f72\n")
		.expect("write digests");

	let output = Command::new(env!("CARGO_BIN_EXE_rch"))
		.args([
			"crack",
			wordlist.to_str().unwrap(),
			digests.to_str().unwrap(),
			"-t",
			"2",
		])
		.output()
		.expect("run crack");
	assert!(
		output.status.success(),
		"crack run failed: {:?}",
		output
	);

	let stdout = String::from_utf8_lossy(&output.stdout);
	let match_line =
		"Match found! Word: abc | Hash: 900150983cd24fb0d6963f7d28e17f72";
	assert!(
		stdout.contains(match_line),
		"match line missing:\n{}",
		stdout
	);
	assert!(
		stdout.contains("Execution time:"),
		"summary timing missing:\n{}",
		stdout
	);
	assert!(
		stdout.contains("Total matches found: 1"),
		"summary count missing:\n{}",
		stdout
	);
}

#[test]
fn zero_threads_fails_without_touching_the_output_file() {
	let dir = tempfile::tempdir().expect("create temp dir");
	let wordlist = dir.path().join("words.txt");
	let digests = dir.path().join("hashes.txt");
	let report = dir.path().join("matches.txt");
	fs::write(&wordlist, "abc\n").expect("write words");
	fs::write(&digests, "d41d8cd98f00b204e9800998ecf8427e\n")
		.expect("write digests");
	fs::write(&report, "previous run\n").expect("seed report");

	let output = Command::new(env!("CARGO_BIN_EXE_rch"))
		.args([
			"crack",
			wordlist.to_str().unwrap(),
			digests.to_str().unwrap(),
			"--threads",
			"0",
			"--output",
			report.to_str().unwrap(),
		])
		.output()
		.expect("run crack");
	assert!(
		!output.status.success(),
		"zero threads should fail: {:?}",
		output
	);

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(
		stderr.contains("worker count"),
		"config error missing:\n{}",
		stderr
	);
	let report_contents =
		fs::read_to_string(&report).expect("read report");
	assert_eq!(report_contents, "previous run\n");
}

#[test]
fn missing_wordlist_reports_the_path() {
	let dir = tempfile::tempdir().expect("create temp dir");
	let wordlist = dir.path().join("absent.txt");
	let digests = dir.path().join("hashes.txt");
	fs::write(&digests, "d41d8cd98f00b204e9800998ecf8427e\n")
		.expect("write digests");

	let output = Command::new(env!("CARGO_BIN_EXE_rch"))
		.args([
			"crack",
			wordlist.to_str().unwrap(),
			digests.to_str().unwrap(),
			"-t",
			"1",
		])
		.output()
		.expect("run crack");
	assert!(
		!output.status.success(),
		"missing word list should fail: {:?}",
		output
	);

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(
		stderr.contains("cannot read word list"),
		"load error missing:\n{}",
		stderr
	);
	assert!(
		stderr.contains("absent.txt"),
		"path missing from error:\n{}",
		stderr
	);
}
