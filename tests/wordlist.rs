// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// File: wordlist.rs

use rustcrackhash::rch::wordlist::load_lines;
use std::io::Write;
use tempfile::NamedTempFile;

fn fixture(contents: &[u8]) -> NamedTempFile {
	let mut file = NamedTempFile::new().expect("create temp file");
	file.write_all(contents).expect("write fixture");
	file.flush().expect("flush fixture");
	file
}

#[test]
fn loads_lines_in_order() {
	let file = fixture(b"alpha\nbeta\ngamma\n");
	let lines = load_lines(file.path()).expect("load fixture");
	assert_eq!(
		lines,
		vec![b"alpha".to_vec(), b"beta".to_vec(), b"gamma".to_vec()]
	);
}

#[test]
fn strips_carriage_return_newline_terminators() {
	let file = fixture(b"one\r\ntwo\r\nthree");
	let lines = load_lines(file.path()).expect("load fixture");
	assert_eq!(
		lines,
		vec![b"one".to_vec(), b"two".to_vec(), b"three".to_vec()]
	);
}

#[test]
fn strips_a_trailing_carriage_return_at_end_of_file() {
	let file = fixture(b"one\ntwo\r");
	let lines = load_lines(file.path()).expect("load fixture");
	assert_eq!(lines, vec![b"one".to_vec(), b"two".to_vec()]);
}

#[test]
fn keeps_interior_empty_lines() {
	let file = fixture(b"first\n\nthird\n");
	let lines = load_lines(file.path()).expect("load fixture");
	assert_eq!(
		lines,
		vec![b"first".to_vec(), Vec::new(), b"third".to_vec()]
	);
}

#[test]
fn keeps_a_final_line_without_terminator() {
	let file = fixture(b"last-line");
	let lines = load_lines(file.path()).expect("load fixture");
	assert_eq!(lines, vec![b"last-line".to_vec()]);
}

#[test]
fn keeps_non_utf8_bytes_verbatim() {
	let file = fixture(b"abc\ncaf\xe9\npassword\n");
	let lines = load_lines(file.path()).expect("load fixture");
	assert_eq!(
		lines,
		vec![
			b"abc".to_vec(),
			b"caf\xe9".to_vec(),
			b"password".to_vec()
		]
	);
}

#[test]
fn empty_file_loads_an_empty_list() {
	let file = fixture(b"");
	let lines = load_lines(file.path()).expect("load fixture");
	assert!(lines.is_empty());
}

#[test]
fn preserves_case_and_interior_whitespace() {
	let file = fixture(b"  Padded Word \nUPPER\n");
	let lines = load_lines(file.path()).expect("load fixture");
	assert_eq!(
		lines,
		vec![b"  Padded Word ".to_vec(), b"UPPER".to_vec()]
	);
}

#[test]
fn missing_file_is_an_error() {
	let dir = tempfile::tempdir().expect("create temp dir");
	let absent = dir.path().join("absent.txt");
	assert!(load_lines(&absent).is_err());
}
