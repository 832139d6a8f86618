// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// Module: wordlist

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Loads a newline-delimited file into memory, one entry per line.
///
/// Entries are raw bytes: trailing `\n` and `\r\n` terminators are
/// stripped and nothing else is touched, so interior whitespace, case,
/// empty lines and non-UTF-8 content all survive as loaded.
pub fn load_lines(path: &Path) -> io::Result<Vec<Vec<u8>>> {
	let file = File::open(path)?;
	let mut lines = Vec::new();
	for segment in BufReader::new(file).split(b'\n') {
		let mut line = segment?;
		if line.last() == Some(&b'\r') {
			line.pop();
		}
		lines.push(line);
	}
	Ok(lines)
}
