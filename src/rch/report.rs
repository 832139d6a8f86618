// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// Module: report
// Purpose: Match record delivery to console and optional file output.

use crate::rch::engine::MatchSummary;
use crate::rch::error::CrackError;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One discovered match: which worker found it, the candidate line and
/// the digest both sides agreed on. The candidate is kept as the raw
/// bytes it was loaded as.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchRecord {
	pub worker: usize,
	pub word: Vec<u8>,
	pub digest: String,
}

impl MatchRecord {
	/// Candidate rendered for the console; non-UTF-8 bytes appear as
	/// replacement characters. The file sink writes the raw bytes.
	pub fn word_lossy(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.word)
	}
}

/// Destination for match records. The aggregator owns the sink and feeds
/// it one record at a time, so implementations need no internal locking.
pub trait MatchSink {
	fn record(&mut self, record: &MatchRecord) -> io::Result<()>;

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Default sink: every match goes to stdout, and to a file when an
/// output path was requested.
pub struct Reporter {
	file: Option<BufWriter<File>>,
}

impl Reporter {
	/// Creates the reporter, opening the output file up front so a bad
	/// path fails before any matching work starts.
	pub fn create(output: Option<&Path>) -> Result<Self, CrackError> {
		let file = match output {
			Some(path) => {
				let file = File::create(path).map_err(|source| {
					CrackError::OutputFile {
						path: path.to_path_buf(),
						source,
					}
				})?;
				Some(BufWriter::new(file))
			}
			None => None,
		};
		Ok(Self { file })
	}
}

impl MatchSink for Reporter {
	fn record(&mut self, record: &MatchRecord) -> io::Result<()> {
		println!(
			"[Worker {}] Match found! Word: {} | Hash: {}",
			record.worker,
			record.word_lossy(),
			record.digest
		);
		if let Some(writer) = self.file.as_mut() {
			writer.write_all(b"Match: ")?;
			writer.write_all(&record.word)?;
			writeln!(writer, " -> {}", record.digest)?;
		}
		Ok(())
	}

	fn flush(&mut self) -> io::Result<()> {
		if let Some(writer) = self.file.as_mut() {
			writer.flush()?;
		}
		Ok(())
	}
}

/// Collecting sink for callers that keep the records instead of
/// printing them.
impl MatchSink for Vec<MatchRecord> {
	fn record(&mut self, record: &MatchRecord) -> io::Result<()> {
		self.push(record.clone());
		Ok(())
	}
}

/// Prints the closing two-line summary, preceded by a blank line so it
/// stands apart from the match log.
pub fn print_summary(summary: &MatchSummary) {
	println!();
	println!(
		"Execution time: {:.2} seconds",
		summary.elapsed.as_secs_f64()
	);
	println!("Total matches found: {}", summary.matches);
}
