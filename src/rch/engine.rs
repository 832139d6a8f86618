// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// Module: engine
// Purpose: Concurrent dictionary matching against a target digest list.

use crate::rch::digest::{DigestAlgorithm, Digester};
use crate::rch::error::CrackError;
use crate::rch::partition::assigned_indices;
use crate::rch::report::{MatchRecord, MatchSink};
use crossbeam_channel::{unbounded, Sender};
use std::io;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Final tally of one matching run.
#[derive(Clone, Copy, Debug)]
pub struct MatchSummary {
	pub matches: u64,
	pub elapsed: Duration,
}

/// The matching core: owns the loaded lists, fans candidates out over a
/// fixed pool of worker threads and aggregates discovered matches.
///
/// Workers never touch the counter or the sink. They send each match
/// over a channel to the calling thread, which owns both, so a match's
/// count and its output line can never diverge.
pub struct MatchEngine {
	words: Arc<Vec<Vec<u8>>>,
	targets: Arc<Vec<Vec<u8>>>,
	algorithm: DigestAlgorithm,
	workers: usize,
}

impl MatchEngine {
	pub fn new(
		words: Vec<Vec<u8>>,
		targets: Vec<Vec<u8>>,
		algorithm: DigestAlgorithm,
		workers: usize,
	) -> Result<Self, CrackError> {
		if workers == 0 {
			return Err(CrackError::config(
				"worker count must be greater than zero",
			));
		}
		Ok(Self {
			words: Arc::new(words),
			targets: Arc::new(targets),
			algorithm,
			workers,
		})
	}

	pub fn word_count(&self) -> usize {
		self.words.len()
	}

	pub fn target_count(&self) -> usize {
		self.targets.len()
	}

	/// Runs the matching phase to completion and returns the tally.
	///
	/// Spawns one thread per worker, drains their match records into
	/// `sink`, then joins the pool. The reported elapsed time covers
	/// spawn to join only. A sink write failure does not stop the
	/// drain; the first failure is surfaced after every worker has
	/// finished, with the counter still accounting for every match.
	pub fn run(
		&self,
		sink: &mut dyn MatchSink,
	) -> Result<MatchSummary, CrackError> {
		let (tx, rx) = unbounded::<MatchRecord>();
		let started = Instant::now();

		let mut handles = Vec::with_capacity(self.workers);
		for worker in 0..self.workers {
			let words = Arc::clone(&self.words);
			let targets = Arc::clone(&self.targets);
			let algorithm = self.algorithm;
			let workers = self.workers;
			let tx = tx.clone();
			handles.push(thread::spawn(move || {
				scan_candidates(
					worker, workers, &words, &targets, algorithm,
					&tx,
				);
			}));
		}
		// The drain below ends once every worker has dropped its
		// sender clone.
		drop(tx);

		let mut matches = 0u64;
		let mut sink_error: Option<io::Error> = None;
		for record in rx {
			matches += 1;
			if sink_error.is_none() {
				if let Err(err) = sink.record(&record) {
					sink_error = Some(err);
				}
			}
		}

		let mut panicked = false;
		for handle in handles {
			if handle.join().is_err() {
				panicked = true;
			}
		}
		let elapsed = started.elapsed();

		if panicked {
			return Err(CrackError::WorkerPanic);
		}
		if let Some(err) = sink_error {
			return Err(CrackError::Report(err));
		}
		sink.flush().map_err(CrackError::Report)?;

		Ok(MatchSummary { matches, elapsed })
	}
}

/// Worker body: hash each assigned candidate once and compare the hex
/// digest's bytes against every target line, reporting each equality as
/// one match. Candidates and targets are arbitrary bytes; a target that
/// is not lowercase hex simply never compares equal.
fn scan_candidates(
	worker: usize,
	workers: usize,
	words: &[Vec<u8>],
	targets: &[Vec<u8>],
	algorithm: DigestAlgorithm,
	matches: &Sender<MatchRecord>,
) {
	let mut digester = Digester::new(algorithm);
	for idx in assigned_indices(worker, workers, words.len()) {
		let digest = digester.hex_digest(&words[idx]);
		for target in targets {
			if target.as_slice() == digest.as_bytes() {
				let record = MatchRecord {
					worker,
					word: words[idx].clone(),
					digest: digest.clone(),
				};
				if matches.send(record).is_err() {
					return;
				}
			}
		}
	}
}
