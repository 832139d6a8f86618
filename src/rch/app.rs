// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// Module: app
// Purpose: Command line surface and run orchestration.

use crate::rch::digest::DigestAlgorithm;
use crate::rch::engine::MatchEngine;
use crate::rch::error::CrackError;
use crate::rch::report::{self, Reporter};
use crate::rch::targets;
use crate::rch::wordlist;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Generator, Shell};
use colored::Colorize;
use std::error::Error;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(
	name = "rch",
	version,
	about = "Run dictionary attacks against lists of cryptographic digests."
)]
pub struct Cmd {
	#[command(subcommand)]
	mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
	/// Hash every candidate word and report the ones matching a target digest
	Crack {
		/// Newline-delimited list of candidate words
		#[arg(value_name = "WORDLIST")]
		wordlist: PathBuf,
		/// Newline-delimited list of target digests (lowercase hex)
		#[arg(value_name = "DIGESTS")]
		digests: PathBuf,
		/// Number of worker threads
		#[arg(short, long)]
		threads: usize,
		/// Digest algorithm the targets were produced with
		#[arg(
			short,
			long,
			value_enum,
			default_value_t = DigestAlgorithm::Md5
		)]
		algorithm: DigestAlgorithm,
		/// Also append one line per match to this file
		#[arg(short, long, value_name = "FILE")]
		output: Option<PathBuf>,
	},
	/// List the supported digest algorithms
	Algorithms,
	/// Generate shell completion scripts
	Completion {
		#[arg(value_enum)]
		shell: Shell,
	},
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let cmd = Cmd::parse();
	match cmd.mode {
		Mode::Crack {
			wordlist,
			digests,
			threads,
			algorithm,
			output,
		} => {
			crack(
				&wordlist,
				&digests,
				threads,
				algorithm,
				output.as_deref(),
			)?;
		}
		Mode::Algorithms => list_algorithms(),
		Mode::Completion { shell } => {
			print_completions(shell, &mut Cmd::command());
		}
	}
	Ok(())
}

/// Setup happens strictly before the pool starts: the worker count is
/// checked before anything is touched, then the output file is created
/// so a bad path aborts the run before any hashing, then both lists are
/// loaded and audited.
fn crack(
	wordlist: &Path,
	digests: &Path,
	threads: usize,
	algorithm: DigestAlgorithm,
	output: Option<&Path>,
) -> Result<(), CrackError> {
	if threads == 0 {
		return Err(CrackError::config(
			"worker count must be greater than zero",
		));
	}
	let mut reporter = Reporter::create(output)?;
	let words = wordlist::load_lines(wordlist).map_err(|source| {
		CrackError::WordList {
			path: wordlist.to_path_buf(),
			source,
		}
	})?;
	let target_list =
		wordlist::load_lines(digests).map_err(|source| {
			CrackError::DigestList {
				path: digests.to_path_buf(),
				source,
			}
		})?;

	for warning in targets::audit_targets(&target_list, algorithm) {
		eprintln!("{}", format!("warning: {}", warning).yellow());
	}

	let engine =
		MatchEngine::new(words, target_list, algorithm, threads)?;
	let summary = engine.run(&mut reporter)?;
	report::print_summary(&summary);
	Ok(())
}

fn list_algorithms() {
	println!("{}", "Supported digest algorithms:".green());
	for algorithm in DigestAlgorithm::iter() {
		println!(
			"  {:<12} {:>3} hex characters",
			algorithm.canonical_name(),
			algorithm.hex_width()
		);
	}
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	generate(
		gen,
		cmd,
		cmd.get_name().to_string(),
		&mut std::io::stdout(),
	);
}
