// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// Module: error

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CrackError {
	Config(String),
	WordList { path: PathBuf, source: io::Error },
	DigestList { path: PathBuf, source: io::Error },
	OutputFile { path: PathBuf, source: io::Error },
	Report(io::Error),
	WorkerPanic,
}

impl CrackError {
	pub fn config(message: impl Into<String>) -> Self {
		Self::Config(message.into())
	}
}

impl fmt::Display for CrackError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			CrackError::Config(msg) => write!(f, "{}", msg),
			CrackError::WordList { path, source } => write!(
				f,
				"cannot read word list {}: {}",
				path.display(),
				source
			),
			CrackError::DigestList { path, source } => write!(
				f,
				"cannot read digest list {}: {}",
				path.display(),
				source
			),
			CrackError::OutputFile { path, source } => write!(
				f,
				"cannot create output file {}: {}",
				path.display(),
				source
			),
			CrackError::Report(err) => {
				write!(f, "cannot write match report: {}", err)
			}
			CrackError::WorkerPanic => {
				write!(f, "a worker thread terminated abnormally")
			}
		}
	}
}

impl Error for CrackError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			CrackError::WordList { source, .. } => Some(source),
			CrackError::DigestList { source, .. } => Some(source),
			CrackError::OutputFile { source, .. } => Some(source),
			CrackError::Report(err) => Some(err),
			_ => None,
		}
	}
}
