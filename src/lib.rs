// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// File: lib.rs

pub mod rch {
	pub mod app;
	pub mod digest;
	pub mod engine;
	pub mod error;
	pub mod partition;
	pub mod report;
	pub mod targets;
	pub mod wordlist;
}
