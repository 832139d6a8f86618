// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// File: main.rs

use rustcrackhash::rch::app;

fn main() {
	if let Err(err) = app::run() {
		eprintln!("Error: {}", err);
		std::process::exit(1);
	}
}
