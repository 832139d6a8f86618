// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// Module: targets

use crate::rch::digest::DigestAlgorithm;

/// Checks loaded target digests against the shape the selected algorithm
/// produces. The warnings are advisory; the matching run uses the list
/// exactly as loaded.
pub fn audit_targets(
	targets: &[Vec<u8>],
	algorithm: DigestAlgorithm,
) -> Vec<String> {
	let width = algorithm.hex_width();
	let mut warnings = Vec::new();
	for (idx, target) in targets.iter().enumerate() {
		if !is_hex_digest(target, width) {
			warnings.push(format!(
				"digest list line {}: '{}' is not a {} digest ({} lowercase hex characters expected)",
				idx + 1,
				String::from_utf8_lossy(target),
				algorithm,
				width
			));
		}
	}
	warnings
}

fn is_hex_digest(candidate: &[u8], width: usize) -> bool {
	candidate.len() == width
		&& candidate
			.iter()
			.all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase())
}
