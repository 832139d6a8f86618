// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustcrackhash
// Module: partition

//! Strided assignment of candidate indices to workers.
//!
//! Worker `w` out of `n` gets indices `w, w + n, w + 2n, ...` below the
//! list length. Interleaving balances load when expensive candidates
//! cluster, at the cost of cache locality on the candidate list.

/// Returns the indices assigned to `worker` out of `workers` over a list
/// of `len` candidates.
///
/// Every index in `[0, len)` is yielded by exactly one `(worker, workers)`
/// pair. Workers with an id at or beyond `len` receive an empty iterator.
///
/// # Panics
///
/// Panics if `workers` is zero; callers validate the worker count before
/// partitioning.
pub fn assigned_indices(
	worker: usize,
	workers: usize,
	len: usize,
) -> StrideIndices {
	assert!(workers > 0, "worker count must be greater than zero");
	let count = if worker < len {
		(len - worker).div_ceil(workers)
	} else {
		0
	};
	StrideIndices {
		current: worker,
		stride: workers,
		remaining: count,
	}
}

/// Iterator over one worker's strided indices.
pub struct StrideIndices {
	current: usize,
	stride: usize,
	remaining: usize,
}

impl Iterator for StrideIndices {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}
		let val = self.current;
		self.remaining -= 1;
		// Advance only while another index remains; the next value is
		// below the list length, so the cursor cannot overflow.
		if self.remaining > 0 {
			self.current += self.stride;
		}
		Some(val)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl ExactSizeIterator for StrideIndices {}
