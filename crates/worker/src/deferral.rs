//! Switching expensive recomputation from eager to deferred.

use std::time::{Duration, Instant};

use tracing::debug;

/// Tracks whether a recomputation is too slow to run on every event.
///
/// Starts in eager mode. A single run slower than the threshold switches to
/// slow mode, where callers defer the work to a timer instead. Slow mode lasts
/// until [`reset`](Self::reset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveDeferral {
	threshold: Duration,
	slow: bool,
}

impl AdaptiveDeferral {
	pub fn new(threshold: Duration) -> Self {
		Self { threshold, slow: false }
	}

	pub fn threshold(&self) -> Duration {
		self.threshold
	}

	pub fn set_threshold(&mut self, threshold: Duration) {
		self.threshold = threshold;
	}

	pub fn is_slow(&self) -> bool {
		self.slow
	}

	/// Runs `work` inline and records how long it took.
	pub fn run_timed<R>(&mut self, work: impl FnOnce() -> R) -> R {
		let started = Instant::now();
		let out = work();
		self.record(started.elapsed());
		out
	}

	/// Records one eager run; returns true if it switched to slow mode.
	pub fn record(&mut self, elapsed: Duration) -> bool {
		if self.slow || elapsed <= self.threshold {
			return false;
		}
		self.slow = true;
		debug!(
			elapsed_ms = elapsed.as_millis() as u64,
			threshold_ms = self.threshold.as_millis() as u64,
			"Recomputation too slow; deferring"
		);
		true
	}

	/// Returns to eager mode.
	pub fn reset(&mut self) {
		self.slow = false;
	}
}
