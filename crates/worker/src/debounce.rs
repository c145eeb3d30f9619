//! Restartable one-shot timers.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;

use crate::spawn::spawn;
use crate::token::{GenerationClock, GenerationToken};
use crate::TaskClass;

/// A debounce timer that ran out, as delivered to the owning loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elapsed<T> {
	pub generation: u64,
	pub payload: T,
}

/// One-shot timer that restarts on every [`schedule`](Self::schedule).
///
/// When the delay passes without another schedule or a cancel, an
/// [`Elapsed`] is sent on the channel. The receiver hands it back through
/// [`accept`](Self::accept), which drops messages from superseded timers, so a
/// payload is observed at most once per schedule even if a cancel races the
/// send.
#[derive(Debug)]
pub struct Debouncer<T> {
	delay: Duration,
	tx: mpsc::UnboundedSender<Elapsed<T>>,
	clock: GenerationClock,
	pending: Option<GenerationToken>,
}

impl<T: Send + 'static> Debouncer<T> {
	pub fn new(delay: Duration, tx: mpsc::UnboundedSender<Elapsed<T>>) -> Self {
		Self {
			delay,
			tx,
			clock: GenerationClock::new(),
			pending: None,
		}
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Changes the delay used by later schedules.
	pub fn set_delay(&mut self, delay: Duration) {
		self.delay = delay;
	}

	/// Cancels any pending timer and starts a new one; returns its generation.
	pub fn schedule(&mut self, payload: T) -> u64 {
		self.cancel();

		let token = GenerationToken::new(self.clock.next());
		let generation = token.generation();
		let task_token = token.clone();
		let delay = self.delay;
		let tx = self.tx.clone();
		spawn(TaskClass::Interactive, async move {
			tokio::select! {
				biased;
				() = task_token.cancelled() => {
					trace!(generation, "debounce.cancelled");
				}
				() = tokio::time::sleep(delay) => {
					if tx.send(Elapsed { generation, payload }).is_err() {
						trace!(generation, "debounce.receiver_closed");
					}
				}
			}
		});

		trace!(generation, delay_ms = delay.as_millis() as u64, "debounce.scheduled");
		self.pending = Some(token);
		generation
	}

	/// Cancels the pending timer; returns false if none was pending.
	pub fn cancel(&mut self) -> bool {
		match self.pending.take() {
			Some(token) => {
				token.cancel();
				true
			}
			None => false,
		}
	}

	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Accepts a delivered timer; returns the payload only if it belongs to
	/// the timer currently pending.
	pub fn accept(&mut self, elapsed: Elapsed<T>) -> Option<T> {
		match &self.pending {
			Some(token) if token.generation() == elapsed.generation => {
				self.pending = None;
				Some(elapsed.payload)
			}
			_ => {
				trace!(generation = elapsed.generation, "debounce.stale");
				None
			}
		}
	}
}

impl<T> Drop for Debouncer<T> {
	fn drop(&mut self) {
		if let Some(token) = self.pending.take() {
			token.cancel();
		}
	}
}
