//! Dynamic ratsnest shown while items are being moved.
//!
//! Recomputing the ratsnest runs eagerly on every update until one run is
//! slower than the configured threshold. From then on updates hide the
//! ratsnest and restart a debounce timer; the recomputation happens when the
//! timer fires. Hiding the dynamic ratsnest returns to eager mode.

use solder_primitives::Point;
use solder_worker::{AdaptiveDeferral, Debouncer, Elapsed};
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::board::{Board, ItemId};
use crate::config::RatsnestConfig;

/// Timer message delivered back to the editor loop.
pub type RatsnestTick = Elapsed<()>;

/// One unrouted connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatsnestLine {
	pub from: Point,
	pub to: Point,
}

/// Source of unrouted connections for a set of moving items.
pub trait Connectivity {
	fn ratsnest_lines(&self, moving: &[ItemId]) -> Vec<RatsnestLine>;
}

/// Connects each moving item to the nearest stationary item in its net.
impl Connectivity for Board {
	fn ratsnest_lines(&self, moving: &[ItemId]) -> Vec<RatsnestLine> {
		let mut lines = Vec::new();
		for &id in moving {
			let Some(item) = self.item(id) else {
				continue;
			};
			let Some(net) = item.net else {
				continue;
			};
			let nearest = self
				.items()
				.filter(|(other, candidate)| !moving.contains(other) && candidate.net == Some(net))
				.min_by_key(|(_, candidate)| {
					let dx = candidate.position.x - item.position.x;
					let dy = candidate.position.y - item.position.y;
					dx * dx + dy * dy
				});
			if let Some((_, target)) = nearest {
				lines.push(RatsnestLine {
					from: item.position,
					to: target.position,
				});
			}
		}
		lines
	}
}

#[derive(Debug)]
pub struct RatsnestController {
	debouncer: Debouncer<()>,
	deferral: AdaptiveDeferral,
	lines: Vec<RatsnestLine>,
	visible: bool,
	refreshes: u64,
}

impl RatsnestController {
	pub fn new(config: &RatsnestConfig, ticks: mpsc::UnboundedSender<RatsnestTick>) -> Self {
		Self {
			debouncer: Debouncer::new(config.debounce(), ticks),
			deferral: AdaptiveDeferral::new(config.slow_threshold()),
			lines: Vec::new(),
			visible: false,
			refreshes: 0,
		}
	}

	/// Reacts to a change of the moving items.
	pub fn update(&mut self, connectivity: &impl Connectivity, moving: &[ItemId]) {
		if moving.is_empty() {
			self.debouncer.cancel();
			self.lines.clear();
			self.visible = false;
			trace!("ratsnest.cleared");
			return;
		}
		if self.deferral.is_slow() {
			self.visible = false;
			let generation = self.debouncer.schedule(());
			trace!(generation, "ratsnest.deferred");
			return;
		}
		self.lines = self.deferral.run_timed(|| connectivity.ratsnest_lines(moving));
		self.visible = true;
		self.refreshes += 1;
	}

	/// Handles a fired timer; returns true if the ratsnest was recomputed.
	pub fn on_timer(&mut self, tick: RatsnestTick, connectivity: &impl Connectivity, moving: &[ItemId]) -> bool {
		if self.debouncer.accept(tick).is_none() {
			return false;
		}
		self.lines = connectivity.ratsnest_lines(moving);
		self.visible = true;
		self.refreshes += 1;
		trace!(lines = self.lines.len(), "ratsnest.refreshed");
		true
	}

	/// Hides the dynamic ratsnest and returns to eager updates.
	pub fn hide(&mut self) {
		self.debouncer.cancel();
		self.lines.clear();
		self.visible = false;
		if self.deferral.is_slow() {
			debug!("Dynamic ratsnest back to eager updates");
		}
		self.deferral.reset();
	}

	pub fn lines(&self) -> &[RatsnestLine] {
		&self.lines
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn is_slow(&self) -> bool {
		self.deferral.is_slow()
	}

	/// True while a deferred refresh is waiting on its timer.
	pub fn is_pending(&self) -> bool {
		self.debouncer.is_pending()
	}

	/// Number of recomputations so far.
	pub fn refreshes(&self) -> u64 {
		self.refreshes
	}
}

#[cfg(test)]
mod tests;
