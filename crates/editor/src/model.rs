use crate::board::Board;
use crate::ratsnest::{RatsnestController, RatsnestTick};

/// Everything the PCB tools edit.
#[derive(Debug)]
pub struct PcbModel {
	pub board: Board,
	pub ratsnest: RatsnestController,
	/// Keep the ratsnest of the selection highlighted.
	pub local_ratsnest: bool,
	pub quit_requested: bool,
}

impl PcbModel {
	pub fn new(board: Board, ratsnest: RatsnestController) -> Self {
		Self {
			board,
			ratsnest,
			local_ratsnest: false,
			quit_requested: false,
		}
	}

	/// Recomputes (or defers) the dynamic ratsnest for the current selection.
	pub fn refresh_ratsnest(&mut self) {
		let moving = self.board.selected_ids();
		self.ratsnest.update(&self.board, &moving);
	}

	pub fn on_ratsnest_timer(&mut self, tick: RatsnestTick) -> bool {
		let moving = self.board.selected_ids();
		self.ratsnest.on_timer(tick, &self.board, &moving)
	}
}
