//! Footprint placement.
//!
//! Idle: a click picks a new footprint at the cursor. Placing: the footprint
//! follows the cursor and can be rotated; a click commits it. Cancel while
//! placing reverts the footprint, cancel while idle finishes the tool.

use solder_primitives::Point;
use solder_tool::{Flow, MouseButton, Tool, ToolContext, ToolEvent};
use tracing::debug;

use crate::actions::{HIDE_DYNAMIC_RATSNEST, PLACE_FOOTPRINT, ROTATE_CW};
use crate::board::{Item, ItemId, ItemKind};
use crate::model::PcbModel;

pub const NAME: &str = "pcbnew.PlacementTool";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
	Idle,
	Placing(ItemId),
}

#[derive(Debug)]
pub struct PlacementTool {
	template: Item,
	prefix: String,
	placed: u32,
	state: PlacementState,
}

impl PlacementTool {
	/// Placed footprints are copies of `template`, numbered `<prefix>1`, `<prefix>2`, ...
	pub fn new(template: Item, prefix: impl Into<String>) -> Self {
		Self {
			template,
			prefix: prefix.into(),
			placed: 0,
			state: PlacementState::Idle,
		}
	}

	pub fn state(&self) -> PlacementState {
		self.state
	}

	fn pick(&mut self, model: &mut PcbModel, at: Point) {
		let mut item = self.template.clone();
		item.position = at;
		item.kind = ItemKind::Footprint {
			reference: format!("{}{}", self.prefix, self.placed + 1),
		};
		let id = model.board.begin_place(item);
		model.board.clear_selection();
		model.board.select(id);
		model.refresh_ratsnest();
		self.state = PlacementState::Placing(id);
	}

	fn abandon(&mut self, model: &mut PcbModel) {
		if let Some(id) = model.board.revert() {
			debug!(%id, "Placement reverted");
		}
		self.state = PlacementState::Idle;
	}
}

impl Tool<PcbModel> for PlacementTool {
	fn name(&self) -> &str {
		NAME
	}

	fn handle(&mut self, event: &ToolEvent, cx: &mut ToolContext<'_, PcbModel>) -> Flow {
		if event.is_cancel_interactive() {
			return match self.state {
				PlacementState::Placing(_) => {
					self.abandon(cx.model_mut());
					cx.run(&HIDE_DYNAMIC_RATSNEST);
					Flow::Consumed
				}
				PlacementState::Idle => Flow::Finish,
			};
		}
		if event.is_action(&PLACE_FOOTPRINT) {
			return Flow::Consumed;
		}

		match self.state {
			PlacementState::Idle => {
				if event.is_click(MouseButton::Left) && let Some(at) = event.position() {
					self.pick(cx.model_mut(), at);
					return Flow::Consumed;
				}
				Flow::Pass
			}
			PlacementState::Placing(id) => {
				if event.is_action(&ROTATE_CW) {
					let model = cx.model_mut();
					model.board.rotate_pending(90);
					model.refresh_ratsnest();
					return Flow::Consumed;
				}
				if let ToolEvent::Motion { at } = *event {
					let model = cx.model_mut();
					model.board.move_pending(at);
					model.refresh_ratsnest();
					return Flow::Consumed;
				}
				if event.is_click(MouseButton::Left) && let Some(at) = event.position() {
					let model = cx.model_mut();
					model.board.move_pending(at);
					model.board.commit();
					model.board.clear_selection();
					self.placed += 1;
					self.state = PlacementState::Idle;
					debug!(%id, placed = self.placed, "Footprint placed");
					cx.run(&HIDE_DYNAMIC_RATSNEST);
					return Flow::Consumed;
				}
				Flow::Pass
			}
		}
	}

	fn deactivate(&mut self, cx: &mut ToolContext<'_, PcbModel>) {
		if matches!(self.state, PlacementState::Placing(_)) {
			self.abandon(cx.model_mut());
		}
	}

	fn reset(&mut self) {
		self.state = PlacementState::Idle;
	}
}

#[cfg(test)]
mod tests;
