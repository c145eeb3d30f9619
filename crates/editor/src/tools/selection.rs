//! Base tool: click to select, cancel to deselect.
//!
//! Sits at the bottom of the stack and never finishes.

use solder_registry::builtins::SELECTION_TOOL;
use solder_tool::{Flow, MouseButton, Tool, ToolContext, ToolEvent};

use crate::actions::SELECTION_CLEAR;
use crate::model::PcbModel;

pub const NAME: &str = "pcbnew.InteractiveSelection";

#[derive(Debug, Default)]
pub struct SelectionTool;

impl SelectionTool {
	pub fn new() -> Self {
		Self
	}
}

impl Tool<PcbModel> for SelectionTool {
	fn name(&self) -> &str {
		NAME
	}

	fn handle(&mut self, event: &ToolEvent, cx: &mut ToolContext<'_, PcbModel>) -> Flow {
		if event.is_cancel_interactive() || event.is_action(&SELECTION_CLEAR) {
			let model = cx.model_mut();
			if model.board.clear_selection() {
				model.refresh_ratsnest();
			}
			return Flow::Consumed;
		}
		if event.is_action(&SELECTION_TOOL) {
			return Flow::Consumed;
		}
		if event.is_click(MouseButton::Left) && let Some(at) = event.position() {
			let model = cx.model_mut();
			model.board.clear_selection();
			if let Some(id) = model.board.item_at(at) {
				model.board.select(id);
			}
			if model.local_ratsnest {
				model.refresh_ratsnest();
			}
			return Flow::Consumed;
		}
		Flow::Pass
	}
}
