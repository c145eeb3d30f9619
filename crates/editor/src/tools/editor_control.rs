//! Board-wide commands that do not need an interactive mode.

use solder_registry::builtins::QUIT;
use solder_tool::{Flow, Tool, ToolContext, ToolEvent};
use tracing::debug;

use crate::actions::{HIDE_DYNAMIC_RATSNEST, LOCAL_RATSNEST_TOOL, TRACK_WIDTH_DEC, TRACK_WIDTH_INC, UPDATE_LOCAL_RATSNEST};
use crate::board::TRACK_WIDTH_STEP;
use crate::model::PcbModel;

pub const NAME: &str = "pcbnew.Control";

#[derive(Debug, Default)]
pub struct EditorControl;

impl EditorControl {
	pub fn new() -> Self {
		Self
	}
}

impl Tool<PcbModel> for EditorControl {
	fn name(&self) -> &str {
		NAME
	}

	fn handle(&mut self, event: &ToolEvent, cx: &mut ToolContext<'_, PcbModel>) -> Flow {
		let model = cx.model_mut();
		if event.is_action(&UPDATE_LOCAL_RATSNEST) {
			model.refresh_ratsnest();
		} else if event.is_action(&HIDE_DYNAMIC_RATSNEST) {
			model.ratsnest.hide();
		} else if event.is_action(&LOCAL_RATSNEST_TOOL) {
			model.local_ratsnest = !model.local_ratsnest;
			if model.local_ratsnest {
				model.refresh_ratsnest();
			} else {
				model.ratsnest.hide();
			}
		} else if event.is_action(&TRACK_WIDTH_INC) {
			model.board.set_track_width(model.board.track_width() + TRACK_WIDTH_STEP);
			debug!(width = model.board.track_width(), "Track width");
		} else if event.is_action(&TRACK_WIDTH_DEC) {
			model.board.set_track_width(model.board.track_width() - TRACK_WIDTH_STEP);
			debug!(width = model.board.track_width(), "Track width");
		} else if event.is_action(&QUIT) {
			model.quit_requested = true;
		} else {
			return Flow::Pass;
		}
		Flow::Consumed
	}
}
