//! PCB editor action declarations.

use solder_primitives::{Hotkey, Modifiers};
use solder_registry::{ActionDef, ActionFlags};

/// Starts footprint placement.
pub const PLACE_FOOTPRINT: ActionDef = ActionDef::new("pcbnew.PlacementTool.placeFootprint")
	.global()
	.key(Hotkey::char('O'))
	.legacy("Add Footprint")
	.label("Add Footprint")
	.description("Add a footprint")
	.icon("module")
	.flags(ActionFlags::ACTIVATES_TOOL);

/// Rotates the footprint being placed.
pub const ROTATE_CW: ActionDef = ActionDef::new("pcbnew.PlacementTool.rotateCw")
	.key(Hotkey::char('R'))
	.legacy("Rotate Item")
	.label("Rotate Clockwise")
	.icon("rotate_cw");

pub const SELECTION_CLEAR: ActionDef = ActionDef::new("pcbnew.InteractiveSelection.Clear").label("Clear Selection");

pub const UPDATE_LOCAL_RATSNEST: ActionDef = ActionDef::new("pcbnew.Control.updateLocalRatsnest")
	.global()
	.flags(ActionFlags::NOTIFY_ONLY);

pub const HIDE_DYNAMIC_RATSNEST: ActionDef = ActionDef::new("pcbnew.Control.hideDynamicRatsnest")
	.global()
	.flags(ActionFlags::NOTIFY_ONLY);

pub const LOCAL_RATSNEST_TOOL: ActionDef = ActionDef::new("pcbnew.Control.localRatsnestTool")
	.global()
	.label("Highlight Ratsnest")
	.description("Show ratsnest of selected item(s)")
	.icon("tool_ratsnest");

pub const TRACK_WIDTH_INC: ActionDef = ActionDef::new("pcbnew.Control.trackWidthInc")
	.global()
	.key(Hotkey::char('W'))
	.legacy("Switch Track Width To Next")
	.label("Switch Track Width to Next");

pub const TRACK_WIDTH_DEC: ActionDef = ActionDef::new("pcbnew.Control.trackWidthDec")
	.global()
	.key(Hotkey::char('W').with(Modifiers::SHIFT))
	.legacy("Switch Track Width To Previous")
	.label("Switch Track Width to Previous");

pub const PCB_ACTIONS: &[ActionDef] = &[
	PLACE_FOOTPRINT,
	ROTATE_CW,
	SELECTION_CLEAR,
	UPDATE_LOCAL_RATSNEST,
	HIDE_DYNAMIC_RATSNEST,
	LOCAL_RATSNEST_TOOL,
	TRACK_WIDTH_INC,
	TRACK_WIDTH_DEC,
];
