//! Actions shared by every editor frame.

use solder_primitives::{Hotkey, Modifiers, NamedKey};

use crate::action::{ActionDef, ActionFlags};

const CTRL: Modifiers = Modifiers::CTRL;
const CTRL_SHIFT: Modifiers = Modifiers::CTRL.union(Modifiers::SHIFT);

/// Cancels the current interactive operation.
///
/// Busy tools roll back their in-progress edit; idle tools finish.
pub const CANCEL_INTERACTIVE: ActionDef = ActionDef::new("common.Interactive.cancel")
	.global()
	.key(Hotkey::named(NamedKey::Escape))
	.label("Cancel")
	.description("Cancel current tool")
	.icon("cancel");

/// Asks tools to refresh their context menus.
pub const UPDATE_MENU: ActionDef = ActionDef::new("common.Interactive.updateMenu").flags(ActionFlags::NOTIFY_ONLY);

pub const UNDO: ActionDef = ActionDef::new("common.Interactive.undo")
	.global()
	.key(Hotkey::char('Z').with(CTRL))
	.legacy("Undo")
	.label("Undo")
	.icon("undo");

pub const REDO: ActionDef = ActionDef::new("common.Interactive.redo")
	.global()
	.key(Hotkey::char('Y').with(CTRL))
	.legacy("Redo")
	.label("Redo")
	.icon("redo");

pub const CUT: ActionDef = ActionDef::new("common.Interactive.cut")
	.global()
	.key(Hotkey::char('X').with(CTRL))
	.legacy("Cut")
	.label("Cut");

pub const COPY: ActionDef = ActionDef::new("common.Interactive.copy")
	.global()
	.key(Hotkey::char('C').with(CTRL))
	.legacy("Copy")
	.label("Copy");

pub const PASTE: ActionDef = ActionDef::new("common.Interactive.paste")
	.global()
	.key(Hotkey::char('V').with(CTRL))
	.legacy("Paste")
	.label("Paste");

pub const DELETE: ActionDef = ActionDef::new("common.Interactive.delete")
	.global()
	.key(Hotkey::named(NamedKey::Delete))
	.legacy("Delete Item")
	.label("Delete");

pub const ZOOM_IN: ActionDef = ActionDef::new("common.Control.zoomIn")
	.global()
	.key(Hotkey::function(1))
	.legacy("Zoom In")
	.label("Zoom In at Cursor");

pub const ZOOM_OUT: ActionDef = ActionDef::new("common.Control.zoomOut")
	.global()
	.key(Hotkey::function(2))
	.legacy("Zoom Out")
	.label("Zoom Out at Cursor");

pub const ZOOM_FIT_SCREEN: ActionDef = ActionDef::new("common.Control.zoomFitScreen")
	.global()
	.key(Hotkey::named(NamedKey::Home))
	.legacy("Zoom Auto")
	.label("Zoom to Fit");

pub const LIST_HOTKEYS: ActionDef = ActionDef::new("common.Control.listHotKeys")
	.global()
	.key(Hotkey::function(1).with(CTRL))
	.legacy("List Hotkeys")
	.label("List Hotkeys...");

pub const SELECTION_TOOL: ActionDef = ActionDef::new("common.InteractiveSelection.selectionTool")
	.global()
	.label("Select item(s)")
	.flags(ActionFlags::ACTIVATES_TOOL);

pub const MEASURE_TOOL: ActionDef = ActionDef::new("common.InteractiveEdit.measureTool")
	.global()
	.key(Hotkey::char('M').with(CTRL_SHIFT))
	.legacy("Measure Distance (Modern Toolset only)")
	.label("Measure Tool")
	.flags(ActionFlags::ACTIVATES_TOOL);

pub const QUIT: ActionDef = ActionDef::new("common.Control.quit")
	.global()
	.key(Hotkey::char('Q').with(CTRL))
	.label("Quit");

/// Every common declaration, in registration order.
pub const COMMON_ACTIONS: &[ActionDef] = &[
	CANCEL_INTERACTIVE,
	UPDATE_MENU,
	UNDO,
	REDO,
	CUT,
	COPY,
	PASTE,
	DELETE,
	ZOOM_IN,
	ZOOM_OUT,
	ZOOM_FIT_SCREEN,
	LIST_HOTKEYS,
	SELECTION_TOOL,
	MEASURE_TOOL,
	QUIT,
];
