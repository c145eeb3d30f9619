//! Hotkey resolution: from a key press to the one action it fires.
//!
//! A key may be bound to several context actions (one per tool that wants it)
//! and to at most one global action. Context actions whose tool is active win,
//! highest tool priority first; the global action is the fallback. A press
//! with Shift whose bucket is empty is looked up once more without Shift;
//! a bound Shift chord never falls through to the unshifted key.

use solder_primitives::{Hotkey, Key, Modifiers, ToolId};
use solder_registry::{ActionId, ActionRegistry, BoundAction, Scope, tool_name_of};
use tracing::trace;

use crate::manager::ToolManager;
use crate::stack::Priority;

/// Read access to tool activity, as needed for hotkey resolution.
pub trait ToolDirectory {
	fn find_tool(&self, name: &str) -> Option<ToolId>;

	/// Priority of an active tool; `None` when inactive.
	fn priority(&self, tool: ToolId) -> Option<Priority>;
}

/// Result of resolving a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyResolution {
	/// A context action of an active tool.
	Context {
		action: ActionId,
		tool: ToolId,
		priority: Priority,
		key: Hotkey,
	},
	/// The global action bound to the key.
	Global { action: ActionId, key: Hotkey },
	Unhandled,
}

impl HotkeyResolution {
	pub fn action(&self) -> Option<ActionId> {
		match *self {
			HotkeyResolution::Context { action, .. } | HotkeyResolution::Global { action, .. } => Some(action),
			HotkeyResolution::Unhandled => None,
		}
	}

	pub fn is_handled(&self) -> bool {
		!matches!(self, HotkeyResolution::Unhandled)
	}
}

/// Picks the action a key press fires, without running it.
pub fn resolve_hotkey(registry: &ActionRegistry, tools: &impl ToolDirectory, key: Key) -> HotkeyResolution {
	let pressed = Hotkey::from(key);
	let hotkeys = registry.hotkeys();
	let lookup = if hotkeys.candidates(pressed).is_empty() && pressed.modifiers().contains(Modifiers::SHIFT) {
		pressed.without_shift()
	} else {
		pressed
	};
	let resolution = resolve_exact(registry, tools, lookup);
	trace!(key = %pressed, ?resolution, "Resolved hotkey");
	resolution
}

fn resolve_exact(registry: &ActionRegistry, tools: &impl ToolDirectory, key: Hotkey) -> HotkeyResolution {
	let candidates = registry.hotkeys().candidates(key);
	if candidates.is_empty() {
		return HotkeyResolution::Unhandled;
	}

	let mut best: Option<(BoundAction, ToolId, Priority)> = None;
	let mut global: Option<BoundAction> = None;
	for &bound in candidates {
		match bound.scope {
			Scope::Global => {
				debug_assert!(global.is_none(), "hotkey {key} has more than one global action");
				global = Some(bound);
			}
			Scope::Context => {
				let Some(action) = registry.get(bound.id) else {
					continue;
				};
				let Some(tool) = tools.find_tool(tool_name_of(action.name())) else {
					continue;
				};
				let Some(priority) = tools.priority(tool) else {
					continue;
				};
				if best.is_none_or(|(_, _, current)| priority > current) {
					best = Some((bound, tool, priority));
				}
			}
		}
	}

	match (best, global) {
		(Some((bound, tool, priority)), _) => HotkeyResolution::Context {
			action: bound.id,
			tool,
			priority,
			key,
		},
		(None, Some(bound)) => HotkeyResolution::Global { action: bound.id, key },
		(None, None) => HotkeyResolution::Unhandled,
	}
}

/// Resolves a key press and runs the chosen action through the manager.
///
/// Returns true when an action was fired, whether or not a tool consumed it.
pub fn run_hotkey<M>(registry: &ActionRegistry, tools: &mut ToolManager<M>, model: &mut M, key: Key) -> bool {
	let Some(action) = resolve_hotkey(registry, &*tools, key).action() else {
		return false;
	};
	tools.run_action(registry, model, action, true).is_ok()
}

#[cfg(test)]
mod tests;
