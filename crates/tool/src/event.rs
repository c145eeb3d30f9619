//! Events delivered to tools.

use std::sync::Arc;

use solder_primitives::{ActionId, Key, Point};
use solder_registry::builtins::CANCEL_INTERACTIVE;
use solder_registry::{Action, ActionDef, tool_name_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
	Left,
	Right,
	Middle,
}

/// An action being run, as seen by tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionEvent {
	pub id: ActionId,
	pub name: Arc<str>,
	/// True when triggered by the user (hotkey, menu) rather than by another tool.
	pub user_invoked: bool,
}

impl ActionEvent {
	pub fn new(action: &Action, user_invoked: bool) -> Self {
		Self {
			id: action.id(),
			name: action.name_arc(),
			user_invoked,
		}
	}

	/// Returns true if this event runs the declared action.
	pub fn is(&self, def: &ActionDef) -> bool {
		*self.name == *def.name
	}

	pub fn tool_name(&self) -> &str {
		tool_name_of(&self.name)
	}
}

/// Everything a tool's event handler can be asked to consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolEvent {
	/// A dispatched action.
	Action(ActionEvent),
	/// A raw key press no action claimed.
	Key(Key),
	Click { button: MouseButton, at: Point },
	DoubleClick { button: MouseButton, at: Point },
	Motion { at: Point },
	/// Cancel issued by the host rather than through the cancel action.
	Cancel,
}

impl ToolEvent {
	pub fn action(&self) -> Option<&ActionEvent> {
		match self {
			ToolEvent::Action(action) => Some(action),
			_ => None,
		}
	}

	/// Returns true if this event runs the declared action.
	pub fn is_action(&self, def: &ActionDef) -> bool {
		self.action().is_some_and(|action| action.is(def))
	}

	/// Cancel from either the host or the global cancel action.
	pub fn is_cancel_interactive(&self) -> bool {
		matches!(self, ToolEvent::Cancel) || self.is_action(&CANCEL_INTERACTIVE)
	}

	pub fn is_click(&self, button: MouseButton) -> bool {
		matches!(self, ToolEvent::Click { button: b, .. } if *b == button)
	}

	pub fn is_motion(&self) -> bool {
		matches!(self, ToolEvent::Motion { .. })
	}

	/// Pointer position carried by the event, if any.
	pub fn position(&self) -> Option<Point> {
		match self {
			ToolEvent::Click { at, .. } | ToolEvent::DoubleClick { at, .. } | ToolEvent::Motion { at } => Some(*at),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn host_cancel_and_cancel_action_both_cancel() {
		assert!(ToolEvent::Cancel.is_cancel_interactive());

		let mut registry = solder_registry::ActionRegistry::new();
		let id = registry.register(&CANCEL_INTERACTIVE).expect("cancel registers");
		let action = registry.get(id).expect("registered");
		assert!(ToolEvent::Action(ActionEvent::new(action, true)).is_cancel_interactive());
		assert!(!ToolEvent::Motion { at: Point::ORIGIN }.is_cancel_interactive());
	}

	#[test]
	fn click_matching_checks_button() {
		let click = ToolEvent::Click {
			button: MouseButton::Left,
			at: Point::new(3, 4),
		};
		assert!(click.is_click(MouseButton::Left));
		assert!(!click.is_click(MouseButton::Right));
		assert_eq!(click.position(), Some(Point::new(3, 4)));
	}
}
