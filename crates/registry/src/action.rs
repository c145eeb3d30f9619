//! Action declarations and their registered form.

use std::sync::Arc;

use bitflags::bitflags;
use solder_primitives::{ActionId, Hotkey};

/// Where an action may fire from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
	/// Fires regardless of which tools are active.
	Global,
	/// Fires only when the owning tool is active and claims the key.
	Context,
}

bitflags! {
	/// Behavior hints that do not affect dispatch.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct ActionFlags: u16 {
		/// Used to notify tools; has no menu or toolbar affordance.
		const NOTIFY_ONLY = 1 << 0;
		/// Starts an interactive tool rather than performing a one-shot edit.
		const ACTIVATES_TOOL = 1 << 1;
	}
}

/// Static declaration of an action.
///
/// Declarations are `const` values built with the chained setters below and
/// registered explicitly; the registry copies them, so the declaration itself
/// is never mutated.
///
/// ```ignore
/// pub const UNDO: ActionDef = ActionDef::new("common.Interactive.undo")
/// 	.global()
/// 	.key(Hotkey::char('Z').with(Modifiers::CTRL))
/// 	.legacy("Undo")
/// 	.label("Undo");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDef {
	/// Dotted `app.tool.verb` name.
	pub name: &'static str,
	pub scope: Scope,
	pub default_key: Option<Hotkey>,
	/// Name used by the legacy hotkey configuration, if any.
	pub legacy_name: Option<&'static str>,
	pub label: &'static str,
	pub description: &'static str,
	pub icon: Option<&'static str>,
	pub flags: ActionFlags,
	/// Explicit id; `None` takes the next id from the process-wide counter.
	pub id: Option<ActionId>,
}

impl ActionDef {
	/// Context-scoped action with no key, label or metadata.
	pub const fn new(name: &'static str) -> Self {
		Self {
			name,
			scope: Scope::Context,
			default_key: None,
			legacy_name: None,
			label: "",
			description: "",
			icon: None,
			flags: ActionFlags::empty(),
			id: None,
		}
	}

	pub const fn scope(self, scope: Scope) -> Self {
		Self { scope, ..self }
	}

	pub const fn global(self) -> Self {
		self.scope(Scope::Global)
	}

	pub const fn key(self, key: Hotkey) -> Self {
		Self {
			default_key: Some(key),
			..self
		}
	}

	pub const fn legacy(self, legacy_name: &'static str) -> Self {
		Self {
			legacy_name: Some(legacy_name),
			..self
		}
	}

	pub const fn label(self, label: &'static str) -> Self {
		Self { label, ..self }
	}

	pub const fn description(self, description: &'static str) -> Self {
		Self { description, ..self }
	}

	pub const fn icon(self, icon: &'static str) -> Self {
		Self { icon: Some(icon), ..self }
	}

	pub const fn flags(self, flags: ActionFlags) -> Self {
		Self { flags, ..self }
	}

	pub const fn id(self, id: ActionId) -> Self {
		Self { id: Some(id), ..self }
	}

	/// Name of the tool that owns this action.
	pub fn tool_name(&self) -> &str {
		tool_name_of(self.name)
	}
}

/// Returns everything before the last `.` of an action name.
///
/// Names without a separator are their own tool name; the registry rejects
/// such names, so this only matters for unregistered input.
pub fn tool_name_of(action_name: &str) -> &str {
	action_name.rsplit_once('.').map_or(action_name, |(tool, _)| tool)
}

/// Returns true when `name` is qualified by a non-empty tool name and verb.
pub(crate) fn is_qualified(name: &str) -> bool {
	matches!(name.rsplit_once('.'), Some((tool, verb)) if !tool.is_empty() && !verb.is_empty() && !tool.starts_with('.'))
}

/// A registered action, owned by the registry.
#[derive(Debug, Clone)]
pub struct Action {
	id: ActionId,
	name: Arc<str>,
	scope: Scope,
	default_key: Option<Hotkey>,
	legacy_name: Option<Arc<str>>,
	label: Arc<str>,
	description: Arc<str>,
	icon: Option<Arc<str>>,
	flags: ActionFlags,
}

impl Action {
	pub(crate) fn from_def(id: ActionId, def: &ActionDef) -> Self {
		Self {
			id,
			name: Arc::from(def.name),
			scope: def.scope,
			default_key: def.default_key,
			legacy_name: def.legacy_name.map(Arc::from),
			label: Arc::from(def.label),
			description: Arc::from(def.description),
			icon: def.icon.map(Arc::from),
			flags: def.flags,
		}
	}

	pub fn id(&self) -> ActionId {
		self.id
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Shared handle to the name, for events that outlive a registry borrow.
	pub fn name_arc(&self) -> Arc<str> {
		Arc::clone(&self.name)
	}

	pub fn scope(&self) -> Scope {
		self.scope
	}

	pub fn is_global(&self) -> bool {
		self.scope == Scope::Global
	}

	pub fn default_key(&self) -> Option<Hotkey> {
		self.default_key
	}

	pub fn legacy_name(&self) -> Option<&str> {
		self.legacy_name.as_deref()
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn icon(&self) -> Option<&str> {
		self.icon.as_deref()
	}

	pub fn flags(&self) -> ActionFlags {
		self.flags
	}

	/// Name of the tool that owns this action.
	pub fn tool_name(&self) -> &str {
		tool_name_of(&self.name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tool_name_is_prefix_before_last_separator() {
		assert_eq!(tool_name_of("pcbnew.InteractiveSelection.Clear"), "pcbnew.InteractiveSelection");
		assert_eq!(tool_name_of("app.sel.move"), "app.sel");
		assert_eq!(tool_name_of("plain"), "plain");
	}

	#[test]
	fn qualification_requires_tool_and_verb() {
		assert!(is_qualified("app.sel.move"));
		assert!(is_qualified("sel.move"));
		assert!(!is_qualified("move"));
		assert!(!is_qualified(".move"));
		assert!(!is_qualified("sel."));
		assert!(!is_qualified("..move"));
	}

	#[test]
	fn const_builder_keeps_earlier_fields() {
		const DEF: ActionDef = ActionDef::new("app.sel.move")
			.key(Hotkey::char('m'))
			.legacy("Move Item")
			.label("Move")
			.global();
		assert_eq!(DEF.scope, Scope::Global);
		assert_eq!(DEF.default_key, Some(Hotkey::char('M')));
		assert_eq!(DEF.legacy_name, Some("Move Item"));
		assert_eq!(DEF.label, "Move");
		assert_eq!(DEF.tool_name(), "app.sel");
	}
}
