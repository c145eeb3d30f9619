//! The action registry: single owner of every registered action.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use solder_primitives::{ActionId, Hotkey};
use tracing::{debug, warn};

use crate::action::{Action, ActionDef, is_qualified};
use crate::bindings::{BindingSource, resolve_binding};
use crate::error::RegistryError;
use crate::hotkeys::{BoundAction, HotkeyTable};
use crate::policy::DuplicatePolicy;

/// Next id handed out to declarations without an explicit id.
///
/// Process-wide so ids stay unique across registries and are never reused
/// after an action is unregistered.
static NEXT_ACTION_ID: AtomicU32 = AtomicU32::new(1);

fn allocate_action_id() -> ActionId {
	ActionId::from_u32(NEXT_ACTION_ID.fetch_add(1, Ordering::Relaxed))
}

/// Moves the counter past an explicitly chosen id.
fn reserve_action_id(id: ActionId) {
	NEXT_ACTION_ID.fetch_max(id.as_u32().saturating_add(1), Ordering::Relaxed);
}

/// Owns the canonical [`Action`] values and their hotkey table.
///
/// Iteration follows registration order, which also decides which global
/// binding survives when two globals resolve to the same key.
#[derive(Debug, Default)]
pub struct ActionRegistry {
	actions: IndexMap<ActionId, Action>,
	by_name: FxHashMap<Arc<str>, ActionId>,
	hotkeys: HotkeyTable,
}

impl ActionRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Copies `def` into the registry and returns its id.
	///
	/// The action is not bound to any key until the next
	/// [`update_hotkeys`](Self::update_hotkeys).
	pub fn register(&mut self, def: &ActionDef) -> Result<ActionId, RegistryError> {
		if !is_qualified(def.name) {
			return Err(RegistryError::UnqualifiedName { name: def.name.to_string() });
		}
		if let Some(&existing) = self.by_name.get(def.name) {
			return Err(RegistryError::DuplicateName {
				name: def.name.to_string(),
				existing,
			});
		}

		let id = match def.id {
			Some(id) => {
				if let Some(holder) = self.actions.get(&id) {
					return Err(RegistryError::DuplicateId {
						id,
						name: def.name.to_string(),
						holder: holder.name().to_string(),
					});
				}
				reserve_action_id(id);
				id
			}
			None => allocate_action_id(),
		};

		let action = Action::from_def(id, def);
		self.by_name.insert(action.name_arc(), id);
		self.actions.insert(id, action);
		debug!(action = def.name, %id, "Registered action");
		Ok(id)
	}

	/// Registers a batch of declarations.
	///
	/// Rejected declarations panic under [`DuplicatePolicy::Panic`] and are
	/// skipped with a warning under [`DuplicatePolicy::Ignore`]. Returns the
	/// number of actions registered.
	pub fn register_all(&mut self, defs: &[ActionDef], policy: DuplicatePolicy) -> usize {
		let mut registered = 0;
		for def in defs {
			match self.register(def) {
				Ok(_) => registered += 1,
				Err(error) => match policy {
					DuplicatePolicy::Panic => panic!("action registration failed: {error}"),
					DuplicatePolicy::Ignore => warn!(%error, "Ignoring rejected action declaration"),
				},
			}
		}
		registered
	}

	/// Removes the action and every hotkey reference to it.
	pub fn unregister(&mut self, id: ActionId) -> Option<Action> {
		let action = self.actions.shift_remove(&id)?;
		self.by_name.remove(action.name());
		self.hotkeys.remove(id);
		debug!(action = action.name(), %id, "Unregistered action");
		Some(action)
	}

	/// Exact-name lookup.
	pub fn find(&self, name: &str) -> Option<&Action> {
		self.by_name.get(name).and_then(|id| self.actions.get(id))
	}

	pub fn get(&self, id: ActionId) -> Option<&Action> {
		self.actions.get(&id)
	}

	/// Registered actions in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Action> {
		self.actions.values()
	}

	pub fn len(&self) -> usize {
		self.actions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.actions.is_empty()
	}

	pub fn hotkeys(&self) -> &HotkeyTable {
		&self.hotkeys
	}

	/// Effective key of `id`; `None` when unbound or unknown.
	pub fn hotkey_of(&self, id: ActionId) -> Option<Hotkey> {
		self.hotkeys.hotkey_of(id)
	}

	/// Rebuilds every binding from the declared defaults and both layers.
	///
	/// Both maps are cleared first so the forward and reverse tables always
	/// describe the same bindings. A global action evicts any global action
	/// already bound to its key.
	pub fn update_hotkeys(&mut self, legacy: &dyn BindingSource, user: &dyn BindingSource) {
		let legacy = legacy.read();
		let user = user.read();
		self.hotkeys.clear();

		for action in self.actions.values() {
			let key = resolve_binding(action.name(), action.default_key(), action.legacy_name(), &legacy, &user);
			let Some(key) = key else {
				continue;
			};
			self.hotkeys.insert(
				key,
				BoundAction {
					id: action.id(),
					scope: action.scope(),
				},
			);
		}

		let conflicts = self.hotkeys.conflicts();
		if !conflicts.is_empty() {
			let samples: Vec<_> = conflicts.iter().take(5).collect();
			debug!(count = conflicts.len(), ?samples, "Global hotkey conflicts resolved in favor of later bindings");
		}
		debug!(actions = self.actions.len(), keys = self.hotkeys.len(), "Rebuilt hotkey table");
	}
}
