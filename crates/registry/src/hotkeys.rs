//! Forward (key -> actions) and reverse (action -> key) binding maps.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use solder_primitives::{ActionId, Hotkey};

use crate::action::Scope;

/// An action bound into a key bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundAction {
	pub id: ActionId,
	pub scope: Scope,
}

/// A global binding evicted by a later global binding on the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyConflict {
	pub key: Hotkey,
	pub kept: ActionId,
	pub dropped: ActionId,
}

type Bucket = SmallVec<[BoundAction; 2]>;

/// Binding table rebuilt wholesale by
/// [`ActionRegistry::update_hotkeys`](crate::ActionRegistry::update_hotkeys).
///
/// Every bucket holds at most one [`Scope::Global`] entry; any number of
/// context entries may share a key and are disambiguated by tool priority at
/// dispatch time.
#[derive(Debug, Default)]
pub struct HotkeyTable {
	buckets: FxHashMap<Hotkey, Bucket>,
	by_action: FxHashMap<ActionId, Hotkey>,
	conflicts: Vec<HotkeyConflict>,
}

impl HotkeyTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Drops every binding and recorded conflict.
	pub(crate) fn clear(&mut self) {
		self.buckets.clear();
		self.by_action.clear();
		self.conflicts.clear();
	}

	/// Binds `id` to `key`. A global entry evicts earlier global entries of the bucket.
	pub(crate) fn insert(&mut self, key: Hotkey, bound: BoundAction) {
		let bucket = self.buckets.entry(key).or_default();
		if bound.scope == Scope::Global {
			let conflicts = &mut self.conflicts;
			let by_action = &mut self.by_action;
			bucket.retain(|existing| {
				if existing.scope != Scope::Global {
					return true;
				}
				conflicts.push(HotkeyConflict {
					key,
					kept: bound.id,
					dropped: existing.id,
				});
				by_action.remove(&existing.id);
				false
			});
		}
		bucket.push(bound);
		self.by_action.insert(bound.id, key);
	}

	/// Removes `id` from every bucket and from the reverse map.
	pub(crate) fn remove(&mut self, id: ActionId) {
		self.by_action.remove(&id);
		self.buckets.retain(|_, bucket| {
			bucket.retain(|bound| bound.id != id);
			!bucket.is_empty()
		});
	}

	/// Actions bound to exactly `key`, in binding order.
	pub fn candidates(&self, key: Hotkey) -> &[BoundAction] {
		self.buckets.get(&key).map(|bucket| bucket.as_slice()).unwrap_or(&[])
	}

	/// Reverse lookup; `None` means unbound.
	pub fn hotkey_of(&self, id: ActionId) -> Option<Hotkey> {
		self.by_action.get(&id).copied()
	}

	/// Returns true if `id` appears in any bucket.
	pub fn contains(&self, id: ActionId) -> bool {
		self.buckets.values().any(|bucket| bucket.iter().any(|bound| bound.id == id))
	}

	/// Global bindings evicted during the last rebuild.
	pub fn conflicts(&self) -> &[HotkeyConflict] {
		&self.conflicts
	}

	/// All non-empty buckets, sorted by key for stable listings.
	pub fn bound_actions(&self) -> Vec<(Hotkey, &[BoundAction])> {
		let mut out: Vec<_> = self.buckets.iter().map(|(key, bucket)| (*key, bucket.as_slice())).collect();
		out.sort_by_key(|(key, _)| *key);
		out
	}

	pub fn len(&self) -> usize {
		self.buckets.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buckets.is_empty()
	}
}
