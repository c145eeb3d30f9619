//! In-memory board edited by the PCB tools.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use solder_primitives::Point;
use tracing::trace;

/// Items closer than this (per axis) to a click are hit.
const HIT_RADIUS: i64 = 2;

pub const DEFAULT_TRACK_WIDTH: i64 = 250;
pub const TRACK_WIDTH_STEP: i64 = 50;
pub const MIN_TRACK_WIDTH: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u32);

impl fmt::Display for ItemId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "item#{}", self.0)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
	Footprint { reference: String },
	Via,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
	pub kind: ItemKind,
	pub position: Point,
	/// Degrees, always a multiple of 90 in `0..360`.
	pub rotation: u16,
	pub net: Option<u32>,
}

impl Item {
	pub fn footprint(reference: impl Into<String>, position: Point) -> Self {
		Self {
			kind: ItemKind::Footprint {
				reference: reference.into(),
			},
			position,
			rotation: 0,
			net: None,
		}
	}

	pub fn via(position: Point) -> Self {
		Self {
			kind: ItemKind::Via,
			position,
			rotation: 0,
			net: None,
		}
	}

	pub fn in_net(mut self, net: u32) -> Self {
		self.net = Some(net);
		self
	}

	pub fn reference(&self) -> Option<&str> {
		match &self.kind {
			ItemKind::Footprint { reference } => Some(reference),
			ItemKind::Via => None,
		}
	}
}

/// The one uncommitted edit, kept so it can be reverted.
#[derive(Debug, Clone)]
struct PendingEdit {
	id: ItemId,
	/// `None` when the item did not exist before the edit.
	original: Option<Item>,
}

#[derive(Debug, Clone)]
pub struct Board {
	items: IndexMap<ItemId, Item>,
	selection: IndexSet<ItemId>,
	pending: Option<PendingEdit>,
	next_item: u32,
	revision: u64,
	track_width: i64,
}

impl Default for Board {
	fn default() -> Self {
		Self::new()
	}
}

impl Board {
	pub fn new() -> Self {
		Self {
			items: IndexMap::new(),
			selection: IndexSet::new(),
			pending: None,
			next_item: 1,
			revision: 0,
			track_width: DEFAULT_TRACK_WIDTH,
		}
	}

	/// Adds a committed item.
	pub fn add(&mut self, item: Item) -> ItemId {
		let id = ItemId(self.next_item);
		self.next_item += 1;
		self.items.insert(id, item);
		id
	}

	pub fn item(&self, id: ItemId) -> Option<&Item> {
		self.items.get(&id)
	}

	pub fn items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
		self.items.iter().map(|(id, item)| (*id, item))
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Topmost (most recently added) item under `at`.
	pub fn item_at(&self, at: Point) -> Option<ItemId> {
		self.items
			.iter()
			.rev()
			.find(|(_, item)| (item.position.x - at.x).abs() <= HIT_RADIUS && (item.position.y - at.y).abs() <= HIT_RADIUS)
			.map(|(id, _)| *id)
	}

	pub fn selection(&self) -> &IndexSet<ItemId> {
		&self.selection
	}

	pub fn selected_ids(&self) -> Vec<ItemId> {
		self.selection.iter().copied().collect()
	}

	pub fn select(&mut self, id: ItemId) -> bool {
		self.items.contains_key(&id) && self.selection.insert(id)
	}

	/// Returns false if nothing was selected.
	pub fn clear_selection(&mut self) -> bool {
		let had_selection = !self.selection.is_empty();
		self.selection.clear();
		had_selection
	}

	/// Adds `item` as an uncommitted edit.
	pub fn begin_place(&mut self, item: Item) -> ItemId {
		self.revert();
		let id = self.add(item);
		self.pending = Some(PendingEdit { id, original: None });
		trace!(%id, "board.begin_place");
		id
	}

	/// Starts an uncommitted edit of an existing item.
	pub fn begin_edit(&mut self, id: ItemId) -> bool {
		let Some(item) = self.items.get(&id) else {
			return false;
		};
		let original = Some(item.clone());
		self.revert();
		self.pending = Some(PendingEdit { id, original });
		true
	}

	pub fn pending(&self) -> Option<ItemId> {
		self.pending.as_ref().map(|edit| edit.id)
	}

	pub fn move_pending(&mut self, to: Point) -> bool {
		self.pending_item_mut().map(|item| item.position = to).is_some()
	}

	pub fn rotate_pending(&mut self, degrees: u16) -> bool {
		self.pending_item_mut().map(|item| item.rotation = (item.rotation + degrees) % 360).is_some()
	}

	/// Makes the pending edit permanent.
	pub fn commit(&mut self) -> Option<ItemId> {
		let edit = self.pending.take()?;
		self.revision += 1;
		trace!(id = %edit.id, revision = self.revision, "board.commit");
		Some(edit.id)
	}

	/// Undoes the pending edit, removing the item if it was new.
	pub fn revert(&mut self) -> Option<ItemId> {
		let edit = self.pending.take()?;
		match edit.original {
			Some(original) => {
				self.items.insert(edit.id, original);
			}
			None => {
				self.items.shift_remove(&edit.id);
				self.selection.shift_remove(&edit.id);
			}
		}
		trace!(id = %edit.id, "board.revert");
		Some(edit.id)
	}

	/// Number of commits so far.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	pub fn track_width(&self) -> i64 {
		self.track_width
	}

	pub fn set_track_width(&mut self, width: i64) {
		self.track_width = width.max(MIN_TRACK_WIDTH);
	}

	fn pending_item_mut(&mut self) -> Option<&mut Item> {
		let id = self.pending.as_ref()?.id;
		self.items.get_mut(&id)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn reverting_a_placement_removes_the_item() {
		let mut board = Board::new();
		let id = board.begin_place(Item::footprint("U1", Point::new(1, 1)));
		board.select(id);
		assert!(board.move_pending(Point::new(8, 8)));

		assert_eq!(board.revert(), Some(id));
		assert!(board.item(id).is_none());
		assert!(board.selection().is_empty());
		assert_eq!(board.revision(), 0);
	}

	#[test]
	fn reverting_an_edit_restores_the_original() {
		let mut board = Board::new();
		let id = board.add(Item::via(Point::new(4, 4)));
		assert!(board.begin_edit(id));
		board.move_pending(Point::new(9, 9));
		board.rotate_pending(90);

		board.revert();
		assert_eq!(board.item(id), Some(&Item::via(Point::new(4, 4))));
	}

	#[test]
	fn commit_keeps_the_edit_and_bumps_revision() {
		let mut board = Board::new();
		let id = board.begin_place(Item::footprint("U1", Point::ORIGIN));
		board.rotate_pending(270);
		board.rotate_pending(180);

		assert_eq!(board.commit(), Some(id));
		assert_eq!(board.commit(), None);
		assert_eq!(board.item(id).map(|item| item.rotation), Some(90));
		assert_eq!(board.revision(), 1);
		assert!(!board.move_pending(Point::ORIGIN));
	}

	#[test]
	fn hit_test_prefers_topmost_item() {
		let mut board = Board::new();
		let lower = board.add(Item::via(Point::new(10, 10)));
		let upper = board.add(Item::via(Point::new(11, 10)));
		assert_eq!(board.item_at(Point::new(10, 10)), Some(upper));
		assert_eq!(board.item_at(Point::new(8, 10)), Some(lower));
		assert_eq!(board.item_at(Point::new(20, 20)), None);
	}

	#[test]
	fn track_width_has_a_floor() {
		let mut board = Board::new();
		board.set_track_width(10);
		assert_eq!(board.track_width(), MIN_TRACK_WIDTH);
	}
}
