//! Ordered set of active tools.

use std::fmt;

use solder_primitives::ToolId;

/// Rank of an active tool; higher is more recently activated.
///
/// Inactive tools have no priority at all (`Option::None`), which is distinct
/// from the lowest active rank `Priority(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(usize);

impl Priority {
	pub const fn new(rank: usize) -> Self {
		Self(rank)
	}

	pub const fn rank(self) -> usize {
		self.0
	}
}

impl fmt::Display for Priority {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Active tools ordered by activation recency, bottom first.
///
/// A tool appears at most once, so stack positions form a total order and
/// two active tools never share a priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolPriorityStack {
	order: Vec<ToolId>,
}

impl ToolPriorityStack {
	pub fn new() -> Self {
		Self::default()
	}

	/// Puts `tool` on top, moving it if it was already active.
	pub fn push(&mut self, tool: ToolId) -> Priority {
		self.order.retain(|&id| id != tool);
		self.order.push(tool);
		Priority(self.order.len() - 1)
	}

	/// Removes `tool`; returns false if it was not active.
	pub fn remove(&mut self, tool: ToolId) -> bool {
		let before = self.order.len();
		self.order.retain(|&id| id != tool);
		self.order.len() != before
	}

	pub fn priority(&self, tool: ToolId) -> Option<Priority> {
		self.order.iter().position(|&id| id == tool).map(Priority)
	}

	pub fn contains(&self, tool: ToolId) -> bool {
		self.order.contains(&tool)
	}

	pub fn top(&self) -> Option<ToolId> {
		self.order.last().copied()
	}

	/// Active tools from highest to lowest priority.
	pub fn top_down(&self) -> impl Iterator<Item = ToolId> + '_ {
		self.order.iter().rev().copied()
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}
}
