use std::fmt;

/// Process-unique identifier of a registered action.
///
/// Ids start at 1 and are never reused within a process, so a stale id can
/// never alias a newer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(u32);

impl ActionId {
	pub const fn from_u32(raw: u32) -> Self {
		Self(raw)
	}

	pub const fn as_u32(self) -> u32 {
		self.0
	}
}

impl fmt::Display for ActionId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Identifier of a tool registered with a tool manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolId(u32);

impl ToolId {
	pub const fn from_u32(raw: u32) -> Self {
		Self(raw)
	}

	pub const fn as_u32(self) -> u32 {
		self.0
	}
}

impl fmt::Display for ToolId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "tool#{}", self.0)
	}
}
