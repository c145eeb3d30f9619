//! Key event and hotkey types.
//!
//! [`Key`] is what an input backend reports. [`Hotkey`] is the normalized form
//! used as a binding-table key: ASCII letters are folded to upper case so that
//! `m` and `M` name the same physical key.

mod modifiers;
mod parse;

use std::fmt;

pub use modifiers::Modifiers;
pub use parse::{ParseKeyError, parse_hotkey};


/// Non-character keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NamedKey {
	Escape,
	Enter,
	Tab,
	Backspace,
	Delete,
	Insert,
	Home,
	End,
	PageUp,
	PageDown,
	Up,
	Down,
	Left,
	Right,
}

impl NamedKey {
	/// Canonical display name, accepted back by [`parse_hotkey`].
	pub const fn name(self) -> &'static str {
		match self {
			Self::Escape => "Esc",
			Self::Enter => "Enter",
			Self::Tab => "Tab",
			Self::Backspace => "Backspace",
			Self::Delete => "Del",
			Self::Insert => "Ins",
			Self::Home => "Home",
			Self::End => "End",
			Self::PageUp => "PgUp",
			Self::PageDown => "PgDn",
			Self::Up => "Up",
			Self::Down => "Down",
			Self::Left => "Left",
			Self::Right => "Right",
		}
	}
}

/// Physical key identity without modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
	/// A printable character (including space).
	Char(char),
	/// A named non-printable key.
	Named(NamedKey),
	/// Function key `F1`..`F24`.
	F(u8),
}

impl KeyCode {
	/// Folds ASCII lower-case letters to upper case; every other code is returned unchanged.
	pub const fn normalized(self) -> Self {
		match self {
			Self::Char(c) => Self::Char(c.to_ascii_uppercase()),
			other => other,
		}
	}
}

/// A raw key press as reported by the input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// Creates a key press with the given modifiers.
	pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
		Self { code, modifiers }
	}

	/// Unmodified character key.
	pub const fn char(c: char) -> Self {
		Self::new(KeyCode::Char(c), Modifiers::NONE)
	}

	/// Unmodified named key.
	pub const fn named(key: NamedKey) -> Self {
		Self::new(KeyCode::Named(key), Modifiers::NONE)
	}

	/// Returns a copy with `modifiers` added.
	pub const fn with(self, modifiers: Modifiers) -> Self {
		Self::new(self.code, self.modifiers.union(modifiers))
	}
}

/// Normalized `(keycode, modifier-mask)` pair used to index binding tables.
///
/// Construction always normalizes, so two hotkeys compare equal exactly when
/// they describe the same binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hotkey {
	code: KeyCode,
	modifiers: Modifiers,
}

impl Hotkey {
	pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
		Self {
			code: code.normalized(),
			modifiers,
		}
	}

	pub const fn char(c: char) -> Self {
		Self::new(KeyCode::Char(c), Modifiers::NONE)
	}

	pub const fn named(key: NamedKey) -> Self {
		Self::new(KeyCode::Named(key), Modifiers::NONE)
	}

	pub const fn function(n: u8) -> Self {
		Self::new(KeyCode::F(n), Modifiers::NONE)
	}

	/// Returns a copy with `modifiers` added.
	pub const fn with(self, modifiers: Modifiers) -> Self {
		Self::new(self.code, self.modifiers.union(modifiers))
	}

	pub const fn code(self) -> KeyCode {
		self.code
	}

	pub const fn modifiers(self) -> Modifiers {
		self.modifiers
	}

	/// The same key with Shift cleared, used for layout-tolerant lookup.
	pub const fn without_shift(self) -> Self {
		Self {
			code: self.code,
			modifiers: self.modifiers.without_shift(),
		}
	}
}

impl From<Key> for Hotkey {
	fn from(key: Key) -> Self {
		Self::new(key.code, key.modifiers)
	}
}

impl fmt::Display for Hotkey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for label in self.modifiers.labels() {
			write!(f, "{label}+")?;
		}
		match self.code {
			KeyCode::Char(' ') => f.write_str("Space"),
			KeyCode::Char(c) => write!(f, "{c}"),
			KeyCode::Named(named) => f.write_str(named.name()),
			KeyCode::F(n) => write!(f, "F{n}"),
		}
	}
}
