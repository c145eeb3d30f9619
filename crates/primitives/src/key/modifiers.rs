//! Key modifier mask (Shift, Ctrl, Alt, Meta).

use bitflags::bitflags;

bitflags! {
	/// Modifier mask carried by every key event and binding.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
	pub struct Modifiers: u8 {
		/// Shift is held.
		const SHIFT = 1 << 0;
		/// Ctrl is held.
		const CTRL = 1 << 1;
		/// Alt (Option) is held.
		const ALT = 1 << 2;
		/// Meta (Cmd / Super) is held.
		const META = 1 << 3;
	}
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self::empty();

	/// Returns a copy with Shift cleared.
	pub const fn without_shift(self) -> Self {
		self.difference(Self::SHIFT)
	}

	/// Display labels in canonical order, used by [`Hotkey`](super::Hotkey) formatting.
	pub(crate) fn labels(self) -> impl Iterator<Item = &'static str> {
		[(Self::CTRL, "Ctrl"), (Self::ALT, "Alt"), (Self::SHIFT, "Shift"), (Self::META, "Meta")]
			.into_iter()
			.filter(move |(flag, _)| self.contains(*flag))
			.map(|(_, label)| label)
	}
}
