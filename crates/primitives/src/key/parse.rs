//! Plain-text hotkey parsing.
//!
//! ```text
//! hotkey   = (modifier "+")* key
//! modifier = "ctrl" | "control" | "alt" | "option" | "shift" | "meta" | "cmd" | "super"
//! key      = named-key | fn-key | char
//! fn-key   = "f" digit digit?
//! ```
//!
//! Matching is case-insensitive. A literal `+` key is written as the last
//! component, e.g. `Ctrl++`.

use super::{Hotkey, KeyCode, Modifiers, NamedKey};

/// Reasons a hotkey string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseKeyError {
	#[error("empty hotkey")]
	Empty,
	#[error("unknown modifier {0:?}")]
	UnknownModifier(String),
	#[error("unknown key {0:?}")]
	UnknownKey(String),
	#[error("function key out of range: F{0}")]
	FunctionKeyRange(u32),
}

const MAX_FUNCTION_KEY: u32 = 24;

/// Parses strings like `"Ctrl+Shift+M"`, `"Esc"`, `"?"` or `"F11"`.
pub fn parse_hotkey(input: &str) -> Result<Hotkey, ParseKeyError> {
	let input = input.trim();
	if input.is_empty() {
		return Err(ParseKeyError::Empty);
	}

	let (mods, key) = split_key(input);
	let mut modifiers = Modifiers::NONE;
	if let Some(mods) = mods {
		for part in mods.split('+') {
			modifiers |= parse_modifier(part.trim())?;
		}
	}

	Ok(Hotkey::new(parse_code(key)?, modifiers))
}

/// Splits off the key component, honoring a trailing literal `+`.
fn split_key(input: &str) -> (Option<&str>, &str) {
	if input == "+" {
		return (None, "+");
	}
	if let Some(mods) = input.strip_suffix("++") {
		return (Some(mods), "+");
	}
	match input.rsplit_once('+') {
		Some((mods, key)) => (Some(mods), key),
		None => (None, input),
	}
}

fn parse_modifier(part: &str) -> Result<Modifiers, ParseKeyError> {
	match part.to_ascii_lowercase().as_str() {
		"ctrl" | "control" => Ok(Modifiers::CTRL),
		"alt" | "option" => Ok(Modifiers::ALT),
		"shift" => Ok(Modifiers::SHIFT),
		"meta" | "cmd" | "super" => Ok(Modifiers::META),
		_ => Err(ParseKeyError::UnknownModifier(part.to_string())),
	}
}

fn parse_code(key: &str) -> Result<KeyCode, ParseKeyError> {
	let mut chars = key.chars();
	if let (Some(c), None) = (chars.next(), chars.next()) {
		return Ok(KeyCode::Char(c));
	}

	let lower = key.trim().to_ascii_lowercase();
	let named = match lower.as_str() {
		"esc" | "escape" => NamedKey::Escape,
		"enter" | "return" => NamedKey::Enter,
		"tab" => NamedKey::Tab,
		"backspace" | "bksp" => NamedKey::Backspace,
		"del" | "delete" => NamedKey::Delete,
		"ins" | "insert" => NamedKey::Insert,
		"home" => NamedKey::Home,
		"end" => NamedKey::End,
		"pgup" | "pageup" => NamedKey::PageUp,
		"pgdn" | "pagedown" => NamedKey::PageDown,
		"up" => NamedKey::Up,
		"down" => NamedKey::Down,
		"left" => NamedKey::Left,
		"right" => NamedKey::Right,
		"space" => return Ok(KeyCode::Char(' ')),
		"" => return Err(ParseKeyError::Empty),
		other => return parse_function_key(other).ok_or_else(|| ParseKeyError::UnknownKey(key.to_string()))?,
	};
	Ok(KeyCode::Named(named))
}

fn parse_function_key(lower: &str) -> Option<Result<KeyCode, ParseKeyError>> {
	let digits = lower.strip_prefix('f')?;
	if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	let n: u32 = digits.parse().ok()?;
	if n == 0 || n > MAX_FUNCTION_KEY {
		return Some(Err(ParseKeyError::FunctionKeyRange(n)));
	}
	Some(Ok(KeyCode::F(n as u8)))
}
