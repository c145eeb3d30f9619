//! Binding layers and the per-action precedence rule.
//!
//! Layers are already-parsed `name -> binding` maps supplied by whatever reads
//! hotkey configuration. The registry only consumes them.

use rustc_hash::FxHashMap;
use solder_primitives::{Hotkey, ParseKeyError, parse_hotkey};
use tracing::warn;

/// A configured binding value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
	Key(Hotkey),
	/// Explicitly removes any binding from lower layers.
	Unbound,
}

impl Binding {
	pub fn hotkey(self) -> Option<Hotkey> {
		match self {
			Binding::Key(key) => Some(key),
			Binding::Unbound => None,
		}
	}

	/// Parses a configured value; empty, `none` and `unbound` mean [`Binding::Unbound`].
	pub fn parse(value: &str) -> Result<Self, ParseKeyError> {
		let trimmed = value.trim();
		if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") || trimmed.eq_ignore_ascii_case("unbound") {
			return Ok(Binding::Unbound);
		}
		parse_hotkey(trimmed).map(Binding::Key)
	}
}

impl From<Hotkey> for Binding {
	fn from(key: Hotkey) -> Self {
		Binding::Key(key)
	}
}

/// A binding value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingProblem {
	pub name: String,
	pub value: String,
	pub error: ParseKeyError,
}

/// One configuration layer: action (or legacy) name to binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingLayer {
	entries: FxHashMap<String, Binding>,
}

impl BindingLayer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the binding for `name`, replacing any previous entry.
	pub fn insert(&mut self, name: impl Into<String>, binding: impl Into<Binding>) {
		self.entries.insert(name.into(), binding.into());
	}

	pub fn get(&self, name: &str) -> Option<Binding> {
		self.entries.get(name).copied()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, Binding)> {
		self.entries.iter().map(|(name, binding)| (name.as_str(), *binding))
	}

	/// Builds a layer from `(name, "Ctrl+M")` pairs.
	///
	/// Unparseable values are skipped and returned as problems; the rest of the
	/// layer is still usable.
	pub fn parse_pairs<'a, I>(pairs: I) -> (Self, Vec<BindingProblem>)
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let mut layer = Self::new();
		let mut problems = Vec::new();
		for (name, value) in pairs {
			match Binding::parse(value) {
				Ok(binding) => layer.insert(name, binding),
				Err(error) => problems.push(BindingProblem {
					name: name.to_string(),
					value: value.to_string(),
					error,
				}),
			}
		}
		if !problems.is_empty() {
			let samples: Vec<_> = problems.iter().take(5).collect();
			warn!(count = problems.len(), ?samples, "Unparseable hotkey bindings skipped");
		}
		(layer, problems)
	}
}

impl<S: Into<String>> FromIterator<(S, Binding)> for BindingLayer {
	fn from_iter<T: IntoIterator<Item = (S, Binding)>>(iter: T) -> Self {
		Self {
			entries: iter.into_iter().map(|(name, binding)| (name.into(), binding)).collect(),
		}
	}
}

/// A hotkey configuration source, re-read on every rebuild.
pub trait BindingSource {
	fn read(&self) -> BindingLayer;
}

impl BindingSource for BindingLayer {
	fn read(&self) -> BindingLayer {
		self.clone()
	}
}

/// Source with no entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBindings;

impl BindingSource for NoBindings {
	fn read(&self) -> BindingLayer {
		BindingLayer::new()
	}
}

/// Resolves an action's effective key: default, then legacy, then user.
pub fn resolve_binding(
	name: &str,
	default_key: Option<Hotkey>,
	legacy_name: Option<&str>,
	legacy: &BindingLayer,
	user: &BindingLayer,
) -> Option<Hotkey> {
	let mut key = default_key;
	if let Some(binding) = legacy_name.filter(|n| !n.is_empty()).and_then(|n| legacy.get(n)) {
		key = binding.hotkey();
	}
	if let Some(binding) = user.get(name) {
		key = binding.hotkey();
	}
	key
}
