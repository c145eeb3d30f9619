/// How bulk registration reacts to a rejected declaration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Panic with the registry error.
	Panic,
	/// Log a warning, keep the original registration and continue.
	#[default]
	Ignore,
}

impl DuplicatePolicy {
	/// Returns the appropriate policy based on build configuration.
	#[inline]
	pub fn for_build() -> Self {
		if cfg!(debug_assertions) {
			DuplicatePolicy::Panic
		} else {
			DuplicatePolicy::Ignore
		}
	}
}
