use solder_primitives::ActionId;

/// Configuration defects detected while registering actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// The name has no `tool.verb` qualification.
	#[error("action name {name:?} is not qualified by a tool name")]
	UnqualifiedName { name: String },
	/// Another action already holds this name; the original is kept.
	#[error("duplicate action name {name:?} (registered as {existing})")]
	DuplicateName { name: String, existing: ActionId },
	/// An explicit id is already held by another action.
	#[error("duplicate action id {id} for {name:?} (held by {holder:?})")]
	DuplicateId { id: ActionId, name: String, holder: String },
}
