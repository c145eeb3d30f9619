//! Action registry and hotkey binding table.
//!
//! Every invokable command is declared once as a `const` [`ActionDef`] and
//! copied into an [`ActionRegistry`] at startup. The registry owns the
//! canonical [`Action`] values and the [`HotkeyTable`] that maps normalized
//! keys to the actions bound to them. Everything else refers to actions by
//! [`ActionId`].
//!
//! Key bindings are recomputed in full by [`ActionRegistry::update_hotkeys`]
//! from three layers, later layers overriding earlier ones:
//!
//! 1. the declared default key,
//! 2. the legacy layer, keyed by the action's legacy name,
//! 3. the user layer, keyed by the canonical action name.

pub mod action;
pub mod bindings;
pub mod builtins;
pub mod error;
pub mod hotkeys;
pub mod policy;
pub mod registry;

pub use action::{Action, ActionDef, ActionFlags, Scope, tool_name_of};
pub use bindings::{Binding, BindingLayer, BindingProblem, BindingSource, NoBindings, resolve_binding};
pub use error::RegistryError;
pub use hotkeys::{BoundAction, HotkeyConflict, HotkeyTable};
pub use policy::DuplicatePolicy;
pub use registry::ActionRegistry;
pub use solder_primitives::{ActionId, Hotkey};
