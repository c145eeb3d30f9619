//! Core value types for the dispatch engine: keys, modifiers, ids and points.

/// Planar coordinates delivered with pointer events.
pub mod geometry;
/// Identifier types for actions and tools.
pub mod ids;
/// Key and modifier types, normalization and parsing.
pub mod key;

pub use geometry::Point;
pub use ids::{ActionId, ToolId};
pub use key::{Hotkey, Key, KeyCode, Modifiers, NamedKey, ParseKeyError, parse_hotkey};
