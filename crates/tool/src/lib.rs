//! Interactive tools and the dispatch path from key presses to them.
//!
//! Tools are explicit state machines implementing [`Tool`]. A [`ToolManager`]
//! keeps the registered tools and the [`ToolPriorityStack`] of active ones,
//! delivers events top-down, and runs follow-up requests only after the
//! current event has been fully consumed. [`resolve_hotkey`] picks the single
//! action a key press should fire, and [`run_hotkey`] hands it to the manager.

pub mod dispatch;
pub mod error;
pub mod event;
pub mod manager;
pub mod stack;
pub mod tool;

pub use dispatch::{HotkeyResolution, ToolDirectory, resolve_hotkey, run_hotkey};
pub use error::ToolError;
pub use event::{ActionEvent, MouseButton, ToolEvent};
pub use manager::{RunOutcome, ToolManager};
pub use stack::{Priority, ToolPriorityStack};
pub use tool::{Flow, Request, Tool, ToolContext};
