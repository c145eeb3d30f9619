//! PCB editor built on the solder dispatch core.
//!
//! [`Editor`] owns the action registry, the tool manager and the board, and is
//! driven by one task: key presses and pointer events go in through
//! [`Editor::handle_key`], [`Editor::click`] and [`Editor::motion`], timer
//! messages through [`Editor::on_timer`].

pub mod actions;
pub mod board;
pub mod config;
pub mod editor;
pub mod model;
pub mod ratsnest;
pub mod tools;

pub use board::{Board, Item, ItemId, ItemKind};
pub use config::{ConfigError, EditorConfig};
pub use editor::Editor;
pub use model::PcbModel;
pub use ratsnest::{Connectivity, RatsnestController, RatsnestLine, RatsnestTick};
