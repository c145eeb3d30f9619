//! The PCB editor facade: registry, tools and model wired together.

use solder_primitives::{Hotkey, Key, Point};
use solder_registry::builtins::COMMON_ACTIONS;
use solder_registry::{Action, ActionRegistry, BindingSource, NoBindings};
use solder_tool::{MouseButton, RunOutcome, ToolError, ToolEvent, ToolManager, run_hotkey};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::actions::PCB_ACTIONS;
use crate::board::{Board, Item};
use crate::config::EditorConfig;
use crate::model::PcbModel;
use crate::ratsnest::{RatsnestController, RatsnestTick};
use crate::tools::{EditorControl, PlacementTool, SelectionTool, editor_control, selection};

/// Net new footprints join until a netlist assigns real ones.
const DEFAULT_FOOTPRINT_NET: u32 = 1;

pub struct Editor {
	config: EditorConfig,
	registry: ActionRegistry,
	tools: ToolManager<PcbModel>,
	model: PcbModel,
	ticks: mpsc::UnboundedReceiver<RatsnestTick>,
}

impl Editor {
	/// Registers every action and tool, binds default hotkeys and activates the
	/// base tools.
	pub fn new(config: EditorConfig) -> Result<Self, ToolError> {
		let policy = config.hotkeys.duplicate_actions.policy();
		let mut registry = ActionRegistry::new();
		registry.register_all(COMMON_ACTIONS, policy);
		registry.register_all(PCB_ACTIONS, policy);
		registry.update_hotkeys(&NoBindings, &NoBindings);

		let (tx, ticks) = mpsc::unbounded_channel();
		let mut model = PcbModel::new(Board::new(), RatsnestController::new(&config.ratsnest, tx));

		let mut tools = ToolManager::new();
		tools.register_tool(Box::new(EditorControl::new()))?;
		tools.register_tool(Box::new(SelectionTool::new()))?;
		tools.register_tool(Box::new(PlacementTool::new(
			Item::footprint("", Point::ORIGIN).in_net(DEFAULT_FOOTPRINT_NET),
			"U",
		)))?;
		tools.activate(&registry, &mut model, editor_control::NAME)?;
		tools.activate(&registry, &mut model, selection::NAME)?;

		info!(actions = registry.len(), hotkeys = registry.hotkeys().len(), "Editor ready");
		Ok(Self {
			config,
			registry,
			tools,
			model,
			ticks,
		})
	}

	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	pub fn registry(&self) -> &ActionRegistry {
		&self.registry
	}

	pub fn tools(&self) -> &ToolManager<PcbModel> {
		&self.tools
	}

	pub fn model(&self) -> &PcbModel {
		&self.model
	}

	pub fn board(&self) -> &Board {
		&self.model.board
	}

	pub fn board_mut(&mut self) -> &mut Board {
		&mut self.model.board
	}

	/// Swaps in a new board; pending edits and tool state are dropped.
	pub fn replace_board(&mut self, board: Board) {
		self.model.board = board;
		self.model.ratsnest.hide();
		self.tools.reset_all();
		debug!(items = self.model.board.len(), "Board replaced");
	}

	/// Rebuilds the hotkey table from the given binding layers.
	pub fn reload_hotkeys(&mut self, legacy: &dyn BindingSource, user: &dyn BindingSource) {
		self.registry.update_hotkeys(legacy, user);
	}

	/// Dispatches a key press. Returns true if an action fired or a tool
	/// consumed the raw key.
	pub fn handle_key(&mut self, key: Key) -> bool {
		if run_hotkey(&self.registry, &mut self.tools, &mut self.model, key) {
			return true;
		}
		self.tools
			.dispatch_event(&self.registry, &mut self.model, &ToolEvent::Key(key))
			.is_some()
	}

	/// Runs an action by name as if the user invoked it.
	pub fn run_action(&mut self, name: &str) -> Result<RunOutcome, ToolError> {
		self.tools.run_action_by_name(&self.registry, &mut self.model, name, true)
	}

	pub fn click(&mut self, at: Point) -> bool {
		let event = ToolEvent::Click {
			button: MouseButton::Left,
			at,
		};
		self.tools.dispatch_event(&self.registry, &mut self.model, &event).is_some()
	}

	pub fn motion(&mut self, at: Point) -> bool {
		self.tools
			.dispatch_event(&self.registry, &mut self.model, &ToolEvent::Motion { at })
			.is_some()
	}

	pub fn on_timer(&mut self, tick: RatsnestTick) -> bool {
		self.model.on_ratsnest_timer(tick)
	}

	/// Waits for the next timer message.
	pub async fn next_tick(&mut self) -> Option<RatsnestTick> {
		self.ticks.recv().await
	}

	/// Handles timer messages that already arrived.
	pub fn drain_ticks(&mut self) {
		while let Ok(tick) = self.ticks.try_recv() {
			self.on_timer(tick);
		}
	}

	/// Waits until no deferred work is pending.
	pub async fn settle(&mut self) {
		while self.model.ratsnest.is_pending() {
			match self.ticks.recv().await {
				Some(tick) => {
					self.on_timer(tick);
				}
				None => break,
			}
		}
	}

	pub fn quit_requested(&self) -> bool {
		self.model.quit_requested
	}

	/// Bound keys with their actions, sorted by key.
	pub fn key_listing(&self) -> Vec<(Hotkey, Vec<&Action>)> {
		self.registry
			.hotkeys()
			.bound_actions()
			.into_iter()
			.map(|(key, bound)| (key, bound.iter().filter_map(|b| self.registry.get(b.id)).collect()))
			.collect()
	}
}

#[cfg(test)]
mod tests;
