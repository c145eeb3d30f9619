use pretty_assertions::assert_eq;
use solder_registry::builtins::{CANCEL_INTERACTIVE, COMMON_ACTIONS};
use solder_registry::{ActionRegistry, DuplicatePolicy};
use solder_tool::{RunOutcome, ToolManager};
use tokio::sync::mpsc;

use super::*;
use crate::actions::PCB_ACTIONS;
use crate::board::Board;
use crate::config::RatsnestConfig;
use crate::ratsnest::RatsnestController;
use crate::tools::{EditorControl, SelectionTool};

struct Fixture {
	registry: ActionRegistry,
	tools: ToolManager<PcbModel>,
	model: PcbModel,
}

impl Fixture {
	fn new() -> Self {
		let mut registry = ActionRegistry::new();
		registry.register_all(COMMON_ACTIONS, DuplicatePolicy::Panic);
		registry.register_all(PCB_ACTIONS, DuplicatePolicy::Panic);

		let (tx, _rx) = mpsc::unbounded_channel();
		let config = RatsnestConfig {
			debounce_ms: 20,
			slow_threshold_ms: 10_000,
		};
		let mut board = Board::new();
		board.add(Item::via(Point::new(0, 0)).in_net(1));
		let mut model = PcbModel::new(board, RatsnestController::new(&config, tx));

		let mut tools = ToolManager::new();
		tools.register_tool(Box::new(EditorControl::new())).expect("control registers");
		tools.register_tool(Box::new(SelectionTool::new())).expect("selection registers");
		tools
			.register_tool(Box::new(PlacementTool::new(Item::footprint("", Point::ORIGIN).in_net(1), "U")))
			.expect("placement registers");
		tools.activate(&registry, &mut model, crate::tools::editor_control::NAME).expect("control activates");
		tools.activate(&registry, &mut model, crate::tools::selection::NAME).expect("selection activates");
		Self { registry, tools, model }
	}

	fn run(&mut self, name: &str) -> RunOutcome {
		self.tools
			.run_action_by_name(&self.registry, &mut self.model, name, true)
			.expect("registered action")
	}

	fn send(&mut self, event: ToolEvent) {
		self.tools.dispatch_event(&self.registry, &mut self.model, &event);
	}

	fn click(&mut self, x: i64, y: i64) {
		self.send(ToolEvent::Click {
			button: MouseButton::Left,
			at: Point::new(x, y),
		});
	}
}

#[test]
fn place_action_starts_the_tool_idle() {
	let mut f = Fixture::new();
	let outcome = f.run(PLACE_FOOTPRINT.name);
	assert_eq!(outcome, RunOutcome::Started(f.tools.find_tool(NAME).expect("registered tool")));
	assert_eq!(f.tools.active_tools()[0], NAME);
	assert_eq!(f.model.board.len(), 1);
}

#[test]
fn click_picks_then_click_commits() {
	let mut f = Fixture::new();
	f.run(PLACE_FOOTPRINT.name);

	f.click(10, 0);
	let id = f.model.board.pending().expect("footprint picked");
	assert!(f.model.board.selection().contains(&id));
	assert!(f.model.ratsnest.is_visible());

	f.send(ToolEvent::Motion { at: Point::new(20, 5) });
	f.run(ROTATE_CW.name);
	f.click(30, 5);

	let item = f.model.board.item(id).expect("committed footprint");
	assert_eq!(item.position, Point::new(30, 5));
	assert_eq!(item.rotation, 90);
	assert_eq!(item.reference(), Some("U1"));
	assert_eq!(f.model.board.pending(), None);
	assert_eq!(f.model.board.revision(), 1);
	assert!(!f.model.ratsnest.is_visible(), "commit hides the dynamic ratsnest");
	assert!(f.tools.is_active(NAME), "tool stays for the next footprint");
}

#[test]
fn cancel_reverts_when_placing_and_finishes_when_idle() {
	let mut f = Fixture::new();
	f.run(PLACE_FOOTPRINT.name);
	f.click(10, 0);
	assert_eq!(f.model.board.len(), 2);

	f.run(CANCEL_INTERACTIVE.name);
	assert_eq!(f.model.board.len(), 1, "picked footprint reverted");
	assert!(f.model.board.selection().is_empty());
	assert!(f.tools.is_active(NAME));

	f.run(CANCEL_INTERACTIVE.name);
	assert!(!f.tools.is_active(NAME));
	assert_eq!(f.tools.active_tools(), vec![crate::tools::selection::NAME, crate::tools::editor_control::NAME]);
}

#[test]
fn deactivating_mid_placement_releases_the_footprint() {
	let mut f = Fixture::new();
	f.run(PLACE_FOOTPRINT.name);
	f.click(10, 0);

	f.tools.deactivate(&f.registry, &mut f.model, NAME).expect("registered tool");
	assert_eq!(f.model.board.len(), 1);
	assert_eq!(f.model.board.pending(), None);
}

#[test]
fn rotate_is_ignored_while_idle() {
	let mut f = Fixture::new();
	f.run(PLACE_FOOTPRINT.name);
	assert_eq!(f.run(ROTATE_CW.name), RunOutcome::Unclaimed);
}
