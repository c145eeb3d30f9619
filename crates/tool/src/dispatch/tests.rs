use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;
use solder_primitives::{Hotkey, Key, Modifiers, NamedKey, ToolId};
use solder_registry::{ActionDef, ActionRegistry, DuplicatePolicy, NoBindings};

use super::*;
use crate::event::ToolEvent;
use crate::manager::ToolManager;
use crate::tool::{Flow, Tool, ToolContext};

/// Tool activity without a real manager.
#[derive(Default)]
struct FakeTools {
	ids: FxHashMap<&'static str, ToolId>,
	active: FxHashMap<ToolId, Priority>,
}

impl FakeTools {
	fn with(mut self, name: &'static str, id: u32, priority: Option<usize>) -> Self {
		let id = ToolId::from_u32(id);
		self.ids.insert(name, id);
		if let Some(rank) = priority {
			self.active.insert(id, Priority::new(rank));
		}
		self
	}
}

impl ToolDirectory for FakeTools {
	fn find_tool(&self, name: &str) -> Option<ToolId> {
		self.ids.get(name).copied()
	}

	fn priority(&self, tool: ToolId) -> Option<Priority> {
		self.active.get(&tool).copied()
	}
}

fn registry(defs: &[ActionDef]) -> ActionRegistry {
	let mut registry = ActionRegistry::new();
	registry.register_all(defs, DuplicatePolicy::Panic);
	registry.update_hotkeys(&NoBindings, &NoBindings);
	registry
}

fn id_of(registry: &ActionRegistry, name: &str) -> ActionId {
	registry.find(name).map(|action| action.id()).expect("registered action")
}

const ROUTE_DRAG: ActionDef = ActionDef::new("app.router.drag").key(Hotkey::char('D'));
const EDIT_DRAG: ActionDef = ActionDef::new("app.edit.drag").key(Hotkey::char('D'));
const GLOBAL_D: ActionDef = ActionDef::new("app.control.duplicate").global().key(Hotkey::char('D'));
const SLASH: ActionDef = ActionDef::new("app.control.search").global().key(Hotkey::char('/'));
const SHIFTED_A: ActionDef = ActionDef::new("app.control.autoplace").global().key(Hotkey::char('A').with(Modifiers::SHIFT));

#[test]
fn highest_priority_context_action_wins() {
	let registry = registry(&[ROUTE_DRAG, EDIT_DRAG, GLOBAL_D]);
	let tools = FakeTools::default().with("app.router", 1, Some(0)).with("app.edit", 2, Some(3));

	let resolution = resolve_hotkey(&registry, &tools, Key::char('d'));
	assert_eq!(
		resolution,
		HotkeyResolution::Context {
			action: id_of(&registry, "app.edit.drag"),
			tool: ToolId::from_u32(2),
			priority: Priority::new(3),
			key: Hotkey::char('D'),
		}
	);
}

#[test]
fn inactive_tools_fall_back_to_global() {
	let registry = registry(&[ROUTE_DRAG, EDIT_DRAG, GLOBAL_D]);
	let tools = FakeTools::default().with("app.router", 1, None).with("app.edit", 2, None);

	let resolution = resolve_hotkey(&registry, &tools, Key::char('D'));
	assert_eq!(
		resolution,
		HotkeyResolution::Global {
			action: id_of(&registry, "app.control.duplicate"),
			key: Hotkey::char('D'),
		}
	);
}

#[test]
fn context_action_of_unknown_tool_is_ignored() {
	let registry = registry(&[ROUTE_DRAG]);
	let tools = FakeTools::default();
	assert_eq!(resolve_hotkey(&registry, &tools, Key::char('d')), HotkeyResolution::Unhandled);
}

#[test]
fn shifted_press_retries_without_shift() {
	let registry = registry(&[SLASH]);
	let tools = FakeTools::default();

	let resolution = resolve_hotkey(&registry, &tools, Key::char('/').with(Modifiers::SHIFT));
	assert_eq!(
		resolution,
		HotkeyResolution::Global {
			action: id_of(&registry, "app.control.search"),
			key: Hotkey::char('/'),
		}
	);
}

#[test]
fn bound_shift_chord_does_not_fall_through_when_its_tool_is_idle() {
	const AUTOROUTE: ActionDef = ActionDef::new("app.router.autoroute").key(Hotkey::char('A').with(Modifiers::SHIFT));
	const SELECT_ALL: ActionDef = ActionDef::new("app.control.all").global().key(Hotkey::char('A'));
	let registry = registry(&[AUTOROUTE, SELECT_ALL]);
	let tools = FakeTools::default().with("app.router", 1, None);

	let shifted = resolve_hotkey(&registry, &tools, Key::char('a').with(Modifiers::SHIFT));
	assert_eq!(shifted, HotkeyResolution::Unhandled);

	let plain = resolve_hotkey(&registry, &tools, Key::char('a'));
	assert_eq!(plain.action(), Some(id_of(&registry, "app.control.all")));
}

#[test]
fn exact_shift_binding_is_preferred_over_retry() {
	const PLAIN_A: ActionDef = ActionDef::new("app.control.annotate").global().key(Hotkey::char('A'));
	let registry = registry(&[PLAIN_A, SHIFTED_A]);
	let tools = FakeTools::default();

	let shifted = resolve_hotkey(&registry, &tools, Key::char('a').with(Modifiers::SHIFT));
	assert_eq!(shifted.action(), Some(id_of(&registry, "app.control.autoplace")));

	let plain = resolve_hotkey(&registry, &tools, Key::char('a'));
	assert_eq!(plain.action(), Some(id_of(&registry, "app.control.annotate")));
}

#[test]
fn unshifted_press_never_gains_shift() {
	let registry = registry(&[SHIFTED_A]);
	let tools = FakeTools::default();
	assert_eq!(resolve_hotkey(&registry, &tools, Key::char('a')), HotkeyResolution::Unhandled);
}

#[test]
fn other_modifiers_must_match_exactly() {
	let registry = registry(&[SLASH]);
	let tools = FakeTools::default();
	let pressed = Key::char('/').with(Modifiers::CTRL | Modifiers::SHIFT);
	assert_eq!(resolve_hotkey(&registry, &tools, pressed), HotkeyResolution::Unhandled);
}

#[test]
fn unbound_key_is_unhandled() {
	let registry = registry(&[GLOBAL_D]);
	let tools = FakeTools::default();
	let resolution = resolve_hotkey(&registry, &tools, Key::named(NamedKey::Tab));
	assert!(!resolution.is_handled());
	assert_eq!(resolution.action(), None);
}

type Log = Vec<String>;

struct Selection;

impl Tool<Log> for Selection {
	fn name(&self) -> &str {
		"app.sel"
	}

	fn handle(&mut self, event: &ToolEvent, cx: &mut ToolContext<'_, Log>) -> Flow {
		match event.action() {
			Some(action) => {
				cx.model_mut().push(action.name.to_string());
				Flow::Consumed
			}
			None => Flow::Pass,
		}
	}
}

#[test]
fn hotkeys_follow_tool_activation() {
	const MOVE: ActionDef = ActionDef::new("app.sel.move").key(Hotkey::char('M'));
	const CANCEL: ActionDef = ActionDef::new("app.global.cancel").global().key(Hotkey::named(NamedKey::Escape));
	let registry = registry(&[MOVE, CANCEL]);

	let mut tools = ToolManager::new();
	tools.register_tool(Box::new(Selection)).expect("selection registers");
	let mut log = Log::new();

	tools.activate(&registry, &mut log, "app.sel").expect("known tool");
	assert!(run_hotkey(&registry, &mut tools, &mut log, Key::char('m')));
	assert_eq!(log, vec!["app.sel.move"]);

	assert!(run_hotkey(&registry, &mut tools, &mut log, Key::named(NamedKey::Escape)));
	assert_eq!(log, vec!["app.sel.move", "app.global.cancel"]);

	tools.deactivate(&registry, &mut log, "app.sel").expect("known tool");
	assert!(!run_hotkey(&registry, &mut tools, &mut log, Key::char('m')));
	assert_eq!(log.len(), 2);
}
