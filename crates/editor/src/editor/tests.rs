use pretty_assertions::assert_eq;
use solder_primitives::{Modifiers, NamedKey};
use solder_registry::{Binding, BindingLayer};

use super::*;
use crate::board::DEFAULT_TRACK_WIDTH;
use crate::tools::placement;

fn editor() -> Editor {
	Editor::new(EditorConfig::default()).expect("editor builds")
}

#[test]
fn starts_with_base_tools_active() {
	let editor = editor();
	assert_eq!(editor.tools().active_tools(), vec![selection::NAME, editor_control::NAME]);
	assert!(editor.registry().hotkeys().conflicts().is_empty());
}

#[test]
fn placement_hotkey_starts_and_escape_finishes() {
	let mut editor = editor();
	assert!(editor.handle_key(Key::char('o')));
	assert!(editor.tools().is_active(placement::NAME));

	assert!(editor.handle_key(Key::named(NamedKey::Escape)));
	assert!(!editor.tools().is_active(placement::NAME));
}

#[test]
fn unbound_keys_are_not_handled() {
	let mut editor = editor();
	assert!(!editor.handle_key(Key::char('j')));
	assert!(!editor.handle_key(Key::char('r')), "rotate needs an active placement");
}

#[test]
fn shift_w_prefers_its_own_binding() {
	let mut editor = editor();
	editor.handle_key(Key::char('w'));
	assert_eq!(editor.board().track_width(), DEFAULT_TRACK_WIDTH + 50);
	editor.handle_key(Key::char('w').with(Modifiers::SHIFT));
	editor.handle_key(Key::char('W').with(Modifiers::SHIFT));
	assert_eq!(editor.board().track_width(), DEFAULT_TRACK_WIDTH - 50);
}

#[test]
fn quit_is_a_request() {
	let mut editor = editor();
	assert!(editor.handle_key(Key::char('q').with(Modifiers::CTRL)));
	assert!(editor.quit_requested());
}

#[test]
fn user_layer_beats_legacy_layer() {
	let mut editor = editor();
	let legacy: BindingLayer = [("Add Footprint", Binding::Key(Hotkey::char('A')))].into_iter().collect();
	let user: BindingLayer = [("pcbnew.PlacementTool.placeFootprint", Binding::Key(Hotkey::char('K')))].into_iter().collect();

	editor.reload_hotkeys(&legacy, &NoBindings);
	assert!(!editor.handle_key(Key::char('o')));
	assert!(editor.handle_key(Key::char('a')));
	editor.handle_key(Key::named(NamedKey::Escape));

	editor.reload_hotkeys(&legacy, &user);
	assert!(!editor.handle_key(Key::char('a')));
	assert!(editor.handle_key(Key::char('k')));
	assert!(editor.tools().is_active(placement::NAME));
}

#[test]
fn key_listing_names_the_bound_actions() {
	let editor = editor();
	let listing = editor.key_listing();
	let escape = listing
		.iter()
		.find(|(key, _)| *key == Hotkey::named(NamedKey::Escape))
		.expect("escape is bound");
	assert_eq!(escape.1.iter().map(|action| action.name()).collect::<Vec<_>>(), vec!["common.Interactive.cancel"]);
}

#[test]
fn replacing_the_board_drops_pending_placement() {
	let mut editor = editor();
	editor.handle_key(Key::char('o'));
	editor.click(Point::new(3, 3));
	assert!(editor.board().pending().is_some());

	editor.replace_board(Board::new());
	assert!(editor.board().is_empty());
	assert!(!editor.model().ratsnest.is_visible());

	// The placement tool forgot its footprint: the next click picks a new one.
	editor.click(Point::new(4, 4));
	assert_eq!(editor.board().len(), 1);
	assert!(editor.board().pending().is_some());
}

#[test]
fn unknown_action_is_an_error() {
	let mut editor = editor();
	assert!(matches!(editor.run_action("pcbnew.Nope.nothing"), Err(ToolError::UnknownAction(_))));
}
