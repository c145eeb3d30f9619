use solder_editor::{Editor, EditorConfig};
use solder_primitives::{Hotkey, Key, NamedKey};

use super::*;

fn cli(args: &[&str]) -> Cli {
	let mut argv = vec!["solder"];
	argv.extend_from_slice(args);
	Cli::try_parse_from(argv).expect("arguments parse")
}

#[test]
fn bind_flag_rebinds_an_action() {
	let mut editor = Editor::new(EditorConfig::default()).expect("editor builds");
	apply_bindings(&mut editor, &cli(&["--bind", "pcbnew.PlacementTool.placeFootprint=K", "keys"]));

	let place = editor.registry().find("pcbnew.PlacementTool.placeFootprint").expect("registered");
	assert_eq!(editor.registry().hotkey_of(place.id()), Some(Hotkey::char('K')));
	assert!(editor.handle_key(Key::char('k')));
}

#[test]
fn none_unbinds_and_bad_keys_are_skipped() {
	let mut editor = Editor::new(EditorConfig::default()).expect("editor builds");
	let skipped = apply_bindings(
		&mut editor,
		&cli(&["--bind", "common.Interactive.cancel=none", "--bind", "common.Interactive.undo=Hyper+U", "keys"]),
	);
	assert_eq!(skipped, 1);

	assert!(!editor.handle_key(Key::named(NamedKey::Escape)));
	let undo = editor.registry().find("common.Interactive.undo").expect("registered");
	assert!(editor.registry().hotkey_of(undo.id()).is_some(), "bad value leaves the default");
}

#[test]
fn legacy_flag_uses_legacy_names() {
	let mut editor = Editor::new(EditorConfig::default()).expect("editor builds");
	apply_bindings(&mut editor, &cli(&["--legacy", "Add Footprint=A", "keys"]));
	assert!(editor.handle_key(Key::char('a')));
}
