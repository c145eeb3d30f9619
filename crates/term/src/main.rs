//! `solder` command-line frontend.

mod cli;
mod logging;
mod script;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use solder_editor::{Editor, EditorConfig};
use solder_primitives::{Key, parse_hotkey};
use solder_registry::{BindingLayer, NoBindings};
use solder_tool::{HotkeyResolution, resolve_hotkey};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let config = EditorConfig::load_or_default(cli.config.as_deref()).context("failed to load config")?;
	logging::setup_tracing(cli.verbose, config.log.filter.as_deref());

	let mut editor = Editor::new(config).context("failed to start editor")?;
	apply_bindings(&mut editor, &cli);

	match cli.command {
		Command::Keys => print_keys(&editor),
		Command::Resolve { key } => print_resolution(&editor, &key)?,
		Command::Run { steps } if steps.is_empty() => run_stdin(&mut editor).await?,
		Command::Run { steps } => run_steps(&mut editor, &steps).await?,
	}
	Ok(())
}

/// Applies `--bind`/`--legacy` layers and returns how many values were skipped as unparseable.
fn apply_bindings(editor: &mut Editor, cli: &Cli) -> usize {
	if cli.bind.is_empty() && cli.legacy.is_empty() {
		return 0;
	}
	let (user, user_problems) = BindingLayer::parse_pairs(cli.bind.iter().map(|(name, key)| (name.as_str(), key.as_str())));
	let (legacy, legacy_problems) = BindingLayer::parse_pairs(cli.legacy.iter().map(|(name, key)| (name.as_str(), key.as_str())));
	for (name, _) in user.iter() {
		if editor.registry().find(name).is_none() {
			warn!(action = name, "Binding for unknown action");
		}
	}
	editor.reload_hotkeys(&legacy, &user);
	for conflict in editor.registry().hotkeys().conflicts() {
		let name = |id| editor.registry().get(id).map_or("?", |action| action.name());
		info!(key = %conflict.key, kept = name(conflict.kept), dropped = name(conflict.dropped), "Global hotkey replaced");
	}
	user_problems.len() + legacy_problems.len()
}

fn print_keys(editor: &Editor) {
	for (key, actions) in editor.key_listing() {
		let names: Vec<String> = actions
			.iter()
			.map(|action| format!("{} ({})", action.name(), if action.is_global() { "global" } else { "context" }))
			.collect();
		println!("{key:<16} {}", names.join(", "));
	}
}

fn print_resolution(editor: &Editor, key: &str) -> anyhow::Result<()> {
	let hotkey = parse_hotkey(key).with_context(|| format!("invalid key {key:?}"))?;
	let resolution = resolve_hotkey(editor.registry(), editor.tools(), Key::new(hotkey.code(), hotkey.modifiers()));
	let name = |id| editor.registry().get(id).map_or("?", |action| action.name());
	match resolution {
		HotkeyResolution::Context { action, tool, priority, key } => {
			let tool = editor.tools().tool_name(tool).unwrap_or("?");
			println!("{key} -> {} (tool {tool}, priority {priority})", name(action));
		}
		HotkeyResolution::Global { action, key } => println!("{key} -> {} (global)", name(action)),
		HotkeyResolution::Unhandled => println!("{hotkey} -> unhandled"),
	}
	Ok(())
}

async fn run_steps(editor: &mut Editor, tokens: &[String]) -> anyhow::Result<()> {
	for token in tokens {
		let step = script::parse_step(token)?;
		println!("{}", script::apply(editor, &step).await?);
		if editor.quit_requested() {
			break;
		}
	}
	editor.settle().await;
	print_board(editor);
	Ok(())
}

async fn run_stdin(editor: &mut Editor) -> anyhow::Result<()> {
	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	while !editor.quit_requested() {
		tokio::select! {
			line = lines.next_line() => {
				let Some(line) = line.context("failed to read stdin")? else {
					break;
				};
				for token in line.split_whitespace() {
					match script::parse_step(token) {
						Ok(step) => println!("{}", script::apply(editor, &step).await?),
						Err(error) => eprintln!("{error:#}"),
					}
				}
			}
			Some(tick) = editor.next_tick() => {
				editor.on_timer(tick);
			}
		}
	}
	editor.settle().await;
	print_board(editor);
	Ok(())
}

fn print_board(editor: &Editor) {
	let board = editor.board();
	for (id, item) in board.items() {
		let label = item.reference().unwrap_or("via");
		println!("{id} {label} at {},{} rot {}", item.position.x, item.position.y, item.rotation);
	}
	info!(
		items = board.len(),
		revision = board.revision(),
		track_width = board.track_width(),
		active_tools = ?editor.tools().active_tools(),
		"Session finished"
	);
}

#[cfg(test)]
mod tests;
