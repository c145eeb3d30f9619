use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "solder")]
#[command(about = "PCB editor action and hotkey dispatch")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to <config dir>/solder/config.toml)
	#[arg(long, short = 'c', value_name = "PATH", global = true)]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Bind an action to a key; KEY may be "none" to unbind
	#[arg(long = "bind", value_name = "ACTION=KEY", value_parser = parse_assignment, global = true)]
	pub bind: Vec<(String, String)>,

	/// Bind a legacy hotkey name to a key
	#[arg(long = "legacy", value_name = "NAME=KEY", value_parser = parse_assignment, global = true)]
	pub legacy: Vec<(String, String)>,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// List every bound hotkey and its actions
	Keys,
	/// Show which action a key press fires, without running it
	Resolve {
		/// Key, e.g. "Ctrl+Shift+M"
		key: String,
	},
	/// Replay steps; reads whitespace-separated steps from stdin when none are given
	///
	/// Steps are key strings ("o", "Ctrl+Z", "Esc"), "click:X,Y", "move:X,Y",
	/// "action:NAME" and "settle".
	Run {
		/// Steps to replay, in order
		steps: Vec<String>,
	},
}

/// Parses `NAME=VALUE`; the value may be empty.
pub fn parse_assignment(arg: &str) -> Result<(String, String), String> {
	match arg.split_once('=') {
		Some((name, value)) if !name.trim().is_empty() => Ok((name.trim().to_string(), value.trim().to_string())),
		_ => Err(format!("expected NAME=KEY, got {arg:?}")),
	}
}
