//! Replay steps for `solder run`.

use anyhow::{Context, bail};
use solder_editor::Editor;
use solder_primitives::{Key, Point, parse_hotkey};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
	Key(Key),
	Click(Point),
	Motion(Point),
	Action(String),
	/// Wait for deferred work to finish.
	Settle,
}

pub fn parse_step(token: &str) -> anyhow::Result<Step> {
	if token == "settle" {
		return Ok(Step::Settle);
	}
	if let Some(at) = token.strip_prefix("click:") {
		return parse_point(at).map(Step::Click);
	}
	if let Some(at) = token.strip_prefix("move:") {
		return parse_point(at).map(Step::Motion);
	}
	if let Some(name) = token.strip_prefix("action:") {
		if name.is_empty() {
			bail!("empty action name in {token:?}");
		}
		return Ok(Step::Action(name.to_string()));
	}
	let hotkey = parse_hotkey(token).with_context(|| format!("invalid step {token:?}"))?;
	Ok(Step::Key(Key::new(hotkey.code(), hotkey.modifiers())))
}

fn parse_point(text: &str) -> anyhow::Result<Point> {
	let Some((x, y)) = text.split_once(',') else {
		bail!("expected X,Y, got {text:?}");
	};
	let x = x.trim().parse().with_context(|| format!("invalid x coordinate {x:?}"))?;
	let y = y.trim().parse().with_context(|| format!("invalid y coordinate {y:?}"))?;
	Ok(Point::new(x, y))
}

/// Applies one step and describes what happened.
pub async fn apply(editor: &mut Editor, step: &Step) -> anyhow::Result<String> {
	let outcome = match step {
		Step::Key(key) => {
			let handled = editor.handle_key(*key);
			format!("key {} -> {}", solder_primitives::Hotkey::from(*key), if handled { "handled" } else { "unhandled" })
		}
		Step::Click(at) => {
			let consumed = editor.click(*at);
			format!("click {},{} -> {}", at.x, at.y, if consumed { "consumed" } else { "ignored" })
		}
		Step::Motion(at) => {
			editor.motion(*at);
			format!("move {},{}", at.x, at.y)
		}
		Step::Action(name) => {
			let outcome = editor.run_action(name)?;
			format!("action {name} -> {outcome:?}")
		}
		Step::Settle => {
			editor.settle().await;
			"settled".to_string()
		}
	};
	editor.drain_ticks();
	debug!(?step, "Applied step");
	Ok(outcome)
}
