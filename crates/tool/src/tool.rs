//! The tool capability trait and the context handed to tool callbacks.

use std::collections::VecDeque;

use solder_primitives::ToolId;
use solder_registry::ActionDef;

use crate::event::ToolEvent;

/// What a tool did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	/// The event was handled; tools below do not see it.
	Consumed,
	/// Not interested; offer the event to the next tool down.
	Pass,
	/// Handled, and the tool is done: it is popped and deactivated immediately.
	Finish,
}

/// Follow-up work a tool asks for while handling an event.
///
/// Requests are queued and run in order once the current event has been
/// fully consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
	RunAction { name: String },
	Activate { tool: String },
	Deactivate { tool: String },
	/// Pops the requesting tool, as if it had returned [`Flow::Finish`].
	Finish { tool: ToolId },
	Post(ToolEvent),
}

/// An interactive mode driven by delivered events.
///
/// `M` is the document model the tool edits. Tools keep their own state
/// between events; the manager never runs two callbacks at once.
pub trait Tool<M> {
	/// Tool name; actions named `<tool name>.<verb>` belong to this tool.
	fn name(&self) -> &str;

	/// Called when the tool is pushed onto the active stack.
	fn activate(&mut self, _cx: &mut ToolContext<'_, M>) {}

	fn handle(&mut self, event: &ToolEvent, cx: &mut ToolContext<'_, M>) -> Flow;

	/// Called after the tool has been removed from the active stack; release
	/// anything held for the current operation here.
	fn deactivate(&mut self, _cx: &mut ToolContext<'_, M>) {}

	/// Drops cached state after the model was replaced.
	fn reset(&mut self) {}
}

/// Access to the model and the request queue during a tool callback.
pub struct ToolContext<'a, M> {
	tool: ToolId,
	model: &'a mut M,
	requests: &'a mut VecDeque<Request>,
}

impl<'a, M> ToolContext<'a, M> {
	pub(crate) fn new(tool: ToolId, model: &'a mut M, requests: &'a mut VecDeque<Request>) -> Self {
		Self { tool, model, requests }
	}

	/// Id of the tool being called.
	pub fn tool_id(&self) -> ToolId {
		self.tool
	}

	pub fn model(&self) -> &M {
		&*self.model
	}

	pub fn model_mut(&mut self) -> &mut M {
		&mut *self.model
	}

	/// Queues the declared action to run after the current event.
	pub fn run(&mut self, def: &ActionDef) {
		self.run_action(def.name);
	}

	/// Queues an action by name to run after the current event.
	pub fn run_action(&mut self, name: impl Into<String>) {
		self.requests.push_back(Request::RunAction { name: name.into() });
	}

	pub fn activate_tool(&mut self, tool: impl Into<String>) {
		self.requests.push_back(Request::Activate { tool: tool.into() });
	}

	pub fn deactivate_tool(&mut self, tool: impl Into<String>) {
		self.requests.push_back(Request::Deactivate { tool: tool.into() });
	}

	/// Finishes the calling tool once the current event is done.
	pub fn finish(&mut self) {
		self.requests.push_back(Request::Finish { tool: self.tool });
	}

	/// Queues an event for top-down delivery after the current one.
	pub fn post(&mut self, event: ToolEvent) {
		self.requests.push_back(Request::Post(event));
	}
}
