//! Tool registration, the active stack and event execution.

use std::collections::VecDeque;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use solder_primitives::{ActionId, ToolId};
use solder_registry::{Action, ActionRegistry};
use tracing::{debug, trace, warn};

use crate::error::ToolError;
use crate::event::{ActionEvent, ToolEvent};
use crate::stack::{Priority, ToolPriorityStack};
use crate::tool::{Flow, Request, Tool, ToolContext};

/// Upper bound on follow-up requests processed for one external event.
const MAX_REQUESTS_PER_EVENT: usize = 1024;

/// Where a run action ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
	/// The owning tool was inactive; it was activated and handed the action.
	Started(ToolId),
	/// An active tool consumed the action.
	Delivered(ToolId),
	/// No active tool consumed the action.
	Unclaimed,
}

struct ToolSlot<M> {
	name: Arc<str>,
	tool: Box<dyn Tool<M>>,
}

/// Owns the registered tools and runs them cooperatively.
///
/// Exactly one tool callback runs at a time. Events go to the top of the
/// active stack first and travel down while tools return [`Flow::Pass`].
/// Requests queued through [`ToolContext`] run after the event that queued
/// them has been consumed.
pub struct ToolManager<M> {
	tools: FxHashMap<ToolId, ToolSlot<M>>,
	by_name: FxHashMap<Arc<str>, ToolId>,
	stack: ToolPriorityStack,
	requests: VecDeque<Request>,
	next_id: u32,
}

impl<M> Default for ToolManager<M> {
	fn default() -> Self {
		Self::new()
	}
}

impl<M> ToolManager<M> {
	pub fn new() -> Self {
		Self {
			tools: FxHashMap::default(),
			by_name: FxHashMap::default(),
			stack: ToolPriorityStack::new(),
			requests: VecDeque::new(),
			next_id: 1,
		}
	}

	/// Registers an inactive tool.
	pub fn register_tool(&mut self, tool: Box<dyn Tool<M>>) -> Result<ToolId, ToolError> {
		let name: Arc<str> = Arc::from(tool.name());
		if self.by_name.contains_key(&*name) {
			return Err(ToolError::DuplicateTool(name.to_string()));
		}
		let id = ToolId::from_u32(self.next_id);
		self.next_id += 1;
		self.by_name.insert(Arc::clone(&name), id);
		debug!(tool = %name, %id, "Registered tool");
		self.tools.insert(id, ToolSlot { name, tool });
		Ok(id)
	}

	/// Deactivates the tool if needed, then removes it.
	pub fn unregister_tool(&mut self, model: &mut M, name: &str) -> Result<Box<dyn Tool<M>>, ToolError> {
		let id = self.require(name)?;
		self.deactivate_id(id, model);
		self.by_name.remove(name);
		let slot = self.tools.remove(&id).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
		debug!(tool = name, %id, "Unregistered tool");
		Ok(slot.tool)
	}

	pub fn find_tool(&self, name: &str) -> Option<ToolId> {
		self.by_name.get(name).copied()
	}

	pub fn tool_name(&self, id: ToolId) -> Option<&str> {
		self.tools.get(&id).map(|slot| &*slot.name)
	}

	pub fn priority(&self, id: ToolId) -> Option<Priority> {
		self.stack.priority(id)
	}

	pub fn is_active(&self, name: &str) -> bool {
		self.find_tool(name).is_some_and(|id| self.stack.contains(id))
	}

	/// Names of active tools, highest priority first.
	pub fn active_tools(&self) -> Vec<&str> {
		self.stack.top_down().filter_map(|id| self.tool_name(id)).collect()
	}

	pub fn stack(&self) -> &ToolPriorityStack {
		&self.stack
	}

	/// Pushes a tool onto the active stack (or raises it to the top).
	pub fn activate(&mut self, registry: &ActionRegistry, model: &mut M, name: &str) -> Result<Priority, ToolError> {
		let id = self.require(name)?;
		let priority = self.activate_id(id, model);
		self.drain(registry, model);
		Ok(priority)
	}

	/// Removes a tool from the active stack; returns false if it was inactive.
	pub fn deactivate(&mut self, registry: &ActionRegistry, model: &mut M, name: &str) -> Result<bool, ToolError> {
		let id = self.require(name)?;
		let was_active = self.deactivate_id(id, model);
		self.drain(registry, model);
		Ok(was_active)
	}

	/// Runs a registered action.
	///
	/// If the action's owning tool is registered but inactive it is started
	/// and handed the action; otherwise the action is delivered down the
	/// active stack.
	pub fn run_action(
		&mut self,
		registry: &ActionRegistry,
		model: &mut M,
		id: ActionId,
		user_invoked: bool,
	) -> Result<RunOutcome, ToolError> {
		let action = registry.get(id).ok_or_else(|| ToolError::UnknownAction(id.to_string()))?;
		let outcome = self.execute(model, action, user_invoked);
		trace!(action = action.name(), ?outcome, user_invoked, "Ran action");
		self.drain(registry, model);
		Ok(outcome)
	}

	pub fn run_action_by_name(
		&mut self,
		registry: &ActionRegistry,
		model: &mut M,
		name: &str,
		user_invoked: bool,
	) -> Result<RunOutcome, ToolError> {
		let id = registry.find(name).map(Action::id).ok_or_else(|| ToolError::UnknownAction(name.to_string()))?;
		self.run_action(registry, model, id, user_invoked)
	}

	/// Delivers a raw event down the active stack; returns the consumer.
	pub fn dispatch_event(&mut self, registry: &ActionRegistry, model: &mut M, event: &ToolEvent) -> Option<ToolId> {
		let consumer = self.deliver(model, event);
		self.drain(registry, model);
		consumer
	}

	/// Resets every tool after the model was replaced.
	pub fn reset_all(&mut self) {
		for slot in self.tools.values_mut() {
			slot.tool.reset();
		}
	}

	fn require(&self, name: &str) -> Result<ToolId, ToolError> {
		self.find_tool(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))
	}

	fn activate_id(&mut self, id: ToolId, model: &mut M) -> Priority {
		let newly_active = !self.stack.contains(id);
		let priority = self.stack.push(id);
		if newly_active && let Some(slot) = self.tools.get_mut(&id) {
			let mut cx = ToolContext::new(id, model, &mut self.requests);
			slot.tool.activate(&mut cx);
			debug!(tool = %slot.name, %priority, "Activated tool");
		}
		priority
	}

	/// Pops the tool before its deactivate hook runs, so the stack never
	/// holds a tool that has released its state.
	fn deactivate_id(&mut self, id: ToolId, model: &mut M) -> bool {
		if !self.stack.remove(id) {
			return false;
		}
		if let Some(slot) = self.tools.get_mut(&id) {
			let mut cx = ToolContext::new(id, model, &mut self.requests);
			slot.tool.deactivate(&mut cx);
			debug!(tool = %slot.name, "Deactivated tool");
		}
		true
	}

	fn execute(&mut self, model: &mut M, action: &Action, user_invoked: bool) -> RunOutcome {
		let event = ToolEvent::Action(ActionEvent::new(action, user_invoked));
		if let Some(owner) = self.find_tool(action.tool_name())
			&& !self.stack.contains(owner)
		{
			self.activate_id(owner, model);
			self.offer(owner, model, &event);
			return RunOutcome::Started(owner);
		}
		match self.deliver(model, &event) {
			Some(id) => RunOutcome::Delivered(id),
			None => RunOutcome::Unclaimed,
		}
	}

	fn offer(&mut self, id: ToolId, model: &mut M, event: &ToolEvent) -> Flow {
		let Some(slot) = self.tools.get_mut(&id) else {
			return Flow::Pass;
		};
		let flow = {
			let mut cx = ToolContext::new(id, model, &mut self.requests);
			slot.tool.handle(event, &mut cx)
		};
		if flow == Flow::Finish {
			self.deactivate_id(id, model);
		}
		flow
	}

	fn deliver(&mut self, model: &mut M, event: &ToolEvent) -> Option<ToolId> {
		let order: Vec<ToolId> = self.stack.top_down().collect();
		for id in order {
			match self.offer(id, model, event) {
				Flow::Pass => continue,
				flow => {
					trace!(tool = %id, ?flow, "Event consumed");
					return Some(id);
				}
			}
		}
		None
	}

	fn drain(&mut self, registry: &ActionRegistry, model: &mut M) {
		let mut processed = 0;
		while let Some(request) = self.requests.pop_front() {
			processed += 1;
			if processed > MAX_REQUESTS_PER_EVENT {
				warn!(dropped = self.requests.len() + 1, "Tool request limit reached; dropping pending requests");
				self.requests.clear();
				return;
			}
			match request {
				Request::RunAction { name } => match registry.find(&name) {
					Some(action) => {
						self.execute(model, action, false);
					}
					None => warn!(action = %name, "Tool requested unknown action"),
				},
				Request::Activate { tool } => match self.find_tool(&tool) {
					Some(id) => {
						self.activate_id(id, model);
					}
					None => warn!(%tool, "Tool requested activation of unknown tool"),
				},
				Request::Deactivate { tool } => match self.find_tool(&tool) {
					Some(id) => {
						self.deactivate_id(id, model);
					}
					None => warn!(%tool, "Tool requested deactivation of unknown tool"),
				},
				Request::Finish { tool } => {
					self.deactivate_id(tool, model);
				}
				Request::Post(event) => {
					self.deliver(model, &event);
				}
			}
		}
	}
}

impl<M> crate::dispatch::ToolDirectory for ToolManager<M> {
	fn find_tool(&self, name: &str) -> Option<ToolId> {
		ToolManager::find_tool(self, name)
	}

	fn priority(&self, tool: ToolId) -> Option<Priority> {
		ToolManager::priority(self, tool)
	}
}
