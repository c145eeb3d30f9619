/// Errors reported by the tool manager.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
	#[error("unknown tool {0:?}")]
	UnknownTool(String),
	#[error("tool {0:?} is already registered")]
	DuplicateTool(String),
	#[error("unknown action {0:?}")]
	UnknownAction(String),
}
