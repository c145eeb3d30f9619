//! Interactive tools of the PCB editor.

pub mod editor_control;
pub mod placement;
pub mod selection;

pub use editor_control::EditorControl;
pub use placement::PlacementTool;
pub use selection::SelectionTool;
