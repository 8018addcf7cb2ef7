//! Application-Layer: Events, Undo-Journal, Collaborator-State und Tools.

pub mod events;
pub mod history;
pub mod state;
pub mod tools;

pub use events::{CursorKind, InputEvent, PlacementAction, RedrawScope};
pub use history::{UndoCycle, UndoJournal};
pub use state::{EditorState, PanelState, ViewState};
pub use tools::ordinate::{OrdinatePlacement, PlacementStatus};
pub use tools::PlacementPreview;
