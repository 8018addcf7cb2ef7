//! Ordinate-Dimension Editor Core.
//!
//! Geometrie-Modell und Platzierungs-Zustandsmaschine für Ordinaten-
//! Bemaßungen als Library exportiert für Tests und Host-Frontends.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    CursorKind, EditorState, InputEvent, OrdinatePlacement, PanelState, PlacementAction,
    PlacementPreview, PlacementStatus, RedrawScope, UndoCycle, UndoJournal, ViewState,
};
pub use core::{
    ConstructionLine, DimEntity, DimStyle, DimensionBase, Drawing, OrdinateData,
    OrdinateDimension, Pen,
};
pub use shared::{EditorOptions, CONSTRUCTION_LINE_REACH, GRIP_TOLERANCE};
