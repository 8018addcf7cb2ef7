//! Geteilte Konfiguration und Konstanten für layer-übergreifende Verträge.

pub mod options;

pub use options::EditorOptions;
pub use options::{CONSTRUCTION_LINE_REACH, GRIP_TOLERANCE};
