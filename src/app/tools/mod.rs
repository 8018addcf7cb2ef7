//! Platzierungs-Tools für Bemaßungs-Entities.
//!
//! Tools sind zustandsbehaftet (Klick-Phasen), erzeugen reine
//! Preview-Daten (`PlacementPreview`) und committen fertige Entities
//! selbst in die Zeichnung inklusive Undo-Zyklus.

/// Ordinaten-Bemaßungs-Tool mit sequentieller Punkt-Platzierung.
pub mod ordinate;

use glam::DVec2;

use crate::core::OrdinateDimension;

/// Preview-Geometrie für das Rendering (transient, nie committet).
///
/// Ungültige bzw. fehlende Punkte blockieren die Preview: die Felder
/// bleiben dann leer, ein Fehler ist das nicht.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementPreview {
    /// Transiente Hilfslinie vom ersten Punkt zur Mausposition
    pub extension_line: Option<(DVec2, DVec2)>,
    /// Transiente vollständige Bemaßung (Hilfslinie + Führung + Label)
    pub dimension: Option<OrdinateDimension>,
}

impl PlacementPreview {
    /// Gibt `true` zurück, wenn nichts zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.extension_line.is_none() && self.dimension.is_none()
    }
}
