//! Unendliche Konstruktionslinie für Projektions- und Snap-Berechnungen.
//!
//! Konstruktionslinien werden nie gerendert — sie existieren nur als
//! Hilfsgeometrie für die Lotfuß-Projektion des Definitionspunkts.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Unendliche Linie durch zwei Stützpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstructionLine {
    /// Erster Stützpunkt (Ankerpunkt)
    pub point1: DVec2,
    /// Zweiter Stützpunkt (gibt die Richtung vor)
    pub point2: DVec2,
}

impl ConstructionLine {
    /// Erstellt eine Konstruktionslinie durch zwei Punkte.
    pub fn new(point1: DVec2, point2: DVec2) -> Self {
        Self { point1, point2 }
    }

    /// Richtungsvektor der Linie (nicht normalisiert).
    pub fn direction(&self) -> DVec2 {
        self.point2 - self.point1
    }

    /// Orthogonale Projektion von `pos` auf die unendliche Linie.
    ///
    /// Degenerierte Linien (beide Stützpunkte identisch) liefern den
    /// Ankerpunkt. Die Projektion ist idempotent: ein Punkt auf der Linie
    /// wird auf sich selbst abgebildet.
    pub fn nearest_point(&self, pos: DVec2) -> DVec2 {
        let dir = self.direction();
        let len_sq = dir.length_squared();
        if len_sq <= f64::EPSILON {
            return self.point1;
        }
        let t = (pos - self.point1).dot(dir) / len_sq;
        self.point1 + dir * t
    }
}
