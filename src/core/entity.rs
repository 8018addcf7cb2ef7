//! Geschlossene Menge der Bemaßungs-Entities.
//!
//! Weitere Bemaßungsarten (linear, Winkel, Durchmesser) kommen als neue
//! Varianten dazu und teilen die Basisdaten-Schnittstelle — keine
//! Vererbungshierarchie.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::dimension::DimensionBase;
use super::ordinate::OrdinateDimension;

/// Bemaßungs-Entity einer Zeichnung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DimEntity {
    /// Ordinaten-Bemaßung
    Ordinate(OrdinateDimension),
}

impl DimEntity {
    /// Gemeinsame Basisdaten der Bemaßung.
    pub fn base(&self) -> &DimensionBase {
        match self {
            DimEntity::Ordinate(d) => &d.base,
        }
    }

    /// Mutable Sicht auf die Basisdaten (Text-Edits).
    pub fn base_mut(&mut self) -> &mut DimensionBase {
        match self {
            DimEntity::Ordinate(d) => &mut d.base,
        }
    }

    /// Projektion/Label neu berechnen.
    pub fn update_dim(&mut self, auto_text: bool) {
        match self {
            DimEntity::Ordinate(d) => d.update_dim(auto_text),
        }
    }

    /// Angezeigter Bemaßungstext.
    pub fn label(&self) -> String {
        match self {
            DimEntity::Ordinate(d) => d.label(),
        }
    }

    /// Referenzpunkte für Grip-Editing.
    pub fn ref_points(&self) -> Vec<DVec2> {
        match self {
            DimEntity::Ordinate(d) => d.ref_points().to_vec(),
        }
    }

    /// Verschiebt das Entity um `offset`.
    pub fn translate(&mut self, offset: DVec2) {
        match self {
            DimEntity::Ordinate(d) => d.translate(offset),
        }
    }

    /// Rotiert das Entity um `center` (Winkel in Radiant).
    pub fn rotate(&mut self, center: DVec2, angle: f64) {
        match self {
            DimEntity::Ordinate(d) => d.rotate(center, angle),
        }
    }

    /// Skaliert das Entity komponentenweise um `center`.
    pub fn scale(&mut self, center: DVec2, factor: DVec2) {
        match self {
            DimEntity::Ordinate(d) => d.scale(center, factor),
        }
    }

    /// Spiegelt das Entity an der Linie `axis_point1 → axis_point2`.
    pub fn mirror(&mut self, axis_point1: DVec2, axis_point2: DVec2) {
        match self {
            DimEntity::Ordinate(d) => d.mirror(axis_point1, axis_point2),
        }
    }

    /// Stretch-Transformation mit Fensterauswahl.
    pub fn stretch(&mut self, corner1: DVec2, corner2: DVec2, offset: DVec2) {
        match self {
            DimEntity::Ordinate(d) => d.stretch(corner1, corner2, offset),
        }
    }

    /// Verschiebt einen einzelnen Referenzpunkt (Grip-Edit).
    pub fn move_ref(&mut self, reference: DVec2, offset: DVec2, tolerance: f64) {
        match self {
            DimEntity::Ordinate(d) => d.move_ref(reference, offset, tolerance),
        }
    }

    /// Fensterabfrage über die Hilfslinien-Startpunkte.
    pub fn has_endpoints_within_window(&self, v1: DVec2, v2: DVec2) -> bool {
        match self {
            DimEntity::Ordinate(d) => d.has_endpoints_within_window(v1, v2),
        }
    }
}
