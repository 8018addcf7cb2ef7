//! Ordinaten-Bemaßung: Entity-Daten, Projektion und affine Transformationen.
//!
//! Kerninvariante: Der Definitionspunkt liegt nach jeder geometrischen
//! Änderung exakt auf der Konstruktionslinie durch `extension_point2`
//! senkrecht zur Richtung `extension_point1 → extension_point2`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::construction::ConstructionLine;
use super::dimension::{format_label, DimensionBase};
use crate::shared::CONSTRUCTION_LINE_REACH;

/// Definiert eine Ordinaten-Bemaßung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrdinateData {
    /// Startpunkt der ersten Hilfslinie (Achsen-Ursprung)
    pub extension_point1: DVec2,
    /// Startpunkt der zweiten Hilfslinie (gemessener Punkt)
    pub extension_point2: DVec2,
}

impl OrdinateData {
    /// Erstellt Ordinaten-Daten aus beiden Hilfslinien-Startpunkten.
    pub fn new(extension_point1: DVec2, extension_point2: DVec2) -> Self {
        Self {
            extension_point1,
            extension_point2,
        }
    }
}

/// Ordinaten-Bemaßungs-Entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinateDimension {
    /// Gemeinsame Bemaßungs-Basisdaten
    pub base: DimensionBase,
    /// Ordinaten-spezifische Daten
    pub edata: OrdinateData,
}

impl OrdinateDimension {
    /// Erstellt eine Ordinaten-Bemaßung aus Basis- und Ordinaten-Daten.
    pub fn new(base: DimensionBase, edata: OrdinateData) -> Self {
        Self { base, edata }
    }

    /// Konstruktionslinie, auf der der Definitionspunkt liegen muss:
    /// durch `extension_point2`, senkrecht (+π/2) zur Richtung
    /// `extension_point1 → extension_point2`.
    pub fn construction_line(&self) -> ConstructionLine {
        let dir = (self.edata.extension_point2 - self.edata.extension_point1)
            .normalize_or(DVec2::X)
            .perp()
            * CONSTRUCTION_LINE_REACH;
        ConstructionLine::new(
            self.edata.extension_point2,
            self.edata.extension_point2 + dir,
        )
    }

    /// Projiziert den Definitionspunkt zurück auf die Konstruktionslinie
    /// und aktualisiert bei `auto_text` den Bemaßungstext mit dem Messwert.
    ///
    /// Idempotent: erneuter Aufruf mit unveränderten Daten ändert nichts.
    pub fn update_dim(&mut self, auto_text: bool) {
        self.base.definition_point = self
            .construction_line()
            .nearest_point(self.base.definition_point);
        if auto_text {
            self.base.text = self.measured_label();
        }
    }

    /// Messwert-Label: Betrag des Abstands beider Hilfslinien-Startpunkte.
    ///
    /// Betragbasiert, damit Spiegelung das Vorzeichen des Labels nicht
    /// kippen kann.
    pub fn measured_label(&self) -> String {
        let measured = self
            .edata
            .extension_point1
            .distance(self.edata.extension_point2);
        format_label(measured, self.base.style.label_precision)
    }

    /// Angezeigter Text: Override falls gesetzt, sonst Messwert.
    pub fn label(&self) -> String {
        if self.base.text.is_empty() {
            self.measured_label()
        } else {
            self.base.text.clone()
        }
    }

    /// Referenzpunkte für Grip-Editing in fester Reihenfolge.
    pub fn ref_points(&self) -> [DVec2; 3] {
        [
            self.edata.extension_point1,
            self.edata.extension_point2,
            self.base.definition_point,
        ]
    }

    /// Verschiebt alle drei Punkte um `offset`.
    pub fn translate(&mut self, offset: DVec2) {
        self.edata.extension_point1 += offset;
        self.edata.extension_point2 += offset;
        self.base.definition_point += offset;
        self.update_dim(false);
    }

    /// Rotiert alle drei Punkte um `center` mit Winkel `angle` (Radiant).
    pub fn rotate(&mut self, center: DVec2, angle: f64) {
        self.rotate_by(center, DVec2::from_angle(angle));
    }

    /// Rotiert alle drei Punkte um `center` mit Richtungsvektor
    /// `angle_vector` (wird normalisiert).
    pub fn rotate_by(&mut self, center: DVec2, angle_vector: DVec2) {
        let rot = angle_vector.normalize_or(DVec2::X);
        self.edata.extension_point1 = center + rot.rotate(self.edata.extension_point1 - center);
        self.edata.extension_point2 = center + rot.rotate(self.edata.extension_point2 - center);
        self.base.definition_point = center + rot.rotate(self.base.definition_point - center);
        self.update_dim(false);
    }

    /// Skaliert alle drei Punkte komponentenweise um `center`.
    ///
    /// Nicht-uniforme Skalierung ändert die Senkrecht-Richtung; die
    /// Projektion läuft deshalb über die bereits skalierten Hilfslinien-
    /// Punkte, nicht über den alten Definitionspunkt allein.
    pub fn scale(&mut self, center: DVec2, factor: DVec2) {
        self.edata.extension_point1 = center + (self.edata.extension_point1 - center) * factor;
        self.edata.extension_point2 = center + (self.edata.extension_point2 - center) * factor;
        self.base.definition_point = center + (self.base.definition_point - center) * factor;
        self.update_dim(false);
    }

    /// Spiegelt alle drei Punkte an der Linie `axis_point1 → axis_point2`.
    ///
    /// Degenerierte Achse (beide Punkte identisch): No-op.
    pub fn mirror(&mut self, axis_point1: DVec2, axis_point2: DVec2) {
        let axis = axis_point2 - axis_point1;
        if axis.length_squared() <= f64::EPSILON {
            return;
        }
        self.edata.extension_point1 = mirror_point(self.edata.extension_point1, axis_point1, axis);
        self.edata.extension_point2 = mirror_point(self.edata.extension_point2, axis_point1, axis);
        self.base.definition_point = mirror_point(self.base.definition_point, axis_point1, axis);
        self.update_dim(false);
    }

    /// Verschiebt nur die Punkte innerhalb des Fensters `[corner1, corner2]`
    /// um `offset`. Ein Fenster ohne Treffer ist ein legales No-op.
    pub fn stretch(&mut self, corner1: DVec2, corner2: DVec2, offset: DVec2) {
        if point_in_window(self.edata.extension_point1, corner1, corner2) {
            self.edata.extension_point1 += offset;
        }
        if point_in_window(self.edata.extension_point2, corner1, corner2) {
            self.edata.extension_point2 += offset;
        }
        if point_in_window(self.base.definition_point, corner1, corner2) {
            self.base.definition_point += offset;
        }
        self.update_dim(true);
    }

    /// Verschiebt genau den Referenzpunkt, der `reference` innerhalb der
    /// Toleranz entspricht (feste Priorität: Hilfslinie 1, Hilfslinie 2,
    /// Definitionspunkt). Kein Treffer: stilles No-op.
    pub fn move_ref(&mut self, reference: DVec2, offset: DVec2, tolerance: f64) {
        if self.edata.extension_point1.distance(reference) <= tolerance {
            self.edata.extension_point1 += offset;
        } else if self.edata.extension_point2.distance(reference) <= tolerance {
            self.edata.extension_point2 += offset;
        } else if self.base.definition_point.distance(reference) <= tolerance {
            self.base.definition_point += offset;
        } else {
            return;
        }
        self.update_dim(true);
    }

    /// Liegt mindestens einer der beiden Hilfslinien-Startpunkte im
    /// achsparallelen Fenster `[v1, v2]`?
    pub fn has_endpoints_within_window(&self, v1: DVec2, v2: DVec2) -> bool {
        point_in_window(self.edata.extension_point1, v1, v2)
            || point_in_window(self.edata.extension_point2, v1, v2)
    }
}

/// Spiegelt `pos` an der Achse durch `origin` mit Richtung `axis`.
fn mirror_point(pos: DVec2, origin: DVec2, axis: DVec2) -> DVec2 {
    let dir = axis / axis.length();
    let foot = origin + dir * (pos - origin).dot(dir);
    foot * 2.0 - pos
}

/// Prüft ob `pos` im achsparallelen Fenster `[a, b]` liegt (Ecken in
/// beliebiger Reihenfolge, Ränder inklusive).
fn point_in_window(pos: DVec2, a: DVec2, b: DVec2) -> bool {
    let min = a.min(b);
    let max = a.max(b);
    pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y
}
