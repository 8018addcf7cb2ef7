//! Gemeinsame Basisdaten aller Bemaßungsarten: Definitionspunkt, Text, Stil.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::shared::options::{DEFAULT_LABEL_PRECISION, DEFAULT_LAYER, PEN_COLOR_DEFAULT};

/// Zeichenstift: Farbe und Linienstärke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    /// Linienfarbe (RGBA)
    pub color: [f32; 4],
    /// Linienstärke in Welteinheiten
    pub width: f32,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: PEN_COLOR_DEFAULT,
            width: 0.25,
        }
    }
}

/// Stil-Schnappschuss einer Bemaßung.
///
/// Wird beim Commit aus Layer/Stift der Zeichnung übernommen und bleibt
/// danach am Entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimStyle {
    /// Layer-Name zum Zeitpunkt des Commits
    pub layer: String,
    /// Aktiver Stift zum Zeitpunkt des Commits
    pub pen: Pen,
    /// Nachkommastellen des Messwert-Labels
    pub label_precision: usize,
}

impl Default for DimStyle {
    fn default() -> Self {
        Self {
            layer: DEFAULT_LAYER.to_string(),
            pen: Pen::default(),
            label_precision: DEFAULT_LABEL_PRECISION,
        }
    }
}

/// Basisdaten, die alle Bemaßungsarten teilen.
///
/// `text` ist der angezeigte Bemaßungstext; ein leerer String bedeutet
/// "Messwert automatisch anzeigen".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionBase {
    /// Platzierungspunkt von Text und Führungslinie
    pub definition_point: DVec2,
    /// Bemaßungstext (leer = Messwert)
    pub text: String,
    /// Stil-Schnappschuss
    pub style: DimStyle,
}

impl DimensionBase {
    /// Erstellt Basisdaten mit leerem Text (automatisches Label).
    pub fn new(definition_point: DVec2, style: DimStyle) -> Self {
        Self {
            definition_point,
            text: String::new(),
            style,
        }
    }
}

/// Formatiert einen Messwert mit fester Nachkommastellen-Zahl und
/// entfernt abschließende Nullen ("10.5000" → "10.5", "10.0000" → "10").
pub fn format_label(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$}");
    if !formatted.contains('.') {
        return formatted;
    }
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
