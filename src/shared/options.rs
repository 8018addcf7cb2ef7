//! Zentrale Konfiguration für den Bemaßungs-Editor-Kern.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Geometrie ───────────────────────────────────────────────────────

/// Spannweite der Senkrecht-Konstruktionslinie in Welteinheiten.
/// Die Projektion läuft über die unendliche Linie; der Wert legt nur den
/// zweiten Stützpunkt fest.
pub const CONSTRUCTION_LINE_REACH: f64 = 100.0;

/// Toleranz (Welteinheiten) für das Matchen von Referenzpunkten beim
/// Grip-Editing.
pub const GRIP_TOLERANCE: f64 = 1.0e-4;

// ── Bemaßungstext ───────────────────────────────────────────────────

/// Standard-Nachkommastellen des Messwert-Labels.
pub const DEFAULT_LABEL_PRECISION: usize = 4;

// ── Zeichnung ───────────────────────────────────────────────────────

/// Name des Standard-Layers neuer Zeichnungen.
pub const DEFAULT_LAYER: &str = "0";
/// Standard-Stiftfarbe (RGBA: Weiß).
pub const PEN_COLOR_DEFAULT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `ordinate_dim_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Nachkommastellen des Messwert-Labels
    pub label_precision: usize,
    /// Toleranz für Referenzpunkt-Matching beim Grip-Editing
    pub grip_tolerance: f64,
    /// Options-Panel beim Tool-Reset automatisch anzeigen
    #[serde(default = "default_show_options_on_reset")]
    pub show_options_on_reset: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            label_precision: DEFAULT_LABEL_PRECISION,
            grip_tolerance: GRIP_TOLERANCE,
            show_options_on_reset: true,
        }
    }
}

/// Serde-Default für `show_options_on_reset` (Abwärtskompatibilität
/// bestehender TOML-Dateien).
fn default_show_options_on_reset() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("ordinate_dim_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("ordinate_dim_editor.toml")
    }
}
