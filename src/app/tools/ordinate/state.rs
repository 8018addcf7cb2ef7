//! State-Definitionen und Konstruktor für das Ordinaten-Bemaßungs-Tool.

use glam::DVec2;

/// Status der Platzierungs-Zustandsmaschine.
///
/// Strikt geordnete Progression `SetOriginPoint → SetExtPoint →
/// SetDefPoint` plus Text-Seitenstatus, der aus jedem numerischen Status
/// erreichbar ist und zu `last_status` zurückkehrt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementStatus {
    /// Ursprungspunkt (Achsen-Referenz) setzen
    #[default]
    SetOriginPoint,
    /// Zu messenden Punkt setzen
    SetExtPoint,
    /// Platzierungspunkt für den Bemaßungstext setzen
    SetDefPoint,
    /// Bemaßungstext in der Kommandozeile eingeben
    SetText,
}

impl PlacementStatus {
    /// Vorheriger Status (Rechtsklick), am Anfang geklemmt.
    pub fn previous(self) -> Self {
        match self {
            PlacementStatus::SetOriginPoint => PlacementStatus::SetOriginPoint,
            PlacementStatus::SetExtPoint => PlacementStatus::SetOriginPoint,
            PlacementStatus::SetDefPoint => PlacementStatus::SetExtPoint,
            PlacementStatus::SetText => PlacementStatus::SetDefPoint,
        }
    }
}

/// Entwurfsdaten während der Platzierung: beide Hilfslinien-Startpunkte,
/// solange ungesetzt, blockieren Preview und Commit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrdinateDraft {
    /// Startpunkt der ersten Hilfslinie (Ursprung)
    pub extension_point1: Option<DVec2>,
    /// Startpunkt der zweiten Hilfslinie (Messpunkt)
    pub extension_point2: Option<DVec2>,
}

impl OrdinateDraft {
    /// Gibt `true` zurück, wenn beide Hilfslinien-Startpunkte gesetzt sind.
    pub fn is_complete(&self) -> bool {
        self.extension_point1.is_some() && self.extension_point2.is_some()
    }
}

/// Ordinaten-Bemaßungs-Tool.
#[derive(Debug, Default)]
pub struct OrdinatePlacement {
    pub(crate) status: PlacementStatus,
    /// Letzter numerischer Status vor dem Wechsel in den Text-Status
    pub(crate) last_status: PlacementStatus,
    pub(crate) draft: OrdinateDraft,
    /// Entwurfs-Platzierungspunkt des Bemaßungstexts
    pub(crate) definition_point: Option<DVec2>,
    /// Text-Override aus dem Text-Status (leer = Messwert)
    pub(crate) text: String,
}

impl OrdinatePlacement {
    /// Erstellt ein neues Tool im Ursprungs-Status mit leerem Entwurf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Status der Zustandsmaschine.
    pub fn status(&self) -> PlacementStatus {
        self.status
    }

    /// Aktuelle Entwurfsdaten (read-only, für Host-Anzeige und Tests).
    pub fn draft(&self) -> OrdinateDraft {
        self.draft
    }

    /// Aktueller Text-Override (leer = automatisches Messwert-Label).
    pub fn label_override(&self) -> &str {
        &self.text
    }

    /// Statustext für das Properties-Panel.
    pub fn status_text(&self) -> &str {
        match self.status {
            PlacementStatus::SetOriginPoint => "Ursprungspunkt klicken",
            PlacementStatus::SetExtPoint => "Zu messenden Punkt klicken",
            PlacementStatus::SetDefPoint => "Bemaßungstext platzieren",
            PlacementStatus::SetText => "Bemaßungstext eingeben",
        }
    }

    /// Im aktuellen Status verfügbare Kommandozeilen-Befehle.
    pub fn available_commands(&self) -> Vec<&'static str> {
        match self.status {
            PlacementStatus::SetOriginPoint
            | PlacementStatus::SetExtPoint
            | PlacementStatus::SetDefPoint => vec!["text"],
            PlacementStatus::SetText => vec![],
        }
    }
}
