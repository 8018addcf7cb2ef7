//! Gebündelter Editor-Zustand inklusive Collaborator-State für View und
//! Options-Panel.
//!
//! View und Panel sind reine Präsentations-Verträge: der Kern schreibt
//! hinein, der Host liest und setzt die Darstellung um. Geometrische
//! Bedeutung haben die Felder für den Kern nicht.

use glam::DVec2;

use super::events::{CursorKind, RedrawScope};
use super::history::UndoJournal;
use crate::core::Drawing;
use crate::shared::EditorOptions;

/// View-bezogener Collaborator-Zustand (Graphic-View-Vertrag).
#[derive(Debug, Default)]
pub struct ViewState {
    /// Relativer Nullpunkt: zuletzt benutzte Koordinate als Ursprung
    /// für relative Eingaben
    relative_zero: DVec2,
    /// Koordinaten-Eingabe aktiv (im Text-Status deaktiviert)
    pub coordinate_input_enabled: bool,
    /// Vom Kern angeforderter Mauszeiger
    pub mouse_cursor: CursorKind,
    /// Ausstehende Redraw-Anforderung (der Host setzt sie nach dem
    /// Zeichnen zurück)
    pub pending_redraw: Option<RedrawScope>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            relative_zero: DVec2::ZERO,
            coordinate_input_enabled: true,
            mouse_cursor: CursorKind::default(),
            pending_redraw: None,
        }
    }

    /// Setzt den relativen Nullpunkt neu.
    pub fn move_relative_zero(&mut self, pos: DVec2) {
        self.relative_zero = pos;
    }

    /// Aktueller relativer Nullpunkt.
    pub fn relative_zero(&self) -> DVec2 {
        self.relative_zero
    }

    /// Fordert eine Neuzeichnung an. `Drawing` überschreibt eine bereits
    /// ausstehende `Preview`-Anforderung, nie umgekehrt.
    pub fn request_redraw(&mut self, scope: RedrawScope) {
        self.pending_redraw = match (self.pending_redraw, scope) {
            (Some(RedrawScope::Drawing), RedrawScope::Preview) => Some(RedrawScope::Drawing),
            _ => Some(scope),
        };
    }

    /// Setzt den gewünschten Mauszeiger.
    pub fn set_mouse_cursor(&mut self, cursor: CursorKind) {
        self.mouse_cursor = cursor;
    }

    /// Aktiviert die Koordinaten-Eingabe.
    pub fn enable_coordinate_input(&mut self) {
        self.coordinate_input_enabled = true;
    }

    /// Deaktiviert die Koordinaten-Eingabe (Text-Status).
    pub fn disable_coordinate_input(&mut self) {
        self.coordinate_input_enabled = false;
    }
}

/// Options-Panel- und Meldungs-Collaborator (Dialog-Vertrag).
#[derive(Debug, Default)]
pub struct PanelState {
    /// Options-Panel sichtbar
    pub options_visible: bool,
    /// Options-Panel modal angefordert
    pub options_modal: bool,
    /// Hinweistext für die linke Maustaste
    pub mouse_hint: String,
    /// Hinweistext für die rechte Maustaste (Abbrechen/Zurück)
    pub cancel_hint: String,
    /// Meldungen an die Kommandozeile (chronologisch)
    messages: Vec<String>,
}

impl PanelState {
    /// Erstellt den Standard-Panel-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fordert das Options-Panel an bzw. blendet es aus.
    pub fn request_options(&mut self, show: bool, modal: bool) {
        self.options_visible = show;
        self.options_modal = show && modal;
    }

    /// Aktualisiert die Maus-Hinweistexte.
    pub fn update_mouse_widget(&mut self, hint: &str, cancel_hint: &str) {
        self.mouse_hint = hint.to_string();
        self.cancel_hint = cancel_hint.to_string();
    }

    /// Meldet einen Text an die Kommandozeile.
    pub fn command_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Read-only Sicht auf alle Meldungen.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

/// Hauptzustand des Editor-Kerns.
///
/// Single-threaded: alle Events kommen seriell an, einziger Schreiber
/// des Zustands ist die Event-Verarbeitung des aktiven Tools.
#[derive(Debug)]
pub struct EditorState {
    /// Zeichnung mit allen committeten Entities
    pub drawing: Drawing,
    /// Undo-Zyklus-Journal
    pub history: UndoJournal,
    /// View-Collaborator
    pub view: ViewState,
    /// Panel-Collaborator
    pub panel: PanelState,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Erstellt einen neuen, leeren Editor-Zustand.
    pub fn new() -> Self {
        Self {
            drawing: Drawing::new(),
            history: UndoJournal::new(),
            view: ViewState::new(),
            panel: PanelState::new(),
            options: EditorOptions::default(),
        }
    }
}
