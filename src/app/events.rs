//! Input-Events vom Host-Dispatcher und Rückgabe-Aktionen der Tools.

use glam::DVec2;

/// Diskretes Eingabe-Event, seriell vom Host-Event-Dispatcher geliefert.
///
/// Koordinaten kommen bereits gesnappt an — Raster-/Objektfang ist Sache
/// des Hosts.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mausbewegung (Preview-Aktualisierung, keine Zustandsänderung)
    PointerMoved(DVec2),
    /// Bestätigte Koordinate (Linksklick oder Koordinaten-Eingabe)
    Coordinate(DVec2),
    /// Rechte Maustaste losgelassen (einen Schritt zurück)
    RightButtonReleased,
    /// Enter-Taste (Wiederholungs-Shortcut im Ursprungs-Status)
    EnterPressed,
    /// Befehls-Token vom Kommandozeilen-Parser (kleingeschrieben);
    /// im Text-Status der rohe Bemaßungstext
    Command(String),
}

/// Rückgabe der Event-Verarbeitung — steuert den Tool-Flow und macht
/// Zustandsübergänge für Host und Tests beobachtbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementAction {
    /// Event verarbeitet, weitere Eingabe nötig
    Continue,
    /// Entity committet und in die Zeichnung eingefügt
    Committed {
        /// ID des committeten Entities
        entity_id: u64,
    },
    /// Einen Status zurückgesprungen (Rechtsklick)
    SteppedBack,
    /// Event im aktuellen Status ohne Wirkung
    Ignored,
}

/// Umfang einer angeforderten Neuzeichnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawScope {
    /// Nur die transiente Preview
    Preview,
    /// Gesamte Zeichnung
    Drawing,
}

/// Mauszeiger-Art, die der Host darstellen soll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorKind {
    /// Standard-Pfeil
    Arrow,
    /// CAD-Fadenkreuz
    #[default]
    Crosshair,
}
