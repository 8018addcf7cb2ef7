//! Undo-Journal: markiert Zyklus-Grenzen, speichert keine Edit-Daten.
//!
//! Der eigentliche Undo-Speicher (Snapshots/Replay) liegt beim externen
//! Dokument-Manager; dieser Kern grenzt nur logisch atomare Edits ab.

/// Ein abgeschlossener Undo-Zyklus: die Entity-IDs eines logisch
/// atomaren Edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndoCycle {
    /// IDs der im Zyklus registrierten Entities
    pub entity_ids: Vec<u64>,
}

/// Journal über Undo-Zyklen mit begrenzter Tiefe.
///
/// Erwartete Aufruf-Reihenfolge pro Commit:
/// `start_undo_cycle` → `add_undoable` → `end_undo_cycle`.
/// Verletzte Klammerung wird geloggt, nie mit Panic quittiert.
#[derive(Debug, Default)]
pub struct UndoJournal {
    closed: Vec<UndoCycle>,
    open: Option<UndoCycle>,
    max_depth: usize,
}

impl UndoJournal {
    const DEFAULT_MAX_DEPTH: usize = 200;

    /// Erstellt ein leeres Journal mit Standard-Tiefe.
    pub fn new() -> Self {
        Self::new_with_capacity(Self::DEFAULT_MAX_DEPTH)
    }

    /// Erstellt ein leeres Journal mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            closed: Vec::with_capacity(max_depth),
            open: None,
            max_depth,
        }
    }

    /// Öffnet einen neuen Undo-Zyklus.
    pub fn start_undo_cycle(&mut self) {
        if self.open.is_some() {
            log::warn!("start_undo_cycle: vorheriger Zyklus war noch offen, wird geschlossen");
            self.end_undo_cycle();
        }
        self.open = Some(UndoCycle::default());
    }

    /// Registriert ein Entity im offenen Zyklus.
    pub fn add_undoable(&mut self, entity_id: u64) {
        match self.open.as_mut() {
            Some(cycle) => cycle.entity_ids.push(entity_id),
            None => log::warn!(
                "add_undoable({entity_id}): kein offener Undo-Zyklus, Eintrag verworfen"
            ),
        }
    }

    /// Schließt den offenen Zyklus und hängt ihn ans Journal an.
    /// Älteste Zyklen werden bei Überschreiten der Tiefe verworfen.
    pub fn end_undo_cycle(&mut self) {
        let Some(cycle) = self.open.take() else {
            log::warn!("end_undo_cycle: kein offener Undo-Zyklus");
            return;
        };
        if self.closed.len() >= self.max_depth {
            self.closed.remove(0);
        }
        self.closed.push(cycle);
    }

    /// Prüft ob ein Zyklus zum Rückgängigmachen vorhanden ist.
    pub fn can_undo(&self) -> bool {
        !self.closed.is_empty()
    }

    /// Gibt den jüngsten Zyklus an den Dokument-Manager ab.
    pub fn pop_cycle(&mut self) -> Option<UndoCycle> {
        self.closed.pop()
    }

    /// Anzahl abgeschlossener Zyklen.
    pub fn len(&self) -> usize {
        self.closed.len()
    }

    /// Gibt `true` zurück, wenn keine Zyklen vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.closed.is_empty()
    }

    /// Read-only Sicht auf alle abgeschlossenen Zyklen.
    pub fn cycles(&self) -> &[UndoCycle] {
        &self.closed
    }
}
