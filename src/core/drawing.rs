//! Zeichnungs-Container: besitzt alle committeten Bemaßungs-Entities.

use glam::DVec2;
use indexmap::IndexMap;

use super::dimension::Pen;
use super::entity::DimEntity;
use crate::shared::options::DEFAULT_LAYER;

/// Container für alle Entities einer Zeichnung.
///
/// Entities sind nach ID indexiert; die Einfüge-Reihenfolge bleibt für
/// deterministische Iteration erhalten.
#[derive(Debug, Clone)]
pub struct Drawing {
    entities: IndexMap<u64, DimEntity>,
    next_id: u64,
    /// Aktiver Layer für neue Entities
    pub active_layer: String,
    /// Aktiver Stift für neue Entities
    pub active_pen: Pen,
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawing {
    /// Erstellt eine leere Zeichnung mit Standard-Layer und -Stift.
    pub fn new() -> Self {
        Self {
            entities: IndexMap::new(),
            next_id: 1,
            active_layer: DEFAULT_LAYER.to_string(),
            active_pen: Pen::default(),
        }
    }

    /// Fügt ein Entity hinzu und übernimmt die Ownership.
    /// Gibt die vergebene ID zurück.
    pub fn add_entity(&mut self, entity: DimEntity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.insert(id, entity);
        id
    }

    /// Entfernt ein Entity. Das Entity ist damit zerstört, sofern der
    /// Aufrufer es nicht übernimmt.
    pub fn remove_entity(&mut self, id: u64) -> Option<DimEntity> {
        self.entities.shift_remove(&id)
    }

    /// Zugriff auf ein Entity.
    pub fn entity(&self, id: u64) -> Option<&DimEntity> {
        self.entities.get(&id)
    }

    /// Mutable Zugriff auf ein Entity (Transformationen, Text-Edits).
    pub fn entity_mut(&mut self, id: u64) -> Option<&mut DimEntity> {
        self.entities.get_mut(&id)
    }

    /// Anzahl der Entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Gibt `true` zurück, wenn die Zeichnung leer ist.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iteration über alle Entities in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &DimEntity)> {
        self.entities.iter().map(|(id, e)| (*id, e))
    }

    /// IDs aller Entities mit mindestens einem Hilfslinien-Startpunkt im
    /// Fenster `[v1, v2]` (Fensterselektion).
    pub fn entities_in_window(&self, v1: DVec2, v2: DVec2) -> Vec<u64> {
        self.entities
            .iter()
            .filter(|(_, e)| e.has_endpoints_within_window(v1, v2))
            .map(|(id, _)| *id)
            .collect()
    }
}
