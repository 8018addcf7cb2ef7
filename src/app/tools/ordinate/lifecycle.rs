//! Event-Verarbeitung des Ordinaten-Bemaßungs-Tools.

use glam::DVec2;

use super::state::{OrdinateDraft, OrdinatePlacement, PlacementStatus};
use crate::app::events::{CursorKind, InputEvent, PlacementAction, RedrawScope};
use crate::app::state::EditorState;
use crate::app::tools::PlacementPreview;
use crate::core::{DimEntity, DimStyle, DimensionBase, OrdinateData, OrdinateDimension};

impl OrdinatePlacement {
    /// Aktiviert das Tool: Entwurf leeren, Fadenkreuz anfordern,
    /// Hinweistexte setzen.
    pub fn init(&mut self, state: &mut EditorState) {
        self.reset(state);
        state.view.set_mouse_cursor(CursorKind::Crosshair);
    }

    /// Verarbeitet ein Eingabe-Event. Alle Events kommen seriell vom
    /// Host-Dispatcher; kein Aufruf blockiert.
    pub fn handle_event(&mut self, state: &mut EditorState, event: InputEvent) -> PlacementAction {
        match event {
            InputEvent::PointerMoved(pos) => self.pointer_moved(state, pos),
            InputEvent::Coordinate(pos) => self.coordinate_event(state, pos),
            InputEvent::RightButtonReleased => self.step_back(state),
            InputEvent::EnterPressed => self.enter_pressed(state),
            InputEvent::Command(input) => self.command_event(state, input),
        }
    }

    /// Preview-Geometrie für die aktuelle Mausposition (reine Funktion,
    /// committet nichts).
    pub fn preview(&self, cursor_pos: DVec2) -> PlacementPreview {
        match self.status {
            PlacementStatus::SetExtPoint => {
                let Some(e1) = self.draft.extension_point1 else {
                    return PlacementPreview::default();
                };
                PlacementPreview {
                    extension_line: Some((e1, cursor_pos)),
                    dimension: None,
                }
            }
            PlacementStatus::SetDefPoint => {
                let (Some(e1), Some(e2)) =
                    (self.draft.extension_point1, self.draft.extension_point2)
                else {
                    return PlacementPreview::default();
                };
                let mut base = DimensionBase::new(cursor_pos, DimStyle::default());
                base.text = self.text.clone();
                let mut dim = OrdinateDimension::new(base, OrdinateData::new(e1, e2));
                dim.update_dim(self.text.is_empty());
                PlacementPreview {
                    extension_line: None,
                    dimension: Some(dim),
                }
            }
            _ => PlacementPreview::default(),
        }
    }

    /// Setzt den Entwurf zurück: beide Hilfslinien-Startpunkte ungesetzt,
    /// Status `SetOriginPoint`, Options-Panel anfordern.
    pub fn reset(&mut self, state: &mut EditorState) {
        self.draft = OrdinateDraft::default();
        self.definition_point = None;
        self.text.clear();
        self.status = PlacementStatus::SetOriginPoint;
        self.last_status = PlacementStatus::SetOriginPoint;
        if state.options.show_options_on_reset {
            state.panel.request_options(true, true);
        }
        self.update_mouse_hints(state);
    }

    fn pointer_moved(&mut self, state: &mut EditorState, pos: DVec2) -> PlacementAction {
        if self.preview(pos).is_empty() {
            // Fehlende Entwurfspunkte blockieren die Preview, kein Fehler
            return PlacementAction::Ignored;
        }
        state.view.request_redraw(RedrawScope::Preview);
        PlacementAction::Continue
    }

    fn coordinate_event(&mut self, state: &mut EditorState, pos: DVec2) -> PlacementAction {
        match self.status {
            PlacementStatus::SetOriginPoint => {
                self.draft.extension_point1 = Some(pos);
                state.view.move_relative_zero(pos);
                self.set_status(state, PlacementStatus::SetExtPoint);
                PlacementAction::Continue
            }
            PlacementStatus::SetExtPoint => {
                self.draft.extension_point2 = Some(pos);
                state.view.move_relative_zero(pos);
                self.set_status(state, PlacementStatus::SetDefPoint);
                PlacementAction::Continue
            }
            PlacementStatus::SetDefPoint => {
                self.definition_point = Some(pos);
                let committed = self.trigger(state);
                self.reset(state);
                self.set_status(state, PlacementStatus::SetExtPoint);
                match committed {
                    Some(entity_id) => PlacementAction::Committed { entity_id },
                    None => PlacementAction::Continue,
                }
            }
            // Im Text-Status ist die Koordinaten-Eingabe deaktiviert
            PlacementStatus::SetText => PlacementAction::Ignored,
        }
    }

    /// Wiederholungs-Shortcut: Enter im Ursprungs-Status committet den
    /// aktuellen Entwurf (No-op solange er unvollständig ist) und springt
    /// nach dem Reset direkt in den Textplatzierungs-Status.
    fn enter_pressed(&mut self, state: &mut EditorState) -> PlacementAction {
        if self.status != PlacementStatus::SetOriginPoint {
            return PlacementAction::Ignored;
        }
        self.repeat_placement(state)
    }

    fn repeat_placement(&mut self, state: &mut EditorState) -> PlacementAction {
        let committed = self.trigger(state);
        self.reset(state);
        self.set_status(state, PlacementStatus::SetDefPoint);
        match committed {
            Some(entity_id) => PlacementAction::Committed { entity_id },
            None => PlacementAction::Continue,
        }
    }

    /// Rechtsklick: Preview verwerfen und einen Status zurück (geklemmt).
    /// Ein Abbruch der gesamten Operation ist Sache des Hosts
    /// (Tool-Wechsel).
    fn step_back(&mut self, state: &mut EditorState) -> PlacementAction {
        state.view.request_redraw(RedrawScope::Preview);
        let previous = self.status.previous();
        if self.status == PlacementStatus::SetText {
            state.view.enable_coordinate_input();
        }
        if previous == self.status {
            return PlacementAction::Ignored;
        }
        self.set_status(state, previous);
        PlacementAction::SteppedBack
    }

    fn command_event(&mut self, state: &mut EditorState, input: String) -> PlacementAction {
        if self.status == PlacementStatus::SetText {
            // Roher Text wird als Label-Override übernommen
            self.text = input.trim().to_string();
            state.panel.request_options(true, true);
            state.view.enable_coordinate_input();
            self.set_status(state, self.last_status);
            return PlacementAction::Continue;
        }

        let command = input.trim().to_lowercase();
        match command.as_str() {
            "text" => {
                self.last_status = self.status;
                state.view.disable_coordinate_input();
                self.set_status(state, PlacementStatus::SetText);
                PlacementAction::Continue
            }
            "help" => {
                let available = self.available_commands().join(", ");
                state
                    .panel
                    .command_message(format!("Verfügbare Befehle: {available}"));
                PlacementAction::Continue
            }
            _ => {
                state
                    .panel
                    .command_message(format!("Unbekannter Befehl: {command}"));
                PlacementAction::Ignored
            }
        }
    }

    /// Committet den Entwurf als permanentes Entity.
    ///
    /// No-op solange nicht alle drei Punkte gesetzt sind — zusammen mit
    /// der Status-Ordnung die Garantie, dass nie ein Entity mit
    /// ungesetzten Punkten in die Zeichnung gelangt.
    fn trigger(&mut self, state: &mut EditorState) -> Option<u64> {
        let e1 = self.draft.extension_point1?;
        let e2 = self.draft.extension_point2?;
        let definition_point = self.definition_point?;

        let style = DimStyle {
            layer: state.drawing.active_layer.clone(),
            pen: state.drawing.active_pen.clone(),
            label_precision: state.options.label_precision,
        };
        let mut base = DimensionBase::new(definition_point, style);
        base.text = self.text.clone();

        let mut dim = OrdinateDimension::new(base, OrdinateData::new(e1, e2));
        dim.update_dim(self.text.is_empty());
        state.view.move_relative_zero(dim.base.definition_point);

        let entity_id = state.drawing.add_entity(DimEntity::Ordinate(dim));

        state.history.start_undo_cycle();
        state.history.add_undoable(entity_id);
        state.history.end_undo_cycle();

        // Relativen Nullpunkt über den Redraw hinweg erhalten
        let relative_zero = state.view.relative_zero();
        state.view.request_redraw(RedrawScope::Drawing);
        state.view.move_relative_zero(relative_zero);

        log::debug!("Ordinaten-Bemaßung committet: id={entity_id}");
        Some(entity_id)
    }

    fn set_status(&mut self, state: &mut EditorState, status: PlacementStatus) {
        self.status = status;
        self.update_mouse_hints(state);
    }

    fn update_mouse_hints(&self, state: &mut EditorState) {
        let (hint, cancel) = match self.status {
            PlacementStatus::SetOriginPoint => ("Ursprungspunkt setzen", "Abbrechen"),
            PlacementStatus::SetExtPoint => ("Zu messenden Punkt setzen", "Zurück"),
            PlacementStatus::SetDefPoint => ("Bemaßungstext platzieren", "Zurück"),
            PlacementStatus::SetText => ("Bemaßungstext eingeben:", ""),
        };
        state.panel.update_mouse_widget(hint, cancel);
    }
}
