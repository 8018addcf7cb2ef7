use glam::DVec2;

use super::state::{OrdinatePlacement, PlacementStatus};
use crate::app::events::{InputEvent, PlacementAction, RedrawScope};
use crate::app::state::EditorState;

fn tool_and_state() -> (OrdinatePlacement, EditorState) {
    let mut state = EditorState::new();
    let mut tool = OrdinatePlacement::new();
    tool.init(&mut state);
    (tool, state)
}

#[test]
fn test_coordinate_flow_advances_states() {
    let (mut tool, mut state) = tool_and_state();
    assert_eq!(tool.status(), PlacementStatus::SetOriginPoint);

    let action = tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::ZERO));
    assert_eq!(action, PlacementAction::Continue);
    assert_eq!(tool.status(), PlacementStatus::SetExtPoint);

    let action = tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::new(10.0, 0.0)));
    assert_eq!(action, PlacementAction::Continue);
    assert_eq!(tool.status(), PlacementStatus::SetDefPoint);
}

#[test]
fn test_coordinate_recenter_relative_zero() {
    let (mut tool, mut state) = tool_and_state();
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::new(3.0, 4.0)));
    assert_eq!(state.view.relative_zero(), DVec2::new(3.0, 4.0));
}

#[test]
fn test_third_coordinate_commits_and_returns_to_ext_point() {
    let (mut tool, mut state) = tool_and_state();
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::ZERO));
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::new(10.0, 0.0)));
    let action = tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::new(10.0, 5.0)));

    assert!(matches!(action, PlacementAction::Committed { .. }));
    assert_eq!(state.drawing.entity_count(), 1);
    assert_eq!(tool.status(), PlacementStatus::SetExtPoint);
    // Entwurf nach dem Commit geleert
    assert!(!tool.draft().is_complete());
}

#[test]
fn test_preview_skipped_without_first_point() {
    let (tool, _) = tool_and_state();
    assert!(tool.preview(DVec2::new(5.0, 5.0)).is_empty());
}

#[test]
fn test_preview_line_in_ext_point_state() {
    let (mut tool, mut state) = tool_and_state();
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::new(1.0, 2.0)));

    let preview = tool.preview(DVec2::new(8.0, 3.0));
    assert_eq!(
        preview.extension_line,
        Some((DVec2::new(1.0, 2.0), DVec2::new(8.0, 3.0)))
    );
    assert!(preview.dimension.is_none());
}

#[test]
fn test_preview_dimension_is_projected() {
    let (mut tool, mut state) = tool_and_state();
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::ZERO));
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::new(10.0, 0.0)));

    let preview = tool.preview(DVec2::new(7.0, 5.0));
    let dim = preview.dimension.expect("Preview-Entity erwartet");
    // Rohe Mausposition (7,5) auf die Senkrechte durch (10,0) projiziert
    assert!((dim.base.definition_point - DVec2::new(10.0, 5.0)).length() < 1e-9);
    assert_eq!(state.drawing.entity_count(), 0);
}

#[test]
fn test_pointer_move_requests_preview_redraw() {
    let (mut tool, mut state) = tool_and_state();
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::ZERO));
    state.view.pending_redraw = None;

    let action = tool.handle_event(&mut state, InputEvent::PointerMoved(DVec2::new(4.0, 4.0)));
    assert_eq!(action, PlacementAction::Continue);
    assert_eq!(state.view.pending_redraw, Some(RedrawScope::Preview));
}

#[test]
fn test_pointer_move_without_draft_is_ignored() {
    let (mut tool, mut state) = tool_and_state();
    state.view.pending_redraw = None;
    let action = tool.handle_event(&mut state, InputEvent::PointerMoved(DVec2::new(4.0, 4.0)));
    assert_eq!(action, PlacementAction::Ignored);
    assert_eq!(state.view.pending_redraw, None);
}

#[test]
fn test_right_click_steps_back_without_commit() {
    let (mut tool, mut state) = tool_and_state();
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::ZERO));
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::new(10.0, 0.0)));
    assert_eq!(tool.status(), PlacementStatus::SetDefPoint);

    let action = tool.handle_event(&mut state, InputEvent::RightButtonReleased);
    assert_eq!(action, PlacementAction::SteppedBack);
    assert_eq!(tool.status(), PlacementStatus::SetExtPoint);
    assert_eq!(state.drawing.entity_count(), 0);
    // Ursprungspunkt des Entwurfs bleibt unangetastet
    assert_eq!(tool.draft().extension_point1, Some(DVec2::ZERO));
}

#[test]
fn test_right_click_clamps_at_origin_state() {
    let (mut tool, mut state) = tool_and_state();
    let action = tool.handle_event(&mut state, InputEvent::RightButtonReleased);
    assert_eq!(action, PlacementAction::Ignored);
    assert_eq!(tool.status(), PlacementStatus::SetOriginPoint);
}

#[test]
fn test_text_command_round_trip() {
    let (mut tool, mut state) = tool_and_state();
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::ZERO));
    assert_eq!(tool.status(), PlacementStatus::SetExtPoint);

    // Case-insensitives Befehls-Matching
    tool.handle_event(&mut state, InputEvent::Command("TEXT".to_string()));
    assert_eq!(tool.status(), PlacementStatus::SetText);
    assert!(!state.view.coordinate_input_enabled);

    tool.handle_event(&mut state, InputEvent::Command("±0.05".to_string()));
    assert_eq!(tool.status(), PlacementStatus::SetExtPoint);
    assert!(state.view.coordinate_input_enabled);
    assert_eq!(tool.label_override(), "±0.05");
}

#[test]
fn test_text_override_lands_on_committed_entity() {
    let (mut tool, mut state) = tool_and_state();
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::ZERO));
    tool.handle_event(&mut state, InputEvent::Command("text".to_string()));
    tool.handle_event(&mut state, InputEvent::Command("Sondermaß".to_string()));
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::new(10.0, 0.0)));
    let action = tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::new(10.0, 5.0)));

    let PlacementAction::Committed { entity_id } = action else {
        panic!("Commit erwartet, war {action:?}");
    };
    let entity = state.drawing.entity(entity_id).expect("Entity erwartet");
    assert_eq!(entity.label(), "Sondermaß");
}

#[test]
fn test_coordinate_in_text_state_is_ignored() {
    let (mut tool, mut state) = tool_and_state();
    tool.handle_event(&mut state, InputEvent::Command("text".to_string()));
    let action = tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::new(1.0, 1.0)));
    assert_eq!(action, PlacementAction::Ignored);
    assert!(tool.draft().extension_point1.is_none());
}

#[test]
fn test_unrecognized_command_reports_message() {
    let (mut tool, mut state) = tool_and_state();
    let action = tool.handle_event(&mut state, InputEvent::Command("undim".to_string()));
    assert_eq!(action, PlacementAction::Ignored);
    assert_eq!(tool.status(), PlacementStatus::SetOriginPoint);
    let last = state.panel.messages().last().expect("Meldung erwartet");
    assert!(last.contains("undim"));
}

#[test]
fn test_help_lists_text_command() {
    let (mut tool, mut state) = tool_and_state();
    tool.handle_event(&mut state, InputEvent::Command("help".to_string()));
    let last = state.panel.messages().last().expect("Meldung erwartet");
    assert!(last.contains("text"));
}

#[test]
fn test_enter_on_empty_draft_commits_nothing_and_jumps() {
    let (mut tool, mut state) = tool_and_state();
    let action = tool.handle_event(&mut state, InputEvent::EnterPressed);
    assert_eq!(action, PlacementAction::Continue);
    assert_eq!(state.drawing.entity_count(), 0);
    assert_eq!(tool.status(), PlacementStatus::SetDefPoint);
}

#[test]
fn test_enter_outside_origin_state_is_ignored() {
    let (mut tool, mut state) = tool_and_state();
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::ZERO));
    let action = tool.handle_event(&mut state, InputEvent::EnterPressed);
    assert_eq!(action, PlacementAction::Ignored);
    assert_eq!(tool.status(), PlacementStatus::SetExtPoint);
}

#[test]
fn test_reset_requests_options_panel() {
    let (mut tool, mut state) = tool_and_state();
    state.panel.request_options(false, false);
    tool.reset(&mut state);
    assert!(state.panel.options_visible);
    assert!(state.panel.options_modal);
    assert_eq!(tool.status(), PlacementStatus::SetOriginPoint);
}

#[test]
fn test_mouse_hints_follow_status() {
    let (mut tool, mut state) = tool_and_state();
    assert_eq!(state.panel.mouse_hint, "Ursprungspunkt setzen");
    tool.handle_event(&mut state, InputEvent::Coordinate(DVec2::ZERO));
    assert_eq!(state.panel.mouse_hint, "Zu messenden Punkt setzen");
    assert_eq!(state.panel.cancel_hint, "Zurück");
}
