use std::cell::RefCell;
use std::rc::Rc;

use rinkkit_designer::{
    KeyEvent, MarkerType, PointerEvent, RinkDiagramData, RinkEditor, RinkElement, RinkType, Tool,
};

fn recording_editor(initial: Option<RinkDiagramData>) -> (RinkEditor, Rc<RefCell<Vec<RinkDiagramData>>>) {
    let changes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&changes);
    let mut editor = RinkEditor::new(initial, true);
    editor.mount(0.0, 0.0, 800.0, 340.0);
    editor.set_on_change(move |data| sink.borrow_mut().push(data));
    (editor, changes)
}

fn click(editor: &mut RinkEditor, x: f64, y: f64) {
    editor.handle_pointer(PointerEvent::down(x, y));
    editor.handle_pointer(PointerEvent::up(x, y));
}

#[test]
fn test_initial_data_round_trip() {
    let (mut seed, _) = recording_editor(None);
    seed.set_tool(Tool::Marker(MarkerType::O));
    click(&mut seed, 200.0, 100.0);
    seed.set_tool(Tool::Pylon);
    click(&mut seed, 250.0, 120.0);
    let data = seed.get_diagram_data();

    let editor = RinkEditor::new(Some(data.clone()), false);
    assert_eq!(editor.get_diagram_data(), data);
}

#[test]
fn test_no_initial_data_starts_empty_full() {
    let editor = RinkEditor::new(None, true);
    let data = editor.get_diagram_data();
    assert_eq!(data.rink_type, RinkType::Full);
    assert!(data.elements.is_empty());
}

#[test]
fn test_marker_scenario_fires_change_twice() {
    let (mut editor, changes) = recording_editor(None);
    editor.set_tool_by_id("marker_X").unwrap();
    click(&mut editor, 100.0, 50.0);
    assert_eq!(changes.borrow().len(), 1);

    editor.set_tool(Tool::Select);
    editor.handle_pointer(PointerEvent::down(100.0, 50.0));
    editor.handle_pointer(PointerEvent::moved(150.0, 80.0));
    editor.handle_pointer(PointerEvent::up(150.0, 80.0));
    assert_eq!(changes.borrow().len(), 2);
    assert_eq!(editor.canvas().history_len(), 2);

    assert!(editor.undo());
    let last = changes.borrow().last().cloned().unwrap();
    assert_eq!(
        last.elements[0].position(),
        Some(rinkkit_designer::Point::new(100.0, 50.0))
    );
}

#[test]
fn test_degenerate_gestures_fire_nothing() {
    let (mut editor, changes) = recording_editor(None);
    editor.set_tool_by_id("arrow_pass").unwrap();
    click(&mut editor, 30.0, 30.0);
    click(&mut editor, 30.0, 30.0);

    editor.set_tool_by_id("freehand").unwrap();
    click(&mut editor, 60.0, 60.0);

    assert!(changes.borrow().is_empty());
    assert!(editor.get_diagram_data().elements.is_empty());
}

#[test]
fn test_leaving_surface_finishes_stroke() {
    let (mut editor, changes) = recording_editor(None);
    editor.set_tool_by_id("freehand_arrow").unwrap();
    editor.handle_pointer(PointerEvent::down(10.0, 10.0));
    for i in 1..10 {
        editor.handle_pointer(PointerEvent::moved(10.0 + i as f64 * 8.0, 10.0));
    }
    assert!(editor.handle_pointer(PointerEvent::leave(90.0, 10.0)));
    assert_eq!(changes.borrow().len(), 1);
    assert!(!editor.canvas().has_pending_gesture());
}

#[test]
fn test_rink_switch_notifies_new_dimensions() {
    let (mut editor, changes) = recording_editor(None);
    editor.set_tool(Tool::Puck);
    for x in [100.0, 200.0, 300.0] {
        click(&mut editor, x, 100.0);
    }
    assert!(editor.set_rink_type(RinkType::Quarter));
    assert!(!editor.set_rink_type(RinkType::Quarter));

    let changes = changes.borrow();
    assert_eq!(changes.len(), 4);
    let last = changes.last().unwrap();
    assert_eq!(last.elements, changes[2].elements);
    assert_eq!((last.width, last.height), (400.0, 170.0));
}

#[test]
fn test_escape_clears_selection() {
    let (mut editor, _) = recording_editor(None);
    editor.set_tool(Tool::Net);
    click(&mut editor, 40.0, 40.0);
    editor.handle_key(&KeyEvent::new("v"));
    click(&mut editor, 40.0, 40.0);
    assert!(editor.canvas().selection().is_some());
    assert!(editor.handle_key(&KeyEvent::new("Escape")));
    assert!(editor.canvas().selection().is_none());
}

#[test]
fn test_freehand_shortcut_uses_config() {
    let mut config = rinkkit_settings::EditorConfig::default();
    config.freehand_arrow_end = true;
    let mut editor = RinkEditor::with_config(None, true, config);
    editor.handle_key(&KeyEvent::new("f"));
    assert_eq!(editor.tool(), Tool::Freehand { arrow_end: true });
    // Ctrl+F belongs to the host, not the toolbar.
    editor.handle_key(&KeyEvent::new("e").with_ctrl());
    assert_eq!(editor.tool(), Tool::Freehand { arrow_end: true });
}

#[test]
fn test_render_shows_selection_but_export_does_not() {
    let (mut editor, _) = recording_editor(None);
    editor.set_tool(Tool::Puck);
    click(&mut editor, 40.0, 40.0);
    editor.set_tool(Tool::Select);
    click(&mut editor, 40.0, 40.0);

    assert!(editor.render().contains("class=\"selection\""));
    let exported = editor.export_svg().unwrap();
    assert!(!exported.contains("class=\"selection\""));
    assert!(!exported.contains("data-element-id"));
}

fn marker_label(data: &RinkDiagramData) -> Option<String> {
    match &data.elements[0] {
        RinkElement::Marker(m) => m.label.clone(),
        other => panic!("expected a marker, got {:?}", other.kind()),
    }
}

#[test]
fn test_marker_label_is_undoable() {
    let (mut editor, changes) = recording_editor(None);
    editor.set_tool(Tool::Marker(MarkerType::X));
    click(&mut editor, 120.0, 60.0);
    let id = editor.get_diagram_data().elements[0].id().clone();
    changes.borrow_mut().clear();

    assert!(editor.select(&id));
    assert!(editor.set_marker_label(&id, Some("LW".to_string())));
    assert!(!editor.set_marker_label(&id, Some("LW".to_string())));
    assert_eq!(changes.borrow().len(), 1);
    assert_eq!(marker_label(&changes.borrow()[0]), Some("LW".to_string()));
    assert!(editor.export_svg().unwrap().contains("LW"));

    assert!(editor.undo());
    assert_eq!(marker_label(&editor.get_diagram_data()), None);
    assert_eq!(changes.borrow().len(), 2);
}

#[test]
fn test_escape_with_pending_arrow_fires_nothing() {
    let (mut editor, changes) = recording_editor(None);
    editor.set_tool_by_id("arrow_shot").unwrap();
    click(&mut editor, 100.0, 100.0);
    assert!(editor.canvas().has_pending_gesture());

    assert!(editor.handle_key(&KeyEvent::new("Escape")));
    assert!(!editor.canvas().has_pending_gesture());
    assert!(changes.borrow().is_empty());

    // The next click starts a fresh arrow instead of completing the old one.
    click(&mut editor, 300.0, 100.0);
    assert!(changes.borrow().is_empty());
    assert!(editor.get_diagram_data().elements.is_empty());
}

#[test]
fn test_clear_all_fires_change_once() {
    let (mut editor, changes) = recording_editor(None);
    editor.set_tool(Tool::Pylon);
    click(&mut editor, 100.0, 100.0);
    click(&mut editor, 200.0, 100.0);
    changes.borrow_mut().clear();

    assert!(editor.clear_all());
    assert!(!editor.clear_all());
    assert_eq!(changes.borrow().len(), 1);
    assert!(changes.borrow()[0].elements.is_empty());

    assert!(editor.undo());
    assert_eq!(editor.get_diagram_data().elements.len(), 2);
}
