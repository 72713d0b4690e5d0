mod common;

use common::Recorder;
use graphpad::{Direction, Editor, LoadError, ViewportConfig};

fn two_nodes() -> Editor {
    let mut ed = Editor::new();
    ed.primary_click(100.0, 100.0);
    ed.primary_click(200.0, 100.0);
    ed
}

#[test]
fn clicking_empty_space_adds_nodes() {
    let ed = two_nodes();
    let g = ed.graph();
    assert_eq!(g.node_count(), 2);
    let labels: Vec<_> = g.nodes().map(|(_, n)| n.label.clone()).collect();
    assert_eq!(labels, vec!["A", "B"]);
    assert_eq!(g.selection().selected, None);
}

#[test]
fn select_then_click_another_node_connects_them() {
    let mut ed = two_nodes();
    ed.primary_click(102.0, 101.0);
    assert!(ed.graph().selection().selected.is_some());
    ed.pointer_move(150.0, 140.0);
    assert!(ed.graph().selection().temp_edge.is_some());
    ed.primary_click(198.0, 100.0);

    let g = ed.graph();
    assert_eq!(g.edge_count(), 1);
    let (_, e) = g.edges().next().unwrap();
    assert_eq!((e.from, e.to), (0, 1));
    assert_eq!(g.selection().selected, None);
    assert_eq!(g.selection().temp_edge, None);
}

#[test]
fn clicking_the_selected_node_again_makes_a_loop() {
    let mut ed = two_nodes();
    ed.primary_click(100.0, 100.0);
    ed.primary_click(100.0, 100.0);
    let (_, e) = ed.graph().edges().next().unwrap();
    assert!(e.is_loop());
}

#[test]
fn clicking_empty_space_with_a_pending_edge_cancels_it() {
    let mut ed = two_nodes();
    ed.primary_click(100.0, 100.0);
    ed.pointer_move(300.0, 300.0);
    ed.primary_click(300.0, 300.0);
    let g = ed.graph();
    assert_eq!(g.node_count(), 2, "cancel does not add a node");
    assert_eq!(g.selection().selected, None);
    assert_eq!(g.selection().temp_edge, None);
}

#[test]
fn drag_moves_the_node_and_swallows_the_release_click() {
    let mut ed = two_nodes();
    ed.pointer_down(100.0, 100.0);
    ed.pointer_move(120.0, 300.0);
    ed.pointer_move(140.0, 320.0);
    ed.pointer_up();
    ed.primary_click(140.0, 320.0);

    let g = ed.graph();
    let n = g.get_node(0).unwrap();
    assert_eq!((n.x, n.y), (140.0, 320.0));
    assert_eq!(g.selection().selected, None, "release click is swallowed");
    assert_eq!(g.selection().dragging, None);

    ed.primary_click(140.0, 320.0);
    assert_eq!(ed.graph().selection().selected, Some(0));
}

#[test]
fn dragging_drops_a_pending_edge() {
    let mut ed = two_nodes();
    ed.primary_click(100.0, 100.0);
    ed.pointer_down(200.0, 100.0);
    ed.pointer_move(220.0, 120.0);
    let sel = ed.graph().selection();
    assert_eq!(sel.selected, None);
    assert_eq!(sel.temp_edge, None);
    assert!(sel.just_dragged);
}

#[test]
fn clicking_an_edge_cycles_its_direction() {
    let mut ed = two_nodes();
    ed.primary_click(100.0, 100.0);
    ed.primary_click(200.0, 100.0);
    let dir = |ed: &Editor| ed.graph().edges().next().unwrap().1.direction;

    ed.primary_click(150.0, 101.0);
    assert_eq!(dir(&ed), Direction::Forward);
    ed.primary_click(150.0, 101.0);
    assert_eq!(dir(&ed), Direction::Reversed);
    ed.primary_click(150.0, 101.0);
    assert_eq!(dir(&ed), Direction::Undirected);
    assert_eq!(ed.graph().node_count(), 2);
}

#[test]
fn secondary_click_removes_one_thing() {
    let mut ed = two_nodes();
    for _ in 0..2 {
        ed.primary_click(100.0, 100.0);
        ed.primary_click(200.0, 100.0);
    }
    assert_eq!(ed.graph().edge_count(), 2);

    // Only the straight edge passes through the chord midpoint.
    ed.secondary_click(150.0, 100.0);
    assert_eq!(ed.graph().edge_count(), 1);
    let (_, e) = ed.graph().edges().next().unwrap();
    assert_eq!(e.offset, 0.0, "survivor moves onto the chord");

    ed.secondary_click(400.0, 400.0);
    assert_eq!(ed.graph().edge_count(), 1);

    ed.secondary_click(200.0, 100.0);
    assert_eq!(ed.graph().node_count(), 1);
    assert_eq!(ed.graph().edge_count(), 0);
    let (_, n) = ed.graph().nodes().next().unwrap();
    assert_eq!(n.label, "A");
}

#[test]
fn direction_toggle_applies_to_every_edge() {
    let mut ed = two_nodes();
    ed.primary_click(100.0, 100.0);
    ed.primary_click(200.0, 100.0);
    ed.primary_click(200.0, 100.0);
    ed.primary_click(200.0, 100.0);
    ed.edge_direction_mode_toggled(true);
    assert!(ed.graph().edges().all(|(_, e)| e.direction == Direction::Forward));
    ed.edge_direction_mode_toggled(false);
    assert!(ed.graph().edges().all(|(_, e)| e.direction == Direction::Undirected));
}

#[test]
fn save_and_load_through_the_toolbar() {
    let mut ed = two_nodes();
    ed.primary_click(100.0, 100.0);
    ed.primary_click(200.0, 100.0);
    let saved = ed.save_requested();

    let mut other = Editor::new();
    other.load_requested(saved.as_bytes()).unwrap();
    assert_eq!(other.graph().to_json_value(), ed.graph().to_json_value());
    assert_eq!(other.take_notice(), None);
}

#[test]
fn failed_load_queues_a_notice_and_keeps_the_graph() {
    let mut ed = two_nodes();
    let before = ed.save_requested();

    let err = ed.load_requested(b"{\"nodes\": []}").unwrap_err();
    assert_eq!(err, LoadError::Incomplete("edges"));
    assert_eq!(
        ed.take_notice().as_deref(),
        Some("Cannot load graph: Missing required data(nodes or edges).")
    );
    assert_eq!(ed.take_notice(), None);

    assert!(ed.load_requested(&[0xff, 0xfe]).is_err());
    assert_eq!(ed.take_notice().as_deref(), Some("Cannot load graph: Invalid format."));
    assert_eq!(ed.save_requested(), before);
}

#[test]
fn clear_resets_the_canvas() {
    let mut ed = two_nodes();
    ed.primary_click(100.0, 100.0);
    ed.clear_requested();
    assert_eq!(ed.graph().node_count(), 0);
    assert_eq!(ed.graph().selection().selected, None);
}

#[test]
fn frames_redraw_only_after_changes() {
    let mut ed = Editor::new();
    let mut rec = Recorder::default();
    assert!(ed.frame(&mut rec));
    assert!(!ed.frame(&mut rec));
    assert!(!ed.needs_redraw());

    ed.primary_click(50.0, 50.0);
    ed.primary_click(90.0, 50.0);
    assert!(ed.needs_redraw());
    rec.ops.clear();
    assert!(ed.frame(&mut rec));
    assert_eq!(rec.texts(), vec!["A", "B"]);
    assert!(!ed.frame(&mut rec));

    // Pointer motion with nothing selected or dragged draws nothing new.
    ed.pointer_move(10.0, 10.0);
    assert!(!ed.needs_redraw());
}

#[test]
fn identifier_toggle_switches_labels_for_numbers() {
    let mut ed = two_nodes();
    ed.identifier_display_toggled(true);
    let mut rec = Recorder::default();
    ed.frame(&mut rec);
    assert_eq!(rec.texts(), vec!["1", "2"]);
}

#[test]
fn config_changes_are_validated() {
    let mut ed = Editor::new();
    let bad = ViewportConfig { node_radius: -1.0, ..ViewportConfig::default() };
    assert!(ed.set_config(bad).is_err());
    assert_eq!(ed.config().node_radius, 10.0);

    let big = ViewportConfig { node_radius: 25.0, base_offset: 30.0, ..ViewportConfig::default() };
    ed.set_config(big).unwrap();
    ed.primary_click(100.0, 100.0);
    ed.primary_click(300.0, 100.0);
    assert_eq!(ed.graph().node_at(120.0, 100.0, ed.config()), Some(0));
    for _ in 0..2 {
        ed.primary_click(100.0, 100.0);
        ed.primary_click(300.0, 100.0);
    }
    let offsets: Vec<_> = ed.graph().edges().map(|(_, e)| e.offset).collect();
    assert_eq!(offsets, vec![0.0, 30.0]);

    assert!(Editor::with_config(bad).is_err());
}
