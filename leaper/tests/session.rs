use leaper::composer::{Hop, HopSource};
use leaper::generators;
use leaper::oracle::{HopData, HopsResult, LeapGroupResult};
use leaper::perm::Perm;
use leaper::{Error, Session};

fn triangle() -> Session {
    let mut s = Session::new();
    s.add_vertex(0.0, 0.0).unwrap();
    s.add_vertex(1.0, 0.0).unwrap();
    s.add_vertex(0.5, 1.0).unwrap();
    s.add_edge(0, 1).unwrap();
    s.add_edge(1, 2).unwrap();
    s.add_edge(2, 0).unwrap();
    s
}

fn rotation() -> Hop {
    Hop::from_perm(Perm::from_one_line(vec![1, 2, 0]).unwrap(), HopSource::Oracle)
}

#[test]
fn rejected_edge_leaves_no_history_entry() {
    let mut s = triangle();
    let before_undo = s.can_undo();
    assert!(matches!(s.add_edge(0, 1), Err(Error::DuplicateEdge(0, 1))));
    assert_eq!(s.can_undo(), before_undo);
    // The next undo reverts the last successful action, not the failure.
    assert!(s.undo().unwrap());
    assert_eq!(s.graph().edge_count(), 2);
}

#[test]
fn undo_and_redo_walk_the_edit_sequence() {
    let mut s = Session::new();
    s.add_vertex(0.0, 0.0).unwrap();
    s.add_vertex(1.0, 1.0).unwrap();
    s.add_edge(0, 1).unwrap();

    assert!(s.undo().unwrap());
    assert_eq!(s.graph().edge_count(), 0);
    assert!(s.undo().unwrap());
    assert_eq!(s.graph().vertex_count(), 1);
    assert!(s.redo().unwrap());
    assert!(s.redo().unwrap());
    assert_eq!(s.graph().edge_count(), 1);
    // Empty stack: defined no-op.
    assert!(!s.redo().unwrap());
}

#[test]
fn cardinality_changes_invalidate_drawing_and_leap() {
    let mut s = triangle();
    s.perform_hop(&rotation()).unwrap();
    s.begin_draw().unwrap();
    s.draw_tap(0).unwrap();

    s.add_vertex(2.0, 2.0).unwrap();
    assert!(s.working_leap().is_none());
    assert!(!s.is_drawing());
}

#[test]
fn vertex_removal_invalidates_but_edge_removal_does_not() {
    let mut s = triangle();
    s.perform_hop(&rotation()).unwrap();
    s.set_edge_selected(0, 1, true).unwrap();
    s.remove_selected().unwrap();
    assert!(s.working_leap().is_some());

    s.set_vertex_selected(2, true).unwrap();
    s.remove_selected().unwrap();
    assert!(s.working_leap().is_none());
}

#[test]
fn undo_invalidates_permutation_state() {
    let mut s = triangle();
    s.perform_hop(&rotation()).unwrap();
    s.undo().unwrap();
    assert!(s.working_leap().is_none());
}

#[test]
fn move_vertex_is_not_undoable() {
    let mut s = triangle();
    s.move_vertex(0, 7.0, 7.0).unwrap();
    s.undo().unwrap();
    // The move survives the undo of the last structural action.
    assert_eq!(s.graph().position(0), Some((7.0, 7.0)));
}

#[test]
fn draw_mode_round_trip() {
    let mut s = triangle();
    s.begin_draw().unwrap();
    s.draw_tap(0).unwrap();
    s.draw_tap(1).unwrap();
    s.draw_tap(1).unwrap();
    s.draw_tap(2).unwrap();
    s.draw_tap(2).unwrap();
    let state = s.draw_tap(0).unwrap();
    assert!(state.is_complete(3));

    let hop = s.finish_draw().unwrap();
    assert_eq!(hop.perm.as_slice(), &[1, 2, 0]);
    assert_eq!(hop.cycle, "(1 2 3)");
    assert!(!s.is_drawing());
    assert!(s.working_leap().is_some());
}

#[test]
fn draw_tap_requires_draw_mode_and_a_real_vertex() {
    let mut s = triangle();
    assert!(matches!(s.draw_tap(0), Err(Error::NotDrawing)));
    s.begin_draw().unwrap();
    assert!(matches!(s.draw_tap(9), Err(Error::UnknownVertex(9))));
}

#[test]
fn display_labels_follow_leap_and_index_base() {
    let mut s = triangle();
    assert_eq!(s.display_labels(), vec!["1", "2", "3"]);
    s.set_index_base(0);
    assert_eq!(s.display_labels(), vec!["0", "1", "2"]);

    s.set_index_base(1);
    s.perform_hop(&rotation()).unwrap();
    // labels = [2, 0, 1], displayed 1-indexed
    assert_eq!(s.display_labels(), vec!["3", "1", "2"]);
    // Labels never mutate the graph.
    assert_eq!(s.graph().vertex_count(), 3);
}

#[test]
fn save_recall_guards_against_size_mismatch() {
    let mut s = triangle();
    s.perform_hop(&rotation()).unwrap();
    s.save_leap("spin").unwrap();
    s.add_vertex(5.0, 5.0).unwrap();
    assert!(matches!(
        s.recall_leap(0),
        Err(Error::IncompatibleHop { expected: 4, got: 3 })
    ));
}

#[test]
fn palette_pins_dedupe_on_permutation() {
    let mut s = triangle();
    let hop = rotation();
    assert!(s.pin_hop("spin", &hop));
    // Same permutation with a different cycle string is still a duplicate.
    let mut again = hop.clone();
    again.cycle = "(2 3 1)".to_string();
    assert!(!s.pin_hop("spin again", &again));
    assert_eq!(s.palette().len(), 1);
    assert_eq!(s.palette()[0].name, "spin");

    assert!(s.pinned_compatible(0).unwrap());
    s.add_vertex(9.0, 9.0).unwrap();
    assert!(!s.pinned_compatible(0).unwrap());

    s.unpin_hop(0).unwrap();
    assert!(s.palette().is_empty());
    assert!(matches!(s.unpin_hop(0), Err(Error::NoSuchIndex(0))));
}

#[test]
fn apply_pinned_folds_into_the_working_leap() {
    let mut s = triangle();
    s.pin_hop("spin", &rotation());
    s.apply_pinned(0).unwrap();
    s.apply_pinned(0).unwrap();
    let labels = s.working_leap().unwrap().labels.clone();
    // Two rotations compose to the inverse rotation's labels.
    assert_eq!(labels.as_slice(), &[1, 2, 0]);
}

#[test]
fn workspace_entries_record_and_remove() {
    let mut s = triangle();
    let id1 = s.record_leap_group(
        LeapGroupResult {
            structure: "S3".to_string(),
            order: 6,
        },
        Some(0.25),
        "2026-08-27T12:00:00Z",
    );
    let id2 = s.record_hops(
        HopsResult {
            count: 1,
            hops: vec![HopData {
                one_line: vec![2, 3, 1],
                cycle: "(1 2 3)".to_string(),
            }],
        },
        None,
        "2026-08-27T12:01:00Z",
    );
    assert_ne!(id1, id2);
    assert_eq!(s.workspace().len(), 2);
    assert_eq!(s.entry(id2).unwrap().hops().len(), 1);

    s.remove_entry(id1).unwrap();
    assert_eq!(s.workspace().len(), 1);
    assert!(matches!(s.remove_entry(id1), Err(Error::NoSuchIndex(_))));
}

#[test]
fn snapshot_viewing_locks_out_edits() {
    let mut s = triangle();
    let id = s.record_leap_group(
        LeapGroupResult {
            structure: "S3".to_string(),
            order: 6,
        },
        None,
        "2026-08-27T12:00:00Z",
    );
    s.add_vertex(4.0, 4.0).unwrap();
    assert_eq!(s.graph().vertex_count(), 4);

    s.view_entry_snapshot(id).unwrap();
    assert!(s.is_viewing());
    // The displayed graph is the 3-vertex input of the recorded computation.
    assert_eq!(s.graph().vertex_count(), 3);

    assert!(matches!(s.add_vertex(0.0, 0.0), Err(Error::ViewingSnapshot)));
    assert!(matches!(s.undo(), Err(Error::ViewingSnapshot)));
    assert!(matches!(s.begin_draw(), Err(Error::ViewingSnapshot)));
    assert!(matches!(
        s.view_entry_snapshot(id),
        Err(Error::AlreadyViewing)
    ));

    s.exit_snapshot().unwrap();
    assert_eq!(s.graph().vertex_count(), 4);
    assert!(matches!(s.exit_snapshot(), Err(Error::NotViewing)));
}

#[test]
fn leap_operations_are_locked_while_viewing() {
    let mut s = Session::new();
    for i in 0..5 {
        s.add_vertex(i as f32, 0.0).unwrap();
    }
    let id = s.record_leap_group(
        LeapGroupResult {
            structure: "S5".to_string(),
            order: 120,
        },
        None,
        "2026-08-27T12:00:00Z",
    );

    // Shrink the live graph, then build leap state sized to it.
    s.set_vertex_selected(3, true).unwrap();
    s.set_vertex_selected(4, true).unwrap();
    s.remove_selected().unwrap();
    s.perform_hop(&rotation()).unwrap();
    s.save_leap("spin").unwrap();
    s.pin_hop("spin", &rotation());

    // The displayed snapshot has 5 vertices; a hop sized to it must be an
    // error, not an out-of-bounds fold into the stashed 3-vertex leap.
    s.view_entry_snapshot(id).unwrap();
    let five = Hop::from_perm(
        Perm::from_one_line(vec![1, 2, 3, 4, 0]).unwrap(),
        HopSource::Oracle,
    );
    assert!(matches!(s.perform_hop(&five), Err(Error::ViewingSnapshot)));
    assert!(matches!(s.apply_pinned(0), Err(Error::ViewingSnapshot)));
    assert!(matches!(s.save_leap("again"), Err(Error::ViewingSnapshot)));
    assert!(matches!(s.recall_leap(0), Err(Error::ViewingSnapshot)));

    s.exit_snapshot().unwrap();
    // The stashed working leap came through the round trip untouched.
    assert_eq!(s.working_leap().unwrap().labels.len(), 3);
    s.perform_hop(&rotation()).unwrap();
}

#[test]
fn clear_resets_everything_but_settings() {
    let mut s = triangle();
    s.set_index_base(0);
    s.perform_hop(&rotation()).unwrap();
    s.save_leap("spin").unwrap();
    s.pin_hop("spin", &rotation());
    s.record_leap_group(
        LeapGroupResult {
            structure: "S3".to_string(),
            order: 6,
        },
        None,
        "t",
    );
    s.set_name("triangle");

    s.clear();
    assert_eq!(s.graph().vertex_count(), 0);
    assert!(!s.can_undo());
    assert!(s.working_leap().is_none());
    assert!(s.saved_leaps().is_empty());
    assert!(s.palette().is_empty());
    assert!(s.workspace().is_empty());
    assert_eq!(s.name(), "untitled");
    assert_eq!(s.settings().index_base, 0);
}

#[test]
fn generated_graphs_load_as_one_undoable_action() {
    let mut s = triangle();
    s.perform_hop(&rotation()).unwrap();
    let petersen = generators::petersen();
    s.load_generated(&petersen).unwrap();

    assert_eq!(s.graph().vertex_count(), 10);
    assert_eq!(s.graph().edge_count(), 15);
    assert!(s.working_leap().is_none());

    assert!(s.undo().unwrap());
    assert_eq!(s.graph().vertex_count(), 3);
}

#[test]
fn generator_shapes_are_sane() {
    let k4 = generators::complete(4);
    assert_eq!(k4.vertices.len(), 4);
    assert_eq!(k4.edges.len(), 6);

    let grid = generators::grid(2, 3);
    assert_eq!(grid.vertices.len(), 6);
    assert_eq!(grid.edges.len(), 7);

    let dc5 = generators::cycle(5, true);
    assert!(dc5.directed);
    assert_eq!(dc5.edges.len(), 5);

    // Degenerate cycles never emit a self-loop or an undirected duplicate.
    assert!(generators::cycle(1, false).edges.is_empty());
    assert_eq!(generators::cycle(2, false).edges.len(), 1);
    assert_eq!(generators::cycle(2, true).edges.len(), 2);

    let k23 = generators::complete_bipartite(2, 3);
    assert_eq!(k23.vertices.len(), 5);
    assert_eq!(k23.edges.len(), 6);

    let cube = generators::cube();
    assert_eq!(cube.vertices.len(), 8);
    assert_eq!(cube.edges.len(), 12);

    for g in generators::library() {
        for e in &g.edges {
            assert!((e.source as usize) < g.vertices.len(), "{}", g.name);
            assert!((e.target as usize) < g.vertices.len(), "{}", g.name);
            assert_ne!(e.source, e.target, "{}", g.name);
        }
    }
}
