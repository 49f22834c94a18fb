use leaper::graph::Graph;
use leaper::history::HistoryStack;

fn graph_with(n: usize) -> Graph {
    let mut g = Graph::new(false);
    for i in 0..n {
        g.add_vertex(i as f32, 0.0);
    }
    g
}

#[test]
fn undo_then_redo_restores_exactly() {
    let mut h = HistoryStack::new();
    let mut g = graph_with(2);

    h.record(g.snapshot());
    g.add_vertex(5.0, 5.0);
    let after = g.snapshot();

    let prev = h.undo(g.snapshot()).unwrap();
    g.restore(&prev);
    assert_eq!(g.vertex_count(), 2);

    let next = h.redo(g.snapshot()).unwrap();
    g.restore(&next);
    assert_eq!(g.snapshot(), after);
}

#[test]
fn empty_stacks_are_no_ops() {
    let mut h = HistoryStack::new();
    let g = graph_with(1);
    assert!(!h.can_undo());
    assert!(!h.can_redo());
    assert!(h.undo(g.snapshot()).is_none());
    assert!(h.redo(g.snapshot()).is_none());
}

#[test]
fn new_action_discards_the_redo_branch() {
    let mut h = HistoryStack::new();
    let mut g = graph_with(1);

    h.record(g.snapshot());
    g.add_vertex(1.0, 1.0);

    let prev = h.undo(g.snapshot()).unwrap();
    g.restore(&prev);
    assert!(h.can_redo());

    // Diverge: a fresh action clears the stashed future.
    h.record(g.snapshot());
    g.add_vertex(2.0, 2.0);
    assert!(!h.can_redo());
    assert!(h.can_undo());
}

#[test]
fn snapshots_are_immune_to_later_mutation() {
    let mut h = HistoryStack::new();
    let mut g = graph_with(3);
    h.record(g.snapshot());

    g.set_vertex_selected(0, true).unwrap();
    g.remove_selected();
    g.move_vertex(0, 99.0, 99.0).unwrap();

    let prev = h.undo(g.snapshot()).unwrap();
    assert_eq!(prev.vertex_count(), 3);
    assert_eq!(prev.vertices[0].x, 0.0);
}
