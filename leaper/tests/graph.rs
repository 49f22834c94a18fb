use leaper::graph::Graph;
use leaper::Error;

fn path3() -> Graph {
    let mut g = Graph::new(false);
    g.add_vertex(0.0, 0.0);
    g.add_vertex(1.0, 0.0);
    g.add_vertex(2.0, 0.0);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g
}

#[test]
fn ids_are_dense_and_sequential() {
    let mut g = Graph::new(false);
    assert_eq!(g.add_vertex(1.0, 2.0), 0);
    assert_eq!(g.add_vertex(3.0, 4.0), 1);
    assert_eq!(g.add_vertex(5.0, 6.0), 2);
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.next_id(), 3);
    assert_eq!(g.position(1), Some((3.0, 4.0)));
}

#[test]
fn edge_rejections() {
    let mut g = path3();
    assert!(matches!(g.add_edge(0, 7), Err(Error::UnknownVertex(7))));
    assert!(matches!(g.add_edge(1, 1), Err(Error::SelfLoop(1))));
    assert!(matches!(g.add_edge(0, 1), Err(Error::DuplicateEdge(0, 1))));
    // Undirected: the reversed orientation is the same edge.
    assert!(matches!(g.add_edge(1, 0), Err(Error::DuplicateEdge(1, 0))));
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn directed_mode_distinguishes_orientation() {
    let mut g = Graph::new(true);
    g.add_vertex(0.0, 0.0);
    g.add_vertex(1.0, 0.0);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 0).unwrap();
    assert_eq!(g.edge_count(), 2);
    assert!(matches!(g.add_edge(0, 1), Err(Error::DuplicateEdge(0, 1))));
}

#[test]
fn dropping_direction_collapses_equivalent_edges() {
    let mut g = Graph::new(true);
    g.add_vertex(0.0, 0.0);
    g.add_vertex(1.0, 0.0);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 0).unwrap();
    g.set_directed(false);
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge(1, 0));
}

#[test]
fn removing_a_middle_vertex_relabels_survivors() {
    let mut g = path3();
    g.set_vertex_selected(1, true).unwrap();
    let outcome = g.remove_selected();
    assert_eq!(outcome.vertices_removed, 1);
    // Both edges were incident to vertex 1.
    assert_eq!(outcome.edges_removed, 2);
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.next_id(), 2);
    // Old vertex 2 is now id 1 and keeps its position.
    assert_eq!(g.position(1), Some((2.0, 0.0)));
}

#[test]
fn removing_the_first_vertex_keeps_edges_consistent() {
    let mut g = path3();
    g.set_vertex_selected(0, true).unwrap();
    let outcome = g.remove_selected();
    assert_eq!(outcome.vertices_removed, 1);
    assert_eq!(outcome.edges_removed, 1);
    // The surviving 1-2 edge is relabeled to 0-1.
    assert_eq!(g.edge_count(), 1);
    assert!(g.has_edge(0, 1));
    for e in g.edges() {
        assert!((e.source as usize) < g.vertex_count());
        assert!((e.target as usize) < g.vertex_count());
    }
}

#[test]
fn removing_a_selected_edge_spares_its_endpoints() {
    let mut g = path3();
    g.set_edge_selected(0, 1, true).unwrap();
    let outcome = g.remove_selected();
    assert_eq!(outcome.vertices_removed, 0);
    assert_eq!(outcome.edges_removed, 1);
    assert_eq!(g.vertex_count(), 3);
    assert!(!g.has_edge(0, 1));
    assert!(g.has_edge(1, 2));
}

#[test]
fn remove_with_empty_selection_is_a_no_op() {
    let mut g = path3();
    let outcome = g.remove_selected();
    assert!(!outcome.changed());
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn selection_rejects_unknown_elements() {
    let mut g = path3();
    assert!(matches!(
        g.set_vertex_selected(9, true),
        Err(Error::UnknownVertex(9))
    ));
    assert!(matches!(
        g.set_edge_selected(0, 2, true),
        Err(Error::UnknownEdge(0, 2))
    ));
}

#[test]
fn snapshot_and_restore_round_trip() {
    let mut g = path3();
    let snap = g.snapshot();
    g.set_vertex_selected(2, true).unwrap();
    g.remove_selected();
    g.add_vertex(9.0, 9.0);
    g.restore(&snap);
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.next_id(), 3);
    assert!(!g.has_selection());
}

#[test]
fn move_vertex_is_position_only() {
    let mut g = path3();
    g.move_vertex(2, 8.0, 9.0).unwrap();
    assert_eq!(g.position(2), Some((8.0, 9.0)));
    assert!(matches!(g.move_vertex(5, 0.0, 0.0), Err(Error::UnknownVertex(5))));
}
