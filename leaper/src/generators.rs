//! Deterministic graph builders for the library of standard graphs.
//!
//! Every generator returns dense 0-indexed vertices with canvas positions
//! already laid out, ready to load into a session.

use crate::model::{Edge, Vertex};

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedGraph {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub directed: bool,
}

const CX: f32 = 150.0;
const CY: f32 = 150.0;

/// n vertices in a regular polygon, vertex 0 at 12 o'clock.
fn polygon_layout(n: usize, cx: f32, cy: f32, r: f32) -> Vec<Vertex> {
    (0..n)
        .map(|i| {
            let angle = (2.0 * std::f32::consts::PI * i as f32) / n as f32
                - std::f32::consts::FRAC_PI_2;
            Vertex {
                x: (cx + r * angle.cos()).round(),
                y: (cy + r * angle.sin()).round(),
            }
        })
        .collect()
}

fn line_layout(n: usize, y: f32, x_start: f32, x_end: f32) -> Vec<Vertex> {
    let step = if n > 1 { (x_end - x_start) / (n - 1) as f32 } else { 0.0 };
    (0..n)
        .map(|i| Vertex {
            x: (x_start + i as f32 * step).round(),
            y,
        })
        .collect()
}

/// Complete graph K_n.
pub fn complete(n: usize) -> GeneratedGraph {
    let mut edges = Vec::new();
    for i in 0..n as u32 {
        for j in (i + 1)..n as u32 {
            edges.push(Edge::new(i, j));
        }
    }
    GeneratedGraph {
        name: format!("K{}", n),
        vertices: polygon_layout(n, CX, CY, 120.0),
        edges,
        directed: false,
    }
}

/// Cycle graph C_n, optionally directed one way around the ring.
///
/// Degenerate sizes stay within the editor's edge invariants: C1 has no
/// edges (the wrap-around would be a self-loop) and undirected C2 has one
/// (the return edge would be a duplicate).
pub fn cycle(n: usize, directed: bool) -> GeneratedGraph {
    let edges = match n {
        0 | 1 => Vec::new(),
        2 if !directed => vec![Edge::new(0, 1)],
        _ => (0..n as u32).map(|i| Edge::new(i, (i + 1) % n as u32)).collect(),
    };
    GeneratedGraph {
        name: format!("{}C{}", if directed { "D" } else { "" }, n),
        vertices: polygon_layout(n, CX, CY, 120.0),
        edges,
        directed,
    }
}

/// Path graph P_n.
pub fn path(n: usize) -> GeneratedGraph {
    let edges = (0..n.saturating_sub(1) as u32).map(|i| Edge::new(i, i + 1)).collect();
    GeneratedGraph {
        name: format!("P{}", n),
        vertices: line_layout(n, CY, 30.0, 270.0),
        edges,
        directed: false,
    }
}

/// m x n grid graph.
pub fn grid(m: usize, n: usize) -> GeneratedGraph {
    let (x0, y0, x1, y1) = (30.0, 30.0, 270.0, 270.0);
    let x_step = if n > 1 { (x1 - x0) / (n - 1) as f32 } else { 0.0 };
    let y_step = if m > 1 { (y1 - y0) / (m - 1) as f32 } else { 0.0 };
    let mut vertices = Vec::with_capacity(m * n);
    for row in 0..m {
        for col in 0..n {
            vertices.push(Vertex {
                x: (x0 + col as f32 * x_step).round(),
                y: (y0 + row as f32 * y_step).round(),
            });
        }
    }
    let mut edges = Vec::new();
    for row in 0..m {
        for col in 0..n {
            let id = (row * n + col) as u32;
            if col < n - 1 {
                edges.push(Edge::new(id, id + 1));
            }
            if row < m - 1 {
                edges.push(Edge::new(id, id + n as u32));
            }
        }
    }
    GeneratedGraph {
        name: format!("{}x{} Grid", m, n),
        vertices,
        edges,
        directed: false,
    }
}

/// Complete bipartite graph K_{m,n}, two horizontal rows.
pub fn complete_bipartite(m: usize, n: usize) -> GeneratedGraph {
    let mut vertices = line_layout(m, 60.0, 30.0, 270.0);
    vertices.extend(line_layout(n, 240.0, 30.0, 270.0));
    let mut edges = Vec::with_capacity(m * n);
    for i in 0..m as u32 {
        for j in 0..n as u32 {
            edges.push(Edge::new(i, m as u32 + j));
        }
    }
    GeneratedGraph {
        name: format!("K{},{}", m, n),
        vertices,
        edges,
        directed: false,
    }
}

/// The Petersen graph: outer pentagon 0-4, inner pentagram 5-9.
pub fn petersen() -> GeneratedGraph {
    let mut vertices = polygon_layout(5, CX, CY, 120.0);
    vertices.extend(polygon_layout(5, CX, CY, 55.0));
    let mut edges: Vec<Edge> = (0..5).map(|i| Edge::new(i, (i + 1) % 5)).collect();
    for i in 0..5u32 {
        edges.push(Edge::new(5 + i, 5 + (i + 2) % 5));
        edges.push(Edge::new(i, 5 + i));
    }
    GeneratedGraph {
        name: "Petersen".to_string(),
        vertices,
        edges,
        directed: false,
    }
}

/// The cube graph Q3, drawn with the back face offset for depth.
pub fn cube() -> GeneratedGraph {
    let (o, s, d) = (40.0, 140.0, 70.0);
    let vertices = vec![
        Vertex { x: o, y: o },
        Vertex { x: o + s, y: o },
        Vertex { x: o + s, y: o + s },
        Vertex { x: o, y: o + s },
        Vertex { x: o + d, y: o + d },
        Vertex { x: o + d + s, y: o + d },
        Vertex { x: o + d + s, y: o + d + s },
        Vertex { x: o + d, y: o + d + s },
    ];
    let mut edges = Vec::with_capacity(12);
    for i in 0..4u32 {
        edges.push(Edge::new(i, (i + 1) % 4));
        edges.push(Edge::new(4 + i, 4 + (i + 1) % 4));
        edges.push(Edge::new(i, 4 + i));
    }
    GeneratedGraph {
        name: "Cube (Q3)".to_string(),
        vertices,
        edges,
        directed: false,
    }
}

/// Triangular prism: two triangles joined rung by rung.
pub fn prism() -> GeneratedGraph {
    let mut vertices = polygon_layout(3, CX, 80.0, 80.0);
    vertices.extend(polygon_layout(3, CX, 220.0, 80.0));
    let mut edges = Vec::with_capacity(9);
    for i in 0..3u32 {
        edges.push(Edge::new(i, (i + 1) % 3));
        edges.push(Edge::new(3 + i, 3 + (i + 1) % 3));
        edges.push(Edge::new(i, 3 + i));
    }
    GeneratedGraph {
        name: "Prism".to_string(),
        vertices,
        edges,
        directed: false,
    }
}

/// The built-in library, grouped roughly by family.
pub fn library() -> Vec<GeneratedGraph> {
    let mut graphs = Vec::new();
    for n in 3..=8 {
        graphs.push(complete(n));
    }
    for n in 3..=10 {
        graphs.push(cycle(n, false));
    }
    for n in 2..=8 {
        graphs.push(path(n));
    }
    for (m, n) in [(2, 2), (2, 3), (2, 4), (3, 3), (3, 4), (4, 4)] {
        graphs.push(grid(m, n));
    }
    for (m, n) in [(1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (2, 2), (2, 3), (2, 4), (3, 3)] {
        graphs.push(complete_bipartite(m, n));
    }
    graphs.push(petersen());
    graphs.push(cube());
    graphs.push(prism());
    for n in 3..=8 {
        graphs.push(cycle(n, true));
    }
    graphs
}
