//! Face adjacency and cut-vertex detection.
//!
//! A module that is an articulation point of the face-adjacency graph
//! holds the lattice together: lifting it off its cell would split the
//! remaining modules into two or more pieces. The engine recomputes the
//! set after every move and refuses to move any module in it.
//!
//! The sweep is Tarjan's low-link algorithm with an explicit frame stack,
//! so deep chains never touch the call stack.

use std::collections::{BTreeSet, VecDeque};

use pivot_core::{Coord3, ModuleId};
use smallvec::SmallVec;

/// An undirected adjacency between two face-touching modules, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// The lower id.
    pub a: ModuleId,
    /// The higher id.
    pub b: ModuleId,
}

impl Edge {
    /// Build an edge, ordering the endpoints.
    pub fn new(u: ModuleId, v: ModuleId) -> Self {
        if u <= v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }
}

/// All pairs of modules whose positions are at Manhattan distance 1.
///
/// `positions[i]` is the position of module `i + 1`. Edges come out sorted
/// by `(a, b)`.
pub fn face_adjacency(positions: &[Coord3]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (i, &p) in positions.iter().enumerate() {
        for (j, &q) in positions.iter().enumerate().skip(i + 1) {
            if p.is_face_adjacent(q) {
                edges.push(Edge {
                    a: ModuleId::from_index(i),
                    b: ModuleId::from_index(j),
                });
            }
        }
    }
    edges
}

/// Zero-based adjacency lists. Each lattice cell has at most six face
/// neighbours, so the lists stay inline.
fn adjacency_lists(vertex_count: usize, edges: &[Edge]) -> Vec<SmallVec<[usize; 6]>> {
    let mut adj: Vec<SmallVec<[usize; 6]>> = vec![SmallVec::new(); vertex_count];
    for e in edges {
        let (u, v) = (e.a.index(), e.b.index());
        debug_assert!(u < vertex_count && v < vertex_count, "edge {e:?} out of range");
        adj[u].push(v);
        adj[v].push(u);
    }
    adj
}

const UNVISITED: usize = usize::MAX;

struct Frame {
    vertex: usize,
    parent: Option<usize>,
    next: usize,
}

/// Cut vertices of the graph on modules `1..=vertex_count`.
///
/// Every unvisited vertex starts a fresh DFS, so disconnected graphs are
/// handled component by component. A non-root vertex `u` is a cut vertex
/// when some DFS child `v` has `low[v] >= disc[u]`; a root is one when it
/// has more than one DFS child. Returns an empty set when there are none.
pub fn articulation_points(vertex_count: usize, edges: &[Edge]) -> BTreeSet<ModuleId> {
    let adj = adjacency_lists(vertex_count, edges);
    let mut disc = vec![UNVISITED; vertex_count];
    let mut low = vec![0usize; vertex_count];
    let mut is_cut = vec![false; vertex_count];
    let mut timer = 0usize;
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..vertex_count {
        if disc[root] != UNVISITED {
            continue;
        }
        disc[root] = timer;
        low[root] = timer;
        timer += 1;
        let mut root_children = 0usize;
        stack.push(Frame {
            vertex: root,
            parent: None,
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let u = frame.vertex;
            let parent = frame.parent;
            match adj[u].get(frame.next).copied() {
                Some(v) => {
                    frame.next += 1;
                    if disc[v] == UNVISITED {
                        disc[v] = timer;
                        low[v] = timer;
                        timer += 1;
                        if u == root {
                            root_children += 1;
                        }
                        stack.push(Frame {
                            vertex: v,
                            parent: Some(u),
                            next: 0,
                        });
                    } else if Some(v) != parent {
                        low[u] = low[u].min(disc[v]);
                    }
                }
                None => {
                    stack.pop();
                    if let Some(p) = parent {
                        low[p] = low[p].min(low[u]);
                        if p != root && low[u] >= disc[p] {
                            is_cut[p] = true;
                        }
                    }
                }
            }
        }

        if root_children > 1 {
            is_cut[root] = true;
        }
    }

    is_cut
        .iter()
        .enumerate()
        .filter(|&(_, &cut)| cut)
        .map(|(i, _)| ModuleId::from_index(i))
        .collect()
}

/// Number of connected components of the graph on modules `1..=vertex_count`.
pub fn component_count(vertex_count: usize, edges: &[Edge]) -> usize {
    let adj = adjacency_lists(vertex_count, edges);
    let mut seen = vec![false; vertex_count];
    let mut queue = VecDeque::new();
    let mut components = 0;
    for start in 0..vertex_count {
        if seen[start] {
            continue;
        }
        components += 1;
        seen[start] = true;
        queue.push_back(start);
        while let Some(u) = queue.pop_front() {
            for &v in &adj[u] {
                if !seen[v] {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn e(u: u32, v: u32) -> Edge {
        Edge::new(ModuleId(u), ModuleId(v))
    }

    fn ids(raw: &[u32]) -> BTreeSet<ModuleId> {
        raw.iter().map(|&r| ModuleId(r)).collect()
    }

    // ── Adjacency ───────────────────────────────────────────────

    #[test]
    fn adjacency_of_l_tromino() {
        let positions = [
            Coord3::new(4, 4, 4),
            Coord3::new(4, 5, 4),
            Coord3::new(5, 5, 4),
        ];
        assert_eq!(face_adjacency(&positions), vec![e(1, 2), e(2, 3)]);
    }

    #[test]
    fn diagonal_neighbours_are_not_adjacent() {
        let positions = [Coord3::new(0, 0, 0), Coord3::new(1, 1, 0)];
        assert!(face_adjacency(&positions).is_empty());
    }

    #[test]
    fn edge_new_orders_endpoints() {
        assert_eq!(Edge::new(ModuleId(5), ModuleId(2)), e(2, 5));
    }

    // ── Articulation points ─────────────────────────────────────

    #[test]
    fn path_has_interior_cut_vertices() {
        let edges = [e(1, 2), e(2, 3), e(3, 4)];
        assert_eq!(articulation_points(4, &edges), ids(&[2, 3]));
    }

    #[test]
    fn cycle_has_none() {
        let edges = [e(1, 2), e(2, 3), e(3, 4), e(4, 1)];
        assert!(articulation_points(4, &edges).is_empty());
    }

    #[test]
    fn star_center_is_cut() {
        let edges = [e(1, 2), e(1, 3), e(1, 4)];
        assert_eq!(articulation_points(4, &edges), ids(&[1]));
    }

    #[test]
    fn bowtie_shares_one_cut_vertex() {
        // Two squares glued at module 3.
        let edges = [
            e(1, 2),
            e(2, 3),
            e(3, 4),
            e(4, 1),
            e(3, 5),
            e(5, 6),
            e(6, 7),
            e(7, 3),
        ];
        assert_eq!(articulation_points(7, &edges), ids(&[3]));
    }

    #[test]
    fn trivial_graphs() {
        assert!(articulation_points(0, &[]).is_empty());
        assert!(articulation_points(1, &[]).is_empty());
        assert!(articulation_points(2, &[e(1, 2)]).is_empty());
    }

    #[test]
    fn disconnected_graph_is_swept_per_component() {
        // 1-2-3 and 4-5-6 as separate paths, plus isolated 7.
        let edges = [e(1, 2), e(2, 3), e(4, 5), e(5, 6)];
        assert_eq!(articulation_points(7, &edges), ids(&[2, 5]));
        assert_eq!(component_count(7, &edges), 3);
    }

    #[test]
    fn long_chain_does_not_recurse() {
        let n = 20_000u32;
        let edges: Vec<_> = (1..n).map(|i| e(i, i + 1)).collect();
        let cuts = articulation_points(n as usize, &edges);
        assert_eq!(cuts.len(), n as usize - 2);
        assert!(!cuts.contains(&ModuleId(1)));
        assert!(!cuts.contains(&ModuleId(n)));
    }

    // ── Brute-force cross-check ─────────────────────────────────

    fn brute_force(n: usize, edges: &[Edge]) -> BTreeSet<ModuleId> {
        let base = component_count(n, edges);
        (0..n)
            .map(ModuleId::from_index)
            .filter(|&m| {
                let kept: Vec<Edge> = edges
                    .iter()
                    .copied()
                    .filter(|x| x.a != m && x.b != m)
                    .collect();
                // The removed vertex stays behind as an isolated component.
                component_count(n, &kept) - 1 > base
            })
            .collect()
    }

    fn arb_graph() -> impl Strategy<Value = (usize, Vec<Edge>)> {
        (1usize..12).prop_flat_map(|n| {
            let pairs = proptest::collection::vec((1..=n as u32, 1..=n as u32), 0..(2 * n));
            (Just(n), pairs)
        })
        .prop_map(|(n, pairs)| {
            let mut edges: Vec<Edge> = pairs
                .into_iter()
                .filter(|(u, v)| u != v)
                .map(|(u, v)| e(u, v))
                .collect();
            edges.sort();
            edges.dedup();
            (n, edges)
        })
    }

    proptest! {
        #[test]
        fn matches_brute_force((n, edges) in arb_graph()) {
            prop_assert_eq!(articulation_points(n, &edges), brute_force(n, &edges));
        }
    }
}
