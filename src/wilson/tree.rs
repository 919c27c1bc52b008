//! Spanning-tree output types
//!
//! [`SpanningTree`] is the immutable handoff from [`WilsonBuilder`]:
//! once construction finishes, consumers (path search, rendering) only
//! ever read it.
//!
//! [`WilsonBuilder`]: super::WilsonBuilder

use std::collections::hash_set;
use std::collections::HashSet;

use crate::{path, GridGraph, MazeError, Vertex};

/// Undirected edge between two grid-adjacent cells.
///
/// Stored normalized, smaller endpoint first in row-major order, so an
/// edge has exactly one representation no matter which direction it was
/// added from. Callers are expected to pass grid-adjacent endpoints;
/// the builder only ever produces those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    a: Vertex,
    b: Vertex,
}

impl Edge {
    /// Construct the normalized edge joining `u` and `v`.
    pub fn new(u: Vertex, v: Vertex) -> Self {
        if u <= v {
            Self { a: u, b: v }
        } else {
            Self { a: v, b: u }
        }
    }

    /// Both endpoints, smaller first in row-major order.
    pub fn endpoints(&self) -> (Vertex, Vertex) {
        (self.a, self.b)
    }
}

/// Hashed set of undirected edges.
///
/// Membership is O(1); the naive list-scan alternative is quadratic in
/// grid area and dominates everything else once grids get large.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeSet {
    edges: HashSet<Edge>,
}

impl EdgeSet {
    /// Empty edge set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty edge set sized for `capacity` edges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: HashSet::with_capacity(capacity),
        }
    }

    /// Insert the edge joining `u` and `v`; returns false if present.
    pub fn insert(&mut self, u: Vertex, v: Vertex) -> bool {
        self.edges.insert(Edge::new(u, v))
    }

    /// Whether the edge joining `u` and `v` is present, in either
    /// endpoint order.
    pub fn contains(&self, u: Vertex, v: Vertex) -> bool {
        self.edges.contains(&Edge::new(u, v))
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the set holds no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over the edges in arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, Edge> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = hash_set::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

/// A spanning tree of the grid: N² vertices, N²−1 edges, exactly one
/// simple path between any two cells.
///
/// As a maze, edges are passable corridors and non-tree adjacencies are
/// walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    grid: GridGraph,
    edges: EdgeSet,
}

impl SpanningTree {
    pub(crate) fn new(grid: GridGraph, edges: EdgeSet) -> Self {
        debug_assert_eq!(edges.len() + 1, grid.vertex_count());
        Self { grid, edges }
    }

    /// The grid this tree spans.
    pub fn grid(&self) -> &GridGraph {
        &self.grid
    }

    /// Side length N of the spanned grid.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Number of spanned vertices, N².
    pub fn vertex_count(&self) -> usize {
        self.grid.vertex_count()
    }

    /// The tree's edge set.
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Whether `u` and `v` are joined by a tree edge (a corridor).
    pub fn contains_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.edges.contains(u, v)
    }

    /// The unique tree path from `start` to `end`.
    ///
    /// See [`path::find_path`] for the failure modes.
    pub fn find_path(&self, start: Vertex, end: Vertex) -> Result<Vec<Vertex>, MazeError> {
        path::find_path(&self.grid, &self.edges, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_normalized() {
        let u = Vertex::new(1, 1);
        let v = Vertex::new(1, 2);
        assert_eq!(Edge::new(u, v), Edge::new(v, u));
        assert_eq!(Edge::new(v, u).endpoints(), (u, v));
    }

    #[test]
    fn edge_set_membership_is_order_insensitive() {
        let mut edges = EdgeSet::new();
        let u = Vertex::new(0, 0);
        let v = Vertex::new(0, 1);
        assert!(edges.insert(u, v));
        assert!(!edges.insert(v, u), "reversed duplicate should not insert");
        assert!(edges.contains(u, v));
        assert!(edges.contains(v, u));
        assert_eq!(edges.len(), 1);
    }
}
