//! Wilson's algorithm: uniform spanning trees from loop-erased walks
//!
//! The builder grows a tree from a single seed vertex. Each iteration
//! picks the lowest-indexed vertex not yet in the tree, random-walks
//! from it until the walk touches the tree, loop-erases the walk, and
//! commits the resulting simple path. The finished tree is distributed
//! uniformly over all spanning trees of the grid, regardless of the
//! order in which start vertices are chosen.
//!
//! Construction is pull-based: [`WilsonBuilder::advance`] performs
//! exactly one walk step (folding in the erase-and-commit cycle on the
//! step that reaches the tree) and reports what happened, so an
//! external driver such as an animation loop can pace the algorithm
//! without the core ever knowing about frames. [`WilsonBuilder::run`]
//! drives the same interface to completion in a loop.

mod tree;

pub use tree::{Edge, EdgeSet, SpanningTree};

use bitvec::prelude::*;
use rand::Rng;
use tracing::debug;

use crate::walk::{loop_erase, random_step};
use crate::{GridGraph, MazeError, Vertex};

/// What a single [`WilsonBuilder::advance`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// The current walk moved one step without reaching the tree.
    Stepped {
        /// Vertex the walk stood on.
        from: Vertex,
        /// Vertex the walk moved to.
        to: Vertex,
    },
    /// The walk reached the tree; its loop-erased path was committed.
    Committed {
        /// The committed simple path. Its last vertex was already in
        /// the tree, all earlier ones are newly added.
        path: Vec<Vertex>,
        /// Tree size after the commit.
        tree_vertices: usize,
    },
}

/// Incremental Wilson's-algorithm builder.
///
/// The vertex and edge sets are private until construction finishes:
/// at every point they form a tree over the vertices added so far, and
/// nothing outside the builder can perturb that invariant. Abandoning
/// a builder mid-run needs no cleanup; it holds only in-memory sets.
#[derive(Debug)]
pub struct WilsonBuilder<R: Rng> {
    grid: GridGraph,
    rng: R,
    /// Tree membership by linear vertex index.
    in_tree: BitVec,
    edges: EdgeSet,
    tree_vertices: usize,
    /// Scan cursor for the next start vertex; monotone because
    /// vertices never leave the tree.
    scan_from: usize,
    /// Current walk trajectory, repeats included. Empty between
    /// iterations and after completion.
    trajectory: Vec<Vertex>,
    iterations: usize,
}

impl<R: Rng> WilsonBuilder<R> {
    /// Start a build over `grid`, seeding the tree with the vertex at
    /// linear index 0.
    pub fn new(grid: GridGraph, rng: R) -> Self {
        let mut in_tree = bitvec![0; grid.vertex_count()];
        in_tree.set(0, true);
        Self {
            grid,
            rng,
            in_tree,
            edges: EdgeSet::with_capacity(grid.vertex_count().saturating_sub(1)),
            tree_vertices: 1,
            scan_from: 0,
            trajectory: Vec::new(),
            iterations: 0,
        }
    }

    /// Whether the tree spans every grid vertex.
    pub fn is_complete(&self) -> bool {
        self.tree_vertices == self.grid.vertex_count()
    }

    /// Number of vertices in the tree so far.
    pub fn tree_vertices(&self) -> usize {
        self.tree_vertices
    }

    /// Edges committed so far; always `tree_vertices() - 1`.
    pub fn tree_edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// The in-flight walk trajectory, for incremental consumers that
    /// want to draw it. Empty between iterations.
    pub fn current_walk(&self) -> &[Vertex] {
        &self.trajectory
    }

    /// Advance by exactly one random-walk step.
    ///
    /// When the step lands on a tree vertex, the trajectory is
    /// loop-erased and committed in the same call. Returns `None` once
    /// the tree spans the grid; the sequence of `Some` results is
    /// finite with probability 1 and non-restartable. Stopping early
    /// is always safe.
    pub fn advance(&mut self) -> Result<Option<Progress>, MazeError> {
        if self.trajectory.is_empty() {
            match self.next_start() {
                Some(start) => self.trajectory.push(start),
                None => return Ok(None),
            }
        }
        let current = match self.trajectory.last() {
            Some(&v) => v,
            None => return Ok(None),
        };

        let next = random_step(&self.grid, current, &mut self.rng)?;
        self.trajectory.push(next);

        if !self.in_tree[self.grid.offset(next)] {
            return Ok(Some(Progress::Stepped { from: current, to: next }));
        }

        let walk_steps = self.trajectory.len() - 1;
        let path = loop_erase(&self.grid, &self.trajectory)?;
        self.commit(&path);
        self.trajectory.clear();
        self.iterations += 1;
        debug!(
            iteration = self.iterations,
            walk_steps,
            path_len = path.len(),
            tree_vertices = self.tree_vertices,
            "committed loop-erased walk"
        );

        Ok(Some(Progress::Committed {
            path,
            tree_vertices: self.tree_vertices,
        }))
    }

    /// Drive construction to completion and hand off the tree.
    pub fn run(mut self) -> Result<SpanningTree, MazeError> {
        while self.advance()?.is_some() {}
        debug_assert_eq!(self.edges.len() + 1, self.tree_vertices);
        Ok(SpanningTree::new(self.grid, self.edges))
    }

    /// Lowest-indexed vertex not yet in the tree, in ascending
    /// row-major order (fixed so equal seeds reproduce equal trees).
    fn next_start(&mut self) -> Option<Vertex> {
        while self.scan_from < self.grid.vertex_count() {
            if !self.in_tree[self.scan_from] {
                let size = self.grid.size();
                return Some(Vertex::new(self.scan_from / size, self.scan_from % size));
            }
            self.scan_from += 1;
        }
        None
    }

    /// Add the loop-erased path to the tree: every vertex but the last
    /// is new, and each consecutive pair becomes an edge.
    fn commit(&mut self, path: &[Vertex]) {
        for pair in path.windows(2) {
            let index = self.grid.offset(pair[0]);
            debug_assert!(!self.in_tree[index], "walk continued past a tree vertex");
            self.in_tree.set(index, true);
            self.tree_vertices += 1;
            self.edges.insert(pair[0], pair[1]);
        }
    }
}
