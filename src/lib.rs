//! # Uniform Spanning Tree Mazes via Wilson's Algorithm
//!
//! This library samples a uniform spanning tree (UST) of an N×N grid
//! graph with Wilson's algorithm and finds the unique tree path
//! between any two cells.
//!
//! ## Core Algorithm
//!
//! 1. **Seed**: the tree starts as a single vertex.
//! 2. **Loop-erased random walk**: from the lowest-indexed vertex not
//!    yet in the tree, walk uniformly at random until the walk touches
//!    the tree, then erase every cycle in the order it formed.
//! 3. **Commit**: the surviving simple path joins the tree.
//! 4. Repeat until all N² vertices are spanned: N²−1 edges, exactly
//!    one path between any two cells.
//!
//! The tree doubles as a *perfect maze*: tree edges are corridors,
//! non-tree adjacencies are walls.
//!
//! ## Usage Example
//!
//! ```
//! use wilson_maze::{generate_maze, Vertex};
//!
//! let maze = generate_maze(10, 42).expect("valid size");
//! assert_eq!(maze.edges().len(), 10 * 10 - 1);
//!
//! let path = maze
//!     .find_path(Vertex::new(0, 0), Vertex::new(9, 9))
//!     .expect("any two cells are connected");
//! assert_eq!(path[0], Vertex::new(0, 0));
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements one stage of the pipeline
pub mod grid; // grid-graph adjacency and index mapping
pub mod path; // unique tree-path search
pub mod render; // ASCII maze output
pub mod walk; // random-walk stepping and loop erasure
pub mod wilson; // Wilson's algorithm tree builder

// Re-exports for convenience
pub use grid::{GridGraph, Vertex};
pub use path::find_path;
pub use walk::{loop_erase, random_step};
pub use wilson::{Edge, EdgeSet, Progress, SpanningTree, WilsonBuilder};

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

/// Errors surfaced by maze construction and path queries.
///
/// All of these are programming-invariant failures with nothing to
/// retry: a violation aborts the operation rather than degrading into
/// a partial or cyclic structure passed off as valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Grid size below 1; the grid needs at least one cell.
    #[error("invalid grid size {0}: the grid needs at least one cell")]
    InvalidGridSize(usize),

    /// Coordinate outside `[0, N) × [0, N)`.
    #[error("vertex {vertex} lies outside the {size}×{size} grid")]
    VertexOutOfBounds {
        /// The offending vertex.
        vertex: Vertex,
        /// Side length of the grid that rejected it.
        size: usize,
    },

    /// Path search exhausted a supposed spanning tree without
    /// connecting two in-grid vertices. Fatal: the tree construction
    /// is buggy, this is never a normal "no path" outcome.
    #[error("no tree path between {start} and {end}: spanning-tree invariant is broken")]
    BrokenTreeInvariant {
        /// Search origin.
        start: Vertex,
        /// Unreached target.
        end: Vertex,
    },

    /// Loop erasure was handed an empty or otherwise invalid walk.
    #[error("malformed walk: {0}")]
    MalformedWalkInput(&'static str),
}

/// Generate a perfect maze: a uniform spanning tree of the N×N grid.
///
/// Equal `(size, seed)` pairs reproduce equal trees; different seeds
/// run independently, so parallel callers never interfere.
pub fn generate_maze(size: usize, seed: u64) -> Result<SpanningTree, MazeError> {
    let grid = GridGraph::new(size)?;
    let rng = StdRng::seed_from_u64(seed);
    WilsonBuilder::new(grid, rng).run()
}
