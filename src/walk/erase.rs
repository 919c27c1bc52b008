//! Loop erasure
//!
//! Collapses the earliest-formed cycle of a walk, repeatedly, until no
//! vertex repeats. Implemented iteratively with a position table indexed
//! by linear vertex index: one pass over the walk, near-linear in walk
//! length. Walk length on an N×N grid is unbounded in the worst case, so
//! neither recursion nor nested scans are acceptable here.

use crate::{GridGraph, MazeError, Vertex};

/// Reduce a walk-with-repeats to its loop-erased simple path.
///
/// The output keeps the walk's first and last vertices, contains no
/// duplicates, and is a fixed point of `loop_erase` itself. Fails with
/// [`MazeError::MalformedWalkInput`] on an empty walk, a vertex outside
/// the grid, or consecutive vertices that are not grid-adjacent.
pub fn loop_erase(grid: &GridGraph, walk: &[Vertex]) -> Result<Vec<Vertex>, MazeError> {
    if walk.is_empty() {
        return Err(MazeError::MalformedWalkInput("walk is empty"));
    }

    // position[i] = where the vertex with linear index i currently sits
    // in the erased path, if it is present at all.
    let mut position: Vec<Option<usize>> = vec![None; grid.vertex_count()];
    let mut path: Vec<Vertex> = Vec::with_capacity(walk.len().min(grid.vertex_count()));
    let mut prev: Option<Vertex> = None;

    for &v in walk {
        if !grid.contains(v) {
            return Err(MazeError::MalformedWalkInput(
                "walk contains a vertex outside the grid",
            ));
        }
        if let Some(p) = prev {
            if !grid.adjacent(p, v) {
                return Err(MazeError::MalformedWalkInput(
                    "consecutive walk vertices are not grid-adjacent",
                ));
            }
        }
        prev = Some(v);

        let index = grid.offset(v);
        match position[index] {
            Some(keep) => {
                // The walk closed a cycle at `v`: drop everything the
                // cycle added and resume from v's earlier occurrence.
                for dropped in path.drain(keep + 1..) {
                    position[grid.offset(dropped)] = None;
                }
            }
            None => {
                position[index] = Some(path.len());
                path.push(v);
            }
        }
    }

    Ok(path)
}
