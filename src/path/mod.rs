//! Unique tree-path search
//!
//! Depth-first search over a spanning tree's edge set, restricted at
//! each vertex to the grid neighbors joined to it by a tree edge. The
//! search uses an explicit stack and a visited table instead of
//! recursion: tree paths can approach N² vertices, deep enough to
//! overflow the call stack on large grids.

use crate::wilson::EdgeSet;
use crate::{GridGraph, MazeError, Vertex};

/// The unique path from `start` to `end` through the edges of a
/// spanning tree.
///
/// `start == end` yields `[start]`. Out-of-grid endpoints fail with
/// [`MazeError::VertexOutOfBounds`]. If the search exhausts every
/// reachable vertex without meeting `end`, the edge set was not a
/// spanning tree and the call fails with
/// [`MazeError::BrokenTreeInvariant`] — that is a construction bug
/// surfacing, never a normal "no path" outcome.
pub fn find_path(
    grid: &GridGraph,
    edges: &EdgeSet,
    start: Vertex,
    end: Vertex,
) -> Result<Vec<Vertex>, MazeError> {
    grid.index_of(start)?;
    grid.index_of(end)?;
    if start == end {
        return Ok(vec![start]);
    }

    // predecessor[i] = linear index we first reached i from. Marking a
    // vertex visited the moment it is discovered doubles as the
    // used-edge guard: in a tree the only edge ever re-offered is the
    // one back to the predecessor.
    let mut predecessor: Vec<Option<usize>> = vec![None; grid.vertex_count()];
    let mut visited = vec![false; grid.vertex_count()];
    visited[grid.offset(start)] = true;

    let mut stack = vec![start];
    let end_index = grid.offset(end);

    'search: while let Some(v) = stack.pop() {
        let v_index = grid.offset(v);
        for n in grid.neighbors(v)? {
            let n_index = grid.offset(n);
            if visited[n_index] || !edges.contains(v, n) {
                continue;
            }
            visited[n_index] = true;
            predecessor[n_index] = Some(v_index);
            if n_index == end_index {
                break 'search;
            }
            stack.push(n);
        }
    }

    if !visited[end_index] {
        return Err(MazeError::BrokenTreeInvariant { start, end });
    }

    let mut path = vec![end];
    let mut cursor = end_index;
    while let Some(prev) = predecessor[cursor] {
        path.push(grid.vertex_of(prev)?);
        cursor = prev;
    }
    path.reverse();
    Ok(path)
}
