//! Grid-graph adjacency and coordinate/index mapping
//!
//! The maze lives on an implicit N×N grid graph: cells are vertices and
//! two cells are adjacent when they share a side. A vertex at (row, col)
//! is bijective with the linear index `row * N + col` (row-major), which
//! the rest of the crate uses for compact per-vertex tables.

use std::fmt;

use crate::MazeError;

/// Grid cell identified by (row, col), both in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    /// Row coordinate (0 at the top).
    pub row: usize,
    /// Column coordinate (0 at the left).
    pub col: usize,
}

impl Vertex {
    /// Construct a vertex from its coordinates.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Implicit N×N grid graph.
///
/// Adjacency is computed on demand rather than stored: a vertex has 2
/// neighbors at a corner, 3 along a non-corner boundary, and 4 in the
/// interior. Neighbor order is deterministic (up, down, left, right,
/// filtered to the grid) so that runs with the same RNG seed reproduce
/// the same tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGraph {
    size: usize,
}

impl GridGraph {
    /// Create an N×N grid graph.
    pub fn new(size: usize) -> Result<Self, MazeError> {
        if size < 1 {
            return Err(MazeError::InvalidGridSize(size));
        }
        Ok(Self { size })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of vertices, N².
    pub fn vertex_count(&self) -> usize {
        self.size * self.size
    }

    /// Whether the vertex lies inside the grid.
    pub fn contains(&self, v: Vertex) -> bool {
        v.row < self.size && v.col < self.size
    }

    /// Linear (row-major) index of a vertex.
    pub fn index_of(&self, v: Vertex) -> Result<usize, MazeError> {
        if !self.contains(v) {
            return Err(MazeError::VertexOutOfBounds {
                vertex: v,
                size: self.size,
            });
        }
        Ok(self.offset(v))
    }

    /// Vertex corresponding to a linear index; inverse of [`index_of`].
    ///
    /// [`index_of`]: GridGraph::index_of
    pub fn vertex_of(&self, index: usize) -> Result<Vertex, MazeError> {
        if index >= self.vertex_count() {
            return Err(MazeError::VertexOutOfBounds {
                vertex: Vertex::new(index / self.size, index % self.size),
                size: self.size,
            });
        }
        Ok(Vertex::new(index / self.size, index % self.size))
    }

    /// Linear index without the bounds check, for vertices already
    /// known to be in the grid.
    pub(crate) fn offset(&self, v: Vertex) -> usize {
        debug_assert!(self.contains(v));
        v.row * self.size + v.col
    }

    /// Grid-adjacent cells of `v`: 2 at a corner, 3 on a non-corner
    /// boundary, 4 in the interior.
    pub fn neighbors(&self, v: Vertex) -> Result<Vec<Vertex>, MazeError> {
        if !self.contains(v) {
            return Err(MazeError::VertexOutOfBounds {
                vertex: v,
                size: self.size,
            });
        }
        let mut out = Vec::with_capacity(4);
        if v.row > 0 {
            out.push(Vertex::new(v.row - 1, v.col));
        }
        if v.row + 1 < self.size {
            out.push(Vertex::new(v.row + 1, v.col));
        }
        if v.col > 0 {
            out.push(Vertex::new(v.row, v.col - 1));
        }
        if v.col + 1 < self.size {
            out.push(Vertex::new(v.row, v.col + 1));
        }
        Ok(out)
    }

    /// Whether two in-grid vertices share a side.
    pub fn adjacent(&self, a: Vertex, b: Vertex) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        let dr = a.row.abs_diff(b.row);
        let dc = a.col.abs_diff(b.col);
        dr + dc == 1
    }

    /// All vertices in ascending row-major order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        let size = self.size;
        (0..self.vertex_count()).map(move |i| Vertex::new(i / size, i % size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(GridGraph::new(0), Err(MazeError::InvalidGridSize(0)));
    }

    #[test_case(0, 0; "top left corner")]
    #[test_case(0, 4; "top right corner")]
    #[test_case(4, 0; "bottom left corner")]
    #[test_case(4, 4; "bottom right corner")]
    fn corners_have_two_neighbors(row: usize, col: usize) {
        let grid = GridGraph::new(5).unwrap();
        assert_eq!(grid.neighbors(Vertex::new(row, col)).unwrap().len(), 2);
    }

    #[test_case(0, 2; "top edge")]
    #[test_case(4, 2; "bottom edge")]
    #[test_case(2, 0; "left edge")]
    #[test_case(2, 4; "right edge")]
    fn boundary_cells_have_three_neighbors(row: usize, col: usize) {
        let grid = GridGraph::new(5).unwrap();
        assert_eq!(grid.neighbors(Vertex::new(row, col)).unwrap().len(), 3);
    }

    #[test]
    fn interior_cells_have_four_neighbors() {
        let grid = GridGraph::new(5).unwrap();
        for row in 1..4 {
            for col in 1..4 {
                assert_eq!(grid.neighbors(Vertex::new(row, col)).unwrap().len(), 4);
            }
        }
    }

    #[test]
    fn index_and_vertex_are_mutual_inverses() {
        let grid = GridGraph::new(7).unwrap();
        for index in 0..grid.vertex_count() {
            let v = grid.vertex_of(index).unwrap();
            assert_eq!(grid.index_of(v).unwrap(), index);
        }
        for v in grid.vertices() {
            let index = grid.index_of(v).unwrap();
            assert_eq!(grid.vertex_of(index).unwrap(), v);
        }
    }

    #[test]
    fn out_of_bounds_vertex_is_rejected() {
        let grid = GridGraph::new(3).unwrap();
        let outside = Vertex::new(3, 0);
        assert!(matches!(
            grid.neighbors(outside),
            Err(MazeError::VertexOutOfBounds { .. })
        ));
        assert!(matches!(
            grid.index_of(outside),
            Err(MazeError::VertexOutOfBounds { .. })
        ));
        assert!(matches!(
            grid.vertex_of(9),
            Err(MazeError::VertexOutOfBounds { .. })
        ));
    }

    #[test]
    fn neighbor_order_is_deterministic() {
        let grid = GridGraph::new(3).unwrap();
        // up, down, left, right for the center cell
        assert_eq!(
            grid.neighbors(Vertex::new(1, 1)).unwrap(),
            vec![
                Vertex::new(0, 1),
                Vertex::new(2, 1),
                Vertex::new(1, 0),
                Vertex::new(1, 2),
            ]
        );
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let grid = GridGraph::new(1).unwrap();
        assert!(grid.neighbors(Vertex::new(0, 0)).unwrap().is_empty());
    }
}
