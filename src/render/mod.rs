//! ASCII maze rendering
//!
//! Consumes a finished [`SpanningTree`] read-only: tree edges are drawn
//! as open corridors, and walls fall out by complement over the grid
//! adjacency (a shared side with no tree edge is a wall). Optionally
//! overlays the solution path and opens the outer wall at two exit
//! cells. This is output glue; nothing here feeds back into the core.

use std::collections::HashSet;

use crate::{SpanningTree, Vertex};

/// Boundary exit cells, passed through unchanged from configuration.
///
/// The core gives exit cells no special semantics; the renderer opens
/// the outer wall next to each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exits {
    /// Cell whose outer wall is opened as the way in.
    pub entry: Vertex,
    /// Cell whose outer wall is opened as the way out.
    pub exit: Vertex,
}

impl Exits {
    /// The conventional default: top-left in, bottom-right out.
    ///
    /// Sizes below 1 are invalid everywhere else in the crate; here
    /// they clamp to the single corner cell rather than underflow.
    pub fn corners(size: usize) -> Self {
        let far = size.saturating_sub(1);
        Self {
            entry: Vertex::new(0, 0),
            exit: Vertex::new(far, far),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Which outer wall to open for an exit cell. Corners resolve
/// top/bottom first; interior cells get no opening.
fn open_side(size: usize, v: Vertex) -> Option<Side> {
    if v.row == 0 {
        Some(Side::Top)
    } else if v.row == size - 1 {
        Some(Side::Bottom)
    } else if v.col == 0 {
        Some(Side::Left)
    } else if v.col == size - 1 {
        Some(Side::Right)
    } else {
        None
    }
}

/// Render the maze as ASCII art, one 3-character cell per grid cell.
///
/// `path` cells are marked with `*`; `exits` open the outer boundary.
pub fn render_ascii(
    tree: &SpanningTree,
    exits: Option<Exits>,
    path: Option<&[Vertex]>,
) -> String {
    let size = tree.size();
    let on_path: HashSet<Vertex> = path.into_iter().flatten().copied().collect();
    let is_open = |v: Vertex, side: Side| -> bool {
        exits.is_some_and(|e| {
            (e.entry == v || e.exit == v) && open_side(size, v) == Some(side)
        })
    };

    let line_len = 4 * size + 2;
    let mut out = String::with_capacity((2 * size + 1) * line_len);

    out.push('+');
    for col in 0..size {
        let top = Vertex::new(0, col);
        out.push_str(if is_open(top, Side::Top) { "   +" } else { "---+" });
    }
    out.push('\n');

    for row in 0..size {
        let left = Vertex::new(row, 0);
        out.push(if is_open(left, Side::Left) { ' ' } else { '|' });
        for col in 0..size {
            let cell = Vertex::new(row, col);
            out.push_str(if on_path.contains(&cell) { " * " } else { "   " });
            let east_open = if col + 1 < size {
                tree.contains_edge(cell, Vertex::new(row, col + 1))
            } else {
                is_open(cell, Side::Right)
            };
            out.push(if east_open { ' ' } else { '|' });
        }
        out.push('\n');

        out.push('+');
        for col in 0..size {
            let cell = Vertex::new(row, col);
            let south_open = if row + 1 < size {
                tree.contains_edge(cell, Vertex::new(row + 1, col))
            } else {
                is_open(cell, Side::Bottom)
            };
            out.push_str(if south_open { "   +" } else { "---+" });
        }
        out.push('\n');
    }

    out
}
