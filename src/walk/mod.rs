//! Random-walk stepping and loop erasure
//!
//! A walk records every visited vertex, repeats included. [`random_step`]
//! advances it by one uniformly chosen neighbor; [`loop_erase`] reduces a
//! finished walk to the simple path Wilson's algorithm commits to the
//! tree. The RNG is always an explicit parameter so that runs can be
//! seeded deterministically and proceed independently of each other.

mod erase;

pub use erase::loop_erase;

use rand::Rng;

use crate::{GridGraph, MazeError, Vertex};

/// One step of the random walk: a neighbor of `from`, chosen uniformly
/// at random from the 2, 3, or 4 grid-adjacent cells.
pub fn random_step<R: Rng>(
    grid: &GridGraph,
    from: Vertex,
    rng: &mut R,
) -> Result<Vertex, MazeError> {
    let neighbors = grid.neighbors(from)?;
    if neighbors.is_empty() {
        // Only the 1×1 grid has an isolated vertex; no walk starts there.
        return Err(MazeError::MalformedWalkInput(
            "cannot step from a vertex with no neighbors",
        ));
    }
    Ok(neighbors[rng.gen_range(0..neighbors.len())])
}
