use rustc_hash::FxHashMap;

use super::max_edge_count;

/// Draws distinct unordered pairs of vertices uniformly at random without
/// replacement.
///
/// This is a partial Fisher-Yates shuffle of the pair indices where only the
/// swapped positions are remembered in a sparse map (Batagelj and Brandes,
/// Efficient Generation of Large Random Networks, 2005). Memory grows with the
/// number of draws, not with the number of pairs.
pub(super) struct PairSampler {
    total: usize,
    drawn: usize,
    swapped: FxHashMap<usize, usize>,
}

impl PairSampler {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            total: max_edge_count(vertex_count),
            drawn: 0,
            swapped: FxHashMap::default(),
        }
    }

    /// Returns `None` once every pair was drawn.
    pub fn draw(&mut self, rng: &mut fastrand::Rng) -> Option<(usize, usize)> {
        if self.drawn == self.total {
            return None;
        }

        let cur = self.drawn;
        let picked = rng.usize(cur..self.total);

        let index = self.swapped.get(&picked).copied().unwrap_or(picked);
        let displaced = self.swapped.remove(&cur).unwrap_or(cur);
        if picked != cur {
            self.swapped.insert(picked, displaced);
        }

        self.drawn += 1;
        Some(pair_at(index))
    }
}

/// Inverse of the enumeration (0, 1), (0, 2), (1, 2), (0, 3), (1, 3), ...
/// where pair `(u, v)` with `u < v` has index `v (v - 1) / 2 + u`.
fn pair_at(index: usize) -> (usize, usize) {
    // Float estimate of the row, corrected for rounding.
    let mut v = ((1.0 + (1.0 + 8.0 * index as f64).sqrt()) / 2.0) as usize;
    while v * (v - 1) / 2 > index {
        v -= 1;
    }
    while (v + 1) * v / 2 <= index {
        v += 1;
    }

    (index - v * (v - 1) / 2, v)
}
