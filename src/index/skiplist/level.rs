//! Random level selection.

use rand::Rng;

use crate::common::config::{LEVEL_UP_PROBABILITY, MAX_LEVEL_COUNT};

/// Draw the number of levels for a new node.
///
/// Starts at 1 and keeps promoting while a uniform draw from `[0, 1)` falls
/// below [`LEVEL_UP_PROBABILITY`], capped at [`MAX_LEVEL_COUNT`]. Level `n`
/// is chosen with probability ≈ `p^(n-1)`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use skipindex::random_level;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let level = random_level(&mut rng);
/// assert!((1..=32).contains(&level));
/// ```
pub fn random_level<R: Rng + ?Sized>(rng: &mut R) -> usize {
    let mut level = 1;
    while level < MAX_LEVEL_COUNT && rng.gen::<f64>() < LEVEL_UP_PROBABILITY {
        level += 1;
    }
    level
}
