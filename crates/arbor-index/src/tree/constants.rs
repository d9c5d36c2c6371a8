//! Constants shared by the B+ tree implementation.

/// Default branching factor: maximum number of children per internal node.
pub const DEFAULT_ORDER: usize = 128;

/// Smallest supported branching factor.
///
/// Below this, a split cannot leave both halves with at least
/// `(ORDER - 1) / 2` keys and the rebalancing rules stop making sense.
pub const MIN_ORDER: usize = 4;

/// Expected upper bound on tree height.
///
/// With a branching factor of at least [`MIN_ORDER`], sixteen levels cover
/// far more keys than fit in memory; used as a capacity hint for descent
/// paths.
pub const MAX_HEIGHT_HINT: usize = 16;
