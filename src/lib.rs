pub mod board;
pub mod chain;
pub mod report;

/// Transition masses and occupancy frequencies.
pub type Probability = f64;
/// Cumulative landing tallies.
pub type Count = u64;

/// Absolute tolerance for row-sum invariant checks.
pub const TOLERANCE: Probability = 1e-9;
