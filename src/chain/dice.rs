use crate::Probability;

/// Smallest two-dice sum.
pub const MIN_ROLL: usize = 2;
/// Largest two-dice sum.
pub const MAX_ROLL: usize = 12;

/// Roll-sum distribution for two independent fair d6.
///
/// P(sum = s) = count(d1 + d2 = s) / 36, at fixed 1/36 granularity.
/// Derived once and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rolls([Probability; MAX_ROLL + 1]);

impl Rolls {
    pub fn new() -> Self {
        let mut counts = [0usize; MAX_ROLL + 1];
        for die1 in 1..=6 {
            for die2 in 1..=6 {
                counts[die1 + die2] += 1;
            }
        }
        let mut masses = [0.; MAX_ROLL + 1];
        for sum in MIN_ROLL..=MAX_ROLL {
            masses[sum] = counts[sum] as Probability / 36.;
        }
        Self(masses)
    }
    /// Probability mass at a given roll sum. Zero outside 2..=12.
    pub fn density(&self, sum: usize) -> Probability {
        self.0.get(sum).copied().unwrap_or(0.)
    }
    /// All achievable roll sums.
    pub fn support(&self) -> impl Iterator<Item = usize> {
        MIN_ROLL..=MAX_ROLL
    }
}

impl Default for Rolls {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_is_most_likely() {
        let rolls = Rolls::new();
        assert!(rolls.density(7) == 6. / 36.);
        assert!(rolls.support().all(|s| rolls.density(s) <= rolls.density(7)));
    }

    #[test]
    fn masses_sum_to_one() {
        let rolls = Rolls::new();
        let total = rolls.support().map(|s| rolls.density(s)).sum::<Probability>();
        assert!((total - 1.).abs() < crate::TOLERANCE);
    }

    #[test]
    fn impossible_sums_are_zero() {
        let rolls = Rolls::new();
        assert!(rolls.density(0) == 0.);
        assert!(rolls.density(1) == 0.);
        assert!(rolls.density(13) == 0.);
    }

    #[test]
    fn symmetric_about_seven() {
        let rolls = Rolls::new();
        for sum in MIN_ROLL..=MAX_ROLL {
            assert!(rolls.density(sum) == rolls.density(14 - sum));
        }
    }
}
