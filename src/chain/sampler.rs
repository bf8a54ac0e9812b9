use super::DoublesRule;
use super::Transitions;
use crate::Count;
use crate::Probability;
use crate::board::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Moves between history snapshots.
pub const SNAPSHOT_INTERVAL: Count = 100;

/// Cumulative landing tallies, one per square.
///
/// Indexed by board position; squares never landed on stay at zero,
/// which is what makes the exported table gap-free. Copyable so a
/// snapshot is just a copy of the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landings([Count; SIZE]);

impl Default for Landings {
    fn default() -> Self {
        Self::new()
    }
}

impl Landings {
    pub const fn new() -> Self {
        Self([0; SIZE])
    }
    pub const fn count(&self, square: Square) -> Count {
        self.0[square.index()]
    }
    pub fn total(&self) -> Count {
        self.0.iter().sum()
    }
    /// Tallies in board order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Count)> {
        Square::all().zip(self.0)
    }
    fn increment(&mut self, square: Square) {
        self.0[square.index()] += 1;
    }
}

/// One random walk over the transition matrix.
///
/// Owns all of its state, including the RNG, so independent runs are
/// independent values: same seed, same walk, every time. Starts on GO
/// with zeroed counters and an empty history.
#[derive(Debug, Clone)]
pub struct Simulation {
    transitions: Transitions,
    rng: SmallRng,
    position: Square,
    landings: Landings,
    moves: Count,
    history: Vec<Landings>,
}

impl Simulation {
    pub fn new(transitions: Transitions, seed: u64) -> Self {
        Self {
            transitions,
            rng: SmallRng::seed_from_u64(seed),
            position: GO,
            landings: Landings::new(),
            moves: 0,
            history: Vec::new(),
        }
    }
    /// Take one turn: draw the next square from the current row,
    /// tally the landing, and snapshot the tallies every
    /// [`SNAPSHOT_INTERVAL`] moves.
    ///
    /// The row is re-normalized by its sum before the draw, absorbing
    /// both floating-point drift and the legacy rule's excess jail
    /// mass. A row that does not sum to a positive finite number is a
    /// precondition violation and panics rather than sampling NaN.
    pub fn advance(&mut self) {
        let row = *self.transitions.row(self.position);
        let total = row.iter().sum::<Probability>();
        assert!(
            total.is_finite() && total > 0.,
            "transition row from {} sums to {}",
            self.position,
            total,
        );
        self.position = self.choose(&row, total);
        self.landings.increment(self.position);
        self.moves += 1;
        if self.moves % SNAPSHOT_INTERVAL == 0 {
            self.history.push(self.landings);
        }
    }
    /// Run `n` sequential turns.
    pub fn run(&mut self, n: Count) {
        for _ in 0..n {
            self.advance();
        }
    }
    /// Categorical draw by cumulative-distribution scan over a single
    /// uniform variate. Dividing the draw point instead of every entry
    /// normalizes the row implicitly.
    fn choose(&mut self, row: &[Probability; SIZE], total: Probability) -> Square {
        let draw = self.rng.random::<Probability>() * total;
        let mut cumulative = 0.;
        for (index, &mass) in row.iter().enumerate() {
            cumulative += mass;
            if draw < cumulative {
                return Square::from(index);
            }
        }
        // unreachable short of rounding residue at draw ~= total
        row.iter()
            .rposition(|&mass| mass > 0.)
            .map(Square::from)
            .expect("positive row total")
    }
    pub fn position(&self) -> Square {
        self.position
    }
    pub fn moves(&self) -> Count {
        self.moves
    }
    pub fn landings(&self) -> &Landings {
        &self.landings
    }
    /// Snapshots taken so far, oldest first.
    pub fn history(&self) -> &[Landings] {
        &self.history
    }
    pub fn rule(&self) -> DoublesRule {
        self.transitions.rule()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulation(seed: u64) -> Simulation {
        Simulation::new(Transitions::new(DoublesRule::Corrected), seed)
    }

    #[test]
    fn empty_tallies() {
        let landings = Landings::default();
        assert!(landings == Landings::new());
        assert!(landings.total() == 0);
        assert!(Square::all().all(|square| landings.count(square) == 0));
    }

    #[test]
    fn tallies_match_move_count() {
        let mut sim = simulation(0);
        sim.run(1234);
        assert!(sim.moves() == 1234);
        assert!(sim.landings().total() == 1234);
    }

    #[test]
    fn snapshot_cadence() {
        let mut sim = simulation(1);
        sim.run(3600);
        assert!(sim.history().len() == 36);
        sim.run(99);
        assert!(sim.history().len() == 36);
        sim.advance();
        assert!(sim.history().len() == 37);
    }

    #[test]
    fn same_seed_same_walk() {
        let mut a = simulation(2026);
        let mut b = simulation(2026);
        a.run(3600);
        b.run(3600);
        assert!(a.landings() == b.landings());
        assert!(a.history() == b.history());
        assert!(a.position() == b.position());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = simulation(1);
        let mut b = simulation(2);
        a.run(3600);
        b.run(3600);
        assert!(a.landings() != b.landings());
    }

    #[test]
    fn snapshots_are_non_decreasing() {
        let mut sim = simulation(3);
        sim.run(1000);
        for pair in sim.history().windows(2) {
            for square in Square::all() {
                assert!(pair[0].count(square) <= pair[1].count(square));
            }
        }
    }

    #[test]
    fn snapshots_accumulate_interval_moves() {
        let mut sim = simulation(4);
        sim.run(500);
        for (index, snapshot) in sim.history().iter().enumerate() {
            assert!(snapshot.total() == (index as Count + 1) * SNAPSHOT_INTERVAL);
        }
    }

    #[test]
    fn legacy_rule_still_walks() {
        let mut sim = Simulation::new(Transitions::new(DoublesRule::Legacy), 5);
        sim.run(360);
        assert!(sim.landings().total() == 360);
        assert!(sim.rule() == DoublesRule::Legacy);
    }

    #[test]
    fn never_lands_on_go_to_jail() {
        let mut sim = simulation(6);
        sim.run(3600);
        assert!(sim.landings().count(GO_TO_JAIL) == 0);
    }
}
