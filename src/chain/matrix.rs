use super::Rolls;
use crate::Probability;
use crate::TOLERANCE;
use crate::board::*;
use std::fmt::Display;
use std::fmt::Formatter;

/// Per-roll jail mass the original model accumulated for three
/// consecutive doubles: (1/12)^3, added once per roll value.
const LEGACY_DOUBLES: Probability = 1. / 1728.;
/// Probability of rolling three consecutive doubles in one turn:
/// (1/6)^3, applied once per origin under the corrected rule.
const TRIPLE_DOUBLES: Probability = 1. / 216.;

/// How the three-consecutive-doubles jail rule enters the matrix.
///
/// The source model added `(1/12)^3` to the Jail column inside the
/// roll loop, i.e. eleven times per origin, leaving rows summing to
/// `1 + 11/1728` and relying on the sampler's normalization to wash
/// it out. `Legacy` reproduces that accumulation bit for bit;
/// `Corrected` treats the three-doubles event once with probability
/// `1/216` and scales the dice mass by the complement, so every row
/// is a true probability distribution.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum DoublesRule {
    Legacy,
    #[default]
    Corrected,
}

impl Display for DoublesRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DoublesRule::Legacy => write!(f, "legacy"),
            DoublesRule::Corrected => write!(f, "corrected"),
        }
    }
}

/// Card-draw relocations for a raw dice destination.
///
/// Returns `(target, fraction)` pairs splitting one unit of roll mass
/// across the squares a player can actually end the turn on:
///
/// - Go To Jail routes everything to Jail
/// - Community Chest: 14/16 stay, 1/16 GO, 1/16 Jail (two movement
///   cards out of a 16-card deck)
/// - Chance: 6/16 stay; 1/16 each to GO, Trafalgar Square, Mayfair,
///   Pall Mall, Kings Cross, Jail, and three squares back; 2/16 to
///   the next station; 1/16 to the next utility
/// - anything else keeps the full unit
///
/// Fractions always sum to exactly 1.
pub fn outcomes(landing: Square) -> Vec<(Square, Probability)> {
    match landing.category() {
        Category::GoToJail => vec![(JAIL, 1.)],
        Category::CommunityChest => vec![
            (landing, 14. / 16.),
            (GO, 1. / 16.),
            (JAIL, 1. / 16.),
        ],
        Category::Chance => vec![
            (landing, 6. / 16.),
            (GO, 1. / 16.),
            (Square::from(24), 1. / 16.), // Trafalgar Square
            (Square::from(39), 1. / 16.), // Mayfair
            (Square::from(11), 1. / 16.), // Pall Mall
            (Square::from(5), 1. / 16.),  // Kings Cross
            (JAIL, 1. / 16.),
            (landing.behind(3), 1. / 16.),
            (landing.next_station(), 2. / 16.),
            (landing.next_utility(), 1. / 16.),
        ],
        _ => vec![(landing, 1.)],
    }
}

/// The 40x40 one-turn transition matrix.
///
/// Row `i` holds the mass of ending a turn on each square, starting
/// from square `i`: dice rolls, card draws, Go-To-Jail, and the
/// doubles rule, accumulated additively. Immutable after
/// construction; the sampler re-normalizes rows defensively, which
/// under [`DoublesRule::Legacy`] is what absorbs the excess jail
/// mass.
#[derive(Debug, Clone, PartialEq)]
pub struct Transitions {
    rows: Box<[[Probability; SIZE]; SIZE]>,
    rule: DoublesRule,
}

impl From<DoublesRule> for Transitions {
    fn from(rule: DoublesRule) -> Self {
        Transitions::new(rule)
    }
}

impl Transitions {
    /// Build and validate the matrix. Panics before any simulation
    /// can run if an invariant is broken.
    pub fn new(rule: DoublesRule) -> Self {
        let rolls = Rolls::new();
        let mut rows = Box::new([[0.; SIZE]; SIZE]);
        for origin in Square::all() {
            let ref mut row = rows[origin.index()];
            let scale = match rule {
                // Go To Jail is transient; no turn starts there, and
                // the source model skipped its doubles mass too.
                _ if origin.is_go_to_jail() => 1.,
                DoublesRule::Legacy => 1.,
                DoublesRule::Corrected => 1. - TRIPLE_DOUBLES,
            };
            if let DoublesRule::Corrected = rule {
                if !origin.is_go_to_jail() {
                    row[JAIL.index()] += TRIPLE_DOUBLES;
                }
            }
            for roll in rolls.support() {
                if let DoublesRule::Legacy = rule {
                    if !origin.is_go_to_jail() {
                        row[JAIL.index()] += LEGACY_DOUBLES;
                    }
                }
                let mass = rolls.density(roll) * scale;
                for (target, fraction) in outcomes(origin.ahead(roll)) {
                    row[target.index()] += mass * fraction;
                }
            }
        }
        let transitions = Self { rows, rule };
        transitions.validate();
        transitions
    }
    /// Outgoing mass distribution for one origin square.
    pub fn row(&self, origin: Square) -> &[Probability; SIZE] {
        &self.rows[origin.index()]
    }
    pub fn rule(&self) -> DoublesRule {
        self.rule
    }
    /// What a well-formed row must sum to, given the doubles rule.
    pub fn expected_total(&self, origin: Square) -> Probability {
        match self.rule {
            _ if origin.is_go_to_jail() => 1.,
            DoublesRule::Corrected => 1.,
            DoublesRule::Legacy => 1. + 11. * LEGACY_DOUBLES,
        }
    }
    /// Construction-time invariant: finite non-negative entries and
    /// the documented row total, within tolerance.
    fn validate(&self) {
        for origin in Square::all() {
            let mut total = 0.;
            for &mass in self.row(origin) {
                assert!(
                    mass.is_finite() && mass >= 0.,
                    "malformed transition mass {} from {}",
                    mass,
                    origin,
                );
                total += mass;
            }
            let expected = self.expected_total(origin);
            assert!(
                (total - expected).abs() < TOLERANCE,
                "row from {} sums to {} (expected {})",
                origin,
                total,
                expected,
            );
        }
    }
}
