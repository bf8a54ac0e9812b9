use std::fmt::Display;
use std::fmt::Formatter;

/// Number of squares on the board.
pub const SIZE: usize = 40;

/// Starting square, and the destination of Advance-to-GO cards.
pub const GO: Square = Square(0);
/// Where Go-To-Jail, three doubles, and the jail cards all send you.
pub const JAIL: Square = Square(10);
/// Landing here always relocates to [`JAIL`].
pub const GO_TO_JAIL: Square = Square(30);

/// The three Community Chest squares.
pub const COMMUNITY_CHEST: [Square; 3] = [Square(2), Square(17), Square(33)];
/// The three Chance squares.
pub const CHANCE: [Square; 3] = [Square(7), Square(22), Square(36)];
/// Kings Cross, Marylebone, Fenchurch Street, Liverpool Street.
pub const STATIONS: [Square; 4] = [Square(5), Square(15), Square(25), Square(35)];
/// Electric Company, Water Works.
pub const UTILITIES: [Square; 2] = [Square(12), Square(28)];

/// UK-edition square names, in board order.
const NAMES: [&str; SIZE] = [
    "GO",
    "Old Kent Road",
    "Community Chest 1",
    "Whitechapel Road",
    "Income Tax",
    "Kings Cross Station",
    "The Angel Islington",
    "Chance 1",
    "Euston Road",
    "Pentonville Road",
    "Jail",
    "Pall Mall",
    "Electric Company",
    "Whitehall",
    "Northumberland Avenue",
    "Marylebone Station",
    "Bow Street",
    "Community Chest 2",
    "Marlborough Street",
    "Vine Street",
    "Free Parking",
    "Strand",
    "Chance 2",
    "Fleet Street",
    "Trafalgar Square",
    "Fenchurch St Station",
    "Leicester Square",
    "Coventry Street",
    "Water Works",
    "Piccadilly",
    "Go To Jail",
    "Regent Street",
    "Oxford Street",
    "Community Chest 3",
    "Bond Street",
    "Liverpool St Station",
    "Chance 3",
    "Park Lane",
    "Super Tax",
    "Mayfair",
];

/// What a square does to you when you land on it.
///
/// Only [`Category::GoToJail`], [`Category::CommunityChest`], and
/// [`Category::Chance`] affect movement; the rest exist for taxonomy
/// and reporting. Money effects are out of scope.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Go,
    Jail,
    GoToJail,
    CommunityChest,
    Chance,
    Station,
    Utility,
    Plain,
}

/// A position on the board, 0..40 going clockwise from GO.
///
/// All index arithmetic wraps mod 40, so `Square::from(i + roll)` is
/// always a valid position. Ordering follows board order, which makes
/// the "strictly after" station/utility searches read naturally.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Square(usize);

impl Square {
    /// Board index, 0..40.
    pub const fn index(&self) -> usize {
        self.0
    }
    /// The printed name of this square.
    pub const fn name(&self) -> &'static str {
        NAMES[self.0]
    }
    /// All 40 squares in board order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..SIZE).map(Square::from)
    }
    /// The square `offset` steps clockwise, wrapping past Mayfair.
    pub const fn ahead(&self, offset: usize) -> Square {
        Square((self.0 + offset) % SIZE)
    }
    /// The square `offset` steps counterclockwise, wrapping past GO.
    pub const fn behind(&self, offset: usize) -> Square {
        Square((self.0 + SIZE - offset % SIZE) % SIZE)
    }
    pub fn category(&self) -> Category {
        match self.0 {
            0 => Category::Go,
            10 => Category::Jail,
            30 => Category::GoToJail,
            2 | 17 | 33 => Category::CommunityChest,
            7 | 22 | 36 => Category::Chance,
            5 | 15 | 25 | 35 => Category::Station,
            12 | 28 => Category::Utility,
            _ => Category::Plain,
        }
    }
    pub fn is_community_chest(&self) -> bool {
        matches!(self.category(), Category::CommunityChest)
    }
    pub fn is_chance(&self) -> bool {
        matches!(self.category(), Category::Chance)
    }
    pub fn is_go_to_jail(&self) -> bool {
        matches!(self.category(), Category::GoToJail)
    }
    /// Nearest station at a strictly greater index, wrapping to Kings
    /// Cross when none remain. The wrap direction is a fixed tie-break.
    pub fn next_station(&self) -> Square {
        STATIONS
            .into_iter()
            .find(|station| station.0 > self.0)
            .unwrap_or(STATIONS[0])
    }
    /// Nearest utility at a strictly greater index, wrapping to the
    /// Electric Company when none remain.
    pub fn next_utility(&self) -> Square {
        UTILITIES
            .into_iter()
            .find(|utility| utility.0 > self.0)
            .unwrap_or(UTILITIES[0])
    }
}

/// usize isomorphism, wrapping mod 40
impl From<usize> for Square {
    fn from(index: usize) -> Square {
        Square(index % SIZE)
    }
}
impl From<Square> for usize {
    fn from(square: Square) -> usize {
        square.0
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_usize() {
        let square = Square::from(24);
        assert!(square == Square::from(usize::from(square)));
    }

    #[test]
    fn wrapping_arithmetic() {
        assert!(Square::from(38).ahead(12) == Square::from(10));
        assert!(Square::from(7).behind(3) == Square::from(4));
        assert!(Square::from(1).behind(3) == Square::from(38));
    }

    #[test]
    fn station_search_wraps() {
        assert!(Square::from(7).next_station() == Square::from(15));
        assert!(Square::from(22).next_station() == Square::from(25));
        assert!(Square::from(36).next_station() == Square::from(5));
        assert!(Square::from(35).next_station() == Square::from(5));
    }

    #[test]
    fn utility_search_wraps() {
        assert!(Square::from(7).next_utility() == Square::from(12));
        assert!(Square::from(22).next_utility() == Square::from(28));
        assert!(Square::from(36).next_utility() == Square::from(12));
    }

    #[test]
    fn taxonomy() {
        assert!(COMMUNITY_CHEST.iter().all(Square::is_community_chest));
        assert!(CHANCE.iter().all(Square::is_chance));
        assert!(GO_TO_JAIL.is_go_to_jail());
        assert!(JAIL.category() == Category::Jail);
        assert!(Square::all().count() == SIZE);
    }

    #[test]
    fn names_are_unique() {
        let mut names = Square::all().map(|s| s.name()).collect::<Vec<_>>();
        names.sort();
        names.dedup();
        assert!(names.len() == SIZE);
    }
}
