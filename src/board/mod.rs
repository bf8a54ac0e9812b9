mod square;

pub use square::*;
