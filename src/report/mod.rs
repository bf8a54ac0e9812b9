mod summary;
mod table;

pub use summary::*;
pub use table::*;
