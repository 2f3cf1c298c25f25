pub mod locale;
pub mod puzzle;

pub use locale::Locale;
pub use puzzle::{Direction, Grid, Placement, Position, Puzzle};
