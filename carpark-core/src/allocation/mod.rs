//! Physical capacity: spots and the levels that own them.

pub mod level;
pub mod spot;

pub use level::{Level, LevelStatus};
pub use spot::{Spot, SpotSnapshot, SpotStatus};
