// Match domain module
// Contains the match aggregate root and its status value object

pub mod fixture;
pub mod value_objects;

pub use fixture::{Match, MatchChanges};
pub use value_objects::MatchStatus;
