// League domain module
// Contains the league aggregate root and its value objects

#![allow(clippy::module_inception)]

pub mod league;
pub mod value_objects;

pub use league::{League, LeagueChanges};
pub use value_objects::{LeagueStatus, SportType};
