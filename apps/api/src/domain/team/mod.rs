// Team domain module
// Contains the team aggregate root

#![allow(clippy::module_inception)]

pub mod team;

pub use team::Team;
