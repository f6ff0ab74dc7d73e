// League domain: aggregates, admission rules and the standings table.
// Nothing here touches HTTP; persistence is reached only through traits.

pub mod admission;
pub mod league;
pub mod matches;
pub mod repositories;
pub mod standings;
pub mod team;
pub mod user;
