// HTTP handlers grouped by resource

pub mod auth;
pub mod leagues;
pub mod matches;
pub mod teams;
