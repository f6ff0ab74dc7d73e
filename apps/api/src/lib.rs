//! LigaManager API Library
//!
//! Sports league management: leagues, teams, fixtures and standings,
//! served over HTTP with PostgreSQL or in-memory persistence.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
