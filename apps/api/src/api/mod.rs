// HTTP adapter: routing, extractors, handlers and error mapping

pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;
