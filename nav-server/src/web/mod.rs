//! Web layer for the trip summary server.
//!
//! Serves the trip form and summarises trips as JSON or an HTML card.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
