//! Web layer for the fare service.
//!
//! Provides the HTTP endpoints for stop search, fare calculation,
//! journey planning and crowd prediction.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
