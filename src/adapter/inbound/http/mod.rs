//! HTTP surface: HTML pages, htmx fragments and a small JSON API.
//!
//! Page routes render errors as HTML; `/api` routes render errors as JSON.

pub mod error;
pub mod form;
pub mod handler;
pub mod render;
pub mod router;
pub mod state;

pub use error::{ApiError, PageError};
pub use router::build_router;
pub use state::AppState;
