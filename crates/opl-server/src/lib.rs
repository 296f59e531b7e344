//! HTTP boundary for the Overdrive Progression Ledger.
//!
//! A thin axum layer over [`opl_ledger::ProgressionService`]. The contract
//! here is the game's: data-layer trouble never surfaces as a hard error —
//! responses degrade to defaults or sample data with a `mode`/`error`
//! annotation, and only caller mistakes (missing id, negative numbers) get
//! a 4xx.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use api::{HealthResponse, API_VERSION, GUEST_EMAIL, GUEST_USERNAME};
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::ProgressionServer;
pub use state::AppState;
