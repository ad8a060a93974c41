//! HTTP server exposing the TeamAI core over JSON.
//!
//! # Endpoints
//!
//! - `GET  /health`         — Liveness probe
//! - `POST /api/chat`       — Compose character responses
//! - `GET  /api/teams`      — List teams for a user
//! - `POST /api/teams`      — Create a team
//! - `GET  /api/characters` — Character catalog
//! - `GET  /api/plans`      — Subscription plan catalog

pub mod routes;

pub use routes::{app_router, AppState};
