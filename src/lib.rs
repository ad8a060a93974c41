//! # TeamAI Chat — core service
//!
//! Backend core for the TeamAI collaborative AI team chat application:
//! a static character catalog, a canned-response composer, an in-memory
//! team registry, and the HTTP endpoints that expose them.
//!
//! There is no language model behind the composer — responses are
//! selected from fixed templates by keyword matching (see [`chat::rules`])
//! — and no persistence behind the registry: teams live for the process
//! and are lost on restart.

pub mod characters;
pub mod chat;
pub mod constants;
pub mod plans;
pub mod server;
pub mod teams;
pub mod types;
pub mod utilities;

pub use characters::Character;
pub use chat::{CharacterResponse, ResponseComposer};
pub use teams::{NewTeam, Team, TeamRegistry};
pub use types::api::ApiResponse;
pub use utilities::errors::ApiError;

/// Application version reported by the health endpoint.
pub const VERSION: &str = "1.0.0";
