//! Application limits and token accounting constants.
//!
//! Token costs are abstract usage-accounting units; nothing in this core
//! meters or persists them.

/// Base token cost for a single character response, before the
/// per-character multiplier is applied.
pub const CHARACTER_RESPONSE_BASE: u32 = 25;

/// Maximum number of characters responding to a single chat message.
/// Characters beyond the cap are silently dropped.
pub const MAX_RESPONDING_CHARACTERS: usize = 3;

/// Maximum length of a chat message, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Maximum length of a team name after trimming.
pub const MAX_TEAM_NAME_LENGTH: usize = 50;

/// Maximum length of a team description after trimming.
pub const MAX_TEAM_DESCRIPTION_LENGTH: usize = 200;

/// Maximum number of characters on a team.
pub const MAX_TEAM_SIZE: usize = 5;

/// Owner id assumed when a request does not carry one.
pub const DEFAULT_USER_ID: &str = "user-1";
