//! Response composer — resolves characters and assembles their replies.

use serde::{Deserialize, Serialize};

use crate::characters::{self, Character};
use crate::constants::{CHARACTER_RESPONSE_BASE, MAX_MESSAGE_LENGTH, MAX_RESPONDING_CHARACTERS};
use crate::utilities::errors::ApiError;

use super::rules;

/// One character's reply to a chat message. Ephemeral; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub character_id: String,
    /// The selected canned paragraph.
    pub message: String,
    /// `round(base × multiplier)`. No balance is read or decremented.
    pub tokens_cost: u32,
    /// Ids of up to two other characters in the resolved team, in catalog
    /// order.
    pub referenced_characters: Vec<String>,
    /// Two follow-up prompts parameterized by the character's name.
    pub suggestions: Vec<String>,
}

/// Selects and assembles canned responses for a set of characters.
///
/// Stateless and side-effect free; the only knob is the responder cap.
#[derive(Debug, Clone)]
pub struct ResponseComposer {
    responder_cap: usize,
}

impl Default for ResponseComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseComposer {
    /// Composer with the default responder cap.
    pub fn new() -> Self {
        Self {
            responder_cap: MAX_RESPONDING_CHARACTERS,
        }
    }

    /// Composer with a custom responder cap. Truncation beyond the cap
    /// stays silent regardless of the cap value.
    pub fn with_responder_cap(responder_cap: usize) -> Self {
        Self { responder_cap }
    }

    /// Compose one response per responding character.
    ///
    /// Requested ids are resolved against the catalog in catalog order;
    /// only the first `responder_cap` resolved characters respond, and the
    /// rest are dropped without signal to the caller.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidRequest`] when the message is empty or too long,
    /// no ids were requested, or no requested id resolves in the catalog.
    pub fn compose(
        &self,
        message: &str,
        character_ids: &[String],
    ) -> Result<Vec<CharacterResponse>, ApiError> {
        if message.trim().is_empty() || character_ids.is_empty() {
            return Err(ApiError::invalid_request(
                "Message and character IDs are required",
            ));
        }
        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(ApiError::invalid_request(format!(
                "Message exceeds {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        let team = characters::resolve_in_catalog_order(character_ids);
        if team.is_empty() {
            return Err(ApiError::invalid_request(
                "No valid characters found for this team",
            ));
        }

        // Keyword matching is case-insensitive; lowercase once.
        let lowered = message.to_lowercase();

        let mut responses = Vec::with_capacity(self.responder_cap.min(team.len()));
        for character in team.iter().take(self.responder_cap) {
            responses.push(respond(&character.id, &lowered, &team)?);
        }

        Ok(responses)
    }
}

/// Build a single character's response.
///
/// Looks the character up again by id; an unresolvable id here aborts the
/// whole request rather than dropping one response from the batch.
fn respond(
    character_id: &str,
    lowered: &str,
    team: &[&Character],
) -> Result<CharacterResponse, ApiError> {
    let character = characters::find(character_id).ok_or_else(|| ApiError::UnknownCharacter {
        character_id: character_id.to_string(),
    })?;

    let message = match rules::RESPONSE_RULES.get(character_id) {
        Some(rule) => rule(lowered, team),
        None => rules::generic_response(character),
    };

    let tokens_cost =
        (CHARACTER_RESPONSE_BASE as f64 * character.token_cost_multiplier).round() as u32;

    // Referenced characters come from the full resolved team, not the
    // capped responding set.
    let referenced_characters = team
        .iter()
        .filter(|c| c.id != character.id)
        .take(2)
        .map(|c| c.id.clone())
        .collect();

    let suggestions = vec![
        format!("Ask {} for more details", character.name),
        "Request implementation guidance".to_string(),
    ];

    Ok(CharacterResponse {
        character_id: character.id.clone(),
        message,
        tokens_cost,
        referenced_characters,
        suggestions,
    })
}
