//! In-memory team registry.
//!
//! Teams are created, appended, and never mutated or deleted afterwards;
//! the registry lives for the process and is lost on restart. It is an
//! explicit store owned by the caller — the HTTP layer holds one in
//! `AppState` — so tests construct a fresh registry per case instead of
//! sharing module state.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::characters::{self, Character};
use crate::constants::{
    DEFAULT_USER_ID, MAX_TEAM_DESCRIPTION_LENGTH, MAX_TEAM_NAME_LENGTH, MAX_TEAM_SIZE,
};
use crate::utilities::errors::ApiError;

/// A team of AI characters owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Generated at creation; unique for the process lifetime.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Resolved character records, embedded at creation time.
    pub characters: Vec<Character>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    /// Always true at creation; no transition exists that clears it.
    pub is_active: bool,
    /// Starts at 0; nothing in this core increments it.
    pub total_interactions: u64,
}

/// Parameters for [`TeamRegistry::create`]. Doubles as the body of
/// `POST /api/teams`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub character_ids: Vec<String>,
    /// Defaults to `user-1` when absent.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// The in-memory collection of created teams.
#[derive(Debug, Default)]
pub struct TeamRegistry {
    teams: Vec<Team>,
    /// Millisecond stamp of the last issued id; guards uniqueness when
    /// two teams are created within the same millisecond.
    last_id_millis: i64,
}

impl TeamRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the two demo teams shown to first-time
    /// users of the dashboard.
    pub fn with_demo_teams() -> Self {
        let mut registry = Self::new();
        let catalog = characters::all();
        let now = Utc::now();
        registry.teams.push(Team {
            id: "team-1".to_string(),
            name: "Web Development Team".to_string(),
            description: "Full-stack web application development".to_string(),
            characters: catalog[..3].to_vec(),
            user_id: DEFAULT_USER_ID.to_string(),
            created_at: now - Duration::days(30),
            is_active: true,
            total_interactions: 342,
        });
        registry.teams.push(Team {
            id: "team-2".to_string(),
            name: "Mobile App Team".to_string(),
            description: "Cross-platform mobile development".to_string(),
            characters: catalog[1..5].to_vec(),
            user_id: DEFAULT_USER_ID.to_string(),
            created_at: now - Duration::days(15),
            is_active: true,
            total_interactions: 189,
        });
        registry
    }

    /// All teams owned by `user_id`, in insertion order. No pagination,
    /// no `is_active` filtering.
    pub fn list_by_owner(&self, user_id: &str) -> Vec<Team> {
        self.teams
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Number of teams in the registry.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// True when no teams have been created or seeded.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Create a team and append it to the registry.
    ///
    /// All validation happens before any mutation: on error the registry
    /// is unchanged.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] when required fields are missing, limits
    /// are exceeded, or any requested character id is unknown.
    pub fn create(&mut self, request: NewTeam) -> Result<Team, ApiError> {
        let name = request.name.trim();
        if name.is_empty() || request.character_ids.is_empty() {
            return Err(ApiError::validation("Team name and characters are required"));
        }
        if name.chars().count() > MAX_TEAM_NAME_LENGTH {
            return Err(ApiError::validation(format!(
                "Team name exceeds {} characters",
                MAX_TEAM_NAME_LENGTH
            )));
        }
        let description = request.description.trim();
        if description.chars().count() > MAX_TEAM_DESCRIPTION_LENGTH {
            return Err(ApiError::validation(format!(
                "Team description exceeds {} characters",
                MAX_TEAM_DESCRIPTION_LENGTH
            )));
        }
        if request.character_ids.len() > MAX_TEAM_SIZE {
            return Err(ApiError::validation(format!(
                "Maximum {} characters allowed per team",
                MAX_TEAM_SIZE
            )));
        }

        // De-duplicate before resolving so duplicate ids cannot skew the
        // resolved-count comparison below.
        let mut unique_ids: Vec<&String> = Vec::with_capacity(request.character_ids.len());
        for id in &request.character_ids {
            if !unique_ids.contains(&id) {
                unique_ids.push(id);
            }
        }

        let unique_ids: Vec<String> = unique_ids.into_iter().cloned().collect();
        let selected = characters::resolve_in_catalog_order(&unique_ids);
        if selected.len() != unique_ids.len() {
            return Err(ApiError::validation("Invalid character IDs provided"));
        }

        let team = Team {
            id: self.next_id(),
            name: name.to_string(),
            description: description.to_string(),
            characters: selected.into_iter().cloned().collect(),
            user_id: request
                .user_id
                .unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
            created_at: Utc::now(),
            is_active: true,
            total_interactions: 0,
        };
        self.teams.push(team.clone());
        Ok(team)
    }

    /// Timestamp-based team id, unique for the life of the process even
    /// when two teams are created within the same millisecond.
    fn next_id(&mut self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        if millis <= self.last_id_millis {
            millis = self.last_id_millis + 1;
        }
        self.last_id_millis = millis;
        format!("team-{}", millis)
    }
}
