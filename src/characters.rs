//! Static character catalog.
//!
//! The six AI characters are compiled into the binary and fixed for the
//! life of the process: there is no create, update, or delete path. The
//! catalog is the leaf dependency of both the response composer and the
//! team registry.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A predefined AI character profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Unique identifier, stable for the process lifetime.
    pub id: String,
    /// Display name, used in response suggestions.
    pub name: String,
    /// Job title; also the fallback response topic for characters without
    /// a dedicated response rule.
    pub role: String,
    pub specialization: Vec<String>,
    pub description: String,
    pub personality: String,
    /// Multiplier applied to the base response cost for this character.
    pub token_cost_multiplier: f64,
    /// Theme color for the chat interface. Cosmetic only.
    pub color: String,
    /// Carried as catalog data; no listing or composition path filters
    /// on it today.
    pub is_active: bool,
}

fn character(
    id: &str,
    name: &str,
    role: &str,
    specialization: &[&str],
    description: &str,
    personality: &str,
    token_cost_multiplier: f64,
    color: &str,
) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        specialization: specialization.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        personality: personality.to_string(),
        token_cost_multiplier,
        color: color.to_string(),
        is_active: true,
    }
}

/// The predefined AI characters, in catalog order.
///
/// Catalog order is load-bearing: the composer resolves requested ids in
/// this order and caps the responding set from the front of it.
pub static AI_CHARACTERS: Lazy<Vec<Character>> = Lazy::new(|| {
    vec![
        character(
            "dev-alex",
            "Alex",
            "Senior Full-Stack Developer",
            &[
                "Frontend Development",
                "Backend APIs",
                "Database Design",
                "DevOps",
            ],
            "Expert in React, Node.js, and cloud architecture. Loves clean code and scalable solutions.",
            "Analytical, detail-oriented, and always suggests best practices.",
            1.2,
            "#3B82F6",
        ),
        character(
            "designer-sophia",
            "Sophia",
            "UX/UI Designer",
            &[
                "User Experience",
                "Interface Design",
                "Prototyping",
                "Design Systems",
            ],
            "Creative designer focused on user-centered design and beautiful interfaces.",
            "Creative, empathetic, and always thinks about the user experience first.",
            1.0,
            "#EC4899",
        ),
        character(
            "pm-marcus",
            "Marcus",
            "Project Manager",
            &[
                "Project Planning",
                "Team Coordination",
                "Risk Management",
                "Agile Methodologies",
            ],
            "Experienced PM who keeps projects on track and teams aligned.",
            "Organized, communicative, and focused on delivering results on time.",
            0.8,
            "#10B981",
        ),
        character(
            "qa-elena",
            "Elena",
            "QA Engineer",
            &[
                "Test Strategy",
                "Automation",
                "Performance Testing",
                "Quality Assurance",
            ],
            "Meticulous QA engineer who ensures high-quality deliverables.",
            "Detail-oriented, methodical, and always thinks about edge cases.",
            0.9,
            "#F59E0B",
        ),
        character(
            "analyst-david",
            "David",
            "Business Analyst",
            &[
                "Requirements Analysis",
                "Process Optimization",
                "Data Analysis",
                "Business Strategy",
            ],
            "Strategic thinker who bridges business needs with technical solutions.",
            "Analytical, strategic, and always considers the bigger picture.",
            0.9,
            "#8B5CF6",
        ),
        character(
            "devops-sara",
            "Sara",
            "DevOps Engineer",
            &["CI/CD", "Cloud Infrastructure", "Monitoring", "Security"],
            "Infrastructure expert who ensures reliable and scalable deployments.",
            "Systematic, reliable, and focused on automation and efficiency.",
            1.1,
            "#EF4444",
        ),
    ]
});

/// All characters in catalog order.
pub fn all() -> &'static [Character] {
    &AI_CHARACTERS
}

/// Look up a character by id.
pub fn find(id: &str) -> Option<&'static Character> {
    AI_CHARACTERS.iter().find(|c| c.id == id)
}

/// Filter the catalog to characters whose id appears in `ids`, preserving
/// catalog order (not request order). Unknown ids are ignored.
pub fn resolve_in_catalog_order(ids: &[String]) -> Vec<&'static Character> {
    AI_CHARACTERS
        .iter()
        .filter(|c| ids.iter().any(|id| id == &c.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_has_six_characters() {
        assert_eq!(all().len(), 6);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = all().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_catalog_multipliers_are_positive() {
        for c in all() {
            assert!(
                c.token_cost_multiplier > 0.0,
                "character '{}' has non-positive multiplier",
                c.id
            );
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        let alex = find("dev-alex").expect("dev-alex should exist");
        assert_eq!(alex.role, "Senior Full-Stack Developer");
        assert!(find("nonexistent").is_none());
    }

    #[test]
    fn test_resolve_preserves_catalog_order() {
        // Request order is reversed; resolution order must not be.
        let ids = vec!["pm-marcus".to_string(), "dev-alex".to_string()];
        let resolved = resolve_in_catalog_order(&ids);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].id, "dev-alex");
        assert_eq!(resolved[1].id, "pm-marcus");
    }

    #[test]
    fn test_resolve_drops_unknown_ids() {
        let ids = vec!["ghost".to_string(), "qa-elena".to_string()];
        let resolved = resolve_in_catalog_order(&ids);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, "qa-elena");
    }

    #[test]
    fn test_character_serializes_camel_case() {
        let json = serde_json::to_value(find("dev-alex").unwrap()).unwrap();
        assert_eq!(json["tokenCostMultiplier"], 1.2);
        assert_eq!(json["isActive"], true);
        assert!(json.get("token_cost_multiplier").is_none());
    }
}
