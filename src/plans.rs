//! Subscription plan catalog.
//!
//! Static pricing data surfaced by the dashboard. Nothing in this core
//! enforces plan limits or meters token usage; the catalog is read-only
//! display data, same as the character catalog.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Subscription tier identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Standard,
    Pro,
    Enterprise,
}

/// A subscription plan as shown on the pricing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: SubscriptionTier,
    pub name: String,
    pub monthly_price: u32,
    pub tokens_included: u32,
    /// `-1` means unlimited.
    pub max_teams: i32,
    pub max_characters_per_team: u32,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_popular: Option<bool>,
}

/// The three subscription plans, in ascending price order.
pub static SUBSCRIPTION_PLANS: Lazy<Vec<SubscriptionPlan>> = Lazy::new(|| {
    vec![
        SubscriptionPlan {
            id: SubscriptionTier::Standard,
            name: "Standard".to_string(),
            monthly_price: 29,
            tokens_included: 10_000,
            max_teams: 3,
            max_characters_per_team: 3,
            features: vec![
                "Access to 6 AI Characters".to_string(),
                "10,000 tokens/month".to_string(),
                "Up to 3 teams".to_string(),
                "Basic chat history".to_string(),
                "Email support".to_string(),
            ],
            is_popular: None,
        },
        SubscriptionPlan {
            id: SubscriptionTier::Pro,
            name: "Pro".to_string(),
            monthly_price: 79,
            tokens_included: 50_000,
            max_teams: 10,
            max_characters_per_team: 5,
            features: vec![
                "Access to all AI Characters".to_string(),
                "50,000 tokens/month".to_string(),
                "Up to 10 teams".to_string(),
                "Extended chat history".to_string(),
                "Team collaboration tools".to_string(),
                "Priority support".to_string(),
                "Usage analytics".to_string(),
            ],
            is_popular: Some(true),
        },
        SubscriptionPlan {
            id: SubscriptionTier::Enterprise,
            name: "Enterprise".to_string(),
            monthly_price: 199,
            tokens_included: 200_000,
            max_teams: -1,
            max_characters_per_team: 6,
            features: vec![
                "Access to all AI Characters".to_string(),
                "200,000 tokens/month".to_string(),
                "Unlimited teams".to_string(),
                "Full chat history & export".to_string(),
                "Advanced team management".to_string(),
                "Custom integrations".to_string(),
                "24/7 priority support".to_string(),
                "Advanced analytics".to_string(),
                "Custom AI characters (coming soon)".to_string(),
            ],
            is_popular: None,
        },
    ]
});

/// All plans in ascending price order.
pub fn all() -> &'static [SubscriptionPlan] {
    &SUBSCRIPTION_PLANS
}
