//! Canned response rules, one per character.
//!
//! This is intentionally not a language model. Each rule is an ordered
//! list of (keyword set, canned paragraph) branches evaluated top to
//! bottom against the lowercased message, with a trailing fallback
//! paragraph. Rules are keyed by character id in a lookup table rather
//! than a central dispatcher, so adding a character's rule means adding
//! a table entry.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::characters::Character;

/// A response rule: inspects the lowercased message and the resolved
/// team, and produces the reply text.
pub type ResponseRule = fn(message: &str, team: &[&Character]) -> String;

/// One keyword branch: the first branch whose keyword set matches wins.
type Branch = (&'static [&'static str], &'static str);

/// Response rules keyed by character id.
///
/// Characters without an entry fall back to [`generic_response`].
pub static RESPONSE_RULES: Lazy<HashMap<&'static str, ResponseRule>> = Lazy::new(|| {
    let mut rules: HashMap<&'static str, ResponseRule> = HashMap::new();
    rules.insert("dev-alex", developer_response);
    rules.insert("designer-sophia", designer_response);
    rules.insert("pm-marcus", project_manager_response);
    rules.insert("qa-elena", qa_response);
    rules.insert("analyst-david", analyst_response);
    rules.insert("devops-sara", devops_response);
    rules
});

/// Generic reply for a character without a dedicated rule.
pub fn generic_response(character: &Character) -> String {
    format!(
        "I'll help with the {} aspects of your request. Let me analyze this and provide my expertise.",
        character.role.to_lowercase()
    )
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| message.contains(k))
}

/// First matching branch wins; otherwise the fallback paragraph.
fn select(message: &str, branches: &[Branch], fallback: &str) -> String {
    branches
        .iter()
        .find(|(keywords, _)| contains_any(message, keywords))
        .map(|(_, text)| (*text).to_string())
        .unwrap_or_else(|| fallback.to_string())
}

const DEVELOPER_BRANCHES: &[Branch] = &[
    (
        &["frontend", "ui", "react"],
        "From a frontend perspective, I'd recommend using React with TypeScript for type safety. We should also consider component architecture, state management, and responsive design patterns.",
    ),
    (
        &["backend", "api", "database"],
        "For the backend implementation, I suggest using Node.js with Express or Next.js API routes. We'll need to design proper database schemas, API endpoints, and authentication flows.",
    ),
];

fn developer_response(message: &str, _team: &[&Character]) -> String {
    select(
        message,
        DEVELOPER_BRANCHES,
        "I can help architect and implement the technical solution. Let me break down the requirements and suggest the best approach using modern technologies and best practices.",
    )
}

const DESIGNER_BRANCHES: &[Branch] = &[(
    &["design", "ui", "ux"],
    "From a design perspective, I'll focus on creating an intuitive user experience. We should start with user research, create wireframes, and develop a cohesive design system.",
)];

fn designer_response(message: &str, _team: &[&Character]) -> String {
    select(
        message,
        DESIGNER_BRANCHES,
        "I'll help create a beautiful and functional user interface. Let's discuss the user journey, visual hierarchy, and how we can make this experience delightful for users.",
    )
}

/// The coordination rule interpolates the resolved team size into its
/// timeline branch.
fn project_manager_response(message: &str, team: &[&Character]) -> String {
    if contains_any(message, &["timeline", "deadline"]) {
        format!(
            "Great discussion, team! I'll create a detailed timeline with milestones. Based on our team of {} specialists, I estimate we can deliver this efficiently with proper sprint planning.",
            team.len()
        )
    } else {
        "Building on the team's expertise, I'll coordinate our efforts and ensure clear communication. Let's define success metrics and establish a workflow that maximizes our collective strengths.".to_string()
    }
}

const QA_BRANCHES: &[Branch] = &[(
    &["test", "quality"],
    "I'll develop a comprehensive testing strategy covering unit tests, integration tests, and end-to-end scenarios. We should also consider edge cases and error handling.",
)];

fn qa_response(message: &str, _team: &[&Character]) -> String {
    select(
        message,
        QA_BRANCHES,
        "I'll ensure high quality throughout development. Let me create test cases, establish QA processes, and define acceptance criteria to guarantee a reliable product.",
    )
}

const ANALYST_BRANCHES: &[Branch] = &[(
    &["business", "requirement"],
    "From a business analysis perspective, let's define clear requirements and success metrics. I'll help translate business needs into technical specifications.",
)];

fn analyst_response(message: &str, _team: &[&Character]) -> String {
    select(
        message,
        ANALYST_BRANCHES,
        "I'll provide strategic insights and ensure alignment with business objectives. Let's analyze market trends, competitive landscape, and identify opportunities for differentiation.",
    )
}

const DEVOPS_BRANCHES: &[Branch] = &[(
    &["deployment", "infrastructure"],
    "For deployment and infrastructure, I'll set up CI/CD pipelines, containerization with Docker, and cloud infrastructure. We'll ensure scalable and reliable deployments.",
)];

fn devops_response(message: &str, _team: &[&Character]) -> String {
    select(
        message,
        DEVOPS_BRANCHES,
        "I'll handle the infrastructure and deployment automation. Let's discuss scalability requirements, backup strategies, and disaster recovery planning for a robust system.",
    )
}
