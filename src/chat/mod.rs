//! Response composition — the "AI" behind character replies.
//!
//! There is no model call anywhere in this module. The pipeline per
//! request:
//!
//! ```text
//! User message + requested character ids
//!   → Resolve ids against the catalog (catalog order)
//!   → Cap the responding set (first 3 by default, silently)
//!   → Per responder: keyword-match the message against that
//!     character's rule, fall back to a generic paragraph
//!   → Attach token cost, cross-references, and suggestions
//! ```

pub mod composer;
pub mod rules;

pub use composer::{CharacterResponse, ResponseComposer};
