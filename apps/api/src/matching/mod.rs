// Resume-to-opportunity matching.
// Pipeline: document text -> profile extraction -> per-opportunity eligibility
// scoring -> ranking -> improvement suggestions. Everything below `handlers`
// is pure and synchronous.

pub mod analyzer;
pub mod document;
pub mod eligibility;
pub mod handlers;
pub mod profile;
pub mod ranking;
pub mod skills;
pub mod suggestions;
