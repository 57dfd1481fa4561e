// Directory: careers, colleges, scholarships and exams, plus the rule-based
// helpers built on them (eligibility checker, scholarship matcher, stream simulator).

pub mod eligibility;
pub mod exams;
pub mod handlers;
pub mod scholarships;
pub mod simulation;
pub mod store;

/// Blank query parameters mean "no filter".
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
