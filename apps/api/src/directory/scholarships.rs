//! Scholarship matcher.

use crate::models::directory::ScholarshipRow;

fn contains_ignore_case(list: &[String], value: &str) -> bool {
    list.iter().any(|item| item.eq_ignore_ascii_case(value.trim()))
}

/// A scholarship open to "General" is open to every category.
/// Without a class level there is nothing to match against.
pub fn matches_profile(
    scholarship: &ScholarshipRow,
    category: Option<&str>,
    class_level: Option<&str>,
) -> bool {
    let category_ok = contains_ignore_case(&scholarship.category_eligible, "General")
        || category.is_some_and(|c| contains_ignore_case(&scholarship.category_eligible, c));

    let class_ok =
        class_level.is_some_and(|c| contains_ignore_case(&scholarship.class_eligible, c));

    scholarship.is_active && category_ok && class_ok
}

pub fn match_scholarships(
    scholarships: Vec<ScholarshipRow>,
    category: Option<&str>,
    class_level: Option<&str>,
) -> Vec<ScholarshipRow> {
    scholarships
        .into_iter()
        .filter(|s| matches_profile(s, category, class_level))
        .collect()
}
