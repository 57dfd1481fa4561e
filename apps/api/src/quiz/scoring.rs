//! Quiz scoring — maps answers onto five career categories with fixed point rules.
//!
//! Algorithm:
//! 1. Every category starts at 0.
//! 2. Each (question id, answer) adds the weights from that question's table.
//!    Unknown ids and unknown answer tokens add nothing.
//! 3. percentage = min(100, score / 50 * 100)
//! 4. Keep percentage > 20, sort descending (stable on category order), top 5.
//!
//! The denominator is a fixed estimate, not the real attainable maximum.
//! Changing it changes every result, so it stays at 50.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SCORE_DENOMINATOR: f64 = 50.0;
pub const MIN_MATCH_PERCENTAGE: f64 = 20.0;
pub const MAX_RECOMMENDATIONS: usize = 5;
/// Used when a rating answer is missing a usable 1..=5 value.
pub const NEUTRAL_RATING: u32 = 3;

/// Raw answers as submitted: question id (as a string key) to answer token.
pub type QuizAnswers = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Healthcare,
    Government,
    Education,
    Business,
}

impl Category {
    /// Fixed order; also the tie-break order for equal percentages.
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Healthcare,
        Category::Government,
        Category::Education,
        Category::Business,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Healthcare => "Healthcare",
            Category::Government => "Government",
            Category::Education => "Education",
            Category::Business => "Business",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Accumulated points per category. Only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryScoreSheet {
    scores: [u32; 5],
}

impl CategoryScoreSheet {
    pub fn add(&mut self, category: Category, points: u32) {
        self.scores[category.index()] += points;
    }

    pub fn get(&self, category: Category) -> u32 {
        self.scores[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: Category,
    /// 21 – 100
    pub match_percentage: u8,
}

use Category::{Business, Education, Government, Healthcare, Technology};

/// Per-question option weights. Questions without an entry here are asked
/// but never scored.
fn option_weights(question_id: u8, answer: &str) -> &'static [(Category, u32)] {
    match (question_id, answer) {
        // Activity preferences
        (1, "problem_solving") => &[(Technology, 3), (Business, 1)],
        (1, "helping_others") => &[(Healthcare, 3), (Education, 2)],
        (1, "creative_work") => &[(Education, 2), (Business, 1)],
        (1, "leadership") => &[(Government, 3), (Business, 3)],
        // Favourite subjects
        (2, "stem") => &[(Technology, 4)],
        (2, "bio_medical") => &[(Healthcare, 4)],
        (2, "humanities") => &[(Education, 3), (Government, 2)],
        (2, "commerce") => &[(Business, 4)],
        // Working style
        (3, "individual") => &[(Technology, 2)],
        (3, "team") => &[(Business, 2), (Technology, 1)],
        (3, "public") => &[(Government, 3), (Healthcare, 2)],
        (3, "research") => &[(Technology, 2), (Healthcare, 1)],
        // Motivation
        (4, "innovation") => &[(Technology, 3)],
        (4, "service") => &[(Healthcare, 3), (Government, 3), (Education, 3)],
        (4, "financial") => &[(Business, 3), (Technology, 2)],
        (4, "recognition") => &[(Government, 2), (Business, 2)],
        // Work environment
        (5, "tech_office") => &[(Technology, 4)],
        (5, "hospital") => &[(Healthcare, 4)],
        (5, "government") => &[(Government, 4)],
        (5, "school") => &[(Education, 4)],
        // Learning new things
        (7, "yes") => &[(Technology, 2), (Education, 2), (Healthcare, 1)],
        // Entrepreneurship
        (8, "yes") => &[(Business, 3), (Technology, 1)],
        // Challenges
        (10, "technical") => &[(Technology, 3)],
        (10, "human") => &[(Healthcare, 3), (Education, 2)],
        (10, "creative") => &[(Education, 2), (Business, 1)],
        (10, "strategic") => &[(Business, 3), (Government, 2)],
        // Organisation size
        (11, "startup") => &[(Technology, 2), (Business, 2)],
        (11, "government") => &[(Government, 3)],
        (11, "large") => &[(Business, 2)],
        // Impact
        (14, "technological") => &[(Technology, 3)],
        (14, "health") => &[(Healthcare, 4)],
        (14, "social") => &[(Government, 3), (Education, 3)],
        (14, "economic") => &[(Business, 3)],
        // Research interest
        (18, "yes") => &[(Technology, 2), (Healthcare, 2), (Education, 1)],
        _ => &[],
    }
}

/// Question 6 (technology comfort) is the only scored rating question.
const TECH_COMFORT_QUESTION: u8 = 6;

/// Normalizes a submitted value into the token the weight tables use.
fn answer_token(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("yes".to_string()),
        Value::Bool(false) => Some("no".to_string()),
        _ => None,
    }
}

/// A digits-only token in 1..=5; anything else falls back to the midpoint.
fn rating_value(token: Option<&str>) -> u32 {
    token
        .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
        .and_then(|t| t.parse::<u32>().ok())
        .filter(|v| (1..=5).contains(v))
        .unwrap_or(NEUTRAL_RATING)
}

/// Runs the accumulation pass over every answer.
pub fn accumulate(answers: &QuizAnswers) -> CategoryScoreSheet {
    let mut sheet = CategoryScoreSheet::default();

    for (raw_id, value) in answers {
        let Ok(question_id) = raw_id.trim().parse::<u8>() else {
            continue;
        };
        let token = answer_token(value);

        if question_id == TECH_COMFORT_QUESTION {
            let rating = rating_value(token.as_deref());
            sheet.add(Technology, rating);
            sheet.add(Business, rating.saturating_sub(2));
            continue;
        }

        if let Some(token) = token {
            for (category, points) in option_weights(question_id, &token) {
                sheet.add(*category, *points);
            }
        }
    }

    sheet
}

pub fn match_percentage(score: u32) -> f64 {
    (score as f64 / SCORE_DENOMINATOR * 100.0).min(100.0)
}

/// Turns a score sheet into the ranked recommendation list.
pub fn rank(sheet: &CategoryScoreSheet) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = sheet
        .iter()
        .map(|(category, score)| (category, match_percentage(score)))
        .filter(|(_, pct)| *pct > MIN_MATCH_PERCENTAGE)
        .map(|(category, pct)| Recommendation {
            category,
            match_percentage: pct.round() as u8,
        })
        .collect();

    // sort_by is stable, so ties keep Category::ALL order
    recommendations.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Scores a quiz submission. Never fails: bad input just scores nothing.
pub fn score_answers(answers: &QuizAnswers) -> Vec<Recommendation> {
    rank(&accumulate(answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answers(pairs: &[(&str, Value)]) -> QuizAnswers {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_empty_answers_score_nothing() {
        assert!(score_answers(&QuizAnswers::new()).is_empty());
    }

    #[test]
    fn test_unrecognized_answers_score_nothing() {
        let a = answers(&[
            ("1", json!("juggling")),
            ("2", json!("astrology")),
            ("5", json!("beach")),
            ("99", json!("stem")),
            ("abc", json!("stem")),
        ]);
        assert!(score_answers(&a).is_empty());
        assert_eq!(accumulate(&a), CategoryScoreSheet::default());
    }

    #[test]
    fn test_sixteen_percent_is_below_threshold() {
        // Technology = 4 + 4 = 8 → 16%
        let a = answers(&[("2", json!("stem")), ("5", json!("tech_office"))]);
        assert_eq!(accumulate(&a).get(Technology), 8);
        assert!(score_answers(&a).is_empty());
    }

    #[test]
    fn test_twenty_two_percent_is_included_alone() {
        // Technology = 4 + 4 + 3 = 11 → 22%
        let a = answers(&[
            ("2", json!("stem")),
            ("5", json!("tech_office")),
            ("1", json!("problem_solving")),
        ]);
        let recs = score_answers(&a);
        assert_eq!(
            recs,
            vec![Recommendation {
                category: Technology,
                match_percentage: 22
            }]
        );
    }

    #[test]
    fn test_exactly_twenty_percent_is_excluded() {
        // Healthcare = 4 + 4 + 2 = 10 → 20%
        let a = answers(&[
            ("2", json!("bio_medical")),
            ("5", json!("hospital")),
            ("18", json!("yes")),
        ]);
        assert_eq!(accumulate(&a).get(Healthcare), 10);
        assert!(score_answers(&a).is_empty());
    }

    #[test]
    fn test_rating_question_adds_value_and_secondary() {
        let a = answers(&[("6", json!("5"))]);
        let sheet = accumulate(&a);
        assert_eq!(sheet.get(Technology), 5);
        assert_eq!(sheet.get(Business), 3);
    }

    #[test]
    fn test_rating_accepts_json_number() {
        let sheet = accumulate(&answers(&[("6", json!(4))]));
        assert_eq!(sheet.get(Technology), 4);
        assert_eq!(sheet.get(Business), 2);
    }

    #[test]
    fn test_low_rating_never_subtracts() {
        let sheet = accumulate(&answers(&[("6", json!("1"))]));
        assert_eq!(sheet.get(Technology), 1);
        assert_eq!(sheet.get(Business), 0);
    }

    #[test]
    fn test_malformed_rating_defaults_to_midpoint() {
        for bad in [json!("very"), json!(""), json!("-2"), json!("4.5"), json!(9), json!(null)] {
            let sheet = accumulate(&answers(&[("6", bad.clone())]));
            assert_eq!(sheet.get(Technology), 3, "value {bad}");
            assert_eq!(sheet.get(Business), 1, "value {bad}");
        }
    }

    #[test]
    fn test_yes_no_accepts_booleans() {
        let from_bool = accumulate(&answers(&[("8", json!(true))]));
        let from_token = accumulate(&answers(&[("8", json!("yes"))]));
        assert_eq!(from_bool, from_token);
        assert_eq!(from_bool.get(Business), 3);

        let no = accumulate(&answers(&[("8", json!("no"))]));
        assert_eq!(no, CategoryScoreSheet::default());
    }

    #[test]
    fn test_unscored_questions_contribute_nothing() {
        let a = answers(&[
            ("9", json!("5")),
            ("12", json!("calm")),
            ("13", json!("yes")),
            ("15", json!("5")),
            ("16", json!("flexible")),
            ("17", json!("doctoral")),
            ("19", json!("5")),
            ("20", json!("practical")),
        ]);
        assert_eq!(accumulate(&a), CategoryScoreSheet::default());
    }

    #[test]
    fn test_ties_follow_category_order() {
        // leadership and recognition both split evenly between Government and Business
        let a = answers(&[("1", json!("leadership")), ("4", json!("recognition"))]);
        let sheet = accumulate(&a);
        assert_eq!(sheet.get(Government), sheet.get(Business));

        let tied = CategoryScoreSheet {
            scores: [0, 0, 15, 0, 15],
        };
        let recs = rank(&tied);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].category, Government);
        assert_eq!(recs[1].category, Business);
    }

    #[test]
    fn test_percentage_caps_at_one_hundred() {
        assert_eq!(match_percentage(80), 100.0);
        let sheet = CategoryScoreSheet {
            scores: [60, 0, 0, 0, 0],
        };
        assert_eq!(rank(&sheet)[0].match_percentage, 100);
    }

    #[test]
    fn test_full_profile_is_sorted_and_bounded() {
        let a = answers(&[
            ("1", json!("helping_others")),
            ("2", json!("bio_medical")),
            ("3", json!("public")),
            ("4", json!("service")),
            ("5", json!("hospital")),
            ("6", json!("4")),
            ("7", json!("yes")),
            ("8", json!("yes")),
            ("10", json!("human")),
            ("11", json!("government")),
            ("14", json!("health")),
            ("18", json!("yes")),
        ]);
        let recs = score_answers(&a);
        assert!(!recs.is_empty());
        assert!(recs.len() <= MAX_RECOMMENDATIONS);
        assert_eq!(recs[0].category, Healthcare);
        for pair in recs.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
        for rec in &recs {
            assert!(rec.match_percentage > 20 && rec.match_percentage <= 100);
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let a = answers(&[
            ("1", json!("leadership")),
            ("2", json!("commerce")),
            ("4", json!("financial")),
            ("6", json!("5")),
            ("8", json!("yes")),
            ("10", json!("strategic")),
        ]);
        let first = score_answers(&a);
        for _ in 0..10 {
            assert_eq!(score_answers(&a), first);
        }
    }

    #[test]
    fn test_recommendation_serializes_category_name() {
        let rec = Recommendation {
            category: Technology,
            match_percentage: 22,
        };
        assert_eq!(
            serde_json::to_value(&rec).unwrap(),
            json!({"category": "Technology", "match_percentage": 22})
        );
    }
}
