//! Turns the model's free-text answer into `{summary, points, wordCount}`.
//!
//! - first non-empty line → summary
//! - later lines that start with a bullet marker or run past 20 chars → points
//! - under 3 points → re-split the whole reply into sentences (> 20 chars)
//! - still under 3 → the fixed filler points
//! - at most 5 points

use serde::Serialize;

pub const MIN_POINTS: usize = 3;
pub const MAX_POINTS: usize = 5;
/// Lines and sentences must be longer than this to count as a point.
const MIN_POINT_CHARS: usize = 20;

const BULLET_MARKERS: &[char] = &['-', '•', '*'];

pub const FILLER_POINTS: [&str; 3] = [
    "Research the options that interest you using official websites and prospectuses",
    "Talk to teachers, counsellors and seniors who have taken this path",
    "Keep track of application deadlines and eligibility requirements",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredReply {
    pub summary: String,
    pub points: Vec<String>,
    pub word_count: usize,
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Drops leading bullet markers, list numbering ("1." / "2)") and markdown bold.
fn strip_marker(line: &str) -> String {
    let mut rest = line
        .trim()
        .trim_start_matches(|c: char| BULLET_MARKERS.contains(&c))
        .trim_start();

    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let after = &rest[digits..];
        if let Some(stripped) = after.strip_prefix('.').or_else(|| after.strip_prefix(')')) {
            rest = stripped.trim_start();
        }
    }

    rest.replace("**", "").trim().to_string()
}

fn is_bullet_like(line: &str) -> bool {
    line.starts_with(BULLET_MARKERS) || line.chars().count() > MIN_POINT_CHARS
}

fn bullet_points(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| is_bullet_like(line))
        .map(|line| strip_marker(line))
        .filter(|p| !p.is_empty())
        .collect()
}

fn sentence_points(reply: &str) -> Vec<String> {
    reply
        .split(|c: char| matches!(c, '.' | '!' | '?'))
        .map(strip_marker)
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|s| s.chars().count() > MIN_POINT_CHARS)
        .collect()
}

/// Shapes a non-empty raw reply.
pub fn shape_reply(raw: &str) -> StructuredReply {
    let lines: Vec<&str> = raw.lines().map(str::trim).filter(|l| !l.is_empty()).collect();

    let summary = lines
        .first()
        .map(|l| strip_marker(l.trim_start_matches('#')))
        .unwrap_or_default();

    let mut points = bullet_points(lines.get(1..).unwrap_or_default());

    if points.len() < MIN_POINTS {
        points = sentence_points(raw);
    }
    if points.len() < MIN_POINTS {
        points = FILLER_POINTS.iter().map(|p| p.to_string()).collect();
    }
    points.truncate(MAX_POINTS);

    StructuredReply {
        summary,
        points,
        word_count: count_words(raw),
    }
}
