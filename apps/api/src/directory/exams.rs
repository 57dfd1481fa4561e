use chrono::{DateTime, Duration, Utc};

use crate::models::directory::ExamRow;

pub const UPCOMING_WINDOW_DAYS: i64 = 180;

/// Exams whose date falls between `now` and `now + 180 days`, inclusive.
/// Input order is kept.
pub fn upcoming_exams(exams: &[ExamRow], now: DateTime<Utc>) -> Vec<ExamRow> {
    let horizon = now + Duration::days(UPCOMING_WINDOW_DAYS);
    exams
        .iter()
        .filter(|e| e.exam_date.is_some_and(|d| d >= now && d <= horizon))
        .cloned()
        .collect()
}
