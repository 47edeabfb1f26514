//! Profile gamification: levels, feedback momentum, history ordering.

use crate::constants::{ENGAGED_FEEDBACK_COUNT, POINTS_PER_LEVEL};
use crate::model::{FeedbackRecord, ReviewEntry};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Reverse;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileProgress {
    pub total_points: u32,
    pub level: u32,
    /// Points earned inside the current level, `0..POINTS_PER_LEVEL`.
    pub progress: u32,
}

impl ProfileProgress {
    #[must_use]
    pub fn from_achievements(achievements: &BTreeMap<String, u32>) -> Self {
        let total_points = achievements
            .values()
            .fold(0_u32, |acc, pts| acc.saturating_add(*pts));
        Self {
            total_points,
            level: total_points / POINTS_PER_LEVEL + 1,
            progress: total_points % POINTS_PER_LEVEL,
        }
    }

    /// Progress through the current level as a percentage.
    #[must_use]
    pub fn percent(&self) -> f64 {
        f64::from(self.progress) * 100.0 / f64::from(POINTS_PER_LEVEL)
    }
}

/// Encouragement tier picked from how much feedback the user has given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackMomentum {
    Start,
    Building,
    Strong,
}

impl FeedbackMomentum {
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::Start
        } else if count < ENGAGED_FEEDBACK_COUNT {
            Self::Building
        } else {
            Self::Strong
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Start => "profile.momentum.start",
            Self::Building => "profile.momentum.building",
            Self::Strong => "profile.momentum.strong",
        }
    }
}

/// Parse the timestamp shapes the backend emits (RFC 3339, `YYYY-MM-DD HH:MM:SS`,
/// bare dates). Naive values are taken as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// Unparseable dates sort after every dated entry.
fn newest_first_key(raw: &str) -> Reverse<Option<DateTime<Utc>>> {
    Reverse(parse_timestamp(raw))
}

#[must_use]
pub fn reviews_newest_first(reviews: &[ReviewEntry]) -> Vec<ReviewEntry> {
    let mut sorted = reviews.to_vec();
    sorted.sort_by_key(|r| newest_first_key(&r.date));
    sorted
}

#[must_use]
pub fn feedbacks_newest_first(feedbacks: &[FeedbackRecord]) -> Vec<FeedbackRecord> {
    let mut sorted = feedbacks.to_vec();
    sorted.sort_by_key(|f| newest_first_key(&f.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FeedbackKind;

    #[test]
    fn level_and_progress_from_points() {
        let achievements = BTreeMap::from([("reviews".to_string(), 140), ("likes".to_string(), 75)]);
        let p = ProfileProgress::from_achievements(&achievements);
        assert_eq!(p.total_points, 215);
        assert_eq!(p.level, 3);
        assert_eq!(p.progress, 15);
        assert!((p.percent() - 15.0).abs() < f64::EPSILON);
        assert_eq!(ProfileProgress::from_achievements(&BTreeMap::new()).level, 1);
    }

    #[test]
    fn momentum_tiers() {
        assert_eq!(FeedbackMomentum::from_count(0), FeedbackMomentum::Start);
        assert_eq!(FeedbackMomentum::from_count(4), FeedbackMomentum::Building);
        assert_eq!(FeedbackMomentum::from_count(5), FeedbackMomentum::Strong);
    }

    #[test]
    fn timestamps_in_backend_shapes() {
        assert!(parse_timestamp("2024-05-01T10:00:00Z").is_some());
        assert!(parse_timestamp("2024-05-01 10:00:00").is_some());
        assert!(parse_timestamp("2024-05-01T10:00:00.123456").is_some());
        assert!(parse_timestamp("2024-05-01").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn histories_sort_newest_first_with_undated_last() {
        let fb = |name: &str, date: &str| FeedbackRecord {
            strain_name: name.to_string(),
            feedback_type: FeedbackKind::Like,
            date: date.to_string(),
        };
        let sorted = feedbacks_newest_first(&[
            fb("old", "2023-01-01 00:00:00"),
            fb("undated", ""),
            fb("new", "2024-06-01T08:00:00Z"),
        ]);
        let names: Vec<_> = sorted.iter().map(|f| f.strain_name.as_str()).collect();
        assert_eq!(names, ["new", "old", "undated"]);
    }

    #[test]
    fn reviews_sort_by_date() {
        let review = |name: &str, date: &str| ReviewEntry {
            strain_name: name.to_string(),
            rating: 4.0,
            text: String::new(),
            date: date.to_string(),
            metrics: None,
        };
        let sorted = reviews_newest_first(&[review("a", "2024-01-01"), review("b", "2024-02-01")]);
        assert_eq!(sorted[0].strain_name, "b");
    }
}
