//! Wire types exchanged with the recommendation backend.
//!
//! Field names follow the backend's snake_case JSON. Everything except the
//! identifiers is defaulted so partially populated profiles still decode.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type UserId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: UserId,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body returned by `/login/` and `/onboarding/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: UserSummary,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExperienceLevel {
    Novice,
    Intermediate,
    Experienced,
}

impl ExperienceLevel {
    pub const ALL: [Self; 3] = [Self::Novice, Self::Intermediate, Self::Experienced];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Experienced => "Experienced",
        }
    }

    /// Case-insensitive parse; the backend stores normalized casing.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<String> for ExperienceLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown experience level `{value}`"))
    }
}

impl From<ExperienceLevel> for String {
    fn from(value: ExperienceLevel) -> Self {
        value.label().to_string()
    }
}

/// Survey answers as stored on the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub desired_effects: Vec<String>,
    #[serde(default, deserialize_with = "lenient_level")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub familiar_strains: Vec<String>,
    #[serde(default)]
    pub terpenes: Vec<String>,
    #[serde(default)]
    pub may_relieve: Vec<String>,
}

fn lenient_level<'de, D>(deserializer: D) -> Result<Option<ExperienceLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ExperienceLevel::parse))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewMetrics {
    pub potency: u8,
    pub taste: u8,
    pub aroma: u8,
    pub value: u8,
}

/// A review as echoed back inside the profile aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewEntry {
    #[serde(rename = "Strain_Name", alias = "strain_name")]
    pub strain_name: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub metrics: Option<ReviewMetrics>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Achievement,
    Review,
    Badge,
    Recommendation,
    Like,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    pub const KNOWN: [Self; 5] = [
        Self::Achievement,
        Self::Review,
        Self::Badge,
        Self::Recommendation,
        Self::Like,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Achievement => "achievement",
            Self::Review => "review",
            Self::Badge => "badge",
            Self::Recommendation => "recommendation",
            Self::Like => "like",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type", default = "other_kind")]
    pub kind: NotificationKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, alias = "strainId")]
    pub strain_id: Option<String>,
}

const fn other_kind() -> NotificationKind {
    NotificationKind::Other
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Server-owned profile aggregate, cached client side as a read-only snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub achievements: BTreeMap<String, u32>,
    #[serde(default)]
    pub reviews: Vec<ReviewEntry>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default)]
    pub survey_completed: bool,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl UserProfile {
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
            preferences: Preferences::default(),
            badges: Vec::new(),
            achievements: BTreeMap::new(),
            reviews: Vec::new(),
            notifications: Vec::new(),
            favorites: Vec::new(),
            survey_completed: false,
            last_login: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyRequest {
    pub user_id: UserId,
    pub desired_effects: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub familiar_strains: Vec<String>,
    pub terpenes: Vec<String>,
    pub may_relieve: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    #[serde(rename = "type", default)]
    pub strain_type: String,
    #[serde(default)]
    pub effects: Vec<String>,
    #[serde(default)]
    pub terpenes: Vec<String>,
    #[serde(default)]
    pub may_relieve: Vec<String>,
    #[serde(default)]
    pub similarity_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrainDetails {
    pub name: String,
    #[serde(rename = "type", default)]
    pub strain_type: String,
    #[serde(default)]
    pub effects: Vec<String>,
    #[serde(default)]
    pub terpenes: Vec<String>,
    #[serde(default)]
    pub may_relieve: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Like,
    Dislike,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub strain_name: String,
    pub feedback_type: FeedbackKind,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrainTally {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub user_id: UserId,
    pub strain_name: String,
    pub rating: f32,
    pub text: String,
    pub metrics: ReviewMetrics,
    pub effects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub score: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeFrame {
    #[default]
    AllTime,
    Monthly,
    Weekly,
}

impl TimeFrame {
    pub const ALL: [Self; 3] = [Self::AllTime, Self::Monthly, Self::Weekly];

    /// Value of the `timeFrame` query parameter.
    #[must_use]
    pub const fn query(self) -> &'static str {
        match self {
            Self::AllTime => "all",
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_decodes_backend_shape() {
        let raw = r#"{
            "user_id": 7,
            "email": "a@b.co",
            "preferences": {"desired_effects": ["relaxed"], "experience_level": "novice"},
            "badges": ["First Review"],
            "achievements": {"reviews": 40, "feedback": 75},
            "reviews": [{"Strain_Name": "blue dream", "rating": 4.5, "text": "", "date": "2024-01-02 10:00:00"}],
            "notifications": [],
            "favorites": ["og kush"],
            "survey_completed": true,
            "strain_feedback": {}
        }"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert_eq!(profile.user_id, 7);
        assert_eq!(
            profile.preferences.experience_level,
            Some(ExperienceLevel::Novice)
        );
        assert_eq!(profile.reviews[0].strain_name, "blue dream");
        assert!(profile.survey_completed);
    }

    #[test]
    fn empty_preferences_object_decodes() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"user_id": 3, "preferences": {}}"#).unwrap();
        assert_eq!(profile.preferences, Preferences::default());
        assert!(!profile.survey_completed);
    }

    #[test]
    fn notification_accepts_numeric_ids_and_unknown_kinds() {
        let raw = r#"[
            {"id": 12, "type": "badge", "title": "t", "message": "m", "timestamp": "2024-05-01T10:00:00Z", "read": false},
            {"id": "n-2", "type": "mystery", "strainId": "gelato"}
        ]"#;
        let items: Vec<Notification> = serde_json::from_str(raw).unwrap();
        assert_eq!(items[0].id, "12");
        assert_eq!(items[0].kind, NotificationKind::Badge);
        assert_eq!(items[1].kind, NotificationKind::Other);
        assert_eq!(items[1].strain_id.as_deref(), Some("gelato"));
    }

    #[test]
    fn survey_request_serializes_level_label() {
        let req = SurveyRequest {
            user_id: 1,
            desired_effects: vec!["Happy".into()],
            experience_level: ExperienceLevel::Intermediate,
            familiar_strains: Vec::new(),
            terpenes: Vec::new(),
            may_relieve: Vec::new(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["experience_level"], "Intermediate");
    }

    #[test]
    fn recommendation_reads_type_field() {
        let rec: Recommendation = serde_json::from_str(
            r#"{"name":"gelato","type":"Hybrid","effects":["happy"],"terpenes":["limonene"],"similarity_score":0.91}"#,
        )
        .unwrap();
        assert_eq!(rec.strain_type, "Hybrid");
        assert_eq!(rec.similarity_score, Some(0.91));
    }
}
