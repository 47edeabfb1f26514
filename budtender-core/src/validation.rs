//! Client-side form validation.
//!
//! Every form validates locally before a request is issued; a failing form
//! never reaches the transport.

use crate::constants::{
    EMAIL_TAKEN, METRIC_DEFAULT, METRIC_MAX, METRIC_MIN, PASSWORD_MIN_LEN, RATING_MAX,
};
use crate::error::ApiError;
use crate::model::{
    ExperienceLevel, Preferences, ReviewMetrics, ReviewRequest, SurveyRequest, UserId,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password must be at least 8 characters")]
    TooShort,
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
    #[error("Password must contain at least one number")]
    MissingDigit,
    #[error("Password must contain at least one special character")]
    MissingSpecial,
}

/// Check the password rules in order and report the first failure.
///
/// # Errors
///
/// The first [`PasswordError`] the password violates.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(PasswordError::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordError::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordError::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::MissingDigit);
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        return Err(PasswordError::MissingSpecial);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Email is required")]
    Missing,
    #[error("Please enter a valid email address")]
    Malformed,
}

/// # Errors
///
/// [`EmailError::Missing`] for blank input, [`EmailError::Malformed`] when the
/// address does not look like `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Missing);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(EmailError::Malformed);
    }
    Ok(())
}

/// Inputs that can carry an inline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Map a server-side field name onto a form input.
    #[must_use]
    pub fn from_server(name: &str) -> Option<Self> {
        match name {
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "confirmPassword" | "confirm_password" => Some(Self::ConfirmPassword),
            _ => None,
        }
    }
}

/// Per-input error messages for one form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Drop the message for `field`, e.g. once the user edits it again.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Bind a signup failure to an input when the server allows it.
    ///
    /// Duplicate emails land on [`Field::Email`]; an explicit `field` in the
    /// error body lands on that input. Anything else is a banner, so `None`.
    #[must_use]
    pub fn from_signup_error(err: &ApiError) -> Option<Self> {
        let mut errors = Self::default();
        if err.is_duplicate_email() {
            errors.insert(Field::Email, EMAIL_TAKEN);
            return Some(errors);
        }
        let (name, message) = err.field_error()?;
        let field = Field::from_server(name)?;
        errors.insert(field, message);
        Some(errors)
    }
}

/// Validated email/password pair ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// # Errors
    ///
    /// Every failing input, each with its own message.
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = self.email.trim();
        if let Err(err) = validate_email(email) {
            errors.insert(Field::Email, err.to_string());
        }
        if let Err(err) = validate_password(&self.password) {
            errors.insert(Field::Password, err.to_string());
        }
        if self.password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, "Passwords don't match");
        }
        if errors.is_empty() {
            Ok(Credentials {
                email: email.to_string(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Login does not re-check password complexity; only presence.
    ///
    /// # Errors
    ///
    /// Missing or malformed email, missing password.
    pub fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = self.email.trim();
        if let Err(err) = validate_email(email) {
            errors.insert(Field::Email, err.to_string());
        }
        if self.password.is_empty() {
            errors.insert(Field::Password, "Password is required");
        }
        if errors.is_empty() {
            Ok(Credentials {
                email: email.to_string(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("Please select at least one desired effect.")]
    NoEffects,
    #[error("Please select your experience level.")]
    NoExperience,
}

/// In-progress survey answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyDraft {
    pub desired_effects: Vec<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub familiar_strains: Vec<String>,
    pub terpenes: Vec<String>,
    pub may_relieve: Vec<String>,
}

impl SurveyDraft {
    /// Seed a draft from previously stored answers so they can be edited.
    #[must_use]
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            desired_effects: prefs.desired_effects.clone(),
            experience_level: prefs.experience_level,
            familiar_strains: prefs.familiar_strains.clone(),
            terpenes: prefs.terpenes.clone(),
            may_relieve: prefs.may_relieve.clone(),
        }
    }

    /// Add `item` to `list` if absent, remove it otherwise.
    pub fn toggle(list: &mut Vec<String>, item: &str) {
        if let Some(pos) = list.iter().position(|x| x == item) {
            list.remove(pos);
        } else {
            list.push(item.to_string());
        }
    }

    /// # Errors
    ///
    /// [`SurveyError::NoEffects`] before [`SurveyError::NoExperience`].
    pub fn validate(&self, user_id: UserId) -> Result<SurveyRequest, SurveyError> {
        if self.desired_effects.is_empty() {
            return Err(SurveyError::NoEffects);
        }
        let experience_level = self.experience_level.ok_or(SurveyError::NoExperience)?;
        Ok(SurveyRequest {
            user_id,
            desired_effects: self.desired_effects.clone(),
            experience_level,
            familiar_strains: self.familiar_strains.clone(),
            terpenes: self.terpenes.clone(),
            may_relieve: self.may_relieve.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ReviewError {
    #[error("Please provide a rating before submitting.")]
    MissingRating,
    #[error("rating {0} is above the maximum")]
    RatingOutOfRange(f32),
    #[error("{metric} must be between 1 and 10 (got {value})")]
    MetricOutOfRange { metric: &'static str, value: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    /// Star rating; zero means "not rated yet".
    pub rating: f32,
    pub text: String,
    pub metrics: ReviewMetrics,
    pub effects: Vec<String>,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            rating: 0.0,
            text: String::new(),
            metrics: ReviewMetrics {
                potency: METRIC_DEFAULT,
                taste: METRIC_DEFAULT,
                aroma: METRIC_DEFAULT,
                value: METRIC_DEFAULT,
            },
            effects: Vec::new(),
        }
    }
}

impl ReviewDraft {
    /// # Errors
    ///
    /// Missing or out-of-range rating, or a metric outside its bounds.
    pub fn validate(&self, user_id: UserId, strain: &str) -> Result<ReviewRequest, ReviewError> {
        if self.rating.is_nan() || self.rating <= 0.0 {
            return Err(ReviewError::MissingRating);
        }
        if self.rating > RATING_MAX {
            return Err(ReviewError::RatingOutOfRange(self.rating));
        }
        let m = self.metrics;
        for (metric, value) in [
            ("potency", m.potency),
            ("taste", m.taste),
            ("aroma", m.aroma),
            ("value", m.value),
        ] {
            if !(METRIC_MIN..=METRIC_MAX).contains(&value) {
                return Err(ReviewError::MetricOutOfRange { metric, value });
            }
        }
        Ok(ReviewRequest {
            user_id,
            strain_name: strain.to_string(),
            rating: self.rating,
            text: self.text.trim().to_string(),
            metrics: m,
            effects: self.effects.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgeError {
    #[error("Please complete all required fields.")]
    Incomplete,
    #[error("You must be at least {minimum} years old to continue.")]
    Underage { minimum: i32 },
}

/// A self-reported age claim from the age gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeClaim {
    /// One-click "I am of legal age".
    Confirmed,
    BirthYear {
        year: Option<i32>,
        terms_accepted: bool,
    },
}

impl AgeClaim {
    /// # Errors
    ///
    /// [`AgeError::Incomplete`] when the detailed path is missing a year or the
    /// terms; [`AgeError::Underage`] when `current_year - year < minimum_age`.
    pub fn check(self, current_year: i32, minimum_age: i32) -> Result<(), AgeError> {
        match self {
            Self::Confirmed => Ok(()),
            Self::BirthYear {
                year: Some(year),
                terms_accepted: true,
            } => {
                if current_year - year < minimum_age {
                    Err(AgeError::Underage {
                        minimum: minimum_age,
                    })
                } else {
                    Ok(())
                }
            }
            Self::BirthYear { .. } => Err(AgeError::Incomplete),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern_compiles_and_splits_on_single_at() {
        assert!(EMAIL_PATTERN.is_match("ada@example.com"));
        assert!(!EMAIL_PATTERN.is_match("ada@@example.com"));
        assert!(!EMAIL_PATTERN.is_match("ada lovelace@example.com"));
        assert!(!EMAIL_PATTERN.is_match("ada@example"));
        assert_eq!(validate_email("a@b.co"), Ok(()));
        assert_eq!(validate_email("a@b"), Err(EmailError::Malformed));
    }

    #[test]
    fn password_rules_report_first_failure() {
        assert_eq!(validate_password("Ab1!"), Err(PasswordError::TooShort));
        assert_eq!(
            validate_password("abcdefg1!"),
            Err(PasswordError::MissingUppercase)
        );
        assert_eq!(
            validate_password("ABCDEFG1!"),
            Err(PasswordError::MissingLowercase)
        );
        assert_eq!(
            validate_password("Abcdefgh!"),
            Err(PasswordError::MissingDigit)
        );
        assert_eq!(
            validate_password("Abcdefg12"),
            Err(PasswordError::MissingSpecial)
        );
        assert_eq!(validate_password("Abcdef1!"), Ok(()));
    }

    #[test]
    fn password_length_counts_characters() {
        // Seven characters, the last one multi-byte.
        assert_eq!(validate_password("Ab1!xyé"), Err(PasswordError::TooShort));
        assert_eq!(validate_password("Ab1xyzé!"), Ok(()));
    }

    #[test]
    fn email_shape() {
        assert_eq!(validate_email(""), Err(EmailError::Missing));
        assert_eq!(validate_email("no-at.example"), Err(EmailError::Malformed));
        assert_eq!(validate_email("a b@c.de"), Err(EmailError::Malformed));
        assert_eq!(validate_email("a@b"), Err(EmailError::Malformed));
        assert_eq!(validate_email("a@b.co"), Ok(()));
    }

    #[test]
    fn signup_collects_every_field_error() {
        let form = SignupForm {
            email: "bad".into(),
            password: "short".into(),
            confirm_password: "other".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.get(Field::Password),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("Passwords don't match")
        );
    }

    #[test]
    fn signup_trims_email() {
        let form = SignupForm {
            email: "  a@b.co ".into(),
            password: "Abcdef1!".into(),
            confirm_password: "Abcdef1!".into(),
        };
        assert_eq!(form.validate().unwrap().email, "a@b.co");
    }

    #[test]
    fn login_requires_password_only_present() {
        let form = LoginForm {
            email: "a@b.co".into(),
            password: String::new(),
        };
        assert!(form.validate().unwrap_err().get(Field::Password).is_some());
        let form = LoginForm {
            email: "a@b.co".into(),
            password: "x".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn signup_errors_bind_to_fields() {
        let dup = ApiError::from_status(409, "{}");
        let errors = FieldErrors::from_signup_error(&dup).unwrap();
        assert_eq!(errors.get(Field::Email), Some(EMAIL_TAKEN));

        let pointed = ApiError::from_status(422, r#"{"detail":"too weak","field":"password"}"#);
        let errors = FieldErrors::from_signup_error(&pointed).unwrap();
        assert_eq!(errors.get(Field::Password), Some("too weak"));

        let generic = ApiError::from_status(500, r#"{"detail":"boom"}"#);
        assert!(FieldErrors::from_signup_error(&generic).is_none());
    }

    #[test]
    fn survey_requires_effects_then_experience() {
        let mut draft = SurveyDraft::default();
        assert_eq!(draft.validate(1), Err(SurveyError::NoEffects));
        SurveyDraft::toggle(&mut draft.desired_effects, "Relaxed");
        assert_eq!(draft.validate(1), Err(SurveyError::NoExperience));
        draft.experience_level = Some(ExperienceLevel::Novice);
        let req = draft.validate(1).unwrap();
        assert_eq!(req.desired_effects, vec!["Relaxed".to_string()]);
        SurveyDraft::toggle(&mut draft.desired_effects, "Relaxed");
        assert!(draft.desired_effects.is_empty());
    }

    #[test]
    fn survey_draft_reloads_preferences() {
        let prefs = Preferences {
            desired_effects: vec!["Happy".into()],
            experience_level: Some(ExperienceLevel::Experienced),
            terpenes: vec!["Myrcene".into()],
            ..Preferences::default()
        };
        let draft = SurveyDraft::from_preferences(&prefs);
        assert_eq!(draft.validate(2).unwrap().terpenes, vec!["Myrcene".to_string()]);
    }

    #[test]
    fn review_needs_rating_and_sane_metrics() {
        let mut draft = ReviewDraft::default();
        assert_eq!(draft.validate(1, "gelato"), Err(ReviewError::MissingRating));
        draft.rating = 4.5;
        draft.metrics.taste = 11;
        assert_eq!(
            draft.validate(1, "gelato"),
            Err(ReviewError::MetricOutOfRange {
                metric: "taste",
                value: 11
            })
        );
        draft.metrics.taste = 7;
        let req = draft.validate(1, "gelato").unwrap();
        assert_eq!(req.metrics.potency, METRIC_DEFAULT);
        assert_eq!(req.strain_name, "gelato");
    }

    #[test]
    fn age_claims() {
        assert_eq!(AgeClaim::Confirmed.check(2025, 21), Ok(()));
        let incomplete = AgeClaim::BirthYear {
            year: Some(1990),
            terms_accepted: false,
        };
        assert_eq!(incomplete.check(2025, 21), Err(AgeError::Incomplete));
        let young = AgeClaim::BirthYear {
            year: Some(2005),
            terms_accepted: true,
        };
        assert_eq!(young.check(2025, 21), Err(AgeError::Underage { minimum: 21 }));
        let adult = AgeClaim::BirthYear {
            year: Some(2004),
            terms_accepted: true,
        };
        assert_eq!(adult.check(2025, 21), Ok(()));
    }
}
