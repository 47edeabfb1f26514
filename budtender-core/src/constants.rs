//! Product constants shared by every client surface.

use std::time::Duration;

/// Default backend origin when no `BUDTENDER_API_URL` is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

/// Self-reported minimum age required to pass the age gate.
pub const MINIMUM_AGE: i32 = 21;

/// Where a visitor who fails the age gate is sent.
pub const DENIED_EXIT_URL: &str = "https://www.google.com";

/// Minimum accepted password length, counted in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

/// User-triggered retries allowed on the recommendations screen.
pub const MAX_MANUAL_RETRIES: u32 = 3;

/// Points needed to advance one profile level.
pub const POINTS_PER_LEVEL: u32 = 100;

/// Feedback count at which the profile encouragement copy switches tiers.
pub const ENGAGED_FEEDBACK_COUNT: usize = 5;

/// Attempts made by the strain-list loader before giving up.
pub const STRAIN_LIST_MAX_ATTEMPTS: u32 = 5;

/// First backoff delay of the strain-list loader.
pub const STRAIN_LIST_BASE_DELAY: Duration = Duration::from_millis(500);

/// Upper bound for any single backoff delay.
pub const STRAIN_LIST_MAX_DELAY: Duration = Duration::from_secs(8);

/// Review metric bounds (potency, taste, aroma, value).
pub const METRIC_MIN: u8 = 1;
pub const METRIC_MAX: u8 = 10;
pub const METRIC_DEFAULT: u8 = 5;

/// Highest star rating a review can carry.
pub const RATING_MAX: f32 = 5.0;

/// Storage keys for the persisted slice of the session.
pub const STORAGE_USER_ID: &str = "budtender.user_id";
pub const STORAGE_AGE_VERIFIED: &str = "budtender.age_verified";
pub const STORAGE_AUTH_TOKEN: &str = "budtender.auth_token";

/// Banner copy used when the backend gives no detail.
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";
pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";
pub const PROFILE_FAILED: &str = "Failed to fetch user profile. Please log in again.";
pub const EMAIL_TAKEN: &str = "This email is already registered";
