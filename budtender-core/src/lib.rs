//! Budtender client core
//!
//! Platform-agnostic client logic for the Budtender strain recommendation product.
//! This crate owns the session/auth model, the navigation guard, client-side
//! validation and the REST client. Rendering and browser plumbing live elsewhere;
//! the HTTP transport and persistence are injected through [`Transport`] and
//! [`KeyValueStore`].

pub mod api;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod feed;
pub mod model;
pub mod retry;
pub mod route;
pub mod session;
pub mod storage;
pub mod transport;
pub mod validation;

// Re-export commonly used types
pub use api::ApiClient;
pub use error::{ApiError, ErrorClass, TransportError};
pub use feed::{
    FavoriteList, FeedbackLedger, FeedbackMomentum, NotificationFilter, ProfileProgress,
    filter_notifications, unread_count, user_rank, user_score,
};
pub use model::{
    AuthResponse, ExperienceLevel, FeedbackKind, FeedbackRecord, LeaderboardEntry, Notification,
    NotificationKind, Preferences, Recommendation, ReviewEntry, ReviewMetrics, ReviewRequest,
    StrainDetails, StrainTally, SurveyRequest, TimeFrame, UserId, UserProfile, UserSummary,
};
pub use retry::{ManualRetry, RetryPolicy, retry_async};
pub use route::{Access, GuardFlags, Screen, landing_for, resolve_route};
pub use session::{Session, SessionError, SessionStore, SubscriptionId};
pub use storage::{KeyValueStore, MemoryStore, PersistedSession};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, MockTransport, Transport};
pub use validation::{
    AgeClaim, AgeError, Credentials, EmailError, Field, FieldErrors, LoginForm, PasswordError,
    ReviewDraft, ReviewError, SignupForm, SurveyDraft, SurveyError, validate_email,
    validate_password,
};
