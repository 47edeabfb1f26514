//! Listing screens' client-side state.
//!
//! Filtering and ranking are pure recomputations over the last fetched list.
//! Mutations call the backend first and touch the local list only after the
//! server confirmed; nothing is applied optimistically.

pub mod favorites;
pub mod feedback;
pub mod leaderboard;
pub mod notifications;
pub mod profile;

pub use favorites::FavoriteList;
pub use feedback::FeedbackLedger;
pub use leaderboard::{medal, user_rank, user_score};
pub use notifications::{
    NotificationFilter, apply_all_read, apply_read, apply_removed, filter_notifications,
    notification_target, unread_count,
};
pub use profile::{
    FeedbackMomentum, ProfileProgress, feedbacks_newest_first, parse_timestamp,
    reviews_newest_first,
};
