use crate::api::ApiClient;
use crate::error::ApiError;
use crate::model::{FeedbackKind, UserId};
use crate::transport::Transport;
use std::collections::HashMap;

/// Like/dislike signals sent from one screen; at most one per strain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackLedger {
    sent: HashMap<String, FeedbackKind>,
}

impl FeedbackLedger {
    #[must_use]
    pub fn get(&self, strain: &str) -> Option<FeedbackKind> {
        self.sent.get(strain).copied()
    }

    #[must_use]
    pub fn has_sent(&self, strain: &str) -> bool {
        self.sent.contains_key(strain)
    }

    /// Record a confirmed signal; `false` if one was already recorded.
    pub fn record(&mut self, strain: &str, kind: FeedbackKind) -> bool {
        if self.has_sent(strain) {
            return false;
        }
        self.sent.insert(strain.to_string(), kind);
        true
    }

    /// Send `kind` for `strain` unless feedback was already given. Returns
    /// whether a request was made.
    ///
    /// # Errors
    ///
    /// The server error; nothing is recorded.
    pub async fn send<T: Transport>(
        &mut self,
        api: &ApiClient<T>,
        user_id: UserId,
        strain: &str,
        kind: FeedbackKind,
    ) -> Result<bool, ApiError> {
        if self.has_sent(strain) {
            log::debug!("feedback for {strain} already sent");
            return Ok(false);
        }
        api.send_feedback(user_id, strain, kind).await?;
        Ok(self.record(strain, kind))
    }
}
