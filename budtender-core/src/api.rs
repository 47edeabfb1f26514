//! Typed REST client for the recommendation backend.

use crate::error::ApiError;
use crate::model::{
    AuthResponse, FeedbackKind, FeedbackRecord, LeaderboardEntry, Notification, Recommendation,
    ReviewRequest, StrainDetails, StrainTally, SurveyRequest, TimeFrame, UserId, UserProfile,
};
use crate::transport::{HttpRequest, HttpResponse, Transport, encode_component};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::cell::RefCell;

#[derive(Deserialize)]
struct ProfileEnvelope {
    profile: UserProfile,
}

#[derive(Deserialize)]
struct StrainsEnvelope {
    strains: Vec<String>,
}

#[derive(Deserialize)]
struct RecommendEnvelope {
    recommended_strains: Vec<Recommendation>,
}

#[derive(Deserialize)]
struct FavoritesEnvelope {
    favorites: Vec<String>,
}

#[derive(Deserialize)]
struct FeedbacksEnvelope {
    feedbacks: Vec<FeedbackRecord>,
}

#[derive(Deserialize)]
struct NotificationsEnvelope {
    notifications: Vec<Notification>,
}

#[derive(Deserialize)]
struct LeaderboardEnvelope {
    leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Deserialize)]
struct MessageEnvelope {
    #[serde(default)]
    message: String,
}

/// One method per backend endpoint. The bearer token, when set, is attached to
/// every request.
pub struct ApiClient<T> {
    transport: T,
    token: RefCell<Option<String>>,
}

impl<T: Transport> ApiClient<T> {
    pub const fn new(transport: T) -> Self {
        Self {
            transport,
            token: RefCell::new(None),
        }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let token = self.token();
        let request = request.with_bearer(token.as_deref());
        log::debug!("{} {}", request.method.as_str(), request.path);
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_status(response.status, &response.body))
        }
    }

    async fn call<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.execute(request).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET /` liveness message.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn health(&self) -> Result<String, ApiError> {
        let body: MessageEnvelope = self.call(HttpRequest::get("/")).await?;
        Ok(body.message)
    }

    /// # Errors
    ///
    /// 401 on bad credentials; transport and decode failures otherwise.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.call(HttpRequest::post(
            "/login/",
            json!({ "email": email, "password": password }),
        ))
        .await
    }

    /// # Errors
    ///
    /// 400/409 when the email is taken; transport and decode failures otherwise.
    pub async fn signup(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.call(HttpRequest::post(
            "/onboarding/",
            json!({ "email": email, "password": password }),
        ))
        .await
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn profile(&self, user_id: UserId) -> Result<UserProfile, ApiError> {
        let body: ProfileEnvelope = self
            .call(HttpRequest::get(format!("/profile/{user_id}")))
            .await?;
        Ok(body.profile)
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn strains_list(&self) -> Result<Vec<String>, ApiError> {
        let body: StrainsEnvelope = self.call(HttpRequest::get("/strains_list/")).await?;
        Ok(body.strains)
    }

    /// Persist the survey. The backend answers with a fresh recommendation list,
    /// which is returned when it decodes; an odd body still counts as success.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn submit_survey(
        &self,
        survey: &SurveyRequest,
    ) -> Result<Vec<Recommendation>, ApiError> {
        let body = serde_json::to_value(survey).map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = self
            .execute(HttpRequest::post("/submit_survey/", body))
            .await?;
        Ok(serde_json::from_str::<RecommendEnvelope>(&response.body)
            .map(|env| env.recommended_strains)
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Decode error when `recommended_strains` is missing or malformed.
    pub async fn recommend(&self, user_id: UserId) -> Result<Vec<Recommendation>, ApiError> {
        let body: RecommendEnvelope = self
            .call(HttpRequest::get(format!("/recommend/{user_id}")))
            .await?;
        Ok(body.recommended_strains)
    }

    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn send_feedback(
        &self,
        user_id: UserId,
        strain: &str,
        kind: FeedbackKind,
    ) -> Result<(), ApiError> {
        self.execute(HttpRequest::post(
            "/feedback/",
            json!({ "user_id": user_id, "strain_id": strain, "feedback_type": kind }),
        ))
        .await
        .map(drop)
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn feedbacks(&self, user_id: UserId) -> Result<Vec<FeedbackRecord>, ApiError> {
        let body: FeedbacksEnvelope = self
            .call(HttpRequest::get(format!("/feedbacks/{user_id}")))
            .await?;
        Ok(body.feedbacks)
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn strain_tally(&self, strain: &str) -> Result<StrainTally, ApiError> {
        self.call(HttpRequest::get(format!(
            "/feedback/{}",
            encode_component(strain)
        )))
        .await
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn favorites(&self, user_id: UserId) -> Result<Vec<String>, ApiError> {
        let body: FavoritesEnvelope = self
            .call(HttpRequest::get(format!("/favorites/{user_id}")))
            .await?;
        Ok(body.favorites)
    }

    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn add_favorite(&self, user_id: UserId, strain: &str) -> Result<(), ApiError> {
        self.execute(HttpRequest::post(
            "/favorites/",
            json!({ "user_id": user_id, "strain_name": strain }),
        ))
        .await
        .map(drop)
    }

    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn remove_favorite(&self, user_id: UserId, strain: &str) -> Result<(), ApiError> {
        self.execute(
            HttpRequest::delete("/favorites/")
                .with_body(json!({ "user_id": user_id, "strain_name": strain })),
        )
        .await
        .map(drop)
    }

    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn submit_review(&self, review: &ReviewRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(review).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.execute(HttpRequest::post("/review/", body))
            .await
            .map(drop)
    }

    /// # Errors
    ///
    /// 404 when the strain is unknown; transport and decode failures otherwise.
    pub async fn strain(&self, name: &str) -> Result<StrainDetails, ApiError> {
        self.call(HttpRequest::get(format!("/strain/{}", encode_component(name))))
            .await
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn notifications(&self, user_id: UserId) -> Result<Vec<Notification>, ApiError> {
        let body: NotificationsEnvelope = self
            .call(HttpRequest::get(format!("/notifications/{user_id}")))
            .await?;
        Ok(body.notifications)
    }

    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn set_notification_read(&self, id: &str, read: bool) -> Result<(), ApiError> {
        self.execute(HttpRequest::post(
            format!("/notifications/{}/mark-read", encode_component(id)),
            json!({ "read": read }),
        ))
        .await
        .map(drop)
    }

    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn mark_all_notifications_read(&self, user_id: UserId) -> Result<(), ApiError> {
        self.execute(HttpRequest::post(
            format!("/notifications/{user_id}/mark-all-read"),
            json!({}),
        ))
        .await
        .map(drop)
    }

    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn delete_notification(&self, id: &str) -> Result<(), ApiError> {
        self.execute(HttpRequest::delete(format!(
            "/notifications/{}",
            encode_component(id)
        )))
        .await
        .map(drop)
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn leaderboard(&self, frame: TimeFrame) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let body: LeaderboardEnvelope = self
            .call(HttpRequest::get("/leaderboard/").with_query("timeFrame", frame.query()))
            .await?;
        Ok(body.leaderboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{HttpMethod, MockTransport};
    use futures::executor::block_on;
    use serde_json::json;

    fn client() -> ApiClient<MockTransport> {
        ApiClient::new(MockTransport::new())
    }

    #[test]
    fn bearer_token_is_attached_when_set() {
        let api = client();
        api.transport()
            .respond_ok(HttpMethod::Get, "/strains_list/", &json!({"strains": ["a"]}));
        api.set_token(Some("t".into()));
        let strains = block_on(api.strains_list()).unwrap();
        assert_eq!(strains, vec!["a".to_string()]);
        let sent = api.transport().requests();
        assert_eq!(sent[0].bearer.as_deref(), Some("t"));
    }

    #[test]
    fn error_status_maps_detail() {
        let api = client();
        api.transport().respond(
            HttpMethod::Post,
            "/login/",
            401,
            &json!({"detail": "Invalid email or password."}),
        );
        let err = block_on(api.login("a@b.co", "x")).unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.detail(), Some("Invalid email or password."));
    }

    #[test]
    fn recommend_without_list_is_decode_error() {
        let api = client();
        api.transport()
            .respond_ok(HttpMethod::Get, "/recommend/4", &json!({"message": "??"}));
        let err = block_on(api.recommend(4)).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn remove_favorite_sends_delete_with_body() {
        let api = client();
        api.transport()
            .respond_ok(HttpMethod::Delete, "/favorites/", &json!({"message": "ok"}));
        block_on(api.remove_favorite(9, "og kush")).unwrap();
        let sent = api.transport().requests();
        assert_eq!(sent[0].method, HttpMethod::Delete);
        assert_eq!(
            sent[0].body,
            Some(json!({"user_id": 9, "strain_name": "og kush"}))
        );
    }

    #[test]
    fn strain_lookup_encodes_name() {
        let api = client();
        api.transport().respond_ok(
            HttpMethod::Get,
            "/strain/blue%20dream",
            &json!({"name": "blue dream", "type": "Hybrid"}),
        );
        let strain = block_on(api.strain("blue dream")).unwrap();
        assert_eq!(strain.strain_type, "Hybrid");
    }

    #[test]
    fn leaderboard_passes_time_frame() {
        let api = client();
        api.transport().respond_ok(
            HttpMethod::Get,
            "/leaderboard/",
            &json!({"leaderboard": [{"user_id": 1, "email": "x@y.z", "score": 10}]}),
        );
        let board = block_on(api.leaderboard(TimeFrame::Weekly)).unwrap();
        assert_eq!(board.len(), 1);
        let sent = api.transport().requests();
        assert_eq!(
            sent[0].query,
            vec![("timeFrame".to_string(), "weekly".to_string())]
        );
    }

    #[test]
    fn survey_submission_tolerates_unexpected_body() {
        let api = client();
        api.transport()
            .respond_ok(HttpMethod::Post, "/submit_survey/", &json!({"message": "saved"}));
        let survey = SurveyRequest {
            user_id: 1,
            desired_effects: vec!["Relaxed".into()],
            experience_level: crate::model::ExperienceLevel::Novice,
            familiar_strains: Vec::new(),
            terpenes: Vec::new(),
            may_relieve: Vec::new(),
        };
        let recs = block_on(api.submit_survey(&survey)).unwrap();
        assert!(recs.is_empty());
    }
}
