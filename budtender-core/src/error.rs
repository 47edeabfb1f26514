use serde::Deserialize;
use thiserror::Error;

/// The request never produced an HTTP response (offline, CORS, aborted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Coarse error taxonomy used to pick how a failure is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Caught or mapped back onto a specific form input.
    Validation,
    /// 401/403/409: shown as a banner or bound to a field.
    Authentication,
    /// Transport, decoding and 5xx failures: dismissible alert.
    Network,
    /// Profile refresh failed; the whole session is dropped.
    Session,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),
    #[error("server responded with status {status}{}", detail_suffix(.detail))]
    Status {
        status: u16,
        detail: Option<String>,
        field: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    field: Option<String>,
}

impl ApiError {
    /// Build a status error from a non-2xx response body.
    ///
    /// FastAPI style bodies (`{"detail": "...", "field": "..."}`) are decoded; a
    /// structured `detail` (validation arrays) is kept as compact JSON text.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let (detail, field) = parsed.map_or((None, None), |b| {
            let detail = b.detail.map(|value| match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            });
            (detail, b.field)
        });
        Self::Status {
            status,
            detail,
            field,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided human readable detail, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// `(field, message)` when the server pointed at a specific input.
    #[must_use]
    pub fn field_error(&self) -> Option<(&str, &str)> {
        match self {
            Self::Status {
                field: Some(field),
                detail,
                ..
            } => Some((field.as_str(), detail.as_deref().unwrap_or_default())),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }

    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self.status(), Some(409))
    }

    /// Duplicate registration: 409, or the 400 the backend emits for a known email.
    #[must_use]
    pub fn is_duplicate_email(&self) -> bool {
        self.is_conflict()
            || (self.status() == Some(400)
                && self
                    .detail()
                    .is_some_and(|d| d.to_ascii_lowercase().contains("already registered")))
    }

    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Status { field: Some(_), .. } | Self::Status { status: 422, .. } => {
                ErrorClass::Validation
            }
            Self::Status {
                status: 401 | 403 | 409,
                ..
            } => ErrorClass::Authentication,
            _ => ErrorClass::Network,
        }
    }

    /// Message for a dismissible banner: server detail first, then `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_body_with_detail_and_field_is_decoded() {
        let err = ApiError::from_status(422, r#"{"detail":"Bad email","field":"email"}"#);
        assert_eq!(err.detail(), Some("Bad email"));
        assert_eq!(err.field_error(), Some(("email", "Bad email")));
        assert_eq!(err.class(), ErrorClass::Validation);
        assert_eq!(
            err.to_string(),
            "server responded with status 422: Bad email"
        );
    }

    #[test]
    fn structured_detail_is_kept_as_json_text() {
        let err = ApiError::from_status(422, r#"{"detail":[{"loc":["body","email"]}]}"#);
        assert!(err.detail().is_some_and(|d| d.contains("loc")));
    }

    #[test]
    fn non_json_body_yields_bare_status() {
        let err = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(err.detail(), None);
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.class(), ErrorClass::Network);
        assert_eq!(err.user_message("try later"), "try later");
    }

    #[test]
    fn duplicate_email_recognises_conflict_and_backend_400() {
        assert!(ApiError::from_status(409, "{}").is_duplicate_email());
        assert!(
            ApiError::from_status(400, r#"{"detail":"Email already registered."}"#)
                .is_duplicate_email()
        );
        assert!(!ApiError::from_status(400, r#"{"detail":"nope"}"#).is_duplicate_email());
    }

    #[test]
    fn auth_statuses_are_classified() {
        let err = ApiError::from_status(401, r#"{"detail":"Invalid email or password."}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.class(), ErrorClass::Authentication);
        let transport = ApiError::from(TransportError::new("offline"));
        assert_eq!(transport.class(), ErrorClass::Network);
        assert_eq!(transport.to_string(), "request failed: offline");
    }
}
