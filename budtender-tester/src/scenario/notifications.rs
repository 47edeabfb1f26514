use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use budtender_core::feed::{apply_all_read, unread_count};
use budtender_core::{NotificationFilter, TimeFrame, filter_notifications, user_rank};

use super::onboarding::SMOKE_PASSWORD;
use super::{Scenario, ScenarioCtx, StepLog, throwaway_email};

/// Inbox and leaderboard for a signed-in member.
pub struct NotificationInbox;

#[async_trait(?Send)]
impl Scenario for NotificationInbox {
    fn key(&self) -> &'static str {
        "notifications"
    }

    fn description(&self) -> &'static str {
        "Fetch notifications, mark all read, check the leaderboard"
    }

    async fn run(&self, ctx: &ScenarioCtx, log: &mut StepLog) -> Result<()> {
        let session = ctx.session();
        session.verify_age(true);
        match ctx.credentials.as_ref() {
            Some(creds) => session
                .login(&creds.email, &creds.password)
                .await
                .with_context(|| format!("signing in {}", creds.email))?,
            None => {
                let email = throwaway_email();
                session
                    .signup(&email, SMOKE_PASSWORD)
                    .await
                    .with_context(|| format!("signing up {email}"))?;
            }
        }
        let user_id = session.user_id().context("no user id after sign in")?;
        let api = session.api();

        let mut items = api
            .notifications(user_id)
            .await
            .context("loading notifications")?;
        let unread = unread_count(&items);
        log.record(format!("{} notifications, {unread} unread", items.len()));

        api.mark_all_notifications_read(user_id)
            .await
            .context("marking all notifications read")?;
        apply_all_read(&mut items);
        ensure!(
            filter_notifications(&items, NotificationFilter::Unread).is_empty(),
            "unread tab not empty after marking all read"
        );

        let refetched = api
            .notifications(user_id)
            .await
            .context("reloading notifications")?;
        ensure!(
            unread_count(&refetched) == 0,
            "server still reports {} unread",
            unread_count(&refetched)
        );
        log.record("inbox cleared");

        for frame in TimeFrame::ALL {
            let board = api
                .leaderboard(frame)
                .await
                .with_context(|| format!("loading {} leaderboard", frame.query()))?;
            let rank = user_rank(&board, user_id)
                .map_or_else(|| String::from("unranked"), |r| format!("#{r}"));
            log.record(format!(
                "{} leaderboard: {} entries, user {rank}",
                frame.query(),
                board.len()
            ));
        }

        session.logout();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budtender_core::{HttpMethod, MockTransport};
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn clears_inbox_for_throwaway_member() {
        let mock = Rc::new(MockTransport::new());
        mock.respond_ok(
            HttpMethod::Post,
            "/onboarding/",
            &json!({"user": {"user_id": 5}, "token": "tok"}),
        );
        mock.respond_ok(HttpMethod::Get, "/profile/5", &json!({"profile": {"user_id": 5}}));
        mock.respond_ok(
            HttpMethod::Get,
            "/notifications/5",
            &json!({"notifications": [
                {"id": 1, "type": "badge", "title": "Welcome", "read": false},
                {"id": 2, "type": "review", "title": "Thanks", "read": true}
            ]}),
        );
        mock.respond_ok(
            HttpMethod::Get,
            "/notifications/5",
            &json!({"notifications": [
                {"id": 1, "type": "badge", "title": "Welcome", "read": true},
                {"id": 2, "type": "review", "title": "Thanks", "read": true}
            ]}),
        );
        mock.respond_ok(HttpMethod::Post, "/notifications/5/mark-all-read", &json!({}));
        mock.respond_ok(
            HttpMethod::Get,
            "/leaderboard/",
            &json!({"leaderboard": [{"user_id": 5, "score": 40}]}),
        );

        let ctx = super::super::tests::offline_ctx(Rc::clone(&mock));
        let mut log = StepLog::new(false);
        tokio_test::block_on(NotificationInbox.run(&ctx, &mut log)).unwrap();

        let steps = log.into_steps();
        assert_eq!(steps[0], "2 notifications, 1 unread");
        assert!(steps.iter().any(|s| s.contains("weekly leaderboard")), "{steps:?}");
        assert_eq!(mock.count(HttpMethod::Get, "/leaderboard/"), 3);
    }

    #[test]
    fn server_that_keeps_unread_fails() {
        let mock = Rc::new(MockTransport::new());
        mock.respond_ok(
            HttpMethod::Post,
            "/onboarding/",
            &json!({"user": {"user_id": 5}}),
        );
        mock.respond_ok(HttpMethod::Get, "/profile/5", &json!({"profile": {"user_id": 5}}));
        mock.respond_ok(
            HttpMethod::Get,
            "/notifications/5",
            &json!({"notifications": [{"id": "a", "type": "like", "read": false}]}),
        );
        mock.respond_ok(HttpMethod::Post, "/notifications/5/mark-all-read", &json!({}));

        let ctx = super::super::tests::offline_ctx(mock);
        let mut log = StepLog::new(false);
        let err = tokio_test::block_on(NotificationInbox.run(&ctx, &mut log)).unwrap_err();
        assert!(err.to_string().contains("still reports 1 unread"), "{err:#}");
    }
}
