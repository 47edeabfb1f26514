use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use budtender_core::catalog::{CONDITIONS, SURVEY_EFFECTS, TERPENES};
use budtender_core::{
    ExperienceLevel, FavoriteList, Screen, SignupForm, SurveyDraft, landing_for,
};

use super::{Scenario, ScenarioCtx, StepLog, throwaway_email};

pub const SMOKE_PASSWORD: &str = "Smoke-Test-42";

/// New member journey: signup, survey, recommendations, favorites.
pub struct Onboarding;

#[async_trait(?Send)]
impl Scenario for Onboarding {
    fn key(&self) -> &'static str {
        "onboarding"
    }

    fn description(&self) -> &'static str {
        "Sign up a throwaway account, take the survey, favorite a pick"
    }

    async fn run(&self, ctx: &ScenarioCtx, log: &mut StepLog) -> Result<()> {
        let session = ctx.session();
        session.verify_age(true);

        let form = SignupForm {
            email: throwaway_email(),
            password: SMOKE_PASSWORD.to_string(),
            confirm_password: SMOKE_PASSWORD.to_string(),
        };
        let credentials = form
            .validate()
            .map_err(|errors| anyhow::anyhow!("signup form rejected: {errors:?}"))?;
        session
            .signup(&credentials.email, &credentials.password)
            .await
            .with_context(|| format!("signing up {}", credentials.email))?;
        let user_id = session.user_id().context("signup left no user id")?;
        log.record(format!("signed up {} as user {user_id}", credentials.email));

        ensure!(
            landing_for(session.guard_flags()) == Screen::Survey,
            "new member should land on the survey, flags {:?}",
            session.guard_flags()
        );

        let draft = SurveyDraft {
            desired_effects: vec![SURVEY_EFFECTS[0].name.to_string()],
            experience_level: Some(ExperienceLevel::Novice),
            familiar_strains: Vec::new(),
            terpenes: vec![TERPENES[0].to_string()],
            may_relieve: vec![CONDITIONS[0].to_string()],
        };
        let survey = draft
            .validate(user_id)
            .map_err(|e| anyhow::anyhow!("survey draft rejected: {e}"))?;
        let api = session.api();
        api.submit_survey(&survey)
            .await
            .context("submitting survey")?;
        session
            .mark_survey_completed()
            .await
            .context("refreshing profile after survey")?;
        ensure!(
            session.survey_completed(),
            "profile does not report the survey as completed"
        );
        log.record("survey submitted");

        let picks = api
            .recommend(user_id)
            .await
            .context("loading recommendations")?;
        let first = picks.first().context("no recommendations returned")?;
        log.record(format!("{} recommendations, top pick {}", picks.len(), first.name));

        let mut favorites = FavoriteList::default();
        let added = favorites
            .toggle(api, user_id, &first.name)
            .await
            .context("adding favorite")?;
        ensure!(added, "first toggle should add {}", first.name);
        let stored = api.favorites(user_id).await.context("listing favorites")?;
        ensure!(
            stored.contains(&first.name),
            "{} missing from stored favorites",
            first.name
        );

        let kept = favorites
            .toggle(api, user_id, &first.name)
            .await
            .context("removing favorite")?;
        ensure!(!kept && favorites.is_empty(), "second toggle should remove");
        log.record(format!("favorited and unfavorited {}", first.name));

        session.logout();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budtender_core::{HttpMethod, MockTransport, validate_password};
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn smoke_password_meets_rules() {
        assert!(validate_password(SMOKE_PASSWORD).is_ok());
    }

    #[test]
    fn full_journey_against_scripted_backend() {
        let mock = Rc::new(MockTransport::new());
        mock.respond_ok(
            HttpMethod::Post,
            "/onboarding/",
            &json!({"message": "ok", "user": {"user_id": 9, "email": "x@y.z"}, "token": "t"}),
        );
        mock.respond_ok(
            HttpMethod::Get,
            "/profile/9",
            &json!({"profile": {"user_id": 9, "survey_completed": false}}),
        );
        mock.respond_ok(
            HttpMethod::Get,
            "/profile/9",
            &json!({"profile": {"user_id": 9, "survey_completed": true}}),
        );
        mock.respond_ok(HttpMethod::Post, "/submit_survey/", &json!({}));
        mock.respond_ok(
            HttpMethod::Get,
            "/recommend/9",
            &json!({"recommended_strains": [{"name": "Gelato", "type": "hybrid"}]}),
        );
        mock.respond_ok(HttpMethod::Post, "/favorites/", &json!({}));
        mock.respond_ok(HttpMethod::Delete, "/favorites/", &json!({}));
        mock.respond_ok(HttpMethod::Get, "/favorites/9", &json!({"favorites": ["Gelato"]}));

        let ctx = super::super::tests::offline_ctx(Rc::clone(&mock));
        let mut log = StepLog::new(false);
        tokio_test::block_on(Onboarding.run(&ctx, &mut log)).unwrap();

        assert_eq!(log.into_steps().len(), 4);
        assert_eq!(mock.count(HttpMethod::Post, "/favorites/"), 1);
        assert_eq!(mock.count(HttpMethod::Delete, "/favorites/"), 1);
        let survey = mock
            .requests()
            .into_iter()
            .find(|r| r.path == "/submit_survey/")
            .and_then(|r| r.body)
            .unwrap();
        assert_eq!(survey["user_id"], 9);
    }
}
