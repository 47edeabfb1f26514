use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use budtender_core::{LoginForm, Screen, landing_for, resolve_route};

use super::{Scenario, ScenarioCtx, StepLog};

/// Sign in with the account given on the command line.
pub struct ExistingLogin;

#[async_trait(?Send)]
impl Scenario for ExistingLogin {
    fn key(&self) -> &'static str {
        "login"
    }

    fn description(&self) -> &'static str {
        "Sign in with --email/--password and load the profile"
    }

    async fn run(&self, ctx: &ScenarioCtx, log: &mut StepLog) -> Result<()> {
        let credentials = ctx
            .credentials
            .as_ref()
            .context("login scenario needs --email and --password")?;
        let form = LoginForm {
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        };
        let credentials = form
            .validate()
            .map_err(|errors| anyhow::anyhow!("login form rejected: {errors:?}"))?;

        let session = ctx.session();
        session.verify_age(true);
        session
            .login(&credentials.email, &credentials.password)
            .await
            .with_context(|| format!("signing in {}", credentials.email))?;

        let snapshot = session.snapshot();
        let profile = snapshot.user.as_ref().context("no profile after sign in")?;
        log.record(format!(
            "signed in as user {} ({} badges, survey {})",
            profile.user_id,
            profile.badges.len(),
            if profile.survey_completed { "done" } else { "pending" }
        ));

        let flags = session.guard_flags();
        ensure!(
            resolve_route(flags, &Screen::Login) == landing_for(flags),
            "signed-in member can still reach the login form"
        );

        session.logout();
        ensure!(
            !session.is_authenticated() && session.snapshot().age_verified,
            "logout should clear the member but keep the age flag"
        );
        log.record("signed out");
        Ok(())
    }
}
