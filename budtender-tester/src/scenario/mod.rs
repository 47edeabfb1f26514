use anyhow::Result;
use async_trait::async_trait;
use budtender_core::{ApiClient, Credentials, MemoryStore, SessionStore, Transport};
use colored::Colorize;
use std::rc::Rc;
use std::time::Instant;

use crate::reports::ScenarioResult;

pub mod catalog;
pub mod guard;
pub mod login;
pub mod notifications;
pub mod onboarding;

/// Order used when `all` is requested.
pub const ALL_SCENARIOS: [&str; 5] = ["guard", "catalog", "onboarding", "login", "notifications"];

pub type SharedTransport = Rc<dyn Transport>;

pub struct ScenarioCtx {
    pub transport: SharedTransport,
    pub credentials: Option<Credentials>,
    pub verbose: bool,
}

impl ScenarioCtx {
    /// Fresh client with no token; scenarios never share auth state.
    #[must_use]
    pub fn client(&self) -> ApiClient<SharedTransport> {
        ApiClient::new(Rc::clone(&self.transport))
    }

    #[must_use]
    pub fn session(&self) -> SessionStore<SharedTransport, MemoryStore> {
        SessionStore::new(self.client(), MemoryStore::default())
    }
}

/// Notes collected while a scenario runs.
#[derive(Debug, Default)]
pub struct StepLog {
    verbose: bool,
    steps: Vec<String>,
}

impl StepLog {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self {
            verbose,
            steps: Vec::new(),
        }
    }

    pub fn record(&mut self, step: impl Into<String>) {
        let step = step.into();
        if self.verbose {
            println!("   {} {step}", "→".dimmed());
        }
        log::debug!("{step}");
        self.steps.push(step);
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }
}

#[async_trait(?Send)]
pub trait Scenario {
    fn key(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Offline scenarios never touch the transport.
    fn needs_backend(&self) -> bool {
        true
    }

    async fn run(&self, ctx: &ScenarioCtx, log: &mut StepLog) -> Result<()>;
}

#[must_use]
pub fn get_scenario(key: &str) -> Option<Box<dyn Scenario>> {
    match key {
        "guard" => Some(Box::new(guard::GuardTable)),
        "catalog" => Some(Box::new(catalog::CatalogBrowse)),
        "onboarding" => Some(Box::new(onboarding::Onboarding)),
        "login" => Some(Box::new(login::ExistingLogin)),
        "notifications" => Some(Box::new(notifications::NotificationInbox)),
        _ => None,
    }
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    ALL_SCENARIOS
        .iter()
        .filter_map(|key| get_scenario(key))
        .map(|scenario| (scenario.key(), scenario.description()))
        .collect()
}

/// Run one scenario to completion, timing it and capturing the error chain.
pub async fn run_scenario(scenario: &dyn Scenario, ctx: &ScenarioCtx) -> ScenarioResult {
    let mut log = StepLog::new(ctx.verbose);
    let start = Instant::now();
    let outcome = scenario.run(ctx, &mut log).await;
    let duration = start.elapsed();

    let failures = match outcome {
        Ok(()) => Vec::new(),
        Err(err) => vec![format!("{err:#}")],
    };
    ScenarioResult {
        scenario_name: scenario.key().to_string(),
        passed: failures.is_empty(),
        duration,
        steps: log.into_steps(),
        failures,
    }
}

/// Random address under a reserved domain so repeated runs never collide.
#[must_use]
pub fn throwaway_email() -> String {
    use rand::Rng;
    let tag: u64 = rand::thread_rng().r#gen();
    format!("smoke-{tag:016x}@budtender.test")
}

#[cfg(test)]
mod tests {
    use super::*;
    use budtender_core::MockTransport;

    pub(crate) fn offline_ctx(mock: Rc<MockTransport>) -> ScenarioCtx {
        ScenarioCtx {
            transport: mock,
            credentials: None,
            verbose: false,
        }
    }

    #[test]
    fn registry_covers_every_listed_key() {
        let listed = list_scenarios();
        assert_eq!(listed.len(), ALL_SCENARIOS.len());
        for (key, description) in listed {
            assert!(ALL_SCENARIOS.contains(&key));
            assert!(!description.is_empty());
        }
        assert!(get_scenario("nope").is_none());
    }

    #[test]
    fn only_guard_runs_offline() {
        let offline: Vec<&str> = ALL_SCENARIOS
            .iter()
            .filter_map(|key| get_scenario(key))
            .filter(|s| !s.needs_backend())
            .map(|s| s.key())
            .collect();
        assert_eq!(offline, vec!["guard"]);
    }

    #[test]
    fn throwaway_emails_pass_validation() {
        let first = throwaway_email();
        assert!(budtender_core::validate_email(&first).is_ok());
        assert_ne!(first, throwaway_email());
    }

    #[test]
    fn failing_scenario_reports_error_chain() {
        let mock = Rc::new(MockTransport::new());
        let ctx = offline_ctx(mock);
        let result = futures::executor::block_on(run_scenario(&login::ExistingLogin, &ctx));
        assert!(!result.passed);
        assert!(result.failures[0].contains("--email"), "{:?}", result.failures);
    }
}
