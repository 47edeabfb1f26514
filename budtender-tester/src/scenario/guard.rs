use anyhow::{Result, bail};
use async_trait::async_trait;
use budtender_core::{Access, GuardFlags, Screen, landing_for, resolve_route};

use super::{Scenario, ScenarioCtx, StepLog};

/// Walks every flag combination against every screen without a backend.
pub struct GuardTable;

pub fn sample_screens() -> Vec<Screen> {
    vec![
        Screen::AgeGate,
        Screen::Signup,
        Screen::Login,
        Screen::Survey,
        Screen::Recommendations,
        Screen::Profile,
        Screen::Review(String::from("Blue Dream")),
        Screen::Strain(String::from("Blue Dream")),
        Screen::Notifications,
        Screen::Leaderboard,
        Screen::NotFound,
    ]
}

/// Every way `resolve_route` breaks a navigation rule for `flags`.
pub fn check_flags(flags: GuardFlags) -> Vec<String> {
    let mut problems = Vec::new();
    let landing = landing_for(flags);

    if resolve_route(flags, &landing) != landing {
        problems.push(format!("{flags:?}: landing {landing:?} redirects"));
    }

    for requested in sample_screens() {
        let shown = resolve_route(flags, &requested);
        if resolve_route(flags, &shown) != shown {
            problems.push(format!("{flags:?}: {requested:?} -> {shown:?} is not stable"));
        }
        if !flags.age_verified && shown != Screen::AgeGate {
            problems.push(format!("{flags:?}: {requested:?} bypasses the age gate"));
        }
        let allowed = match shown.access() {
            Access::Open => true,
            Access::Guest => !flags.authenticated,
            Access::Member => flags.authenticated,
            Access::Surveyed => flags.authenticated && flags.survey_completed,
        };
        if flags.age_verified && !allowed {
            problems.push(format!("{flags:?}: {requested:?} shows forbidden {shown:?}"));
        }
        if shown != requested && shown != landing {
            problems.push(format!(
                "{flags:?}: {requested:?} redirected to {shown:?}, expected {landing:?}"
            ));
        }
    }
    problems
}

#[async_trait(?Send)]
impl Scenario for GuardTable {
    fn key(&self) -> &'static str {
        "guard"
    }

    fn description(&self) -> &'static str {
        "Offline route guard truth table (every flag combination x screen)"
    }

    fn needs_backend(&self) -> bool {
        false
    }

    async fn run(&self, _ctx: &ScenarioCtx, log: &mut StepLog) -> Result<()> {
        let mut problems = Vec::new();
        for flags in GuardFlags::all() {
            let found = check_flags(flags);
            log.record(format!(
                "{flags:?} lands on {:?} ({} issues)",
                landing_for(flags),
                found.len()
            ));
            problems.extend(found);
        }
        if !problems.is_empty() {
            bail!("{} guard violations:\n{}", problems.len(), problems.join("\n"));
        }
        Ok(())
    }
}
