use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use budtender_core::{RetryPolicy, retry_async};

use super::{Scenario, ScenarioCtx, StepLog};

/// Anonymous browsing: the strain name list and one strain's detail page.
pub struct CatalogBrowse;

#[async_trait(?Send)]
impl Scenario for CatalogBrowse {
    fn key(&self) -> &'static str {
        "catalog"
    }

    fn description(&self) -> &'static str {
        "Fetch the strain list, then details for the first strain"
    }

    async fn run(&self, ctx: &ScenarioCtx, log: &mut StepLog) -> Result<()> {
        let api = ctx.client();

        let greeting = api.health().await.context("backend health check")?;
        log.record(format!("backend says: {greeting}"));

        let strains = retry_async(
            &RetryPolicy::default(),
            |_| api.strains_list(),
            tokio::time::sleep,
        )
        .await
        .context("loading strain list")?;
        ensure!(!strains.is_empty(), "strain list is empty");
        log.record(format!("{} strains available", strains.len()));

        let first = &strains[0];
        let details = api
            .strain(first)
            .await
            .with_context(|| format!("loading details for {first}"))?;
        ensure!(
            details.name.eq_ignore_ascii_case(first),
            "asked for {first}, got {}",
            details.name
        );
        log.record(format!(
            "{} ({}) lists {} effects",
            details.name,
            details.strain_type,
            details.effects.len()
        ));
        Ok(())
    }
}
