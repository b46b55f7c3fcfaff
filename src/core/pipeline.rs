//! listing → entries → candidates → choices → selection → outcomes
//!
//! Only listing and parsing failures (plus a broken prompt) abort a run.
//! Everything that happens to an individual pid further down degrades to
//! "skip" or "report and continue".

use crate::config::{RunConfig, SELECTION_HEADER};
use crate::core::enricher::Enricher;
use crate::core::entry_parser::parse_listing;
use crate::core::models::{RunOutcome, RunReport};
use crate::core::presenter::present;
use crate::core::terminator::Terminator;
use crate::core::traits::{CommandResolver, ListingSource, ProcessKiller, Selector, StatsProbe};
use crate::error::ExoResult;
use colored::Colorize;
use std::io::Write;
use tracing::{debug, info};

pub struct Pipeline<'a> {
    config: &'a RunConfig,
    listing: &'a dyn ListingSource,
    probe: &'a dyn StatsProbe,
    resolver: &'a dyn CommandResolver,
    selector: &'a dyn Selector,
    killer: &'a dyn ProcessKiller,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a RunConfig,
        listing: &'a dyn ListingSource,
        probe: &'a dyn StatsProbe,
        resolver: &'a dyn CommandResolver,
        selector: &'a dyn Selector,
        killer: &'a dyn ProcessKiller,
    ) -> Self {
        Self {
            config,
            listing,
            probe,
            resolver,
            selector,
            killer,
        }
    }

    /// Run once. The probe is not cleared here; its owner does that after
    /// the run, whatever the result.
    pub async fn run<W: Write>(&self, out: &mut W) -> ExoResult<RunOutcome> {
        let raw = self.listing.list().await?;
        let entries = parse_listing(&raw)?;
        let listed = entries.len();
        debug!(listed, "listing parsed");

        let candidates = Enricher::new(
            self.probe,
            self.resolver,
            &self.config.marker,
            &self.config.self_label,
        )
        .with_concurrency(self.config.concurrency)
        .enrich(entries)
        .await;
        debug!(candidates = candidates.len(), "enrichment finished");

        if candidates.is_empty() {
            if let Err(err) = writeln!(out, "{}", "No JVM critters found, nothing to banish.".green()) {
                debug!(error = %err, "failed to write notice");
            }
            return Ok(RunOutcome::NothingToShow { listed });
        }

        let choices = present(candidates);
        let header = format!("{}\n", SELECTION_HEADER.bold());
        let selected = self.selector.select(&header, &choices)?;
        info!(
            offered = choices.len(),
            selected = selected.len(),
            "selection confirmed"
        );

        let outcomes = Terminator::new(self.killer, out).terminate(selected.iter().copied());

        let report = RunReport {
            listed,
            candidates: choices.len(),
            selected: selected.len(),
            outcomes,
        };
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "run finished"
        );
        Ok(RunOutcome::Completed(report))
    }
}
