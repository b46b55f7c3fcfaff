//! Enrichment: listing entries to display candidates
//!
//! Each surviving entry costs one command-line lookup and one stats probe.
//! Lookups for different pids run concurrently (bounded), and a pid whose
//! process vanished in the meantime is dropped without fuss.

use crate::core::models::{Candidate, ProcessEntry};
use crate::core::traits::{CommandResolver, StatsProbe};
use futures::future;
use futures::stream::{self, StreamExt};
use tracing::debug;

pub struct Enricher<'a> {
    probe: &'a dyn StatsProbe,
    resolver: &'a dyn CommandResolver,
    marker: &'a str,
    self_label: &'a str,
    concurrency: usize,
}

impl<'a> Enricher<'a> {
    pub fn new(
        probe: &'a dyn StatsProbe,
        resolver: &'a dyn CommandResolver,
        marker: &'a str,
        self_label: &'a str,
    ) -> Self {
        Self {
            probe,
            resolver,
            marker,
            self_label,
            concurrency: crate::config::DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Whether the entry is the listing utility reporting itself.
    pub fn is_self_reference(&self, entry: &ProcessEntry) -> bool {
        !self.self_label.is_empty() && entry.label().contains(self.self_label)
    }

    /// Output keeps input order; entries that fail either lookup are skipped.
    pub async fn enrich(&self, entries: Vec<ProcessEntry>) -> Vec<Candidate> {
        let targets: Vec<ProcessEntry> = entries
            .into_iter()
            .filter(|entry| {
                let own = self.is_self_reference(entry);
                if own {
                    debug!(pid = entry.pid(), "skipping the listing utility itself");
                }
                !own
            })
            .collect();

        stream::iter(targets)
            .map(|entry| self.enrich_one(entry))
            .buffered(self.concurrency)
            .filter_map(future::ready)
            .collect::<Vec<_>>()
            .await
    }

    async fn enrich_one(&self, entry: ProcessEntry) -> Option<Candidate> {
        let pid = entry.pid();
        let (command, stats) =
            futures::join!(self.resolver.command_line(pid), self.probe.stats(pid));

        match (command, stats) {
            (Ok(command_line), Ok(stats)) => {
                Some(Candidate::new(pid, command_line, stats, self.marker))
            }
            (Err(reason), _) | (_, Err(reason)) => {
                debug!(pid, %reason, "dropping entry");
                None
            }
        }
    }
}
