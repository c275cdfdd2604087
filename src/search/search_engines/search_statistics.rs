use std::time::{Duration, Instant};
use tracing::{debug, trace};

#[derive(Debug)]
pub struct SearchStatistics {
    /// Number of nodes expanded
    expanded_nodes: usize,
    /// Number of child nodes generated
    generated_nodes: usize,
    /// Number of nodes discarded because their state was already explored
    pruned_nodes: usize,
    /// Number of states expanded again after a cheaper path was found
    reopened_nodes: usize,
    /// Number of nodes left unexpanded by a depth limit
    cutoff_nodes: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl SearchStatistics {
    pub fn new() -> Self {
        trace!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            pruned_nodes: 0,
            reopened_nodes: 0,
            cutoff_nodes: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn increment_reopened_nodes(&mut self) {
        self.reopened_nodes += 1;
    }

    pub fn increment_cutoff_nodes(&mut self) {
        self.cutoff_nodes += 1;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn elapsed(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.log();
        }
    }

    pub fn log(&mut self) {
        self.last_log_time = Instant::now();
        trace!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            reopened_nodes = self.reopened_nodes,
            cutoff_nodes = self.cutoff_nodes,
        );
    }

    pub fn finalise_search(&self, solved: bool) {
        debug!(
            solved,
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            reopened_nodes = self.reopened_nodes,
            cutoff_nodes = self.cutoff_nodes,
            search_duration = %humantime::format_duration(self.elapsed()),
            "search finished"
        );
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
