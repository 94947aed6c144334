// Per-call search state: deadline, node counter and the sticky abort flag
//
// One context is created by the iterative deepening driver for each
// move-selection call and passed by reference through the whole recursion.
// Once aborted it stays aborted; every pending node then returns a neutral
// score and the driver discards the unfinished depth.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        pub use web_time::{Duration, Instant};
    } else {
        pub use std::time::{Duration, Instant};
    }
}

#[derive(Debug, Clone)]
pub struct SearchContext {
    deadline: Option<Instant>,
    node_limit: Option<u64>,
    check_interval: u64,
    nodes: u64,
    aborted: bool,
}

impl SearchContext {
    /// Context that aborts once `deadline` has passed
    pub fn with_deadline(deadline: Instant, check_interval: u64) -> Self {
        Self {
            deadline: Some(deadline),
            node_limit: None,
            check_interval: check_interval.max(1),
            nodes: 0,
            aborted: false,
        }
    }

    /// Context that never aborts on its own
    pub fn unbounded() -> Self {
        Self {
            deadline: None,
            node_limit: None,
            check_interval: u64::MAX,
            nodes: 0,
            aborted: false,
        }
    }

    pub fn with_node_limit(mut self, node_limit: Option<u64>) -> Self {
        self.node_limit = node_limit;
        self
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn abort(&mut self) {
        self.aborted = true;
    }

    /// Count one visited node
    ///
    /// The clock is only read on every `check_interval`-th node. Returns
    /// true when the search has to stop.
    #[inline]
    pub fn visit(&mut self) -> bool {
        self.nodes += 1;

        if let Some(limit) = self.node_limit {
            if self.nodes >= limit {
                self.aborted = true;
            }
        }
        if self.nodes % self.check_interval == 0 {
            self.poll_deadline();
        }

        self.aborted
    }

    /// Read the clock now and abort if the deadline has passed
    pub fn poll_deadline(&mut self) -> bool {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                if !self.aborted {
                    log::trace!("search deadline reached after {} nodes", self.nodes);
                }
                self.aborted = true;
            }
        }
        self.aborted
    }
}
