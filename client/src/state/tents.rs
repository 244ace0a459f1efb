//! Tent collection state for the dashboard and the tent form.
//!
//! DESIGN
//! ======
//! The collection behaves like a small query cache. `generation` grows on
//! every invalidation; the dashboard refetches whenever it changes and a
//! response is only applied if it belongs to the latest generation, so a slow
//! request can never overwrite fresher data.
//!
//! TRADE-OFFS
//! ==========
//! An invalidation keeps the previous collection on screen while the refetch
//! runs. Only the first load and a retry after failure show the spinner.

#[cfg(test)]
#[path = "tents_test.rs"]
mod tents_test;

use inventory::Tent;

/// Load status of the tent collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<Tent>),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TentsState {
    pub load: LoadState,
    pub generation: u64,
}

impl TentsState {
    /// Mark the collection stale so it is fetched again.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Leave the failed state and fetch again.
    pub fn retry(&mut self) {
        self.load = LoadState::Loading;
        self.invalidate();
    }

    /// Apply a fetch result started at `generation`. Stale results are dropped.
    /// A failed refetch keeps an already loaded collection.
    pub fn finish_fetch(&mut self, generation: u64, result: Result<Vec<Tent>, String>) {
        if generation != self.generation {
            return;
        }
        match result {
            Ok(tents) => self.load = LoadState::Loaded(tents),
            Err(message) => {
                if !matches!(self.load, LoadState::Loaded(_)) {
                    self.load = LoadState::Failed(message);
                }
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    #[must_use]
    pub fn tents(&self) -> &[Tent] {
        match &self.load {
            LoadState::Loaded(tents) => tents,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            LoadState::Loading | LoadState::Loaded(_) => None,
        }
    }

    /// Identifying strings already in use, used to seed the form blacklist.
    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.tents().iter().map(|t| t.identifying_string.clone()).collect()
    }
}
