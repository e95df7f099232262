//! The deferred-search machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Picking a category does not open the external site immediately; a short
//! overlay runs first, then the URL opens in a new tab. Arming a second
//! search inside the window supersedes the first: each arm bumps a
//! generation counter, and a timer may only fire the generation it was
//! armed with. At most one external navigation results.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Delay between arming a search and opening the external URL.
pub const SEARCH_DELAY_MS: u32 = 2500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSearch {
    pub url: String,
    pub category: String,
}

/// State for the single in-flight deferred search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeferredSearch {
    generation: u64,
    pending: Option<PendingSearch>,
}

impl DeferredSearch {
    /// Arm a search, superseding any pending one. Returns the generation
    /// token the caller must present to [`fire`](Self::fire).
    pub fn arm(&mut self, url: impl Into<String>, category: impl Into<String>) -> u64 {
        self.generation += 1;
        self.pending = Some(PendingSearch { url: url.into(), category: category.into() });
        self.generation
    }

    /// Abandon the pending search, invalidating outstanding timers.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Consume the pending search if `generation` is still current. A stale
    /// token (superseded or cancelled) yields nothing.
    pub fn fire(&mut self, generation: u64) -> Option<PendingSearch> {
        if generation == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    /// Whether the overlay should be showing.
    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    /// Category name for the overlay copy.
    pub fn category(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.category.as_str())
    }
}
