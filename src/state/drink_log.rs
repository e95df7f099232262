//! The private drink tracker.
//!
//! The log maps `YYYY-MM-DD` dates to drink counts and lives only in the
//! browser's local storage; no server ever sees it. All arithmetic here is
//! pure over injected date strings.

#[cfg(test)]
#[path = "drink_log_test.rs"]
mod drink_log_test;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Drinks logged per local calendar day.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrinkLog(BTreeMap<String, u32>);

impl DrinkLog {
    pub fn count(&self, date: &str) -> u32 {
        self.0.get(date).copied().unwrap_or(0)
    }

    /// Add one drink for `date`.
    pub fn increment(&mut self, date: &str) {
        *self.0.entry(date.to_owned()).or_insert(0) += 1;
    }

    /// Remove one drink for `date`. Counts never go below zero; decrementing
    /// an empty day is a no-op.
    pub fn decrement(&mut self, date: &str) {
        if let Some(count) = self.0.get_mut(date) {
            *count = count.saturating_sub(1);
        }
    }

    /// Counts for the given dates, in the same order.
    pub fn counts_for(&self, dates: &[String]) -> Vec<u32> {
        dates.iter().map(|d| self.count(d)).collect()
    }
}

/// Weekly total across a set of per-day counts.
pub fn weekly_total(counts: &[u32]) -> u32 {
    counts.iter().sum()
}

/// Estimated savings: one average drink price per drink-free day.
pub fn money_saved(counts: &[u32], avg_drink_price: f64) -> f64 {
    let free_days = counts.iter().filter(|&&c| c == 0).count();
    free_days as f64 * avg_drink_price
}

/// Tracker settings, stored alongside the log. The storage shape keeps the
/// original camel-case key so existing devices keep their setting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "avgDrinkPrice")]
    pub avg_drink_price: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self { avg_drink_price: 5.00 }
    }
}
