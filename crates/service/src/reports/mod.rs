//! Read-only aggregations over record snapshots.
//!
//! These are plain functions over slices; callers fetch snapshots from the
//! stores and pass them in. Only `pipeline::move_lead` talks to a store.

pub mod search;
pub mod dashboard;
pub mod analytics;
pub mod leaderboard;
pub mod pipeline;
pub mod calendar;

use models::Lead;

/// Whole-number percentage, rounded half up; `0` when `whole` is zero.
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u32
}

/// Mean rounded to a whole currency unit; `0` for an empty set.
pub fn rounded_mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (total / count as f64).round()
}

pub(crate) fn sum_values<'a, I>(leads: I) -> f64
where
    I: IntoIterator<Item = &'a Lead>,
{
    leads.into_iter().map(Lead::value_or_zero).sum()
}
