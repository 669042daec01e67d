use std::sync::Arc;
use tokio::sync::RwLock;

use models::{Activity, Deal, Lead};

/// Records addressed by a store-assigned integer identifier.
pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for Lead {
    fn key(&self) -> i64 { self.id }
}

impl Keyed for Deal {
    fn key(&self) -> i64 { self.id }
}

impl Keyed for Activity {
    fn key(&self) -> i64 { self.id }
}

/// Next identifier: one past the largest in use, `1` for an empty table.
pub fn next_id<T: Keyed>(rows: &[T]) -> i64 {
    rows.iter().map(Keyed::key).max().map_or(1, |max| max + 1)
}

/// Generic in-memory table of keyed records, kept in insertion order.
///
/// Every read hands out owned clones, and every write runs to completion
/// under a single write guard, so callers never observe a half-applied change
/// and cannot reach the stored values through what they were given.
#[derive(Clone)]
pub struct RecordTable<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> RecordTable<T>
where
    T: Keyed + Clone + Send + Sync,
{
    pub fn new(seed: Vec<T>) -> Self {
        Self { rows: Arc::new(RwLock::new(seed)) }
    }

    /// Snapshot of all rows.
    pub async fn list(&self) -> Vec<T> {
        let rows = self.rows.read().await;
        rows.clone()
    }

    pub async fn get(&self, id: i64) -> Option<T> {
        let rows = self.rows.read().await;
        rows.iter().find(|r| r.key() == id).cloned()
    }

    /// Snapshot of rows matching `pred`.
    pub async fn filter<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let rows = self.rows.read().await;
        rows.iter().filter(|r| pred(r)).cloned().collect()
    }

    /// Allocate the next id, build the row from it and append.
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(i64) -> T,
    {
        let mut rows = self.rows.write().await;
        let row = build(next_id(&rows));
        rows.push(row.clone());
        row
    }

    /// Apply `f` to the row with `id`; `None` when absent, in which case nothing changes.
    pub async fn update<F>(&self, id: i64, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|r| r.key() == id)?;
        f(row);
        Some(row.clone())
    }

    pub async fn remove(&self, id: i64) -> Option<T> {
        let mut rows = self.rows.write().await;
        let index = rows.iter().position(|r| r.key() == id)?;
        Some(rows.remove(index))
    }

    /// Remove every row whose id is in `ids`; unknown ids are skipped.
    pub async fn remove_many(&self, ids: &[i64]) -> Vec<T> {
        let mut rows = self.rows.write().await;
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(rows.len());
        for row in rows.drain(..) {
            if ids.contains(&row.key()) {
                removed.push(row);
            } else {
                kept.push(row);
            }
        }
        *rows = kept;
        removed
    }
}
