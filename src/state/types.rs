//! In-memory pane -> input method records.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Last-known input method for one pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Input method identifier (e.g. "com.apple.keylayout.ABC")
    #[serde(default)]
    pub im: String,

    /// Unix timestamp when the record was set
    #[serde(default, deserialize_with = "clamp_negative")]
    pub ts: u64,
}

/// All records, keyed by pane key (e.g. "session:%1").
///
/// Serialized as `{"records": {...}}`. A missing or null `records` key
/// loads as an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub records: BTreeMap<String, Record>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Negative timestamps from hand-edited files read as 0 (long expired)
/// instead of failing the whole store.
fn clamp_negative<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let ts = i64::deserialize(deserializer)?;
    Ok(u64::try_from(ts).unwrap_or(0))
}

/// Whether a record stamped at `ts` is stale at `now`.
///
/// An age of exactly `ttl` is still fresh. Timestamps in the future have
/// age zero. A negative `ttl` expires everything.
pub fn is_expired(ts: u64, ttl: i64, now: u64) -> bool {
    i128::from(now.saturating_sub(ts)) > i128::from(ttl)
}

impl Store {
    /// Input method for `key` if a fresh record exists.
    ///
    /// Missing and expired keys are indistinguishable.
    pub fn get(&self, key: &str, ttl: i64, now: u64) -> Option<&str> {
        self.records
            .get(key)
            .filter(|rec| !is_expired(rec.ts, ttl, now))
            .map(|rec| rec.im.as_str())
    }

    /// Drop every expired record. Returns how many were removed.
    pub fn prune(&mut self, ttl: i64, now: u64) -> usize {
        let before = self.records.len();
        self.records.retain(|_, rec| !is_expired(rec.ts, ttl, now));
        before - self.records.len()
    }

    /// Prune expired records, then record `im` for `key` at `now`.
    ///
    /// Pruning first keeps a reused pane key from inheriting stale data.
    pub fn set(&mut self, key: &str, im: &str, ttl: i64, now: u64) -> usize {
        let pruned = self.prune(ttl, now);
        self.records.insert(
            key.to_string(),
            Record {
                im: im.to_string(),
                ts: now,
            },
        );
        pruned
    }
}
