use serde::Serialize;
use std::collections::BTreeMap;

/// Extra hours keyed by (worker, day).
///
/// Lives outside the generator; regeneration replaces it with an empty map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OvertimeMap {
    entries: BTreeMap<(String, u32), f64>,
}

impl OvertimeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overtime for one cell, 0 when never set.
    pub fn get(&self, worker: &str, day: u32) -> f64 {
        self.entries
            .get(&(worker.to_string(), day))
            .copied()
            .unwrap_or(0.0)
    }

    /// Direct overwrite of one key.
    pub fn set(&mut self, worker: &str, day: u32, hours: f64) {
        self.entries.insert((worker.to_string(), day), hours);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn total_for(&self, worker: &str) -> f64 {
        self.entries
            .iter()
            .filter(|((w, _), _)| w == worker)
            .map(|(_, h)| *h)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32, f64)> {
        self.entries
            .iter()
            .map(|((w, d), h)| (w.as_str(), *d, *h))
    }
}

/// Flat entry used when the map is serialized.
#[derive(Debug, Serialize)]
pub struct OvertimeEntry<'a> {
    pub worker: &'a str,
    pub day: u32,
    pub hours: f64,
}

impl Serialize for OvertimeMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter().map(|(worker, day, hours)| OvertimeEntry {
            worker,
            day,
            hours,
        }))
    }
}
