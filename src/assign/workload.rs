use std::collections::HashMap;

use super::{AssignError, Assignment};
use crate::engineer::Engineer;

/// Per-engineer story counts for one assignment pass.
///
/// Counters start at zero for every roster engineer and only ever go up.
/// Iteration follows roster order, which is what tie-breaks rely on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadTracker {
    names: Vec<String>,
    counts: Vec<usize>,
    index: HashMap<String, usize>,
}

impl WorkloadTracker {
    /// Create a tracker with a zero counter for every engineer.
    pub fn new(engineers: &[Engineer]) -> Self {
        let names: Vec<String> = engineers.iter().map(|e| e.name.clone()).collect();
        let index = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self {
            counts: vec![0; names.len()],
            names,
            index,
        }
    }

    /// Create a tracker preloaded with counts from existing assignments.
    ///
    /// Fails if an assignment names an engineer outside the roster.
    pub fn from_assignments(
        engineers: &[Engineer],
        assignments: &[Assignment],
    ) -> Result<Self, AssignError> {
        let mut tracker = Self::new(engineers);
        for assignment in assignments {
            let idx = tracker.position(&assignment.engineer).ok_or_else(|| {
                AssignError::Configuration(format!(
                    "assignment names unknown engineer: {}",
                    assignment.engineer
                ))
            })?;
            tracker.record_at(idx);
        }
        Ok(tracker)
    }

    /// Number of tracked engineers.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when no engineers are tracked.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Roster position of an engineer.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Current count for an engineer, if known.
    pub fn load(&self, name: &str) -> Option<usize> {
        self.position(name).map(|idx| self.counts[idx])
    }

    /// Current count by roster position.
    pub fn load_at(&self, idx: usize) -> usize {
        self.counts[idx]
    }

    /// Add one story to the engineer at `idx`.
    pub fn record_at(&mut self, idx: usize) {
        self.counts[idx] += 1;
    }

    /// Add one story to a named engineer. Returns false for unknown names.
    pub fn record(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.record_at(idx);
                true
            }
            None => false,
        }
    }

    /// Sum of all counters.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Mean load across all tracked engineers.
    pub fn mean(&self) -> Result<f64, AssignError> {
        if self.is_empty() {
            return Err(AssignError::Configuration(
                "cannot compute mean workload of an empty roster".to_string(),
            ));
        }
        Ok(self.total() as f64 / self.len() as f64)
    }

    /// Position of the least-loaded engineer; ties go to the earliest in roster order.
    pub fn least_loaded(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, &count) in self.counts.iter().enumerate() {
            match best {
                Some(b) if self.counts[b] <= count => {}
                _ => best = Some(idx),
            }
        }
        best
    }

    /// Name of the engineer at `idx`.
    pub fn name_at(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    /// Largest minus smallest counter.
    pub fn spread(&self) -> usize {
        let max = self.counts.iter().max().copied().unwrap_or(0);
        let min = self.counts.iter().min().copied().unwrap_or(0);
        max - min
    }

    /// `(name, count)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }
}
