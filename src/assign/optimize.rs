use super::{AssignError, Assignment, WorkloadTracker};
use crate::engineer::{validate_roster, Engineer};

/// Post-processing pass that redistributes an existing assignment list.
pub trait WorkloadOptimizer {
    /// Optimizer name for logs.
    fn name(&self) -> &'static str;

    /// Produce a rebalanced assignment list.
    ///
    /// Fails only on an empty or malformed roster, or on assignments that
    /// name engineers outside it.
    fn rebalance(
        &self,
        assignments: &[Assignment],
        engineers: &[Engineer],
    ) -> Result<Vec<Assignment>, AssignError>;
}

/// Single forward pass moving stories off engineers loaded above `mean + 1`.
///
/// A story whose engineer is over the threshold goes to whoever is least
/// loaded at that moment (earliest in roster order on ties), and that
/// engineer's count goes up. The original engineer's count is never
/// lowered, so every later story of theirs in the same pass is moved too.
/// Runs in O(n·k).
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdRebalance;

impl WorkloadOptimizer for ThresholdRebalance {
    fn name(&self) -> &'static str {
        "threshold"
    }

    fn rebalance(
        &self,
        assignments: &[Assignment],
        engineers: &[Engineer],
    ) -> Result<Vec<Assignment>, AssignError> {
        validate_roster(engineers)?;
        let mut workload = WorkloadTracker::from_assignments(engineers, assignments)?;
        let threshold = workload.mean()? + 1.0;

        let mut rebalanced = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let current = workload.load(&assignment.engineer).unwrap_or(0);
            if current as f64 > threshold {
                if let Some(target) = workload.least_loaded() {
                    workload.record_at(target);
                    rebalanced.push(Assignment::new(
                        assignment.story.clone(),
                        workload.name_at(target),
                    ));
                    continue;
                }
            }
            rebalanced.push(assignment.clone());
        }

        Ok(rebalanced)
    }
}

/// 0/1-knapsack style rebalance over a tasks × engineers table.
///
/// Every cell of the value table is `load(engineer) + 1`. The DP keeps a
/// cell when pairing task `t` with engineer `e` is at least as good as
/// skipping the task. Backtracking walks task and engineer indices down
/// together from the bottom-right corner and emits a pair for each kept
/// cell, so at most `min(tasks, engineers)` pairs come back and stories are
/// dropped whenever the two counts differ. With equal counts every story is
/// kept. Output is in ascending task order.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnapsackRebalance;

impl KnapsackRebalance {
    fn value_table(workload: &WorkloadTracker, tasks: usize) -> Vec<Vec<usize>> {
        let row: Vec<usize> = (0..workload.len())
            .map(|idx| workload.load_at(idx) + 1)
            .collect();
        vec![row; tasks]
    }
}

impl WorkloadOptimizer for KnapsackRebalance {
    fn name(&self) -> &'static str {
        "knapsack"
    }

    fn rebalance(
        &self,
        assignments: &[Assignment],
        engineers: &[Engineer],
    ) -> Result<Vec<Assignment>, AssignError> {
        validate_roster(engineers)?;
        let workload = WorkloadTracker::from_assignments(engineers, assignments)?;

        let num_tasks = assignments.len();
        let num_engineers = engineers.len();
        let values = Self::value_table(&workload, num_tasks);

        let mut dp = vec![vec![0usize; num_engineers + 1]; num_tasks + 1];
        let mut keep = vec![vec![false; num_engineers + 1]; num_tasks + 1];

        for t in 1..=num_tasks {
            for e in 1..=num_engineers {
                let take = dp[t - 1][e - 1] + values[t - 1][e - 1];
                let skip = dp[t - 1][e];
                if take >= skip {
                    dp[t][e] = take;
                    keep[t][e] = true;
                } else {
                    dp[t][e] = skip;
                }
            }
        }

        let mut selected = Vec::new();
        let (mut t, mut e) = (num_tasks, num_engineers);
        while t > 0 && e > 0 {
            if keep[t][e] {
                selected.push(Assignment::new(
                    assignments[t - 1].story.clone(),
                    engineers[e - 1].name.clone(),
                ));
            }
            t -= 1;
            e -= 1;
        }
        selected.reverse();

        Ok(selected)
    }
}
