use super::{AssignError, Assignment, SimilarityScorer, WorkloadTracker};
use crate::engineer::{validate_roster, Engineer};

/// Produces an initial story→engineer mapping.
///
/// Implementations emit exactly one assignment per story, in story order,
/// or fail before producing anything.
pub trait AssignmentStrategy {
    /// Strategy name for logs.
    fn name(&self) -> &'static str;

    /// Assign stories, charging each pick against `workload`.
    ///
    /// `workload` must have been built from the same roster, in the same order.
    fn assign_with(
        &self,
        stories: &[String],
        engineers: &[Engineer],
        workload: &mut WorkloadTracker,
    ) -> Result<Vec<Assignment>, AssignError>;

    /// Assign stories starting from an empty workload.
    fn assign(
        &self,
        stories: &[String],
        engineers: &[Engineer],
    ) -> Result<Vec<Assignment>, AssignError> {
        let mut workload = WorkloadTracker::new(engineers);
        self.assign_with(stories, engineers, &mut workload)
    }
}

/// Run a strategy with workload seeded from earlier assignments.
///
/// Returns the new assignments together with the final workload.
pub fn assign_stories(
    strategy: &dyn AssignmentStrategy,
    stories: &[String],
    engineers: &[Engineer],
    prior: &[Assignment],
) -> Result<(Vec<Assignment>, WorkloadTracker), AssignError> {
    validate_roster(engineers)?;
    let mut workload = WorkloadTracker::from_assignments(engineers, prior)?;
    let assignments = strategy.assign_with(stories, engineers, &mut workload)?;
    Ok((assignments, workload))
}

fn check_inputs(engineers: &[Engineer], workload: &WorkloadTracker) -> Result<(), AssignError> {
    validate_roster(engineers)?;
    let matches = workload.len() == engineers.len()
        && engineers
            .iter()
            .enumerate()
            .all(|(idx, e)| workload.position(&e.name) == Some(idx));
    if !matches {
        return Err(AssignError::Configuration(
            "workload tracker does not match engineer roster".to_string(),
        ));
    }
    Ok(())
}

/// Story `i` goes to `engineers[i % k]`. Ignores skills and current load.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl AssignmentStrategy for RoundRobin {
    fn name(&self) -> &'static str {
        "round-robin"
    }

    fn assign_with(
        &self,
        stories: &[String],
        engineers: &[Engineer],
        workload: &mut WorkloadTracker,
    ) -> Result<Vec<Assignment>, AssignError> {
        check_inputs(engineers, workload)?;

        let assignments = stories
            .iter()
            .enumerate()
            .map(|(i, story)| {
                let idx = i % engineers.len();
                workload.record_at(idx);
                Assignment::new(story.clone(), engineers[idx].name.clone())
            })
            .collect();
        Ok(assignments)
    }
}

/// Skill-aware greedy assignment with a running load penalty.
///
/// Each story goes to the engineer maximizing `score / (1 + load)`, where
/// `load` counts stories already handed to that engineer. Ties resolve to
/// the engineer listed first. Scores are computed up front; the
/// select-and-increment step runs strictly in story order.
pub struct GreedyWeighted {
    scorer: Box<dyn SimilarityScorer>,
}

impl GreedyWeighted {
    /// Create a greedy strategy backed by `scorer`.
    pub fn new<S: SimilarityScorer + 'static>(scorer: S) -> Self {
        Self {
            scorer: Box::new(scorer),
        }
    }

    /// Create a greedy strategy from an already boxed scorer.
    pub fn from_boxed(scorer: Box<dyn SimilarityScorer>) -> Self {
        Self { scorer }
    }

    fn score_table(&self, stories: &[String], engineers: &[Engineer]) -> Vec<Vec<f64>> {
        let descriptions: Vec<&str> = engineers.iter().map(|e| e.skills.as_str()).collect();
        stories
            .iter()
            .map(|story| self.scorer.score_all(story, &descriptions))
            .collect()
    }
}

impl std::fmt::Debug for GreedyWeighted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreedyWeighted")
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl AssignmentStrategy for GreedyWeighted {
    fn name(&self) -> &'static str {
        "greedy-weighted"
    }

    fn assign_with(
        &self,
        stories: &[String],
        engineers: &[Engineer],
        workload: &mut WorkloadTracker,
    ) -> Result<Vec<Assignment>, AssignError> {
        check_inputs(engineers, workload)?;

        let table = self.score_table(stories, engineers);
        let mut assignments = Vec::with_capacity(stories.len());

        for (story, scores) in stories.iter().zip(table) {
            let mut best_idx = 0;
            let mut best_adjusted = f64::NEG_INFINITY;
            for (idx, score) in scores.iter().enumerate() {
                let adjusted = score / (1.0 + workload.load_at(idx) as f64);
                if adjusted > best_adjusted {
                    best_adjusted = adjusted;
                    best_idx = idx;
                }
            }

            workload.record_at(best_idx);
            assignments.push(Assignment::new(story.clone(), engineers[best_idx].name.clone()));
        }

        Ok(assignments)
    }
}
