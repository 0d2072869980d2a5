//! End-to-end PRD pipeline.
//!
//! Loads a PRD, summarizes it against the roster, generates epics and user
//! stories, assigns stories according to an [`AssignmentPlan`], optionally
//! rebalances, and writes the result. All engine work is delegated to
//! [`crate::assign`]; this module owns the I/O and the run log.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::assign::{AssignError, Assignment, AssignmentPlan, Mode, WorkloadTracker};
use crate::engineer::Engineer;
use crate::log::{Level, PipelineLogger};
use crate::output::{save_output, PipelineOutput};
use crate::prd::{self, Prd, Summary};
use crate::run_id::generate_run_id;

/// Pipeline failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Assign(#[from] AssignError),
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub run_id: String,
    pub plan: AssignmentPlan,
    pub summary: Summary,
    pub epics: Vec<String>,
    pub stories: Vec<String>,
    pub assignments: Vec<Assignment>,
    /// Stories per engineer in the final assignments, roster order.
    pub workload: Vec<(String, usize)>,
}

impl PipelineRun {
    pub fn to_output(&self) -> PipelineOutput {
        PipelineOutput::new(&self.epics, &self.stories, &self.assignments)
    }
}

/// Drives a PRD through story generation and assignment.
pub struct Pipeline {
    mode: Mode,
    plan: AssignmentPlan,
    engineers: Vec<Engineer>,
    logger: PipelineLogger,
}

impl Pipeline {
    /// Create a pipeline. `mode` labels the run; `plan` decides what executes.
    pub fn new(
        mode: Mode,
        plan: AssignmentPlan,
        engineers: Vec<Engineer>,
        logger: PipelineLogger,
    ) -> Self {
        Self {
            mode,
            plan,
            engineers,
            logger,
        }
    }

    /// A failed log write is reported on stderr and the run continues.
    fn note(&self, level: Level, message: &str) {
        if let Err(e) = self.logger.log(level, message) {
            eprintln!("warning: failed to write log: {}", e);
        }
    }

    /// Load the PRD at `prd_path`, process it and write `output_path`.
    pub fn run(&self, prd_path: &Path, output_path: &Path) -> Result<PipelineRun, PipelineError> {
        let run_id = generate_run_id();
        if let Err(e) = self.logger.log_run_start(&run_id, self.mode.as_str()) {
            eprintln!("warning: failed to write log: {}", e);
        }

        self.note(
            Level::Info,
            &format!("Loading PRD data from {}", prd_path.display()),
        );
        let prd = prd::load_prd(prd_path).inspect_err(|e| {
            self.note(Level::Error, &format!("Error loading PRD file: {}", e));
        })?;

        let run = self.process(&prd, run_id).inspect_err(|e| {
            self.note(Level::Error, &format!("Pipeline failed: {}", e));
        })?;

        self.note(Level::Info, "Saving output to files...");
        save_output(output_path, &run.to_output()).inspect_err(|e| {
            self.note(Level::Error, &format!("Error saving output: {}", e));
        })?;
        self.note(
            Level::Info,
            &format!("Output successfully saved to {}", output_path.display()),
        );

        self.note(Level::Info, "Pipeline execution complete.");
        Ok(run)
    }

    /// Process an already loaded PRD. Performs no file I/O besides logging.
    pub fn process(&self, prd: &Prd, run_id: String) -> Result<PipelineRun, PipelineError> {
        self.note(
            Level::Info,
            &format!("Processing PRD for mode: {}", self.mode.as_str()),
        );

        let summary = Summary::new(prd, &self.engineers);
        for line in summary.lines() {
            self.note(Level::Info, &line);
        }

        let sections = prd.sections();
        self.note(
            Level::Info,
            "Extracted sections: Objectives, Functional Requirements, User Personas",
        );

        let generated = prd::generate_epics_and_stories(&sections);
        self.note(
            Level::Info,
            &format!(
                "Generated {} epics and {} user stories.",
                generated.epics.len(),
                generated.stories.len()
            ),
        );
        if generated.stories.is_empty() {
            self.note(Level::Warn, "PRD produced no user stories");
        }

        let assignments = self.assign(&generated.stories)?;
        for assignment in &assignments {
            self.note(
                Level::Info,
                &format!("Assigned: {} -> {}", assignment.story, assignment.engineer),
            );
        }

        let workload = WorkloadTracker::from_assignments(&self.engineers, &assignments)?
            .iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect::<Vec<_>>();
        for (name, count) in &workload {
            self.note(Level::Info, &format!("Workload {}: {}", name, count));
        }

        Ok(PipelineRun {
            run_id,
            plan: self.plan,
            summary,
            epics: generated.epics,
            stories: generated.stories,
            assignments,
            workload,
        })
    }

    /// Run the configured strategy and optimizer over `stories`.
    pub fn assign(&self, stories: &[String]) -> Result<Vec<Assignment>, PipelineError> {
        self.note(
            Level::Info,
            &format!("Assigning tasks using {}", self.plan.describe()),
        );

        let strategy = self.plan.build_strategy();
        let assignments = strategy.assign(stories, &self.engineers)?;
        self.note(
            Level::Info,
            &format!(
                "Assigned {} tasks to engineers with {}.",
                assignments.len(),
                strategy.name()
            ),
        );

        let Some(optimizer) = self.plan.build_optimizer() else {
            return Ok(assignments);
        };

        self.note(Level::Info, "Optimizing engineer workload...");
        let optimized = optimizer.rebalance(&assignments, &self.engineers)?;
        let moved = optimized
            .iter()
            .zip(&assignments)
            .filter(|(after, before)| after != before)
            .count();
        self.note(
            Level::Info,
            &format!(
                "{} rebalance changed {} of {} assignments.",
                optimizer.name(),
                moved,
                assignments.len()
            ),
        );
        if optimized.len() < assignments.len() {
            self.note(
                Level::Warn,
                &format!(
                    "{} rebalance dropped {} stories",
                    optimizer.name(),
                    assignments.len() - optimized.len()
                ),
            );
        }

        Ok(optimized)
    }
}
