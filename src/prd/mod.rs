//! Product-requirements document ingestion.
//!
//! Reads a PRD JSON file, pulls out the sections the pipeline cares about
//! and turns functional requirements into epics and user stories.

mod generate;
mod model;
mod summary;

pub use generate::{generate_epics_and_stories, story_for_requirement, EpicsAndStories};
pub use model::{load_prd, parse_prd, Prd, Sections};
pub use summary::Summary;
