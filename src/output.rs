//! Pipeline output file.
//!
//! Results are written as JSON:
//! `{"epics": [...], "user_stories": [...], "assignments": [[story, engineer], ...]}`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assign::Assignment;
use crate::pipeline::PipelineError;

/// Serializable pipeline result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub epics: Vec<String>,
    pub user_stories: Vec<String>,
    /// `(story, engineer)` pairs, serialized as two-element arrays.
    pub assignments: Vec<(String, String)>,
}

impl PipelineOutput {
    pub fn new(epics: &[String], user_stories: &[String], assignments: &[Assignment]) -> Self {
        Self {
            epics: epics.to_vec(),
            user_stories: user_stories.to_vec(),
            assignments: assignments.iter().cloned().map(Into::into).collect(),
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Write output JSON, creating parent directories as needed.
pub fn save_output<P: AsRef<Path>>(path: P, output: &PipelineOutput) -> Result<(), PipelineError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let json = output.to_json().map_err(|e| PipelineError::Json {
        path: display.clone(),
        source: e,
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PipelineError::Io {
                path: display.clone(),
                source: e,
            })?;
        }
    }

    fs::write(path, json + "\n").map_err(|e| PipelineError::Io {
        path: display,
        source: e,
    })
}

/// Read a previously written output file.
pub fn load_output<P: AsRef<Path>>(path: P) -> Result<PipelineOutput, PipelineError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| PipelineError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| PipelineError::Json {
        path: path.display().to_string(),
        source: e,
    })
}
