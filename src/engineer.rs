//! Engineer roster records and loading.
//!
//! A roster is a JSON array of `{ "name", "role", "skills" }` objects.
//! Engineers are read-only once loaded; workload lives in
//! [`crate::assign::WorkloadTracker`], never on the record itself.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assign::AssignError;

/// A single engineer from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engineer {
    /// Unique key used in assignments.
    pub name: String,
    /// Job title, e.g. "Backend Engineer".
    #[serde(default)]
    pub role: String,
    /// Free-text capability description matched against story text.
    #[serde(default)]
    pub skills: String,
}

impl Engineer {
    /// Create a new engineer record.
    pub fn new(name: impl Into<String>, role: impl Into<String>, skills: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            skills: skills.into(),
        }
    }
}

/// Check that a roster can drive an assignment pass.
///
/// The roster must be non-empty, and every name must be non-blank and unique
/// since names key the workload counters.
pub fn validate_roster(engineers: &[Engineer]) -> Result<(), AssignError> {
    if engineers.is_empty() {
        return Err(AssignError::Configuration(
            "engineer roster is empty".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(engineers.len());
    for (idx, engineer) in engineers.iter().enumerate() {
        if engineer.name.trim().is_empty() {
            return Err(AssignError::Configuration(format!(
                "engineer at position {} has an empty name",
                idx
            )));
        }
        if !seen.insert(engineer.name.as_str()) {
            return Err(AssignError::Configuration(format!(
                "duplicate engineer name: {}",
                engineer.name
            )));
        }
    }

    Ok(())
}

/// Parse a roster from JSON text and validate it.
pub fn parse_roster(content: &str) -> Result<Vec<Engineer>, AssignError> {
    let engineers: Vec<Engineer> = serde_json::from_str(content)
        .map_err(|e| AssignError::Configuration(format!("malformed engineer roster: {}", e)))?;
    validate_roster(&engineers)?;
    Ok(engineers)
}

/// Load a roster from a JSON file.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Engineer>, AssignError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        AssignError::Configuration(format!(
            "failed to read engineer profiles {}: {}",
            path.display(),
            e
        ))
    })?;
    parse_roster(&content)
}

/// Distinct roles in roster order.
pub fn roles(engineers: &[Engineer]) -> Vec<&str> {
    let mut seen = HashSet::new();
    engineers
        .iter()
        .map(|e| e.role.as_str())
        .filter(|role| seen.insert(*role))
        .collect()
}
