use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::pipeline::PipelineError;

/// A product-requirements document as stored on disk.
///
/// Every key is optional. `functional_requirements` maps a category name to
/// a list of requirement strings and keeps the order written in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prd {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub objectives: Vec<Value>,
    #[serde(default)]
    pub functional_requirements: Map<String, Value>,
    #[serde(default)]
    pub user_personas: Vec<Value>,
}

/// The PRD sections used downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    pub objectives: Vec<String>,
    /// `(category, requirements)` in document order.
    pub functional_requirements: Vec<(String, Vec<String>)>,
    pub user_personas: Vec<String>,
}

impl Prd {
    /// Extract objectives, functional requirements and personas.
    ///
    /// Non-string entries are rendered as compact JSON. A category whose
    /// value is a single scalar is treated as one requirement.
    pub fn sections(&self) -> Sections {
        let functional_requirements = self
            .functional_requirements
            .iter()
            .map(|(category, value)| {
                let requirements = match value {
                    Value::Array(items) => items.iter().map(value_text).collect(),
                    Value::Null => Vec::new(),
                    other => vec![value_text(other)],
                };
                (category.clone(), requirements)
            })
            .collect();

        Sections {
            objectives: self.objectives.iter().map(value_text).collect(),
            functional_requirements,
            user_personas: self.user_personas.iter().map(value_text).collect(),
        }
    }

    /// Product name, or `N/A` when absent.
    pub fn display_name(&self) -> &str {
        self.product_name.as_deref().unwrap_or("N/A")
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse PRD JSON text.
pub fn parse_prd(content: &str) -> Result<Prd, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load a PRD from a JSON file.
pub fn load_prd<P: AsRef<Path>>(path: P) -> Result<Prd, PipelineError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| PipelineError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_prd(&content).map_err(|e| PipelineError::Json {
        path: path.display().to_string(),
        source: e,
    })
}
