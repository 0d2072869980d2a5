use super::Prd;
use crate::engineer::{self, Engineer};

/// Headline numbers about a PRD and the roster it will be staffed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub product_name: String,
    pub objectives: usize,
    pub functional_areas: usize,
    pub engineers: usize,
    pub roles: Vec<String>,
}

impl Summary {
    /// Build a summary from a PRD and roster.
    pub fn new(prd: &Prd, engineers: &[Engineer]) -> Self {
        Self {
            product_name: prd.display_name().to_string(),
            objectives: prd.objectives.len(),
            functional_areas: prd.functional_requirements.len(),
            engineers: engineers.len(),
            roles: engineer::roles(engineers)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    /// Log-ready lines, one fact per line.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Product Name: {}", self.product_name),
            format!("Number of Objectives: {}", self.objectives),
            format!("Functional Areas: {}", self.functional_areas),
            format!("Number of Engineers: {}", self.engineers),
            format!("Engineer Roles: {}", self.roles.join(", ")),
        ]
    }
}
