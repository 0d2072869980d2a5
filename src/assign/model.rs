/// A single story attributed to an engineer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    /// The user story text.
    pub story: String,
    /// Name of the assigned engineer.
    pub engineer: String,
}

impl Assignment {
    /// Create a new assignment.
    pub fn new(story: impl Into<String>, engineer: impl Into<String>) -> Self {
        Self {
            story: story.into(),
            engineer: engineer.into(),
        }
    }
}

impl From<Assignment> for (String, String) {
    fn from(a: Assignment) -> Self {
        (a.story, a.engineer)
    }
}
