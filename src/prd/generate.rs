use super::Sections;

/// Epic labels and user stories derived from a PRD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpicsAndStories {
    pub epics: Vec<String>,
    pub stories: Vec<String>,
}

/// Render one requirement as a user story.
pub fn story_for_requirement(requirement: &str) -> String {
    format!(
        "As a user, I want {} so that I can improve productivity.",
        requirement
    )
}

/// One epic per functional-requirement category, one story per requirement.
///
/// Story order follows category order, then requirement order.
pub fn generate_epics_and_stories(sections: &Sections) -> EpicsAndStories {
    let mut out = EpicsAndStories::default();
    for (category, requirements) in &sections.functional_requirements {
        out.epics.push(format!("Epic: {}", category));
        out.stories
            .extend(requirements.iter().map(|r| story_for_requirement(r)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_epics_and_stories() {
        let sections = Sections {
            functional_requirements: vec![
                ("Auth".to_string(), vec!["to log in".to_string(), "to log out".to_string()]),
                ("Reports".to_string(), vec!["a weekly summary".to_string()]),
            ],
            ..Sections::default()
        };

        let out = generate_epics_and_stories(&sections);
        assert_eq!(out.epics, vec!["Epic: Auth", "Epic: Reports"]);
        assert_eq!(
            out.stories,
            vec![
                "As a user, I want to log in so that I can improve productivity.",
                "As a user, I want to log out so that I can improve productivity.",
                "As a user, I want a weekly summary so that I can improve productivity.",
            ]
        );
    }

    #[test]
    fn test_category_without_requirements_still_gets_epic() {
        let sections = Sections {
            functional_requirements: vec![("Empty".to_string(), Vec::new())],
            ..Sections::default()
        };
        let out = generate_epics_and_stories(&sections);
        assert_eq!(out.epics, vec!["Epic: Empty"]);
        assert!(out.stories.is_empty());
    }
}
