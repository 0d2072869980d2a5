use std::collections::HashMap;

use super::AssignError;

/// Skill-match scoring between a story and an engineer's skill description.
///
/// Backends implement [`similarity`](SimilarityScorer::similarity) and may
/// fail; callers use [`score`](SimilarityScorer::score), which never fails
/// and always lands in `[-1, 1]`.
pub trait SimilarityScorer {
    /// Backend name for logs.
    fn name(&self) -> &'static str;

    /// Raw cosine-style affinity, higher is a better fit.
    fn similarity(&self, story: &str, description: &str) -> Result<f64, AssignError>;

    /// Affinity in `[-1, 1]`. Backend errors and non-finite values score 0.0.
    fn score(&self, story: &str, description: &str) -> f64 {
        match self.similarity(story, description) {
            Ok(value) if value.is_finite() => value.clamp(-1.0, 1.0),
            _ => 0.0,
        }
    }

    /// Score one story against many descriptions, preserving input order.
    fn score_all(&self, story: &str, descriptions: &[&str]) -> Vec<f64> {
        descriptions
            .iter()
            .map(|description| self.score(story, description))
            .collect()
    }
}

/// Returns the same score for every pair.
///
/// With a constant scorer the greedy strategy degenerates to pure load
/// balancing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantScorer(pub f64);

impl Default for ConstantScorer {
    fn default() -> Self {
        Self(1.0)
    }
}

impl SimilarityScorer for ConstantScorer {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn similarity(&self, _story: &str, _description: &str) -> Result<f64, AssignError> {
        Ok(self.0)
    }
}

/// Words too common in story templates and skill blurbs to signal a match.
const STOP_WORDS: &[&str] = &[
    "an", "and", "are", "as", "at", "be", "by", "can", "for", "from", "has", "have", "in", "is",
    "it", "of", "on", "or", "so", "that", "the", "to", "want", "was", "we", "will", "with",
];

/// Keyword-overlap scorer: cosine similarity of term-frequency vectors.
///
/// Text is lowercased and split on non-alphanumeric characters; tokens
/// shorter than two characters and common stop words are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl KeywordScorer {
    fn term_frequencies(text: &str) -> HashMap<String, f64> {
        let mut tf = HashMap::new();
        for token in tokenize(text) {
            *tf.entry(token).or_insert(0.0) += 1.0;
        }
        tf
    }

    fn cosine(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
        let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        let dot: f64 = small
            .iter()
            .filter_map(|(token, x)| large.get(token).map(|y| x * y))
            .sum();
        let mag_a: f64 = a.values().map(|v| v * v).sum::<f64>().sqrt();
        let mag_b: f64 = b.values().map(|v| v * v).sum::<f64>().sqrt();

        let denom = mag_a * mag_b;
        if denom == 0.0 {
            0.0
        } else {
            dot / denom
        }
    }

    fn similarity_with(
        story_tf: &HashMap<String, f64>,
        description: &str,
    ) -> Result<f64, AssignError> {
        if description.trim().is_empty() {
            return Err(AssignError::Scoring("empty skill description".to_string()));
        }
        let description_tf = Self::term_frequencies(description);
        if description_tf.is_empty() {
            return Err(AssignError::Scoring(format!(
                "no usable keywords in skill description: {}",
                description
            )));
        }
        Ok(Self::cosine(story_tf, &description_tf))
    }
}

impl SimilarityScorer for KeywordScorer {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn similarity(&self, story: &str, description: &str) -> Result<f64, AssignError> {
        Self::similarity_with(&Self::term_frequencies(story), description)
    }

    fn score_all(&self, story: &str, descriptions: &[&str]) -> Vec<f64> {
        let story_tf = Self::term_frequencies(story);
        descriptions
            .iter()
            .map(|description| match Self::similarity_with(&story_tf, description) {
                Ok(value) if value.is_finite() => value.clamp(-1.0, 1.0),
                _ => 0.0,
            })
            .collect()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= 2 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_short_words_and_stop_words() {
        let tokens = tokenize("As a user, I want OAuth login for the API");
        assert_eq!(tokens, vec!["user", "oauth", "login", "api"]);
    }

    #[test]
    fn test_keyword_identical_text_scores_one() {
        let score = KeywordScorer.score("rust database api", "rust database api");
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_keyword_disjoint_text_scores_zero() {
        let score = KeywordScorer.score("react css layout", "postgres indexing");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_keyword_prefers_overlapping_skills() {
        let story = "As a user, I want a dashboard built in react so that I can see charts";
        let frontend = KeywordScorer.score(story, "react css dashboard charts");
        let backend = KeywordScorer.score(story, "postgres rust apis");
        assert!(frontend > backend);
    }

    #[test]
    fn test_keyword_empty_description_is_scoring_error() {
        let err = KeywordScorer.similarity("story text", "   ").unwrap_err();
        assert!(matches!(err, AssignError::Scoring(_)));
    }

    #[test]
    fn test_keyword_empty_description_degrades_to_neutral() {
        assert_eq!(KeywordScorer.score("story text", ""), 0.0);
        assert_eq!(KeywordScorer.score("story text", "a I"), 0.0);
    }

    #[test]
    fn test_keyword_score_all_matches_single_scores() {
        let story = "As a user, I want search over invoices so that I can find payments";
        let descriptions = ["search elasticsearch", "", "payments invoices billing", "css"];
        let batch = KeywordScorer.score_all(story, &descriptions);
        let single: Vec<f64> = descriptions
            .iter()
            .map(|d| KeywordScorer.score(story, d))
            .collect();
        assert_eq!(batch, single);
    }

    #[test]
    fn test_constant_scorer() {
        assert_eq!(ConstantScorer::default().score("a", "b"), 1.0);
        assert_eq!(ConstantScorer(0.25).score_all("a", &["b", "c"]), vec![0.25, 0.25]);
    }

    #[test]
    fn test_score_clamps_and_neutralizes_non_finite() {
        assert_eq!(ConstantScorer(3.0).score("a", "b"), 1.0);
        assert_eq!(ConstantScorer(-7.0).score("a", "b"), -1.0);
        assert_eq!(ConstantScorer(f64::NAN).score("a", "b"), 0.0);
    }
}
