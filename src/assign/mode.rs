use super::{
    AssignError, Assignment, AssignmentStrategy, ConstantScorer, GreedyWeighted,
    KeywordScorer, KnapsackRebalance, RoundRobin, SimilarityScorer, ThresholdRebalance,
    WorkloadOptimizer,
};
use crate::engineer::Engineer;

/// Named preset selecting a strategy and optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Round-robin, no optimizer.
    #[default]
    Basic,
    /// Greedy weighted, no optimizer.
    Advanced,
    /// Greedy weighted followed by threshold rebalance.
    Optimized,
}

impl Mode {
    /// All modes, in presentation order.
    pub const ALL: [Mode; 3] = [Mode::Basic, Mode::Advanced, Mode::Optimized];

    /// Parse a mode name (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, AssignError> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "advanced" => Ok(Self::Advanced),
            "optimized" => Ok(Self::Optimized),
            _ => Err(AssignError::Mode(format!("unknown mode: {}", s))),
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
            Self::Optimized => "optimized",
        }
    }

    /// The strategy/optimizer preset for this mode, with the keyword scorer.
    pub fn plan(&self) -> AssignmentPlan {
        let (strategy, optimizer) = match self {
            Self::Basic => (StrategyKind::RoundRobin, OptimizerKind::None),
            Self::Advanced => (StrategyKind::Greedy, OptimizerKind::None),
            Self::Optimized => (StrategyKind::Greedy, OptimizerKind::Threshold),
        };
        AssignmentPlan {
            strategy,
            optimizer,
            scorer: ScorerKind::Keyword,
        }
    }
}

/// Base assignment strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    RoundRobin,
    Greedy,
}

impl StrategyKind {
    /// Parse a strategy name.
    pub fn parse(s: &str) -> Result<Self, AssignError> {
        match s.trim().to_lowercase().as_str() {
            "round-robin" | "roundrobin" | "round_robin" => Ok(Self::RoundRobin),
            "greedy" | "greedy-weighted" => Ok(Self::Greedy),
            _ => Err(AssignError::Mode(format!("unknown strategy: {}", s))),
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RoundRobin => "round-robin",
            Self::Greedy => "greedy",
        }
    }
}

/// Post-assignment optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerKind {
    None,
    Threshold,
    Knapsack,
}

impl OptimizerKind {
    /// Parse an optimizer name.
    pub fn parse(s: &str) -> Result<Self, AssignError> {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "threshold" => Ok(Self::Threshold),
            "knapsack" => Ok(Self::Knapsack),
            _ => Err(AssignError::Mode(format!("unknown optimizer: {}", s))),
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Threshold => "threshold",
            Self::Knapsack => "knapsack",
        }
    }
}

/// Similarity backend used by the greedy strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScorerKind {
    #[default]
    Keyword,
    Constant,
}

impl ScorerKind {
    /// Parse a scorer name.
    pub fn parse(s: &str) -> Result<Self, AssignError> {
        match s.trim().to_lowercase().as_str() {
            "keyword" => Ok(Self::Keyword),
            "constant" | "uniform" => Ok(Self::Constant),
            _ => Err(AssignError::Mode(format!("unknown scorer: {}", s))),
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Constant => "constant",
        }
    }

    /// Instantiate the backend.
    pub fn build(&self) -> Box<dyn SimilarityScorer> {
        match self {
            Self::Keyword => Box::new(KeywordScorer),
            Self::Constant => Box::new(ConstantScorer::default()),
        }
    }
}

/// A fully resolved strategy + optimizer + scorer combination.
///
/// Each component is substitutable on its own; a [`Mode`] only supplies
/// the starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentPlan {
    pub strategy: StrategyKind,
    pub optimizer: OptimizerKind,
    pub scorer: ScorerKind,
}

impl Default for AssignmentPlan {
    fn default() -> Self {
        Mode::default().plan()
    }
}

impl AssignmentPlan {
    /// Replace the base strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the optimizer.
    pub fn with_optimizer(mut self, optimizer: OptimizerKind) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Replace the scorer backend.
    pub fn with_scorer(mut self, scorer: ScorerKind) -> Self {
        self.scorer = scorer;
        self
    }

    /// Instantiate the base strategy.
    pub fn build_strategy(&self) -> Box<dyn AssignmentStrategy> {
        match self.strategy {
            StrategyKind::RoundRobin => Box::new(RoundRobin),
            StrategyKind::Greedy => Box::new(GreedyWeighted::from_boxed(self.scorer.build())),
        }
    }

    /// Instantiate the optimizer, if any.
    pub fn build_optimizer(&self) -> Option<Box<dyn WorkloadOptimizer>> {
        match self.optimizer {
            OptimizerKind::None => None,
            OptimizerKind::Threshold => Some(Box::new(ThresholdRebalance)),
            OptimizerKind::Knapsack => Some(Box::new(KnapsackRebalance)),
        }
    }

    /// Run the strategy, then the optimizer if one is configured.
    pub fn run(
        &self,
        stories: &[String],
        engineers: &[Engineer],
    ) -> Result<Vec<Assignment>, AssignError> {
        let assignments = self.build_strategy().assign(stories, engineers)?;
        match self.build_optimizer() {
            Some(optimizer) => optimizer.rebalance(&assignments, engineers),
            None => Ok(assignments),
        }
    }

    /// Short description, e.g. `greedy+threshold (keyword)`.
    pub fn describe(&self) -> String {
        let base = match self.optimizer {
            OptimizerKind::None => self.strategy.as_str().to_string(),
            other => format!("{}+{}", self.strategy.as_str(), other.as_str()),
        };
        match self.strategy {
            StrategyKind::Greedy => format!("{} ({})", base, self.scorer.as_str()),
            StrategyKind::RoundRobin => base,
        }
    }
}
