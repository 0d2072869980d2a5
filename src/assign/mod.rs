//! Story-to-engineer assignment engine.
//!
//! Turns an ordered list of user stories and an engineer roster into a
//! story→engineer mapping. Three pieces compose a run:
//! - an [`AssignmentStrategy`] producing the initial mapping
//!   ([`RoundRobin`] or [`GreedyWeighted`]),
//! - an optional [`WorkloadOptimizer`] smoothing the result
//!   ([`ThresholdRebalance`] or [`KnapsackRebalance`]),
//! - a [`SimilarityScorer`] backend used by the greedy strategy.
//!
//! Everything here is synchronous and free of I/O.

mod error;
mod mode;
mod model;
mod optimize;
mod score;
mod strategy;
mod workload;


pub use error::AssignError;
pub use mode::{AssignmentPlan, Mode, OptimizerKind, ScorerKind, StrategyKind};
pub use model::Assignment;
pub use optimize::{KnapsackRebalance, ThresholdRebalance, WorkloadOptimizer};
pub use score::{ConstantScorer, KeywordScorer, SimilarityScorer};
pub use strategy::{assign_stories, AssignmentStrategy, GreedyWeighted, RoundRobin};
pub use workload::WorkloadTracker;
