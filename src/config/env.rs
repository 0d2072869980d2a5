use super::types::{Config, ConfigError};
use crate::assign::{Mode, OptimizerKind, ScorerKind, StrategyKind};

/// Apply `PRDFLOW_*` variables read through `lookup`.
pub(super) fn apply_env<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("PRDFLOW_MODE") {
        config.mode = Mode::parse(&val)?;
    }
    if let Some(val) = lookup("PRDFLOW_STRATEGY") {
        config.strategy = Some(StrategyKind::parse(&val)?);
    }
    if let Some(val) = lookup("PRDFLOW_OPTIMIZER") {
        config.optimizer = Some(OptimizerKind::parse(&val)?);
    }
    if let Some(val) = lookup("PRDFLOW_SCORER") {
        config.scorer = ScorerKind::parse(&val)?;
    }
    if let Some(val) = lookup("PRDFLOW_FILES_PRD") {
        config.files_prd = Some(val);
    }
    if let Some(val) = lookup("PRDFLOW_FILES_ENGINEERS") {
        config.files_engineers = val;
    }
    if let Some(val) = lookup("PRDFLOW_FILES_OUTPUT") {
        config.files_output = val;
    }
    if let Some(val) = lookup("PRDFLOW_FILES_LOG") {
        config.files_log = val;
    }
    Ok(())
}
