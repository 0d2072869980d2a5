use std::path::Path;

use thiserror::Error;

use super::cli::CliArgs;
use super::{env, toml};
use crate::assign::{AssignError, AssignmentPlan, Mode, OptimizerKind, ScorerKind, StrategyKind};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "prdflow.toml";

/// Pipeline configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Preset strategy/optimizer combination.
    pub mode: Mode,
    /// Base strategy override; `None` keeps the mode's choice.
    pub strategy: Option<StrategyKind>,
    /// Optimizer override; `None` keeps the mode's choice.
    pub optimizer: Option<OptimizerKind>,
    /// Similarity backend for greedy assignment.
    pub scorer: ScorerKind,
    /// Path to the PRD JSON file.
    pub files_prd: Option<String>,
    /// Path to the engineer roster JSON file.
    pub files_engineers: String,
    /// Path to the output JSON file.
    pub files_output: String,
    /// Path to the pipeline log file.
    pub files_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::Basic,
            strategy: None,
            optimizer: None,
            scorer: ScorerKind::Keyword,
            files_prd: None,
            files_engineers: "data/engineer_profile.json".to_string(),
            files_output: "output.json".to_string(),
            files_log: "pipeline.log".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Precedence: CLI args > env vars > config file > defaults. An explicit
    /// `--config` path must exist; the default `prdflow.toml` is optional.
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = if let Some(ref path) = cli_args.config {
            Self::load_from_file(path)?
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load_from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_env()?;
        config.apply_cli(cli_args)?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        toml::load_from_file(path)
    }

    /// Parse TOML content into configuration.
    pub(super) fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::parse_toml(content)
    }

    /// Apply environment variables.
    fn apply_env(&mut self) -> Result<(), ConfigError> {
        env::apply_env(self, |key| std::env::var(key).ok())
    }

    /// Apply CLI arguments.
    pub(super) fn apply_cli(&mut self, args: &CliArgs) -> Result<(), ConfigError> {
        if let Some(ref mode) = args.mode {
            self.mode = Mode::parse(mode)?;
        }
        if let Some(ref strategy) = args.strategy {
            self.strategy = Some(StrategyKind::parse(strategy)?);
        }
        if let Some(ref optimizer) = args.optimizer {
            self.optimizer = Some(OptimizerKind::parse(optimizer)?);
        }
        if let Some(ref scorer) = args.scorer {
            self.scorer = ScorerKind::parse(scorer)?;
        }
        if let Some(ref path) = args.prd_file {
            self.files_prd = Some(path.clone());
        }
        if let Some(ref path) = args.engineers {
            self.files_engineers = path.clone();
        }
        if let Some(ref path) = args.output {
            self.files_output = path.clone();
        }
        if let Some(ref path) = args.log_file {
            self.files_log = path.clone();
        }
        Ok(())
    }

    /// Resolve the effective plan: the mode preset with overrides applied.
    pub fn plan(&self) -> AssignmentPlan {
        let mut plan = self.mode.plan().with_scorer(self.scorer);
        if let Some(strategy) = self.strategy {
            plan = plan.with_strategy(strategy);
        }
        if let Some(optimizer) = self.optimizer {
            plan = plan.with_optimizer(optimizer);
        }
        plan
    }

    /// Generate default prdflow.toml content.
    pub fn default_toml() -> String {
        r#"# prdflow configuration

[pipeline]
mode = "basic"        # basic, advanced, optimized
# strategy = "greedy"   # round-robin, greedy (overrides mode)
# optimizer = "none"    # none, threshold, knapsack (overrides mode)
scorer = "keyword"    # keyword, constant

[files]
# prd = "data/prd.json"
engineers = "data/engineer_profile.json"
output = "output.json"
log = "pipeline.log"
"#
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading config file.
    #[error("config I/O error: {0}")]
    Io(String),
    /// Parse error in config file.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Unknown mode, strategy, optimizer or scorer name.
    #[error(transparent)]
    Invalid(#[from] AssignError),
}
