use std::collections::HashMap;
use std::fs;

use super::*;
use crate::assign::{AssignError, Mode, OptimizerKind, ScorerKind, StrategyKind};
use crate::testutil::with_temp_cwd;

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("prdflow")
        .chain(list.iter().copied())
        .map(str::to_string)
        .collect()
}

fn apply_vars(config: &mut Config, vars: &[(&str, &str)]) -> Result<(), ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    super::env::apply_env(config, |key| map.get(key).cloned())
}

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.mode, Mode::Basic);
    assert_eq!(config.strategy, None);
    assert_eq!(config.optimizer, None);
    assert_eq!(config.scorer, ScorerKind::Keyword);
    assert_eq!(config.files_prd, None);
    assert_eq!(config.files_engineers, "data/engineer_profile.json");
    assert_eq!(config.files_output, "output.json");
    assert_eq!(config.files_log, "pipeline.log");
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
# team settings
[pipeline]
mode = "optimized"
strategy = "round-robin"  # keep it simple
optimizer = "knapsack"
scorer = "constant"

[files]
prd = "docs/prd.json"
engineers = "team.json"
output = "out/result.json"
log = "logs/run.log"
"#;
    let config = Config::parse_toml(toml).unwrap();
    assert_eq!(config.mode, Mode::Optimized);
    assert_eq!(config.strategy, Some(StrategyKind::RoundRobin));
    assert_eq!(config.optimizer, Some(OptimizerKind::Knapsack));
    assert_eq!(config.scorer, ScorerKind::Constant);
    assert_eq!(config.files_prd, Some("docs/prd.json".to_string()));
    assert_eq!(config.files_engineers, "team.json");
    assert_eq!(config.files_output, "out/result.json");
    assert_eq!(config.files_log, "logs/run.log");
}

#[test]
fn test_config_parse_toml_unknown_mode_is_mode_error() {
    let err = Config::parse_toml("[pipeline]\nmode = \"turbo\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(AssignError::Mode(_))));
}

#[test]
fn test_config_parse_toml_malformed_line() {
    let err = Config::parse_toml("[pipeline]\nmode\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_config_parse_toml_ignores_unknown_keys() {
    let config = Config::parse_toml("[extra]\ncolor = \"blue\"\n").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_default_toml_round_trips() {
    let config = Config::parse_toml(&Config::default_toml()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_apply_env() {
    let mut config = Config::default();
    apply_vars(
        &mut config,
        &[
            ("PRDFLOW_MODE", "advanced"),
            ("PRDFLOW_OPTIMIZER", "threshold"),
            ("PRDFLOW_FILES_ENGINEERS", "env-team.json"),
            ("PRDFLOW_FILES_PRD", "env-prd.json"),
        ],
    )
    .unwrap();
    assert_eq!(config.mode, Mode::Advanced);
    assert_eq!(config.optimizer, Some(OptimizerKind::Threshold));
    assert_eq!(config.files_engineers, "env-team.json");
    assert_eq!(config.files_prd, Some("env-prd.json".to_string()));
}

#[test]
fn test_apply_env_bad_mode() {
    let mut config = Config::default();
    let err = apply_vars(&mut config, &[("PRDFLOW_MODE", "fast")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(AssignError::Mode(_))));
}

#[test]
fn test_parse_args_command() {
    assert_eq!(parse_args(args(&["init"])).command, Some(Command::Init));
    assert_eq!(parse_args(args(&["run"])).command, Some(Command::Run));
    assert_eq!(parse_args(args(&["engineers"])).command, Some(Command::Engineers));
    assert_eq!(parse_args(args(&[])).command, None);
}

#[test]
fn test_parse_args_unknown_command() {
    let cli = parse_args(args(&["deploy"]));
    assert_eq!(cli.command, None);
    assert_eq!(cli.unknown_command, Some("deploy".to_string()));
}

#[test]
fn test_parse_args_flags() {
    let cli = parse_args(args(&[
        "--mode",
        "optimized",
        "--prd_file",
        "prd.json",
        "--engineers",
        "team.json",
        "-o",
        "out.json",
        "--optimizer",
        "knapsack",
        "--scorer",
        "constant",
        "--strategy",
        "greedy",
        "--log-file",
        "run.log",
        "run",
    ]));
    assert_eq!(cli.command, Some(Command::Run));
    assert_eq!(cli.mode, Some("optimized".to_string()));
    assert_eq!(cli.prd_file, Some("prd.json".to_string()));
    assert_eq!(cli.engineers, Some("team.json".to_string()));
    assert_eq!(cli.output, Some("out.json".to_string()));
    assert_eq!(cli.optimizer, Some("knapsack".to_string()));
    assert_eq!(cli.scorer, Some("constant".to_string()));
    assert_eq!(cli.strategy, Some("greedy".to_string()));
    assert_eq!(cli.log_file, Some("run.log".to_string()));
}

#[test]
fn test_parse_args_warns_on_unknown_flag() {
    let cli = parse_args(args(&["--optimiser", "knapsack", "run"]));
    assert_eq!(cli.optimizer, None);
    assert_eq!(cli.warnings, vec!["ignoring unknown flag: --optimiser".to_string()]);
    // the stray value is taken as the positional command slot
    assert_eq!(cli.unknown_command, Some("knapsack".to_string()));
}

#[test]
fn test_parse_args_warns_on_missing_value() {
    let cli = parse_args(args(&["run", "--mode"]));
    assert_eq!(cli.command, Some(Command::Run));
    assert_eq!(cli.mode, None);
    assert_eq!(cli.warnings, vec!["missing value for --mode".to_string()]);
}

#[test]
fn test_parse_args_no_warnings_for_known_flags() {
    let cli = parse_args(args(&["--force", "-m", "basic", "init"]));
    assert!(cli.warnings.is_empty());
}

#[test]
fn test_parse_args_help_and_version() {
    assert!(parse_args(args(&["-h"])).help);
    assert!(parse_args(args(&["--version"])).version);
}

#[test]
fn test_apply_cli_bad_mode() {
    let mut config = Config::default();
    let cli = parse_args(args(&["--mode", "expert"]));
    let err = config.apply_cli(&cli).unwrap_err();
    assert!(err.to_string().contains("unknown mode: expert"));
}

#[test]
fn test_plan_uses_mode_preset() {
    let mut config = Config::default();
    config.mode = Mode::Optimized;
    let plan = config.plan();
    assert_eq!(plan.strategy, StrategyKind::Greedy);
    assert_eq!(plan.optimizer, OptimizerKind::Threshold);
    assert_eq!(plan.scorer, ScorerKind::Keyword);
}

#[test]
fn test_plan_applies_overrides_independently() {
    let mut config = Config::default();
    config.mode = Mode::Advanced;
    config.optimizer = Some(OptimizerKind::Knapsack);
    config.scorer = ScorerKind::Constant;
    let plan = config.plan();
    assert_eq!(plan.strategy, StrategyKind::Greedy);
    assert_eq!(plan.optimizer, OptimizerKind::Knapsack);
    assert_eq!(plan.scorer, ScorerKind::Constant);
}

#[test]
fn test_default_file_then_cli_precedence() {
    with_temp_cwd(|| {
        fs::write(
            DEFAULT_CONFIG_FILE,
            "[pipeline]\nmode = \"advanced\"\n[files]\noutput = \"file.json\"\n",
        )
        .unwrap();

        let cli = parse_args(args(&["--output", "cli.json"]));
        let mut config = Config::load_from_file(DEFAULT_CONFIG_FILE).unwrap();
        config.apply_cli(&cli).unwrap();
        assert_eq!(config.mode, Mode::Advanced);
        assert_eq!(config.files_output, "cli.json");
    });
}

#[test]
fn test_env_overrides_file_and_cli_overrides_env() {
    let mut config =
        Config::parse_toml("[pipeline]\nmode = \"advanced\"\noptimizer = \"threshold\"\n").unwrap();
    apply_vars(
        &mut config,
        &[("PRDFLOW_MODE", "optimized"), ("PRDFLOW_OPTIMIZER", "knapsack")],
    )
    .unwrap();
    config
        .apply_cli(&parse_args(args(&["--optimizer", "none"])))
        .unwrap();

    assert_eq!(config.mode, Mode::Optimized);
    assert_eq!(config.optimizer, Some(OptimizerKind::None));
}

#[test]
fn test_config_load_missing_explicit_file() {
    with_temp_cwd(|| {
        let cli = parse_args(args(&["-c", "nowhere.toml"]));
        let err = Config::load(&cli).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    });
}
