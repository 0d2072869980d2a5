use std::fs;
use std::path::Path;

use super::types::{Config, ConfigError};
use crate::assign::{Mode, OptimizerKind, ScorerKind, StrategyKind};

pub(super) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(&path).map_err(|e| {
        ConfigError::Io(format!("{}: {}", path.as_ref().display(), e))
    })?;
    Config::parse_toml(&content)
}

pub(super) fn parse_toml(content: &str) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    let mut current_section = String::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        // Section headers like [pipeline]
        if line.starts_with('[') && line.ends_with(']') {
            current_section = line[1..line.len() - 1].trim().to_string();
            continue;
        }

        let Some((key, value)) = parse_toml_line(line) else {
            return Err(ConfigError::Parse(format!(
                "line {}: expected key = value",
                idx + 1
            )));
        };
        let value = value.trim_matches('"');

        let full_key = if current_section.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", current_section, key)
        };

        match full_key.as_str() {
            "pipeline.mode" => config.mode = Mode::parse(value)?,
            "pipeline.strategy" => config.strategy = Some(StrategyKind::parse(value)?),
            "pipeline.optimizer" => config.optimizer = Some(OptimizerKind::parse(value)?),
            "pipeline.scorer" => config.scorer = ScorerKind::parse(value)?,
            "files.prd" => config.files_prd = Some(value.to_string()),
            "files.engineers" => config.files_engineers = value.to_string(),
            "files.output" => config.files_output = value.to_string(),
            "files.log" => config.files_log = value.to_string(),
            _ => {} // Ignore unknown keys
        }
    }

    Ok(config)
}

/// Drop a trailing `# comment` that is not inside a quoted string.
fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse a TOML line into key-value pair.
fn parse_toml_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}
