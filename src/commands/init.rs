use std::fs;
use std::path::Path;

use prdflow::config::{Config, DEFAULT_CONFIG_FILE};

/// Starter roster written by `init` when none exists.
const SAMPLE_ROSTER: &str = r#"[
    {"name": "Alice", "role": "Backend Engineer", "skills": "apis databases authentication security"},
    {"name": "Bob", "role": "Frontend Engineer", "skills": "react css dashboards accessibility"},
    {"name": "Carol", "role": "Data Engineer", "skills": "analytics reports pipelines exports"}
]
"#;

/// Write a default prdflow.toml and a starter engineer roster.
pub fn cmd_init(config: &Config, force: bool) -> Result<(), String> {
    println!("Initializing prdflow project...");

    write_if_missing(Path::new(DEFAULT_CONFIG_FILE), &Config::default_toml(), force)?;
    write_if_missing(Path::new(&config.files_engineers), SAMPLE_ROSTER, force)?;

    println!("\nprdflow project initialized.");
    println!("  Edit {} to describe your team.", config.files_engineers);
    println!("  Use 'prdflow run --prd-file <PATH>' to assign stories.");
    Ok(())
}

fn write_if_missing(path: &Path, content: &str, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        println!("  File already exists: {}", path.display());
        return Ok(());
    }

    ensure_parent_dir(path)?;
    fs::write(path, content).map_err(|e| format!("failed to create {}: {}", path.display(), e))?;
    println!("  Created {}", path.display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}
