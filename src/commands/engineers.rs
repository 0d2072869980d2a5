use prdflow::color;
use prdflow::config::Config;
use prdflow::engineer;

/// List the engineer roster.
pub fn cmd_engineers(config: &Config) -> Result<(), String> {
    let roster = engineer::load_roster(&config.files_engineers).map_err(|e| e.to_string())?;

    println!(
        "{} ({}):",
        color::label("Engineers"),
        config.files_engineers
    );
    for eng in &roster {
        println!("  {} - {}", color::engineer(&eng.name), eng.role);
        if !eng.skills.is_empty() {
            println!("      skills: {}", eng.skills);
        }
    }
    println!("  Total: {}", color::number(roster.len()));
    Ok(())
}
