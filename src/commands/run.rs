use std::path::Path;

use prdflow::color;
use prdflow::config::Config;
use prdflow::engineer;
use prdflow::log::{Level, PipelineLogger};
use prdflow::pipeline::{Pipeline, PipelineRun};

/// Run the PRD pipeline and print the results.
pub fn cmd_run(config: &Config) -> Result<(), String> {
    let prd_file = config
        .files_prd
        .as_deref()
        .ok_or_else(|| "no PRD file given (use --prd-file <PATH>)".to_string())?;

    let logger = PipelineLogger::new(&config.files_log);
    let engineers = engineer::load_roster(&config.files_engineers).map_err(|e| {
        let message = format!("Error loading engineer profiles: {}", e);
        if let Err(log_err) = logger.log(Level::Error, &message) {
            eprintln!("warning: failed to write log: {}", log_err);
        }
        e.to_string()
    })?;

    let pipeline = Pipeline::new(config.mode, config.plan(), engineers, logger);
    let run = pipeline
        .run(Path::new(prd_file), Path::new(&config.files_output))
        .map_err(|e| e.to_string())?;

    print_run(&run, &config.files_output);
    Ok(())
}

fn print_run(run: &PipelineRun, output_path: &str) {
    println!(
        "{} Run {} using {}",
        color::label("prdflow"),
        color::info(&run.run_id),
        run.plan.describe()
    );
    println!(
        "Generated {} epics and {} user stories.",
        color::number(run.epics.len()),
        color::number(run.stories.len())
    );
    if run.assignments.len() < run.stories.len() {
        println!(
            "{}",
            color::warning(&format!(
                "Rebalance kept {} of {} stories.",
                run.assignments.len(),
                run.stories.len()
            ))
        );
    }

    println!();
    println!("{}", color::label("Assignments:"));
    for assignment in &run.assignments {
        println!(
            "  {} <- {}",
            color::engineer(&assignment.engineer),
            assignment.story
        );
    }

    println!();
    println!("{}", color::label("Workload:"));
    for (name, count) in &run.workload {
        println!("  {}: {}", color::engineer(name), color::number(count));
    }

    println!();
    println!("{}", color::success(&format!("Output saved to {}", output_path)));
}
