use std::env;
use std::process;

use prdflow::config::{self, Command, Config};

mod commands;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = config::parse_args(args);

    for warning in &cli.warnings {
        eprintln!("warning: {}", warning);
    }

    if cli.help {
        print_help();
        return;
    }

    if cli.version {
        println!("prdflow {}", VERSION);
        return;
    }

    if let Some(ref unknown) = cli.unknown_command {
        eprintln!("error: unknown command: {}", unknown);
        eprintln!("Run 'prdflow --help' for usage.");
        process::exit(1);
    }

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Default command is Run if none specified
    let command = cli.command.clone().unwrap_or(Command::Run);

    let result = match command {
        Command::Init => commands::cmd_init(&config, cli.force),
        Command::Run => commands::cmd_run(&config),
        Command::Engineers => commands::cmd_engineers(&config),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn print_help() {
    println!(
        r#"prdflow - turn a product requirements document into assigned user stories

USAGE:
    prdflow [OPTIONS] [COMMAND]

COMMANDS:
    init              Write prdflow.toml and a starter engineer roster
    run               Generate stories from a PRD and assign them (default)
    engineers         List the engineer roster

OPTIONS:
    -h, --help              Show this help message
    -V, --version           Show version
    -c, --config <PATH>     Path to config file (default: prdflow.toml)
    -m, --mode <MODE>       Pipeline mode: basic, advanced, optimized
    --strategy <NAME>       Base strategy: round-robin, greedy
    --optimizer <NAME>      Rebalancer: none, threshold, knapsack
    --scorer <NAME>         Similarity scorer: keyword, constant
    --prd-file <PATH>       Path to the PRD JSON file
    --engineers <PATH>      Path to the engineer roster (default: data/engineer_profile.json)
    -o, --output <PATH>     Path to the output JSON file (default: output.json)
    --log-file <PATH>       Path to the run log (default: pipeline.log)
    --force                 Overwrite existing files (init)

ENVIRONMENT:
    PRDFLOW_MODE, PRDFLOW_STRATEGY, PRDFLOW_OPTIMIZER, PRDFLOW_SCORER,
    PRDFLOW_FILES_PRD, PRDFLOW_FILES_ENGINEERS, PRDFLOW_FILES_OUTPUT,
    PRDFLOW_FILES_LOG

EXAMPLES:
    prdflow init                                  Create prdflow.toml and a roster
    prdflow --prd-file prd.json                   Round-robin assignment
    prdflow -m optimized --prd-file prd.json      Skill matching with rebalancing
    prdflow --optimizer knapsack --prd-file prd.json
"#
    );
}
