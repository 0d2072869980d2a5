/// CLI arguments parsed from command line.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Subcommand to execute.
    pub command: Option<Command>,
    /// First positional argument that is not a known command.
    pub unknown_command: Option<String>,
    /// Path to config file.
    pub config: Option<String>,
    /// Pipeline mode name.
    pub mode: Option<String>,
    /// Base strategy override.
    pub strategy: Option<String>,
    /// Optimizer override.
    pub optimizer: Option<String>,
    /// Similarity scorer backend.
    pub scorer: Option<String>,
    /// Path to PRD file.
    pub prd_file: Option<String>,
    /// Path to engineer roster file.
    pub engineers: Option<String>,
    /// Path to output file.
    pub output: Option<String>,
    /// Path to log file.
    pub log_file: Option<String>,
    /// Overwrite existing files (init).
    pub force: bool,
    /// Show help.
    pub help: bool,
    /// Show version.
    pub version: bool,
    /// Problems found while parsing that did not stop it.
    pub warnings: Vec<String>,
}

/// prdflow subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write a default prdflow.toml.
    Init,
    /// Run the PRD pipeline (default).
    Run,
    /// List the engineer roster.
    Engineers,
}

impl Command {
    /// Parse command from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "init" => Some(Self::Init),
            "run" => Some(Self::Run),
            "engineers" => Some(Self::Engineers),
            _ => None,
        }
    }
}

/// Parse CLI arguments from an iterator.
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter();

    // Skip program name
    args.next();

    while let Some(arg) = args.next() {
        let slot = match arg.as_str() {
            "-h" | "--help" => {
                cli.help = true;
                continue;
            }
            "-V" | "--version" => {
                cli.version = true;
                continue;
            }
            "--force" => {
                cli.force = true;
                continue;
            }
            "-c" | "--config" => &mut cli.config,
            "-m" | "--mode" => &mut cli.mode,
            "--strategy" => &mut cli.strategy,
            "--optimizer" => &mut cli.optimizer,
            "--scorer" => &mut cli.scorer,
            "--prd-file" | "--prd_file" => &mut cli.prd_file,
            "--engineers" => &mut cli.engineers,
            "-o" | "--output" => &mut cli.output,
            "--log-file" => &mut cli.log_file,
            _ if arg.starts_with('-') => {
                cli.warnings.push(format!("ignoring unknown flag: {}", arg));
                continue;
            }
            _ => {
                if cli.command.is_none() && cli.unknown_command.is_none() {
                    match Command::from_str(&arg) {
                        Some(command) => cli.command = Some(command),
                        None => cli.unknown_command = Some(arg),
                    }
                }
                continue;
            }
        };

        match args.next() {
            Some(value) => *slot = Some(value),
            None => cli.warnings.push(format!("missing value for {}", arg)),
        }
    }

    cli
}
