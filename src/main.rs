use anyhow::Result;
use clap::Parser;
use respmap::cli::{framework_filter_override, Cli, Commands};
use respmap::commands::{self, AnalyzeConfig};
use respmap::observability::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            select,
            no_framework_filter,
            framework_filter,
            max_bytes,
            fail_on_violation,
            plain,
            color,
            config,
            verbosity: _,
        } => {
            let analyze_config = AnalyzeConfig {
                path,
                format,
                output,
                select,
                filter_framework_types: framework_filter_override(
                    no_framework_filter,
                    framework_filter,
                ),
                max_bytes,
                plain,
                color,
                config_path: config,
            };
            let flagged = commands::handle_analyze(analyze_config)?;
            if should_fail(flagged, fail_on_violation) {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

// Pure function to decide the exit status
fn should_fail(flagged: bool, fail_on_violation: bool) -> bool {
    flagged && fail_on_violation
}
