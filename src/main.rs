use clap::Parser;
use desktop_cleaner::cli::{Cli, exit_status, run, write_completions};
use desktop_cleaner::logging;
use desktop_cleaner::output::OutputFormatter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        write_completions(shell, &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    logging::init_logging(cli.verbose);

    // Per-file failures are already reported; only fatal errors change the status.
    let result = run(&cli);
    if let Err(e) = &result {
        OutputFormatter::error(&format!("Error: {}", e));
    }
    ExitCode::from(exit_status(&result))
}
