//! kctx - Main entry point

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::{debug, info};

use kctx::{
    check_dependencies, notify_on_change, Cli, FzfPicker, KctxError, Kubectl, Outcome, Result,
    Sketchybar, Switcher,
};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version exit 0; usage errors exit 1 like every other failure
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    match run(&cli) {
        Ok(outcome) => {
            info!("Completed: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Option<Outcome>> {
    info!("Starting kctx v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: term={:?}, sketchybar={}, kubectl={}, picker={}",
        cli.search_term, cli.sketchybar, cli.kubectl, cli.picker
    );

    if !cli.rest.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.rest);
    }

    check_dependencies(&cli.required_tools())?;

    if cli.wants_help() {
        Cli::command()
            .print_help()
            .map_err(|e| KctxError::Command {
                action: "printing help".to_string(),
                message: e.to_string(),
            })?;
        return Ok(None);
    }

    let switcher = Switcher::new(Kubectl::new(&cli.kubectl), FzfPicker::new(&cli.picker))
        .quiet(cli.quiet);
    let outcome = switcher.run(cli.search_term())?;

    let notifier = cli.notifier().map(Sketchybar::new);
    notify_on_change(&outcome, notifier.as_ref());

    Ok(Some(outcome))
}
