//! rulemerge CLI
//!
//! Usage: rulemerge [COMMAND]
//!
//! Commands:
//!   build  Combine the rule fragments and write every destination (default)
//!   check  Fail when a destination differs from what a build would write
//!   order  Print the order fragments would be combined in

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::Session;
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::bootstrap(cli.json, cli.verbose, cli.color);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            ui::error::print_error(&err, &ui);
            std::process::exit(1);
        }
    }
}

/// Run the selected command; `Ok(false)` means a clean run with a failing verdict
fn run(cli: Cli) -> Result<bool> {
    let Cli {
        config,
        json,
        color,
        verbose,
        build,
        command,
    } = cli;
    let config = config.as_deref();

    match command.unwrap_or(Commands::Build(build)) {
        Commands::Build(args) => {
            let session = Session::prepare(config, &args.paths, json, verbose, color)?;
            commands::build::cmd_build(&session, args.dry_run)?;
            Ok(true)
        }
        Commands::Check(args) => {
            let session = Session::prepare(config, &args, json, verbose, color)?;
            commands::check::cmd_check(&session)
        }
        Commands::Order(args) => {
            let session = Session::prepare(config, &args, json, verbose, color)?;
            commands::order::cmd_order(&session)?;
            Ok(true)
        }
    }
}
