//! roomfit - rental listing recommendations
//!
//! Command-line front end over the matching engine: rank listings for a
//! persona, prepare explanation requests, and store annotated results.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use roomfit::cli::{Cli, Command};
use roomfit::commands;
use roomfit::ui::{self, Log};

fn main() {
	dotenvy::dotenv().ok();

	let cli = Cli::parse();
	Log::set_verbose(cli.verbose);
	init_tracing(cli.verbose);

	if let Err(e) = dispatch(cli.command) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn init_tracing(verbose: bool) {
	let default = if verbose { "roomfit=debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn dispatch(command: Command) -> Result<()> {
	match command {
		Command::Recommend { args, json, open } => {
			if !json {
				ui::print_logo();
			}
			commands::recommend::run(&args, json, open)
		}
		Command::Prompt { args } => commands::prompt::run(&args),
		Command::Annotate {
			args,
			reply,
			user_id,
			records,
		} => commands::annotate::run(&args, &reply, user_id, &records),
		Command::Watch { args } => {
			ui::print_logo();
			commands::watch::run(&args)
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					return Ok(sub_cmd.print_help()?);
				}
				ui::warn(&format!("Unknown subcommand: {}", sub));
			}
			Ok(cmd.print_help()?)
		}
	}
}
