use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::DEFAULT_TOP_N;

fn styles() -> Styles {
	let fg = |color: AnsiColor| Style::new().fg_color(Some(Color::Ansi(color)));
	Styles::styled()
		.header(fg(AnsiColor::Blue).bold())
		.usage(fg(AnsiColor::Blue).bold())
		.literal(fg(AnsiColor::Blue))
		.placeholder(fg(AnsiColor::Yellow))
		.valid(fg(AnsiColor::Blue))
		.invalid(fg(AnsiColor::Red))
}

#[derive(Parser, Debug)]
#[command(
	name = "roomfit",
	author,
	version,
	about = "Match rental listings to a renter persona",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {roomfit} {recommend} {recommend_args}              {recommend_desc}
  {roomfit} {prompt}    {prompt_args}                    {prompt_desc}
  {roomfit} {annotate}  {annotate_args}  {annotate_desc}
  {roomfit} {watch}     {watch_args}      {watch_desc}",
		title = "Examples:".bright_blue().bold(),
		roomfit = "roomfit".bright_blue(),
		recommend = "recommend".yellow(),
		recommend_args = "-p me.json -n 5",
		recommend_desc = "Top 5 listings".dimmed(),
		prompt = "prompt".yellow(),
		prompt_args = "-p me.json",
		prompt_desc = "Show reasoning request".dimmed(),
		annotate = "annotate".yellow(),
		annotate_args = "-p me.json -r reply.txt -u 42",
		annotate_desc = "Store reasons".dimmed(),
		watch = "watch".yellow(),
		watch_args = "-p me.json -c listings.jsonl",
		watch_desc = "Re-rank on change".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

/// Inputs shared by every ranking command
#[derive(clap::Args, Debug, Clone)]
pub struct MatchArgs {
	/// Persona JSON file
	#[arg(short = 'p', long = "persona", value_name = "PATH")]
	pub persona: PathBuf,

	/// Catalog JSON-Lines file (default: $ROOMFIT_CATALOG or ./apartment_info.jsonl)
	#[arg(short = 'c', long = "catalog", value_name = "PATH")]
	pub catalog: Option<PathBuf>,

	/// Number of results
	#[arg(short = 'n', long = "limit", default_value_t = DEFAULT_TOP_N)]
	pub limit: usize,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Rank listings for a persona
	Recommend {
		#[command(flatten)]
		args: MatchArgs,

		/// Print results as JSON
		#[arg(long = "json")]
		json: bool,

		/// Open best match in the browser
		#[arg(short = 'o', long = "open")]
		open: bool,
	},

	/// Print the request that would be sent to the reasoning service
	Prompt {
		#[command(flatten)]
		args: MatchArgs,
	},

	/// Attach reasons from a reasoning-service reply and store recommendations
	Annotate {
		#[command(flatten)]
		args: MatchArgs,

		/// File holding the service reply ("rank:[...]reason:[...]")
		#[arg(short = 'r', long = "reply", value_name = "PATH")]
		reply: PathBuf,

		/// User the recommendations belong to
		#[arg(short = 'u', long = "user")]
		user_id: i64,

		/// Record store
		#[arg(long = "records", value_name = "PATH", default_value = crate::config::RECORDS_FILE)]
		records: PathBuf,
	},

	/// Re-rank whenever the catalog file changes
	Watch {
		#[command(flatten)]
		args: MatchArgs,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
