#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;

#[derive(Parser)]
#[command(name = "blendshade", about = "Blender shader graph to USD shade network tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info(cmd::info::Args),
	Flatten(cmd::flatten::Args),
	Export(cmd::export::Args),
	Tokens(cmd::tokens::Args),
}

fn main() {
	init_logging();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging() {
	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}

fn run() -> blendshade::shade::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Flatten(args) => cmd::flatten::run(args),
		Commands::Export(args) => cmd::export::run(args),
		Commands::Tokens(args) => cmd::tokens::run(args),
	}
}
