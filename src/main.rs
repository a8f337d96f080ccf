use clap::Parser;

use adsmith::cli::{self, CheckCommand, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Init(args) => cli::init::execute(args),
        Commands::Generate(args) => cli::generate::execute(args),
        Commands::Validate(args) => cli::validate::execute(args),
        Commands::Stats(args) => cli::stats::execute(args),
        Commands::Check(CheckCommand::Config(args)) => cli::check::config(args),
    };

    if let Err(e) = result {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
