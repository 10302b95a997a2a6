pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "ingresso",
    about = "Ingresso marketplace CLI",
    long_about = "Browse the event catalog, generate personalized recommendations, \
                  export tickets to calendar files, and inspect configuration.",
    after_help = "Examples:\n  ingresso browse --city \"São Paulo\" --sort price_low\n  \
                  ingresso browse --near=-23.55,-46.63\n  ingresso recommend --user demo\n  \
                  ingresso export-ics --event ev-sp-samba"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Filter and sort the event catalog")]
    Browse(commands::browse::BrowseArgs),
    #[command(about = "Generate ranked recommendations for a user")]
    Recommend {
        #[arg(long, default_value = "demo", help = "User id; unknown users are cold-start")]
        user: String,
    },
    #[command(name = "export-ics", about = "Print an ICS calendar entry for an event ticket")]
    ExportIcs {
        #[arg(long, help = "Event id to export")]
        event: String,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Browse(args) => commands::browse::run(args),
        Command::Recommend { user } => commands::recommend::run(&user),
        Command::ExportIcs { event } => commands::export_ics::run(&event),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
