use clap::{CommandFactory, Parser};

mod client;
mod commands;
mod config;
mod core;
mod render;

use commands::shared::{OutputArgs, SourceArgs};
use commands::Commands;
use core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "hit")]
#[command(about = "Keeps a catalogue of HTTP endpoints and requests in yaml and runs them with curl.")]
#[command(version = crate::core::version::app_version())]
struct Args {
    #[arg(long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.debug);

    match &args.command {
        Some(Commands::Requests) => commands::list::execute_requests(&args.source, &args.output),
        Some(Commands::Endpoints) => {
            commands::list::execute_endpoints(&args.source, &args.output)
        }
        Some(Commands::Show(show_args)) => {
            commands::show::execute_show(show_args, &args.source, &args.output)
        }
        Some(Commands::Run(run_args)) => commands::run::execute_run(run_args, &args.source),
        None => {
            Args::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
