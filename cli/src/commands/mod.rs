pub mod list;
pub mod run;
pub mod shared;
pub mod show;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(visible_alias = "r", about = "List all requests")]
    Requests,
    #[command(visible_alias = "e", about = "List all endpoints")]
    Endpoints,
    #[command(about = "Show the curl command of a request or endpoint")]
    Show(show::ShowArgs),
    #[command(about = "Run a request or endpoint with curl")]
    Run(run::RunArgs),
}
