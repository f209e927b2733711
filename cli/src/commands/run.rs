use crate::client::{CurlRunner, HitClient, PromptValueSource};
use crate::commands::shared::SourceArgs;
use crate::commands::validators;
use clap::Args;

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(
        help = "Name of the request or endpoint",
        value_parser = validators::validate_name
    )]
    pub name: String,

    #[arg(help = "Values for unresolved placeholders, in order of appearance")]
    pub args: Vec<String>,

    #[arg(long = "jq", help = "Pipe the response through jq")]
    pub jq: bool,
}

pub fn execute_run(args: &RunArgs, source: &SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = HitClient::load(&source.to_config())?;
    let runner = CurlRunner::new(args.jq);
    client.run(&args.name, &args.args, &runner, &PromptValueSource)?;
    Ok(())
}
