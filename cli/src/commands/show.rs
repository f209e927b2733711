use crate::client::HitClient;
use crate::commands::shared::{OutputArgs, SourceArgs};
use crate::commands::validators;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(
        help = "Name of the request or endpoint",
        value_parser = validators::validate_name
    )]
    pub name: String,
}

pub fn execute_show(
    args: &ShowArgs,
    source: &SourceArgs,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = HitClient::load(&source.to_config())?;
    let entity = client.find(&args.name)?;
    print!("{}", output.formatter().format(entity));
    Ok(())
}
