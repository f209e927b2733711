use crate::client::HitClient;
use crate::commands::shared::{OutputArgs, SourceArgs};

pub fn execute_requests(
    source: &SourceArgs,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = HitClient::load(&source.to_config())?;
    print!(
        "{}",
        output
            .formatter()
            .format_list(&client.requests(), "No requests found")
    );
    Ok(())
}

pub fn execute_endpoints(
    source: &SourceArgs,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = HitClient::load(&source.to_config())?;
    print!(
        "{}",
        output
            .formatter()
            .format_list(&client.endpoints(), "No endpoints found")
    );
    Ok(())
}
