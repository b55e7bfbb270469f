//! `aos-sw cli`: run a switch CLI command through the REST API.

use aos_sw_api::AsyncClient;

use crate::cli::{CliCommandArgs, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    client: &AsyncClient,
    args: CliCommandArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let command = args.command.join(" ");
    let result = client.cli.run(&command).await?;

    if !result.is_success() {
        return Err(CliError::CommandFailed {
            command,
            message: if result.error_msg.is_empty() {
                result.status
            } else {
                result.error_msg
            },
        });
    }

    let out = match global.output {
        // The switch output is already human-formatted.
        OutputFormat::Table | OutputFormat::Plain => result.output.trim_end().to_owned(),
        _ => output::render_single(&global.output, &result, |r| r.output.clone(), |r| {
            r.output.clone()
        })?,
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
