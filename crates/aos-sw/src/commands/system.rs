//! System command handlers.

use aos_sw_api::AsyncClient;

use crate::cli::{GlobalOpts, SystemArgs, SystemCommand};
use crate::error::CliError;
use crate::output;

use super::util::opt;

pub async fn handle(
    client: &AsyncClient,
    args: SystemArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = match args.command {
        SystemCommand::Info => {
            let info = client.system.get().await?;
            output::render_single(
                &global.output,
                &info,
                |i| {
                    output::detail_block(&[
                        ("Name", i.name.clone()),
                        ("Location", opt(i.location.as_ref())),
                        ("Contact", opt(i.contact.as_ref())),
                    ])
                },
                |i| i.name.clone(),
            )?
        }
        SystemCommand::Status => {
            let status = client.system.status().await?;
            output::render_single(
                &global.output,
                &status,
                |s| {
                    output::detail_block(&[
                        ("Name", s.name.clone()),
                        ("Model", opt(s.product_model.as_ref())),
                        ("Serial", opt(s.serial_number.as_ref())),
                        ("Firmware", opt(s.firmware_version.as_ref())),
                        ("Hardware", opt(s.hardware_revision.as_ref())),
                    ])
                },
                |s| s.firmware_version.clone().unwrap_or_default(),
            )?
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
