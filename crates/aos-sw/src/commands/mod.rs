//! Command dispatch: bridges CLI args -> switch API calls -> output formatting.

pub mod cli_cmd;
pub mod config_cmd;
pub mod inventory;
pub mod ports;
pub mod system;
pub mod util;
pub mod vlans;

use aos_sw_api::AsyncClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a switch-bound command to the appropriate handler.
///
/// Runs inside an authenticated session.
pub async fn dispatch(
    cmd: Command,
    client: &AsyncClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::System(args) => system::handle(client, args, global).await,
        Command::Vlans(args) => vlans::handle(client, args, global).await,
        Command::Ports(args) => ports::handle(client, args, global).await,
        Command::Poe(args) => ports::handle_poe(client, args, global).await,
        Command::Transceivers => inventory::transceivers(client, global).await,
        Command::MacTable(args) => inventory::mac_table(client, args, global).await,
        Command::Cli(args) => cli_cmd::handle(client, args, global).await,
        // Config and Completions are handled before a session is opened
        Command::Config(_) | Command::Completions(_) => Err(CliError::Validation {
            field: "command".into(),
            reason: "does not need a switch session".into(),
        }),
    }
}
