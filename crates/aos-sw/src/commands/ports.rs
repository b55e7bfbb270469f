//! Port and PoE command handlers.

use aos_sw_api::AsyncClient;
use aos_sw_api::models::{Port, PortPoe};
use tabled::Tabled;

use crate::cli::{GlobalOpts, PoeArgs, PoeCommand, PortsArgs, PortsCommand};
use crate::error::CliError;
use crate::output;

use super::util::{opt, yes_no};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct PortRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Enabled")]
    enabled: String,
    #[tabled(rename = "Up")]
    up: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Trunk")]
    trunk: String,
}

impl From<&Port> for PortRow {
    fn from(p: &Port) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            enabled: yes_no(p.is_port_enabled),
            up: yes_no(p.is_port_up),
            mode: opt(p.config_mode.as_ref()),
            trunk: opt(p.trunk_group.as_ref()),
        }
    }
}

#[derive(Tabled)]
struct PoeRow {
    #[tabled(rename = "Port")]
    port: String,
    #[tabled(rename = "PoE")]
    enabled: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Allocation")]
    allocation: String,
    #[tabled(rename = "Watts")]
    watts: String,
}

impl From<&PortPoe> for PoeRow {
    fn from(p: &PortPoe) -> Self {
        Self {
            port: p.port_id.clone(),
            enabled: yes_no(p.is_poe_enabled),
            priority: opt(p.poe_priority.as_ref()),
            allocation: opt(p.poe_allocation_method.as_ref()),
            watts: opt(p.allocated_power_in_watts.as_ref()),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn handle(
    client: &AsyncClient,
    args: PortsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = match args.command {
        PortsCommand::List => {
            let collection = client.port.list().await?;
            output::render_list(&global.output, &collection.ports, |x| PortRow::from(x), |p| {
                p.id.clone()
            })?
        }
        PortsCommand::Get { id } => {
            let port = client.port.get(&id).await?;
            output::render_single(
                &global.output,
                &port,
                |p| {
                    output::detail_block(&[
                        ("ID", p.id.clone()),
                        ("Name", p.name.clone()),
                        ("Enabled", yes_no(p.is_port_enabled)),
                        ("Up", yes_no(p.is_port_up)),
                        ("Mode", opt(p.config_mode.as_ref())),
                        ("Trunk mode", opt(p.trunk_mode.as_ref())),
                        ("Trunk group", opt(p.trunk_group.as_ref())),
                        ("LACP", opt(p.lacp_status.as_ref())),
                    ])
                },
                |p| p.id.clone(),
            )?
        }
    };
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn handle_poe(
    client: &AsyncClient,
    args: PoeArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PoeCommand::List => {
            let collection = client.poe.list().await?;
            let out = output::render_list(&global.output, &collection.ports, |x| PoeRow::from(x), |p| {
                p.port_id.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
