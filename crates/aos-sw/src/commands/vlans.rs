//! VLAN command handlers.

use aos_sw_api::AsyncClient;
use aos_sw_api::models::Vlan;
use tabled::Tabled;

use crate::cli::{GlobalOpts, VlansArgs, VlansCommand};
use crate::error::CliError;
use crate::output;

use super::util::{self, opt, yes_no};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct VlanRow {
    #[tabled(rename = "ID")]
    id: u16,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Type")]
    vlan_type: String,
    #[tabled(rename = "Voice")]
    voice: String,
}

impl From<&Vlan> for VlanRow {
    fn from(v: &Vlan) -> Self {
        Self {
            id: v.vlan_id,
            name: v.name.clone(),
            status: opt(v.status.as_ref()),
            vlan_type: opt(v.vlan_type.as_ref()),
            voice: yes_no(v.is_voice_enabled.unwrap_or(false)),
        }
    }
}

fn detail(v: &Vlan) -> String {
    output::detail_block(&[
        ("ID", v.vlan_id.to_string()),
        ("Name", v.name.clone()),
        ("Status", opt(v.status.as_ref())),
        ("Type", opt(v.vlan_type.as_ref())),
        ("Voice", v.is_voice_enabled.map(yes_no).unwrap_or_default()),
        ("Jumbo", v.is_jumbo_enabled.map(yes_no).unwrap_or_default()),
        ("Management", v.is_management_vlan.map(yes_no).unwrap_or_default()),
    ])
}

fn validate_id(id: u16) -> Result<(), CliError> {
    if (1..=4094).contains(&id) {
        Ok(())
    } else {
        Err(CliError::Validation {
            field: "vlan id".into(),
            reason: format!("{id} is outside 1-4094"),
        })
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &AsyncClient,
    args: VlansArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        VlansCommand::List => {
            let collection = client.vlan.list().await?;
            let out = output::render_list(
                &global.output,
                &collection.vlans,
                |x| VlanRow::from(x),
                |v| v.vlan_id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VlansCommand::Get { id } => {
            validate_id(id)?;
            let vlan = client.vlan.get(id).await?;
            let out = output::render_single(&global.output, &vlan, detail, |v| {
                v.vlan_id.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VlansCommand::Create { id, name } => {
            validate_id(id)?;
            let created = client.vlan.create(&Vlan::new(id, name)).await?;
            let out = output::render_single(&global.output, &created, detail, |v| {
                v.vlan_id.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VlansCommand::Delete { id } => {
            validate_id(id)?;
            util::require_yes(&format!("delete VLAN {id}"), global.yes)?;
            client.vlan.delete(id).await?;
            if !global.quiet {
                eprintln!("VLAN {id} deleted");
            }
            Ok(())
        }
    }
}
