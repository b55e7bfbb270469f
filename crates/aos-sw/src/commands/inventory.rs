//! Transceiver and MAC table handlers.

use aos_sw_api::AsyncClient;
use aos_sw_api::models::{MacTableEntry, Transceiver};
use tabled::Tabled;

use crate::cli::{GlobalOpts, MacTableArgs};
use crate::error::CliError;
use crate::output;

use super::util::opt;

#[derive(Tabled)]
struct TransceiverRow {
    #[tabled(rename = "Port")]
    port: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Serial")]
    serial: String,
}

impl From<&Transceiver> for TransceiverRow {
    fn from(t: &Transceiver) -> Self {
        Self {
            port: t.port_id.clone(),
            kind: opt(t.transceiver_type.as_ref()),
            product: opt(t.product_number.as_ref()),
            serial: opt(t.serial_number.as_ref()),
        }
    }
}

#[derive(Tabled)]
struct MacRow {
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Port")]
    port: String,
    #[tabled(rename = "VLAN")]
    vlan: u16,
}

impl From<&MacTableEntry> for MacRow {
    fn from(e: &MacTableEntry) -> Self {
        Self {
            mac: e.mac_address.clone(),
            port: e.port_id.clone(),
            vlan: e.vlan_id,
        }
    }
}

pub async fn transceivers(client: &AsyncClient, global: &GlobalOpts) -> Result<(), CliError> {
    let collection = client.transceivers.list().await?;
    let out = output::render_list(
        &global.output,
        &collection.transceivers,
        |x| TransceiverRow::from(x),
        |t| t.port_id.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn mac_table(
    client: &AsyncClient,
    args: MacTableArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let table = match (args.vlan, args.port) {
        (Some(vlan), _) => client.mac_table.for_vlan(vlan).await?,
        (None, Some(port)) => client.mac_table.for_port(&port).await?,
        (None, None) => client.mac_table.list().await?,
    };
    let out = output::render_list(&global.output, &table.entries, |x| MacRow::from(x), |e| {
        e.mac_address.clone()
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
