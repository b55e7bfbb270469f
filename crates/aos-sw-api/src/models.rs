// Typed payloads for the resources with a stable shape.
//
// Field names follow the switch's JSON (snake_case with enum-like string
// constants such as `VS_PORT_BASED`). Anything the device adds beyond the
// declared fields is kept in `extra` so nothing is lost on a round trip.

use serde::{Deserialize, Serialize};

/// `collection_result` block present on every list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CollectionResult {
    #[serde(default)]
    pub total_elements_count: u32,
    #[serde(default)]
    pub filtered_elements_count: u32,
}

// ── VLAN ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Vlan {
    pub vlan_id: u16,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub vlan_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_voice_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_jumbo_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_dsnoop_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_management_vlan: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Vlan {
    /// A minimal VLAN definition for create requests.
    pub fn new(vlan_id: u16, name: impl Into<String>) -> Self {
        Self {
            vlan_id,
            name: name.into(),
            status: None,
            vlan_type: None,
            is_voice_enabled: None,
            is_jumbo_enabled: None,
            is_dsnoop_enabled: None,
            is_management_vlan: None,
            extra: serde_json::Map::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VlanCollection {
    #[serde(default)]
    pub collection_result: CollectionResult,
    #[serde(default, rename = "vlan_element")]
    pub vlans: Vec<Vlan>,
}

/// Tagging mode of a port in a VLAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PortMode {
    #[serde(rename = "POM_UNTAGGED")]
    Untagged,
    #[serde(rename = "POM_TAGGED_STATIC")]
    Tagged,
    #[serde(rename = "POM_FORBIDDEN")]
    Forbidden,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VlanPort {
    pub vlan_id: u16,
    pub port_id: String,
    pub port_mode: PortMode,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VlanPortCollection {
    #[serde(default)]
    pub collection_result: CollectionResult,
    #[serde(default, rename = "vlan_port_element")]
    pub memberships: Vec<VlanPort>,
}

// ── Ports ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Port {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_port_enabled: bool,
    #[serde(default)]
    pub is_port_up: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trunk_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lacp_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trunk_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_flow_control_enabled: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortCollection {
    #[serde(default)]
    pub collection_result: CollectionResult,
    #[serde(default, rename = "port_element")]
    pub ports: Vec<Port>,
}

// ── PoE ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PortPoe {
    pub port_id: String,
    #[serde(default)]
    pub is_poe_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poe_priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poe_allocation_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocated_power_in_watts: Option<u32>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PortPoeCollection {
    #[serde(default)]
    pub collection_result: CollectionResult,
    #[serde(default, rename = "port_poe")]
    pub ports: Vec<PortPoe>,
}

// ── System ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SystemInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SystemStatus {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardware_revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_model: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Transceivers ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Transceiver {
    pub port_id: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub transceiver_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransceiverCollection {
    #[serde(default)]
    pub collection_result: CollectionResult,
    #[serde(default, rename = "transceiver_element")]
    pub transceivers: Vec<Transceiver>,
}

// ── MAC table ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MacTableEntry {
    pub mac_address: String,
    pub port_id: String,
    pub vlan_id: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MacTable {
    #[serde(default)]
    pub collection_result: CollectionResult,
    #[serde(default, rename = "mac_table_entry_element")]
    pub entries: Vec<MacTableEntry>,
}

// ── CLI ──────────────────────────────────────────────────────────────

/// Raw answer of `POST cli`. The output is base64 encoded by the switch.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliCommandResult {
    pub cmd: String,
    #[serde(default)]
    pub result_base64_encoded: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub error_msg: String,
}
