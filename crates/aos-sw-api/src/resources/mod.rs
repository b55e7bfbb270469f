// One client per switch subsystem. Each holds the shared handle and maps
// its operations onto REST paths under the versioned base URL.

mod authentication;
mod cli;
mod dot1x;
mod ip_address_subnet;
mod mac_authentication;
mod mac_table;
mod poe;
mod port;
mod radius_server;
mod snmp_server;
mod snmpv3;
mod sntp;
mod sntp_server_details;
mod stp;
mod syslog;
mod system;
mod tacacs_profile;
mod transceivers;
mod vlan;
mod vlan_port;

pub use authentication::AuthenticationClient;
pub use cli::{CliClient, CommandOutput};
pub use dot1x::Dot1xClient;
pub use ip_address_subnet::IpAddressSubnetClient;
pub use mac_authentication::MacAuthenticationClient;
pub use mac_table::MacTableClient;
pub use poe::PoeClient;
pub use port::PortClient;
pub use radius_server::RadiusServerClient;
pub use snmp_server::SnmpServerClient;
pub use snmpv3::Snmpv3Client;
pub use sntp::SntpClient;
pub use sntp_server_details::SntpServerDetailsClient;
pub use stp::StpClient;
pub use syslog::SyslogClient;
pub use system::SystemClient;
pub use tacacs_profile::TacacsProfileClient;
pub use transceivers::TransceiverClient;
pub use vlan::VlanClient;
pub use vlan_port::VlanPortClient;
