use std::sync::Arc;

use crate::resources::{
    AuthenticationClient, CliClient, Dot1xClient, IpAddressSubnetClient, MacAuthenticationClient,
    MacTableClient, PoeClient, PortClient, RadiusServerClient, SnmpServerClient, Snmpv3Client,
    SntpClient, SntpServerDetailsClient, StpClient, SyslogClient, SystemClient,
    TacacsProfileClient, TransceiverClient, VlanClient, VlanPortClient,
};
use crate::transport::{Transport, TransportHandle};

/// Every resource client of one session, built once over the same handle.
///
/// Reached through the facades by deref: `client.vlan.list()`.
pub struct Resources<T: Transport> {
    pub authentication: AuthenticationClient<T>,
    pub dot1x: Dot1xClient<T>,
    pub ip_address_subnet: IpAddressSubnetClient<T>,
    pub mac_authentication: MacAuthenticationClient<T>,
    pub poe: PoeClient<T>,
    pub port: PortClient<T>,
    pub radius_server: RadiusServerClient<T>,
    pub snmp_server: SnmpServerClient<T>,
    pub snmpv3: Snmpv3Client<T>,
    pub sntp: SntpClient<T>,
    pub sntp_server_details: SntpServerDetailsClient<T>,
    pub stp: StpClient<T>,
    pub syslog: SyslogClient<T>,
    pub system: SystemClient<T>,
    pub tacacs_profile: TacacsProfileClient<T>,
    pub vlan: VlanClient<T>,
    pub vlan_port: VlanPortClient<T>,
    pub transceivers: TransceiverClient<T>,
    pub mac_table: MacTableClient<T>,
    pub cli: CliClient<T>,
}

impl<T: Transport> Resources<T> {
    pub(crate) fn new(handle: &Arc<TransportHandle<T>>) -> Self {
        Self {
            authentication: AuthenticationClient::new(Arc::clone(handle)),
            dot1x: Dot1xClient::new(Arc::clone(handle)),
            ip_address_subnet: IpAddressSubnetClient::new(Arc::clone(handle)),
            mac_authentication: MacAuthenticationClient::new(Arc::clone(handle)),
            poe: PoeClient::new(Arc::clone(handle)),
            port: PortClient::new(Arc::clone(handle)),
            radius_server: RadiusServerClient::new(Arc::clone(handle)),
            snmp_server: SnmpServerClient::new(Arc::clone(handle)),
            snmpv3: Snmpv3Client::new(Arc::clone(handle)),
            sntp: SntpClient::new(Arc::clone(handle)),
            sntp_server_details: SntpServerDetailsClient::new(Arc::clone(handle)),
            stp: StpClient::new(Arc::clone(handle)),
            syslog: SyslogClient::new(Arc::clone(handle)),
            system: SystemClient::new(Arc::clone(handle)),
            tacacs_profile: TacacsProfileClient::new(Arc::clone(handle)),
            vlan: VlanClient::new(Arc::clone(handle)),
            vlan_port: VlanPortClient::new(Arc::clone(handle)),
            transceivers: TransceiverClient::new(Arc::clone(handle)),
            mac_table: MacTableClient::new(Arc::clone(handle)),
            cli: CliClient::new(Arc::clone(handle)),
        }
    }
}
