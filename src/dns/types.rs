use serde::Deserialize;
use std::net::Ipv4Addr;

/// Connection state of an interface as reported by
/// `netsh interface show interface`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InterfaceStatus {
    Connected,
    Disconnected,
    Other,
}

impl InterfaceStatus {
    pub fn from_token(token: &str) -> Self {
        match token {
            "Connected" => InterfaceStatus::Connected,
            "Disconnected" => InterfaceStatus::Disconnected,
            _ => InterfaceStatus::Other,
        }
    }

    #[allow(dead_code)]
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceStatus::Connected => "Connected",
            InterfaceStatus::Disconnected => "Disconnected",
            InterfaceStatus::Other => "Other",
        }
    }
}

/// One row of the interface listing. Names may contain spaces
/// ("Local Area Connection 2").
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InterfaceInfo {
    pub name: String,
    pub status: InterfaceStatus,
}

/// A catalog entry: a public DNS provider with one or two IPv4 servers.
#[derive(Clone, PartialEq, Eq, Deserialize, Debug)]
pub struct DnsProvider {
    pub name: String,
    pub primary: Ipv4Addr,
    #[serde(default)]
    pub secondary: Option<Ipv4Addr>,
}

/// User configuration: extra catalog entries appended after the built-ins.
#[derive(Clone, PartialEq, Eq, Deserialize, Default, Debug)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: Vec<DnsProvider>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
