use crate::dns::executor::CommandExecutor;
use crate::dns::types::{InterfaceInfo, InterfaceStatus};
use log::warn;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("interface listing failed: {0}")]
    ListingFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Lists interfaces as reported by `netsh interface show interface` and
/// echoes the raw listing so the operator can see what the OS sees.
pub fn list_interfaces(executor: &dyn CommandExecutor) -> Result<Vec<InterfaceInfo>> {
    let output = executor.run("netsh", &["interface", "show", "interface"])?;
    if !output.success {
        let detail = if output.stderr.trim().is_empty() {
            &output.stdout
        } else {
            &output.stderr
        };
        return Err(NetworkError::ListingFailed(detail.trim().to_string()));
    }

    println!("\n[Network Interfaces]");
    println!("{}", output.stdout);

    Ok(parse_interface_listing(&output.stdout))
}

/// Picks the interface to operate on, or `None` if nothing usable exists.
/// A failing OS query is treated the same as an empty listing.
pub fn select_active_interface(executor: &dyn CommandExecutor) -> Option<String> {
    match list_interfaces(executor) {
        Ok(interfaces) => pick_active(&interfaces).map(|i| i.name.clone()),
        Err(e) => {
            warn!("could not list network interfaces: {e}");
            None
        }
    }
}

/// Parses `netsh interface show interface` output. Expected rows look like
///
/// ```text
/// Admin State    State          Type             Interface Name
/// -------------------------------------------------------------------------
/// Enabled        Connected      Dedicated        Wi-Fi
/// ```
///
/// Header and separator lines are skipped; the interface name is everything
/// after the third column, preserving embedded spaces.
fn parse_interface_listing(listing: &str) -> Vec<InterfaceInfo> {
    let mut interfaces = Vec::new();

    for line in listing.lines() {
        if line.trim_start().starts_with('-') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 || tokens[0] == "Admin" {
            continue;
        }

        interfaces.push(InterfaceInfo {
            name: tokens[3..].join(" "),
            status: InterfaceStatus::from_token(tokens[1]),
        });
    }

    interfaces
}

/// Priority rule over connected interfaces: Wi-Fi first, then Ethernet, then
/// the first connected entry in listing order. Virtual and tunnel adapters
/// only win when no commonly named adapter is connected.
fn pick_active(interfaces: &[InterfaceInfo]) -> Option<&InterfaceInfo> {
    let connected: Vec<&InterfaceInfo> = interfaces
        .iter()
        .filter(|i| i.status == InterfaceStatus::Connected)
        .collect();

    connected
        .iter()
        .find(|i| i.name.contains("Wi-Fi"))
        .or_else(|| connected.iter().find(|i| i.name.contains("Ethernet")))
        .or_else(|| connected.first())
        .copied()
}
