pub mod catalog;
pub mod commands;
pub mod config;
pub mod executor;
pub mod network;
pub mod types;
pub mod validation;

pub use catalog::{builtin_providers, render_provider_table};
pub use commands::{clear_dns, set_dns, show_current_dns};
pub use config::load_config;
pub use executor::{CommandExecutor, SystemExecutor};
pub use network::select_active_interface;
pub use types::{AppConfig, DnsProvider, InterfaceInfo, InterfaceStatus};
pub use validation::{parse_ipv4, parse_optional_ipv4};
