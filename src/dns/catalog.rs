use crate::dns::types::DnsProvider;
use tabled::Tabled;
use tabled::settings::Style;

/// Built-in public DNS providers, in menu order.
const BUILTIN_PROVIDERS: &[(&str, &str, &str)] = &[
    ("Cloudflare", "1.1.1.1", "1.0.0.1"),
    ("Google", "8.8.8.8", "8.8.4.4"),
    ("Quad9", "9.9.9.9", "149.112.112.112"),
    ("OpenDNS", "208.67.222.222", "208.67.220.220"),
    ("DNS.WATCH", "84.200.69.80", "84.200.70.40"),
    ("Comodo", "8.26.56.26", "8.20.247.20"),
    ("Verisign", "64.6.64.6", "64.6.65.6"),
    ("CleanBrowsing", "185.228.168.9", "185.228.169.9"),
    ("Alternate DNS", "76.76.19.19", "76.223.122.150"),
    ("AdGuard", "94.140.14.14", "94.140.15.15"),
    ("Shecan", "178.22.122.100", "185.51.200.2"),
    ("Electro", "78.157.42.100", "78.157.42.101"),
    ("Radar Game", "10.202.10.10", "10.202.10.11"),
    ("403.online", "10.202.10.202", "10.202.10.102"),
    ("Asiatech", "194.104.158.48", "194.104.158.78"),
    ("Bogzar", "185.55.226.26", "185.55.225.25"),
];

pub fn builtin_providers() -> Vec<DnsProvider> {
    BUILTIN_PROVIDERS
        .iter()
        .map(|(name, primary, secondary)| DnsProvider {
            name: (*name).to_string(),
            primary: primary.parse().expect("built-in provider address"),
            secondary: Some(secondary.parse().expect("built-in provider address")),
        })
        .collect()
}

#[derive(Tabled)]
struct ProviderRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Primary DNS")]
    primary: String,
    #[tabled(rename = "Secondary DNS")]
    secondary: String,
}

/// Renders the catalog as an indexed table; selection is 1-based.
pub fn render_provider_table(providers: &[DnsProvider]) -> String {
    let rows: Vec<ProviderRow> = providers
        .iter()
        .enumerate()
        .map(|(i, provider)| ProviderRow {
            index: i + 1,
            name: provider.name.clone(),
            primary: provider.primary.to_string(),
            secondary: provider
                .secondary
                .map(|addr| addr.to_string())
                .unwrap_or_default(),
        })
        .collect();

    tabled::Table::new(rows).with(Style::modern()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_builtin_catalog() {
        let providers = builtin_providers();
        assert_eq!(providers.len(), 16);

        let first = &providers[0];
        assert_eq!(first.name, "Cloudflare");
        assert_eq!(first.primary, Ipv4Addr::new(1, 1, 1, 1));
        assert_eq!(first.secondary, Some(Ipv4Addr::new(1, 0, 0, 1)));

        for provider in &providers {
            assert!(!provider.name.is_empty());
            assert!(provider.secondary.is_some());
        }
    }

    #[test]
    fn test_render_provider_table() {
        let table = render_provider_table(&builtin_providers());
        assert!(table.contains("Cloudflare"));
        assert!(table.contains("208.67.222.222"));
        assert!(table.contains("Secondary DNS"));
        // 1-based indices
        assert!(table.contains(" 16 "));
    }

    #[test]
    fn test_render_handles_missing_secondary() {
        let providers = vec![DnsProvider {
            name: "Solo".to_string(),
            primary: Ipv4Addr::new(4, 2, 2, 1),
            secondary: None,
        }];
        let table = render_provider_table(&providers);
        assert!(table.contains("Solo"));
        assert!(table.contains("4.2.2.1"));
    }
}
