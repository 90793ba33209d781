use std::net::Ipv4Addr;

/// Parses a required IPv4 address from operator input.
pub fn parse_ipv4(input: &str) -> Option<Ipv4Addr> {
    input.trim().parse().ok()
}

/// Parses the optional secondary field: empty input means "none", anything
/// else must be a valid IPv4 address. The outer `None` signals invalid input.
pub fn parse_optional_ipv4(input: &str) -> Option<Option<Ipv4Addr>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(None);
    }
    trimmed.parse().ok().map(Some)
}
