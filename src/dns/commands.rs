use crate::dns::executor::CommandExecutor;
use log::warn;
use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DnsCommandError {
    #[error("`{command}` failed: {message}")]
    CommandFailed { command: String, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DnsCommandError>;

fn normalize_error_message(msg: &str) -> String {
    msg.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs one configuration command, mapping a non-zero exit into an error
/// carrying the command line and whatever the tool printed. `netsh` reports
/// most failures on stdout, so stdout is the fallback detail source.
fn run_config_command(
    executor: &dyn CommandExecutor,
    program: &str,
    args: &[&str],
) -> Result<String> {
    let output = executor.run(program, args)?;
    if !output.success {
        let detail = if output.stderr.trim().is_empty() {
            &output.stdout
        } else {
            &output.stderr
        };
        let command = format!("{} {}", program, args.join(" "));
        warn!("{command}: {}", normalize_error_message(detail));
        return Err(DnsCommandError::CommandFailed {
            command,
            message: normalize_error_message(detail),
        });
    }
    Ok(output.stdout)
}

/// Queries the interface's configured IPv4 DNS servers. Read-only; the raw
/// tool output is returned as-is, error text included, so it never fails
/// beyond showing what the OS said.
pub fn show_current_dns(executor: &dyn CommandExecutor, interface: &str) -> String {
    let name_arg = format!("name={interface}");
    match executor.run("netsh", &["interface", "ipv4", "show", "dns", &name_arg]) {
        Ok(output) => {
            if output.stderr.trim().is_empty() {
                output.stdout
            } else {
                format!("{}{}", output.stdout, output.stderr)
            }
        }
        Err(e) => format!("failed to run netsh: {e}"),
    }
}

/// Resets the interface's DNS source to DHCP for IPv4 and IPv6 (with DNS
/// registration suppressed) and flushes the resolver cache. Aborts at the
/// first failing step; steps already applied are left in place.
pub fn clear_dns(executor: &dyn CommandExecutor, interface: &str) -> Result<()> {
    let name_arg = format!("name={interface}");
    for family in ["ipv4", "ipv6"] {
        run_config_command(
            executor,
            "netsh",
            &[
                "interface",
                family,
                "set",
                "dnsservers",
                &name_arg,
                "source=dhcp",
                "register=none",
            ],
        )?;
    }
    run_config_command(executor, "ipconfig", &["/flushdns"])?;
    Ok(())
}

/// Applies static DNS servers to the interface. The clear sequence always
/// runs first, so a previous static configuration (including a stale
/// secondary entry) cannot survive into the new one. The secondary, when
/// given, is appended at index 2 after the primary. Aborts at the first
/// failing step with no rollback.
pub fn set_dns(
    executor: &dyn CommandExecutor,
    interface: &str,
    primary: Ipv4Addr,
    secondary: Option<Ipv4Addr>,
) -> Result<()> {
    clear_dns(executor, interface)?;

    let name_arg = format!("name={interface}");
    let primary_arg = primary.to_string();
    run_config_command(
        executor,
        "netsh",
        &[
            "interface",
            "ipv4",
            "set",
            "dns",
            &name_arg,
            "static",
            &primary_arg,
            "primary",
        ],
    )?;

    if let Some(secondary) = secondary {
        let secondary_arg = secondary.to_string();
        run_config_command(
            executor,
            "netsh",
            &[
                "interface",
                "ipv4",
                "add",
                "dns",
                &name_arg,
                &secondary_arg,
                "index=2",
            ],
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::executor::testing::ScriptedExecutor;

    const CLEAR_V4: &str = "netsh interface ipv4 set dnsservers name=Wi-Fi source=dhcp register=none";
    const CLEAR_V6: &str = "netsh interface ipv6 set dnsservers name=Wi-Fi source=dhcp register=none";
    const FLUSH: &str = "ipconfig /flushdns";

    fn push_clear_sequence(executor: &ScriptedExecutor) {
        executor.push_ok("");
        executor.push_ok("");
        executor.push_ok("Successfully flushed the DNS Resolver Cache.");
    }

    #[test]
    fn test_clear_dns_sequence() {
        let executor = ScriptedExecutor::new();
        push_clear_sequence(&executor);

        clear_dns(&executor, "Wi-Fi").unwrap();
        assert_eq!(executor.calls(), vec![CLEAR_V4, CLEAR_V6, FLUSH]);
    }

    #[test]
    fn test_clear_dns_aborts_on_first_failure() {
        let executor = ScriptedExecutor::new();
        executor.push_ok("");
        executor.push_failure("The interface is not configurable.");

        let err = clear_dns(&executor, "Wi-Fi").unwrap_err();
        assert_eq!(executor.calls(), vec![CLEAR_V4, CLEAR_V6]);
        assert!(err.to_string().contains("not configurable"));
    }

    #[test]
    fn test_set_dns_with_secondary_issues_five_calls() {
        let executor = ScriptedExecutor::new();
        push_clear_sequence(&executor);
        executor.push_ok("");
        executor.push_ok("");

        set_dns(
            &executor,
            "Wi-Fi",
            "8.8.8.8".parse().unwrap(),
            Some("8.8.4.4".parse().unwrap()),
        )
        .unwrap();

        assert_eq!(
            executor.calls(),
            vec![
                CLEAR_V4,
                CLEAR_V6,
                FLUSH,
                "netsh interface ipv4 set dns name=Wi-Fi static 8.8.8.8 primary",
                "netsh interface ipv4 add dns name=Wi-Fi 8.8.4.4 index=2",
            ]
        );
    }

    #[test]
    fn test_set_dns_without_secondary_issues_four_calls() {
        let executor = ScriptedExecutor::new();
        push_clear_sequence(&executor);
        executor.push_ok("");

        set_dns(&executor, "Wi-Fi", "1.1.1.1".parse().unwrap(), None).unwrap();

        assert_eq!(
            executor.calls(),
            vec![
                CLEAR_V4,
                CLEAR_V6,
                FLUSH,
                "netsh interface ipv4 set dns name=Wi-Fi static 1.1.1.1 primary",
            ]
        );
    }

    #[test]
    fn test_failed_primary_suppresses_secondary() {
        let executor = ScriptedExecutor::new();
        push_clear_sequence(&executor);
        executor.push_failure("DNS server validation failed.");

        let err = set_dns(
            &executor,
            "Wi-Fi",
            "8.8.8.8".parse().unwrap(),
            Some("8.8.4.4".parse().unwrap()),
        )
        .unwrap_err();

        assert_eq!(executor.calls().len(), 4);
        assert!(err.to_string().contains("set dns"));
    }

    #[test]
    fn test_failed_clear_suppresses_set() {
        let executor = ScriptedExecutor::new();
        executor.push_failure("Access is denied.");

        set_dns(&executor, "Wi-Fi", "9.9.9.9".parse().unwrap(), None).unwrap_err();
        assert_eq!(executor.calls(), vec![CLEAR_V4]);
    }

    #[test]
    fn test_set_dns_quotes_nothing_but_preserves_spaces() {
        let executor = ScriptedExecutor::new();
        push_clear_sequence(&executor);
        executor.push_ok("");

        set_dns(
            &executor,
            "Local Area Connection 2",
            "1.1.1.1".parse().unwrap(),
            None,
        )
        .unwrap();

        assert!(
            executor.calls()[0]
                .contains("set dnsservers name=Local Area Connection 2 source=dhcp")
        );
    }

    #[test]
    fn test_show_current_dns_returns_output_verbatim() {
        let executor = ScriptedExecutor::new();
        executor.push_ok("Configuration for interface \"Wi-Fi\"\n    DNS servers configured through DHCP:  192.168.1.1\n");

        let text = show_current_dns(&executor, "Wi-Fi");
        assert!(text.contains("DNS servers configured through DHCP"));
        assert_eq!(
            executor.calls(),
            vec!["netsh interface ipv4 show dns name=Wi-Fi"]
        );
    }

    #[test]
    fn test_show_current_dns_surfaces_error_text() {
        let executor = ScriptedExecutor::new();
        executor.push_failure("The interface name is invalid.");

        let text = show_current_dns(&executor, "Nope");
        assert!(text.contains("The interface name is invalid."));
    }

    #[test]
    fn test_normalize_error_message() {
        assert_eq!(
            normalize_error_message("  The parameter is incorrect.\r\n\r\n"),
            "The parameter is incorrect."
        );
        assert_eq!(normalize_error_message("a\n  b\n\nc"), "a b c");
    }
}
