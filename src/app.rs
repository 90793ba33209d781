use crate::dns;
use crate::dns::executor::CommandExecutor;
use crate::dns::types::DnsProvider;
use std::io::{self, BufRead, Write};
use std::net::Ipv4Addr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum MenuAction {
    ShowDns,
    SetCustom,
    SetFromList,
    ClearDns,
    Quit,
}

fn parse_menu_choice(input: &str) -> Option<MenuAction> {
    match input.trim() {
        "1" => Some(MenuAction::ShowDns),
        "2" => Some(MenuAction::SetCustom),
        "3" => Some(MenuAction::SetFromList),
        "4" => Some(MenuAction::ClearDns),
        "5" => Some(MenuAction::Quit),
        _ => None,
    }
}

/// Maps a 1-based catalog selection onto a zero-based index.
fn parse_catalog_selection(input: &str, catalog_len: usize) -> Option<usize> {
    let selection: usize = input.trim().parse().ok()?;
    if (1..=catalog_len).contains(&selection) {
        Some(selection - 1)
    } else {
        None
    }
}

fn prompt(reader: &mut dyn BufRead, text: &str) -> io::Result<String> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn pause(reader: &mut dyn BufRead) -> io::Result<()> {
    prompt(reader, "\nPress Enter to continue...")?;
    Ok(())
}

fn print_menu() {
    println!();
    println!("{}", "=".repeat(50));
    println!("{:=^50}", " DNS Manager ");
    println!("{}", "=".repeat(50));
    println!("1. Show current DNS settings");
    println!("2. Set custom DNS");
    println!("3. Select from predefined DNS list");
    println!("4. Clear all DNS settings");
    println!("5. Exit");
}

/// Interactive menu loop. Returns when the operator picks Exit; every other
/// path reports its outcome and loops. Only genuine terminal I/O failures
/// propagate.
pub fn run(executor: &dyn CommandExecutor, providers: &[DnsProvider]) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let choice = prompt(&mut input, "\nEnter your choice (1-5): ")?;
        let Some(action) = parse_menu_choice(&choice) else {
            println!("Invalid choice.");
            pause(&mut input)?;
            continue;
        };

        if action == MenuAction::Quit {
            println!("Exiting DNS Manager...");
            return Ok(());
        }

        let Some(interface) = dns::select_active_interface(executor) else {
            println!("No active network interface found!");
            pause(&mut input)?;
            continue;
        };
        println!("Active interface detected: {interface}");

        match action {
            MenuAction::ShowDns => {
                println!("\nCurrent DNS settings for interface '{interface}':");
                println!("{}", dns::show_current_dns(executor, &interface));
            }
            MenuAction::SetCustom => set_custom_dns(executor, &mut input, &interface)?,
            MenuAction::SetFromList => {
                set_dns_from_catalog(executor, &mut input, &interface, providers)?
            }
            MenuAction::ClearDns => match dns::clear_dns(executor, &interface) {
                Ok(()) => {
                    println!("All DNS settings cleared for interface '{interface}'.")
                }
                Err(e) => eprintln!("Failed to clear DNS settings: {e}"),
            },
            MenuAction::Quit => return Ok(()),
        }

        pause(&mut input)?;
    }
}

fn set_custom_dns(
    executor: &dyn CommandExecutor,
    input: &mut dyn BufRead,
    interface: &str,
) -> io::Result<()> {
    let primary_line = prompt(input, "Enter Primary DNS: ")?;
    let Some(primary) = dns::parse_ipv4(&primary_line) else {
        println!("'{primary_line}' is not a valid IPv4 address.");
        return Ok(());
    };

    let secondary_line = prompt(input, "Enter Secondary DNS (optional): ")?;
    let Some(secondary) = dns::parse_optional_ipv4(&secondary_line) else {
        println!("'{secondary_line}' is not a valid IPv4 address.");
        return Ok(());
    };

    apply_dns(executor, interface, primary, secondary);
    Ok(())
}

fn set_dns_from_catalog(
    executor: &dyn CommandExecutor,
    input: &mut dyn BufRead,
    interface: &str,
    providers: &[DnsProvider],
) -> io::Result<()> {
    println!("\nAvailable DNS servers:");
    println!("{}", dns::render_provider_table(providers));

    let line = prompt(input, "\nSelect DNS server by number: ")?;
    let Some(index) = parse_catalog_selection(&line, providers.len()) else {
        println!("Invalid selection.");
        return Ok(());
    };

    let provider = &providers[index];
    println!("Applying {} DNS...", provider.name);
    apply_dns(executor, interface, provider.primary, provider.secondary);
    Ok(())
}

fn apply_dns(
    executor: &dyn CommandExecutor,
    interface: &str,
    primary: Ipv4Addr,
    secondary: Option<Ipv4Addr>,
) {
    match dns::set_dns(executor, interface, primary, secondary) {
        Ok(()) => {
            println!("\nDNS configured successfully:");
            println!("Primary DNS: {primary}");
            if let Some(secondary) = secondary {
                println!("Secondary DNS: {secondary}");
            }
        }
        Err(e) => eprintln!("Failed to set DNS: {e}"),
    }
}
