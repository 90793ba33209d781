mod app;
mod dns;
mod elevation;

use dns::SystemExecutor;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match elevation::is_elevated() {
        Ok(true) => {}
        Ok(false) => {
            eprintln!("Please run this program as Administrator.");
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("Could not verify administrator privileges: {e}");
            return ExitCode::from(1);
        }
    }

    let config = match dns::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config, using defaults: {e}");
            Default::default()
        }
    };

    let mut providers = dns::builtin_providers();
    providers.extend(config.providers);

    if let Err(e) = app::run(&SystemExecutor, &providers) {
        eprintln!("Terminal I/O error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
