use log::debug;
use std::io;
use std::process::{Command, Stdio};

/// Captured result of a single child-process invocation.
#[derive(Clone, Debug, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs OS configuration commands on behalf of the selector and the
/// configurator. Production code uses [`SystemExecutor`]; tests substitute a
/// scripted fake so command sequences can be asserted without touching the
/// real network stack.
pub trait CommandExecutor {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput>;
}

/// Spawns real child processes, blocking until each one exits.
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandOutput> {
        debug!("running: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
