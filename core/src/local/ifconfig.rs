use std::process::Command;

use tracing::debug;

use ipbeacon_common::error::ResolveError;

use super::InterfaceSource;

/// Runs `ifconfig <interface>` and reads the address off the first `inet` line.
pub struct IfconfigCommand {
    program: String,
}

impl IfconfigCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for IfconfigCommand {
    fn default() -> Self {
        Self::new("ifconfig")
    }
}

impl InterfaceSource for IfconfigCommand {
    fn inet_address(&self, interface: &str) -> Result<Option<String>, ResolveError> {
        let output = Command::new(&self.program)
            .arg(interface)
            .output()
            .map_err(|e| ResolveError::Command(format!("{} {interface}: {e}", self.program)))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(ResolveError::Command(format!(
                "{} {interface} exited with {}: {}",
                self.program,
                output.status,
                combined.trim()
            )));
        }

        debug!("{} {interface} printed {} bytes", self.program, combined.len());
        Ok(parse_inet(&combined))
    }
}

/// Token following the first `inet ` on a line, without a legacy `addr:` prefix.
pub fn parse_inet(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let rest = line.trim_start().strip_prefix("inet")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let token = rest.split_whitespace().next()?;
        Some(token.strip_prefix("addr:").unwrap_or(token).to_string())
    })
}
