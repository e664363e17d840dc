//! Check command implementation
//!
//! Prints the effective configuration and the method catalogues.

use std::io::Write;
use std::path::Path;
use tracing::info;

use numerics_compare::{linear_system_catalogue, root_finding_catalogue};

use crate::config::NumericsConfig;
use crate::Result;

/// Run the check command
pub fn run<W: Write>(config: &NumericsConfig, config_path: &Path, out: &mut W) -> Result<()> {
    info!("Checking configuration...");

    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    writeln!(out, "# Configuration source: {}", source)?;
    writeln!(out, "{}", config.to_toml()?)?;

    let roots = root_finding_catalogue();
    writeln!(out, "# Root-finding methods: {}", roots.names().join(", "))?;
    let linear = linear_system_catalogue();
    writeln!(out, "# Linear-system methods: {}", linear.names().join(", "))?;

    info!("Configuration OK");
    Ok(())
}
