//! Init command - initializes constsync.toml configuration.

use crate::cli::{Cli, InitArgs};
use constsync_core::config::CONFIG_FILE_NAME;
use constsync_core::error::Result;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Runs the init command.
pub fn run(_cli: &Cli, args: InitArgs) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        error!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
        return Ok(());
    }

    fs::write(config_path, starter_config())?;
    info!("Created {}", CONFIG_FILE_NAME);
    info!("Next steps:");
    info!("  1. Register your backend types with the constsync_core registry");
    info!("  2. Run 'constsync enums' or 'constsync constants'");

    Ok(())
}

/// Starter configuration matching the built-in defaults.
pub fn starter_config() -> &'static str {
    r#"# Constsync Configuration

[project]
# Where backend source directories live
app_root = "app"
# Where output paths are resolved
base_root = "."

[enums]
# Directory under the app root containing enum sources
source_dir = "Enums"
# Output file for the generated JavaScript module
output = "resources/js/enums.js"
# Suffix appended to each exported enum name
suffix = ""
# Also emit a TypeScript declaration file
typescript = false
# Member names never emitted
ignore = ["CREATED_AT", "UPDATED_AT"]

[constants]
# Output file for the generated JavaScript module
output = "resources/js/constants.js"
# Suffix appended to each exported model name
suffix = "Model"
# Also emit a TypeScript declaration file
typescript = false
"#
}
