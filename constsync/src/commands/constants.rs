//! Constants command - exports registered model constants to JavaScript.

use crate::cli::{Cli, ConstantsArgs};
use constsync_core::{
    config::ConstsyncConfig,
    error::Result,
    export::{self, ExportKind, ExportOptions, Outcome},
    registry,
};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Models always live in the conventional directory; there is no flag for it.
const MODELS_DIR: &str = "Models";

/// Runs the constants command.
pub fn run(cli: &Cli, args: ConstantsArgs) -> Result<()> {
    registry::verify_abi()?;

    let config = ConstsyncConfig::load(cli.config.as_deref())?;
    let options = build_options(&config, &args);
    debug!(
        "Exporting model constants from {} to {}",
        options.source_root.display(),
        options.output_path.display()
    );

    match export::run(ExportKind::Constants, &options)? {
        Outcome::Empty => {
            warn!("No constants found in models.");
        }
        Outcome::Written {
            module,
            declarations,
        } => {
            info!("Constants exported to {}", module.display());
            if let Some(path) = declarations {
                info!("TypeScript definitions exported to {}", path.display());
            }
        }
    }
    Ok(())
}

fn build_options(config: &ConstsyncConfig, args: &ConstantsArgs) -> ExportOptions {
    // an empty suffix flag falls back to the configured default
    let suffix = args
        .suffix
        .clone()
        .filter(|suffix| !suffix.is_empty())
        .unwrap_or_else(|| config.constants.suffix.clone());
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.constants.output));

    ExportOptions {
        source_root: PathBuf::from(&config.project.app_root).join(MODELS_DIR),
        output_path: PathBuf::from(&config.project.base_root).join(output),
        suffix,
        emit_declarations: args.typescript || config.constants.typescript,
        ignore_list: Vec::new(),
    }
}
