//! Enums command - exports registered backend enums to JavaScript.

use crate::cli::{Cli, EnumsArgs};
use constsync_core::{
    config::ConstsyncConfig,
    error::Result,
    export::{self, ExportKind, ExportOptions, Outcome},
    registry,
};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Runs the enums command.
pub fn run(cli: &Cli, args: EnumsArgs) -> Result<()> {
    registry::verify_abi()?;

    let config = ConstsyncConfig::load(cli.config.as_deref())?;
    let options = build_options(&config, &args);
    debug!(
        "Exporting enums from {} to {}",
        options.source_root.display(),
        options.output_path.display()
    );

    match export::run(ExportKind::Enums, &options)? {
        Outcome::Empty => {
            warn!("No enums found.");
        }
        Outcome::Written {
            module,
            declarations,
        } => {
            info!("Enums exported to {}", module.display());
            if let Some(path) = declarations {
                info!("TypeScript definitions exported to {}", path.display());
            }
        }
    }
    Ok(())
}

fn build_options(config: &ConstsyncConfig, args: &EnumsArgs) -> ExportOptions {
    // empty flag values fall back to the configured default
    let source_dir = args
        .path
        .clone()
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| config.enums.source_dir.clone());
    let suffix = args
        .suffix
        .clone()
        .filter(|suffix| !suffix.is_empty())
        .unwrap_or_else(|| config.enums.suffix.clone());
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.enums.output));

    ExportOptions {
        source_root: PathBuf::from(&config.project.app_root).join(source_dir),
        output_path: PathBuf::from(&config.project.base_root).join(output),
        suffix,
        emit_declarations: args.typescript || config.enums.typescript,
        ignore_list: config.enums.ignore.clone(),
    }
}
