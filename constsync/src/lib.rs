pub use constsync_core::linkme;
pub use constsync_core::{config, emit, error, export, php, policy, registry, types};

pub mod cli;
pub mod commands;
