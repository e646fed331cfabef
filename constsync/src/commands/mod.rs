//! Command handlers for the Constsync CLI.

pub mod constants;
pub mod enums;
pub mod init;
