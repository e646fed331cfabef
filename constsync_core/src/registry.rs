//! Compile-time registry of exportable backend types.
//!
//! The scanned source tree decides *which* types get exported and in what
//! order; the registry supplies their members. A scanned type with no
//! registry entry is skipped, the same way a class that fails to load is
//! skipped by runtime reflection.

use crate::error::{ConstsyncError, Result};
use crate::types::{ConstantField, EnumCase};
use linkme::distributed_slice;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Entry layout version. Bumped whenever the entry structs change; v2 added
/// enumeration case entries.
pub const REGISTRY_ABI: u32 = 2;

/// Registry entry for an exportable enumeration type.
#[derive(Clone, Copy)]
pub struct EnumExportEntry {
    pub abi: u32,
    /// Fully-qualified backend name, e.g. `App\Enums\Status`.
    pub type_name: &'static str,
    /// Cases in declaration order.
    pub cases: fn() -> Vec<EnumCase>,
}

/// Registry entry for a class with exportable constants.
#[derive(Clone, Copy)]
pub struct ConstantExportEntry {
    pub abi: u32,
    /// Fully-qualified backend name, e.g. `App\Models\User`.
    pub type_name: &'static str,
    /// Constant fields, declared and inherited.
    pub constants: fn() -> Vec<ConstantField>,
}

/// Distributed slice that collects enum entries from all crates
#[distributed_slice]
pub static ENUM_EXPORTS: [EnumExportEntry] = [..];

/// Distributed slice that collects constant entries from all crates
#[distributed_slice]
pub static CONSTANT_EXPORTS: [ConstantExportEntry] = [..];

/// Runtime-accessible enum registry
static ENUM_INDEX: Lazy<HashMap<&'static str, &'static EnumExportEntry>> =
    Lazy::new(|| ENUM_EXPORTS.iter().map(|entry| (entry.type_name, entry)).collect());

/// Runtime-accessible constant registry
static CONSTANT_INDEX: Lazy<HashMap<&'static str, &'static ConstantExportEntry>> = Lazy::new(|| {
    CONSTANT_EXPORTS
        .iter()
        .map(|entry| (entry.type_name, entry))
        .collect()
});

/// Get the enumeration cases of a registered type by fully-qualified name.
pub fn enum_cases(type_name: &str) -> Option<Vec<EnumCase>> {
    ENUM_INDEX.get(type_name).map(|entry| (entry.cases)())
}

/// Get the class constants of a registered type by fully-qualified name.
pub fn class_constants(type_name: &str) -> Option<Vec<ConstantField>> {
    CONSTANT_INDEX.get(type_name).map(|entry| (entry.constants)())
}

/// Number of registered entries across both tables.
pub fn entry_count() -> usize {
    ENUM_EXPORTS.len() + CONSTANT_EXPORTS.len()
}

/// Fails when any entry was registered against a newer ABI than this build
/// understands. Run before any scan work.
pub fn verify_abi() -> Result<()> {
    let newest = ENUM_EXPORTS
        .iter()
        .map(|entry| entry.abi)
        .chain(CONSTANT_EXPORTS.iter().map(|entry| entry.abi))
        .max()
        .unwrap_or(REGISTRY_ABI);

    if newest > REGISTRY_ABI {
        return Err(ConstsyncError::UnsupportedRegistry {
            found: newest,
            supported: REGISTRY_ABI,
        });
    }
    Ok(())
}
