// Constsync - backend enum and model constant export for frontend code

pub mod config;
pub mod emit;
pub mod error;
pub mod export;
pub mod php;
pub mod policy;
pub mod registry;
pub mod scan;
pub mod types;

// Re-export commonly used items for convenience
pub use linkme;

pub use error::{ConstsyncError, Result};
pub use export::{ExportKind, ExportOptions, ExportSet, Outcome};
pub use types::{ConstantField, EnumCase, Member, MemberValue};
