//! TypeScript declaration emission.

use crate::export::ExportSet;
use tracing::debug;

/// Renders one `export declare const NAME: {...};` block per entry. Member
/// types are `number` for integer values and `string` for everything else.
/// Enum output marks members `readonly`; constants output does not.
pub fn generate_declaration_string(set: &ExportSet, readonly_members: bool) -> String {
    debug!("Generating TypeScript declarations for {} export(s)", set.len());
    let modifier = if readonly_members { "readonly " } else { "" };

    let mut out = String::new();
    for entry in set.iter() {
        out.push_str(&format!("export declare const {}: {{\n", entry.name));
        for member in &entry.members {
            out.push_str(&format!(
                "  {}{}: {};\n",
                modifier,
                member.name,
                member.value.ts_type()
            ));
        }
        out.push_str("};\n\n");
    }
    out
}
