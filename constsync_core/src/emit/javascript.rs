//! JavaScript module emission.

use crate::export::{ExportEntry, ExportSet};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;
use tracing::debug;

/// Renders one `export const NAME = {...};` statement per entry, each
/// followed by a blank line. Member objects are pretty-printed JSON with a
/// four-space indent.
pub fn generate_module_string(set: &ExportSet) -> String {
    debug!("Generating JavaScript module for {} export(s)", set.len());

    let mut out = String::new();
    for entry in set.iter() {
        out.push_str(&format!(
            "export const {} = {};\n\n",
            entry.name,
            render_member_object(entry)
        ));
    }
    out
}

fn render_member_object(entry: &ExportEntry) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    MemberObject(entry)
        .serialize(&mut serializer)
        .expect("Member map serialization to a buffer cannot fail");
    String::from_utf8(buf).expect("serde_json output is valid UTF-8")
}

/// Serializes an entry's members as a JSON object in insertion order.
struct MemberObject<'a>(&'a ExportEntry);

impl Serialize for MemberObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.members.len()))?;
        for member in &self.0.members {
            map.serialize_entry(&member.name, &member.value)?;
        }
        map.end()
    }
}
