//! JSON export format implementation

use serde_json::{Value as JsonValue, json};

use crate::codec::encode;
use crate::search::ResultTriple;

use super::format::ExportFormat;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy)]
pub struct JsonExporter {
    pub base: u32,
}

impl ExportFormat for JsonExporter {
    fn header(&self) -> Option<String> {
        None // NDJSON has no header line
    }

    fn format_row(&self, triple: &ResultTriple) -> String {
        format_json_entry(triple, self.base).to_string()
    }
}

/// Generate the JSON object for one triple.
///
/// Values are decimal strings; base-`b` renderings are included when
/// `base != 10`.
pub fn format_json_entry(triple: &ResultTriple, base: u32) -> JsonValue {
    let mut entry = json!({
        "x": triple.x,
        "y": triple.y,
        "d": triple.d,
    });

    if base != 10
        && let Some(object) = entry.as_object_mut()
    {
        object.insert("base".to_string(), json!(base));
        object.insert("x_base".to_string(), json!(encode(triple.x, base)));
        object.insert("y_base".to_string(), json!(encode(triple.y, base)));
    }

    entry
}
