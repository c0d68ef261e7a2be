//! JSON output formatting.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serialize `value` as pretty JSON indented by four spaces, with a trailing newline.
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}
