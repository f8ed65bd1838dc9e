use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use crate::core::library::{LibraryError, LibraryResult};

pub const JSON_INDENT: &[u8] = b"    ";

// Serializes with a four space indent, keys in declaration order.
pub fn to_pretty_json<T: Serialize>(value: &T) -> LibraryResult<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|err| LibraryError::serialization(
        format!("json output is not utf-8 {:?}", err).as_str()))
}
