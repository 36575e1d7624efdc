//! Structured document renderer.

use std::io::Write;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::RenderError;
use crate::function::Function;

/// Serialises `root` as tab-indented JSON followed by a newline.
///
/// # Errors
/// Returns an error if serialisation or writing fails.
pub fn write_json<W: Write>(root: &Function, writer: &mut W) -> Result<(), RenderError> {
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut *writer, formatter);
    root.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Renders `root` as a tab-indented JSON string followed by a newline.
///
/// # Errors
/// Returns an error if serialisation fails.
pub fn render_json(root: &Function) -> Result<String, RenderError> {
    let mut buffer = Vec::new();
    write_json(root, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| {
        RenderError::Write(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })
}
