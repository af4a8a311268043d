use crate::parser::LoadError;
use std::fs;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read a file for a text-based parser
pub(crate) fn read_source(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|e| LoadError::input(format!("failed to read file: {}", e)).with_path(path))
}

/// Decode bytes as UTF-8, falling back to lossy replacement
///
/// Returns a degraded warning when any bytes had to be replaced.
pub(crate) fn decode_utf8(bytes: Vec<u8>, path: &Path) -> (String, Option<LoadError>) {
    let bytes = match bytes.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_vec(),
        None => bytes,
    };
    match String::from_utf8(bytes) {
        Ok(text) => (text, None),
        Err(e) => {
            let text = String::from_utf8_lossy(e.as_bytes()).into_owned();
            let warning = LoadError::degraded(
                "file is not valid UTF-8; undecodable bytes were replaced",
            )
            .with_path(path);
            (text, Some(warning))
        }
    }
}
