use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod error;
pub mod platform;
pub mod util;

pub use error::RomInfoError;
pub use platform::{Platform, PlatformParseError};

/// A single decoded header value.
///
/// Nearly every field is text; a handful of multi-valued fields (for
/// example Dreamcast peripheral support) are lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Text(String),
    List(Vec<String>),
}

impl PropValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

impl std::fmt::Display for PropValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for PropValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Result of decoding one file: field name to value.
///
/// Key names are the stable output contract of each decoder. An empty map
/// means "not this format" (or nothing could be decoded).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RomProperties {
    fields: BTreeMap<String, PropValue>,
}

impl RomProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, key: &str, value: impl Into<PropValue>) -> &mut Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.fields.get(key)
    }

    /// Text value of a field, if present and textual.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_text)
    }

    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(PropValue::as_list)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Lowercased text after the last `.` of the file name.
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Read a file, or only its first `limit` bytes.
pub fn read_file_prefix(path: &Path, limit: Option<u64>) -> Result<Vec<u8>, RomInfoError> {
    let mut file = File::open(path)?;
    let mut data = Vec::new();
    match limit {
        Some(n) => (&mut file).take(n).read_to_end(&mut data)?,
        None => file.read_to_end(&mut data)?,
    };
    Ok(data)
}

/// Log a decode failure at a level matching how surprising it is.
pub fn log_failure(platform: Platform, err: &RomInfoError) {
    match err {
        RomInfoError::FormatMismatch(_) | RomInfoError::Truncated { .. } => {
            log::debug!("{}: {}", platform.short_name(), err)
        }
        RomInfoError::UnsupportedVariant(_) => log::info!("{}: {}", platform.short_name(), err),
        RomInfoError::MalformedStructure(_) | RomInfoError::Io(_) => {
            log::warn!("{}: {}", platform.short_name(), err)
        }
    }
}

/// Fold a decode result into the public contract: I/O errors propagate,
/// everything else becomes an empty map.
pub fn settle(
    platform: Platform,
    result: Result<RomProperties, RomInfoError>,
) -> Result<RomProperties, RomInfoError> {
    match result {
        Ok(props) => Ok(props),
        Err(e) if e.is_io() => Err(e),
        Err(e) => {
            log_failure(platform, &e);
            Ok(RomProperties::new())
        }
    }
}

/// One ROM/disc header format.
///
/// Implementors are stateless, so a single instance can be shared across
/// threads and used for any number of concurrent parses.
pub trait RomInfoParser: Send + Sync {
    /// Returns the platform this parser handles.
    fn platform(&self) -> Platform;

    /// Returns file extensions (lowercase, no dot) this parser claims.
    fn file_extensions(&self) -> &'static [&'static str];

    /// Case-insensitive extension check. A leading dot is ignored.
    fn is_valid_extension(&self, ext: &str) -> bool {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        self.file_extensions().contains(&ext.as_str())
    }

    /// Content sniff: does this buffer carry the format's signature?
    ///
    /// Formats that can only be picked by extension keep the default.
    fn is_valid_data(&self, _data: &[u8]) -> bool {
        false
    }

    /// Whether `is_valid_data` can ever accept a buffer. Extension-only
    /// formats return `false`.
    fn sniffs_content(&self) -> bool {
        true
    }

    /// Decode a buffer. The buffer is owned so decoders may correct it
    /// (byte-swap, strip, de-interleave) before reading fields.
    fn decode(&self, data: Vec<u8>) -> Result<RomProperties, RomInfoError>;

    /// Decode a buffer, mapping every failure to an empty map.
    fn parse_buffer(&self, data: Vec<u8>) -> RomProperties {
        match self.decode(data) {
            Ok(props) => props,
            Err(e) => {
                log_failure(self.platform(), &e);
                RomProperties::new()
            }
        }
    }

    /// How many leading bytes `parse` reads. `None` reads the whole file.
    fn read_limit(&self, _path: &Path) -> Option<u64> {
        None
    }

    /// Gate applied to the bytes read by `parse` before decoding.
    fn accepts_file(&self, data: &[u8]) -> bool {
        self.is_valid_data(data)
    }

    /// Read a file and decode it.
    ///
    /// Only I/O errors are returned; anything else yields an empty map.
    fn parse(&self, path: &Path) -> Result<RomProperties, RomInfoError> {
        let data = read_file_prefix(path, self.read_limit(path))?;
        if !self.accepts_file(&data) {
            log::debug!(
                "{}: {} rejected by content check",
                self.platform().short_name(),
                path.display()
            );
            return Ok(RomProperties::new());
        }
        Ok(self.parse_buffer(data))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
