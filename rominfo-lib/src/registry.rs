//! Parser registry: dispatch files and buffers to the right decoder.

use std::path::Path;

use rominfo_core::{
    Platform, RomInfoError, RomInfoParser, RomProperties, file_extension, read_file_prefix,
};

/// Bytes read when sniffing a file by content: one past the largest SNES
/// image (8 MB plus a copier header), so oversize files stay oversize.
const SNIFF_LIMIT: u64 = 0x800200 + 1;

/// A registered format with its parser.
pub struct RegisteredParser {
    /// Platform identifier
    pub platform: Platform,
    /// File extensions claimed by the parser (lowercase, no dot)
    pub extensions: &'static [&'static str],
    pub parser: Box<dyn RomInfoParser>,
}

impl RegisteredParser {
    pub fn new<P: RomInfoParser + 'static>(parser: P) -> Self {
        Self {
            platform: parser.platform(),
            extensions: parser.file_extensions(),
            parser: Box::new(parser),
        }
    }

    /// True when the parser claims `ext` (case-insensitive, leading dot ignored).
    pub fn claims_extension(&self, ext: &str) -> bool {
        self.parser.is_valid_extension(ext)
    }
}

/// Ordered set of format parsers.
///
/// Registration order is dispatch order: when several parsers claim an
/// extension or accept a buffer, the earliest one that produces fields
/// wins. The registry holds no mutable state after construction, so it can
/// be shared across threads behind an `Arc`.
pub struct ParserRegistry {
    parsers: Vec<RegisteredParser>,
    sniff_content: bool,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserRegistry {
    /// Create an empty registry with content sniffing enabled.
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
            sniff_content: true,
        }
    }

    /// Register a parser after all previously registered ones.
    pub fn register<P: RomInfoParser + 'static>(&mut self, parser: P) -> &mut Self {
        self.parsers.push(RegisteredParser::new(parser));
        self
    }

    /// Enable or disable the content-sniff fallback of [`identify_path`](Self::identify_path).
    pub fn with_sniff_content(mut self, enabled: bool) -> Self {
        self.sniff_content = enabled;
        self
    }

    pub fn sniff_content(&self) -> bool {
        self.sniff_content
    }

    /// Keep only the given platforms, preserving registration order.
    pub fn with_platforms(mut self, platforms: &[Platform]) -> Self {
        self.parsers.retain(|p| platforms.contains(&p.platform));
        self
    }

    /// All registered parsers in dispatch order.
    pub fn parsers(&self) -> impl Iterator<Item = &RegisteredParser> {
        self.parsers.iter()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Get a parser by its `Platform` enum variant.
    pub fn get_by_platform(&self, platform: Platform) -> Option<&RegisteredParser> {
        self.parsers.iter().find(|p| p.platform == platform)
    }

    /// Get a parser by short name or alias.
    pub fn get_by_short_name(&self, short_name: &str) -> Option<&RegisteredParser> {
        short_name
            .parse::<Platform>()
            .ok()
            .and_then(|platform| self.get_by_platform(platform))
    }

    /// Parsers claiming an extension, in dispatch order.
    pub fn find_by_extension(&self, ext: &str) -> Vec<&RegisteredParser> {
        self.parsers
            .iter()
            .filter(|p| p.claims_extension(ext))
            .collect()
    }

    /// List all short names.
    pub fn short_names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.platform.short_name()).collect()
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    /// Identify a file and decode it.
    ///
    /// Parsers claiming the file's extension are tried first. If none
    /// claims it, or all of them come back empty, the file is sniffed by
    /// content (unless sniffing is disabled). Only I/O errors are returned.
    pub fn identify_path(
        &self,
        path: &Path,
    ) -> Result<Option<(Platform, RomProperties)>, RomInfoError> {
        if let Some(ext) = file_extension(path) {
            for entry in self.find_by_extension(&ext) {
                let props = entry.parser.parse(path)?;
                if !props.is_empty() {
                    return Ok(Some((entry.platform, props)));
                }
                log::debug!(
                    "{}: no fields decoded from {}",
                    entry.platform.short_name(),
                    path.display()
                );
            }
        }

        if !self.sniff_content {
            return Ok(None);
        }
        log::debug!("Sniffing {} by content", path.display());
        self.identify_contents(path)
    }

    /// Read a file and dispatch it by content only, ignoring its extension.
    pub fn identify_contents(
        &self,
        path: &Path,
    ) -> Result<Option<(Platform, RomProperties)>, RomInfoError> {
        let data = read_file_prefix(path, Some(SNIFF_LIMIT))?;
        Ok(self.identify_buffer(data))
    }

    /// Decode a file, returning an empty map when no format matches.
    pub fn parse_path(&self, path: &Path) -> Result<RomProperties, RomInfoError> {
        Ok(self
            .identify_path(path)?
            .map(|(_, props)| props)
            .unwrap_or_default())
    }

    /// Try every parser whose content check accepts the buffer, in order.
    pub fn identify_buffer(&self, data: Vec<u8>) -> Option<(Platform, RomProperties)> {
        for entry in &self.parsers {
            if !entry.parser.is_valid_data(&data) {
                continue;
            }
            let props = entry.parser.parse_buffer(data.clone());
            if !props.is_empty() {
                return Some((entry.platform, props));
            }
        }
        None
    }

    /// Decode a buffer, returning an empty map when no format matches.
    pub fn parse_buffer(&self, data: Vec<u8>) -> RomProperties {
        self.identify_buffer(data)
            .map(|(_, props)| props)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
