//! Ordered key/value store for the emulator's Qt-style config files.
//!
//! The emulator writes `key=value` pairs grouped under `[section]` headers;
//! key names may contain backslashes (`speed_limit\use_global`). Section and
//! key order is preserved so a load/save cycle does not shuffle the file.
//! Output is normalized, which makes repeated patch runs byte-for-byte
//! idempotent.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse document text. Blank lines and `;`/`#` comments are dropped;
    /// lines without `=` are ignored. Keys before the first section header
    /// land in an unnamed section.
    pub fn parse(text: &str) -> Self {
        let mut sections: Vec<Section> = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                sections.push(Section {
                    name: line[1..line.len() - 1].trim().to_string(),
                    entries: Vec::new(),
                });
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                if sections.is_empty() {
                    sections.push(Section {
                        name: String::new(),
                        entries: Vec::new(),
                    });
                }
                if let Some(section) = sections.last_mut() {
                    section
                        .entries
                        .push((key.trim().to_string(), value.trim().to_string()));
                }
            }
        }

        Self { sections }
    }

    /// Load a document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Persist the document in normalized form.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|source| Error::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up a value by section and key.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.find_section(section)?
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a value, replacing an existing key in place or appending it.
    /// The section is created if it does not exist yet.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let index = match self.sections.iter().position(|s| s.name == section) {
            Some(i) => i,
            None => {
                self.sections.push(Section {
                    name: section.to_string(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        };
        let section = &mut self.sections[index];

        match section.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => section.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// All `(key, value)` pairs of a section, in file order. Empty when the
    /// section does not exist.
    pub fn entries(&self, section: &str) -> &[(String, String)] {
        self.find_section(section)
            .map(|s| s.entries.as_slice())
            .unwrap_or(&[])
    }

    fn find_section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }
}

impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if !section.name.is_empty() {
                writeln!(f, "[{}]", section.name)?;
            }
            for (key, value) in &section.entries {
                writeln!(f, "{}={}", key, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[UI]
Paths\\gamedirs\\size=2
Paths\\gamedirs\\1\\path=C:/games
Paths\\gamedirs\\1\\deep_scan=false

[Core]
speed_limit=100
";

    #[test]
    fn test_parse_and_get() {
        let doc = IniDocument::parse(SAMPLE);
        assert_eq!(doc.get("UI", "Paths\\gamedirs\\1\\path"), Some("C:/games"));
        assert_eq!(doc.get("Core", "speed_limit"), Some("100"));
        assert_eq!(doc.get("Core", "missing"), None);
        assert_eq!(doc.get("Missing", "speed_limit"), None);
    }

    #[test]
    fn test_entries_preserve_order() {
        let doc = IniDocument::parse(SAMPLE);
        let keys: Vec<&str> = doc.entries("UI").iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "Paths\\gamedirs\\size",
                "Paths\\gamedirs\\1\\path",
                "Paths\\gamedirs\\1\\deep_scan",
            ]
        );
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut doc = IniDocument::parse(SAMPLE);
        doc.set("Core", "speed_limit", "200");
        assert_eq!(doc.get("Core", "speed_limit"), Some("200"));
        // Still a single entry, not an appended duplicate.
        assert_eq!(doc.entries("Core").len(), 1);
    }

    #[test]
    fn test_set_creates_section_and_key() {
        let mut doc = IniDocument::new();
        doc.set("Core", "speed_limit\\use_global", "false");
        assert_eq!(doc.get("Core", "speed_limit\\use_global"), Some("false"));
    }

    #[test]
    fn test_comments_and_blank_lines_dropped() {
        let doc = IniDocument::parse("; comment\n# another\n\n[S]\nk=v\n");
        assert_eq!(doc.get("S", "k"), Some("v"));
    }

    #[test]
    fn test_preamble_keys_without_section() {
        let doc = IniDocument::parse("orphan=1\n[S]\nk=v\n");
        assert_eq!(doc.get("", "orphan"), Some("1"));
    }

    #[test]
    fn test_render_round_trip_is_stable() {
        let doc = IniDocument::parse(SAMPLE);
        let first = doc.to_string();
        let second = IniDocument::parse(&first).to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_value_may_contain_equals() {
        let doc = IniDocument::parse("[S]\nk=a=b\n");
        assert_eq!(doc.get("S", "k"), Some("a=b"));
    }
}
