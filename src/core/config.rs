use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Target key whose entries apply regardless of the requested application.
pub const DEFAULT_TARGET: &str = "default";

/// Project file flavor referenced by a build entry.
///
/// `slcp` is the application-only project file; `slcw` is the solution file
/// that also carries the bootloader. Entries that omit the tag build the
/// solution (`slcw`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectFileType {
    Slcp,
    #[default]
    Slcw,
}

impl ProjectFileType {
    pub fn tag(&self) -> &'static str {
        match self {
            ProjectFileType::Slcp => "slcp",
            ProjectFileType::Slcw => "slcw",
        }
    }
}

/// One build record: which boards to build and with which extra arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildEntry {
    pub boards: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_file_type: Option<ProjectFileType>,
}

impl BuildEntry {
    /// Effective project file type for this entry (absent tag means `slcw`).
    pub fn project_file_type(&self) -> ProjectFileType {
        self.project_file_type.unwrap_or_default()
    }
}

/// Entries for one build type, keyed by target application name.
/// The `"default"` key applies to every application.
pub type BuildTypeBlock = HashMap<String, Vec<BuildEntry>>;

/// Parsed build configuration: build-type name -> per-target entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildConfig(HashMap<String, BuildTypeBlock>);

impl BuildConfig {
    pub fn build_type(&self, name: &str) -> Option<&BuildTypeBlock> {
        self.0.get(name)
    }

    /// Build types present in the configuration, sorted for stable output.
    /// The set of accepted build types is data, not code; callers use this
    /// for error hints rather than checking against a hardcoded list.
    pub fn build_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Load and parse a configuration file. Tilde in the path is expanded.
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).to_string();
        let raw = std::fs::read_to_string(Path::new(&expanded)).map_err(|e| Error::ConfigRead {
            path: expanded.clone(),
            source: e,
        })?;
        Self::from_json(&raw).map_err(|e| Error::ConfigParse {
            path: expanded,
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "standard": {
            "default": [
                {"boards": ["brd4187c"], "arguments": ["--without", "rs9116"]}
            ],
            "lighting-app": [
                {"boards": ["brd2703a"], "arguments": [], "projectFileType": "slcp"}
            ]
        }
    }"#;

    #[test]
    fn parses_nested_config() {
        let config = BuildConfig::from_json(SAMPLE).unwrap();
        let block = config.build_type("standard").unwrap();
        assert_eq!(block[DEFAULT_TARGET].len(), 1);
        assert_eq!(block[DEFAULT_TARGET][0].boards, vec!["brd4187c"]);
        assert_eq!(
            block["lighting-app"][0].project_file_type(),
            ProjectFileType::Slcp
        );
    }

    #[test]
    fn missing_arguments_field_defaults_to_empty() {
        let config =
            BuildConfig::from_json(r#"{"full": {"default": [{"boards": ["b1"]}]}}"#).unwrap();
        let entry = &config.build_type("full").unwrap()[DEFAULT_TARGET][0];
        assert!(entry.arguments.is_empty());
    }

    #[test]
    fn missing_project_file_type_defaults_to_slcw() {
        let config =
            BuildConfig::from_json(r#"{"full": {"default": [{"boards": ["b1"]}]}}"#).unwrap();
        let entry = &config.build_type("full").unwrap()[DEFAULT_TARGET][0];
        assert_eq!(entry.project_file_type(), ProjectFileType::Slcw);
    }

    #[test]
    fn rejects_unknown_project_file_type() {
        let result = BuildConfig::from_json(
            r#"{"full": {"default": [{"boards": ["b1"], "projectFileType": "gn"}]}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn build_types_are_sorted() {
        let config = BuildConfig::from_json(r#"{"full": {}, "standard": {}}"#).unwrap();
        assert_eq!(config.build_types(), vec!["full", "standard"]);
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = BuildConfig::load(file.path().to_str().unwrap()).unwrap();
        assert!(config.build_type("standard").is_some());
    }

    #[test]
    fn load_missing_file_is_config_read_error() {
        let err = BuildConfig::load("/nonexistent/build_info.json").unwrap_err();
        assert_eq!(err.code(), "CONFIG_READ_ERROR");
    }

    #[test]
    fn load_invalid_json_is_config_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let err = BuildConfig::load(file.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.code(), "CONFIG_PARSE_ERROR");
    }
}
