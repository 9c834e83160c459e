#![forbid(unsafe_code)]

mod classifier;
mod error;
mod output;

pub use classifier::Classifier;
pub use error::Error;
pub use output::{Output, OutputFormat};

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub classifier: Classifier,
    pub output: Output,
}

impl Config {
    /// Configuration with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the configuration from a TOML file, falling back to defaults for
    /// every key the file leaves out.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .extract()?;
        config.classifier.validate()?;
        Ok(config)
    }

    /// Parse a configuration from an in-memory TOML document.
    pub fn from_toml(document: &str) -> Result<Self, Error> {
        let config: Self = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(document))
            .extract()?;
        config.classifier.validate()?;
        Ok(config)
    }

    /// Render the configuration as a TOML document.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml_edit::ser::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_merges_file_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[classifier]
loader_module = "ntdll.dll"
excluded_processes = "Registry"

[output]
format = "json"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.classifier.loader_module, "ntdll.dll");
        assert_eq!(config.classifier.excluded_processes, vec!["Registry"]);
        assert_eq!(config.classifier.code_section_marker, ".text");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn load_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(Config::load(&missing), Err(Error::InvalidPath(_))));
    }

    #[test]
    fn dumped_config_loads_back() {
        let mut config = Config::new();
        config.classifier.loader_routines.push("LdrpLoadDll".into());
        let dumped = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&dumped).unwrap(), config);
    }

    #[test]
    fn empty_loader_module_is_rejected() {
        let err = Config::from_toml("[classifier]\nloader_module = \"\"\n").unwrap_err();
        assert!(matches!(err, Error::Invalid { field: "loader_module", .. }));
    }
}
