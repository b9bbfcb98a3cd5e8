use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Merge configuration: where to read from and what to write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Directory holding the .docx files to merge
    pub directory: PathBuf,
    /// File name of the merged document, created inside `directory`
    pub output_file: String,
    /// Append-only log file
    pub log_file: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        MergeConfig {
            directory: PathBuf::from("."),
            output_file: "merged.docx".to_string(),
            log_file: PathBuf::from("merge_tables.log"),
        }
    }
}

/// Values given on the command line; each one overrides the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub directory: Option<PathBuf>,
    pub output_file: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl MergeConfig {
    /// Load from `path`, or from the default config location when it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::get_config_path().filter(|p| p.exists()),
        };

        let config = match config_path {
            Some(config_path) => Self::from_file(&config_path)?,
            None => MergeConfig::default(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: MergeConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply command line values on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(directory) = overrides.directory {
            self.directory = directory;
        }
        if let Some(output_file) = overrides.output_file {
            self.output_file = output_file;
        }
        if let Some(log_file) = overrides.log_file {
            self.log_file = log_file;
        }

        self.validate()?;
        Ok(self)
    }

    /// The output is a bare file name placed in the input directory
    pub fn validate(&self) -> Result<()> {
        let name = self.output_file.trim();
        if name.is_empty() {
            bail!("Output file name must not be empty");
        }
        if name.contains('/') || name.contains('\\') {
            bail!(
                "Output file name '{}' must not contain path separators; \
                it is always written inside the input directory",
                self.output_file
            );
        }
        Ok(())
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the default config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docx-table-merge").join("config.toml"))
    }

    /// Write the default configuration to `path` or the default location
    pub fn init_default(path: Option<&Path>) -> Result<PathBuf> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::get_config_path) else {
            bail!("Could not determine a configuration directory");
        };
        MergeConfig::default().save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MergeConfig::from_toml(r#"directory = "/data/tables""#).unwrap();

        assert_eq!(config.directory, PathBuf::from("/data/tables"));
        assert_eq!(config.output_file, "merged.docx");
        assert_eq!(config.log_file, PathBuf::from("merge_tables.log"));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = MergeConfig::from_toml(
            r#"
            directory = "in"
            output_file = "from_file.docx"
            "#,
        )
        .unwrap()
        .with_overrides(ConfigOverrides {
            output_file: Some("from_cli.docx".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(config.directory, PathBuf::from("in"));
        assert_eq!(config.output_file, "from_cli.docx");
    }

    #[test]
    fn test_rejects_bad_output_names() {
        let empty = MergeConfig {
            output_file: "  ".to_string(),
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let nested = MergeConfig {
            output_file: "out/merged.docx".to_string(),
            ..Default::default()
        };
        assert!(nested.validate().is_err());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join("config.toml");
        let config = MergeConfig {
            directory: PathBuf::from("reports"),
            output_file: "all.docx".to_string(),
            log_file: PathBuf::from("run.log"),
        };

        config.save(&path).unwrap();
        let loaded = MergeConfig::load(Some(&path)).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MergeConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(MergeConfig::from_toml("directory = [").is_err());
    }
}
