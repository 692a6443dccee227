//! Configuration file loading.

use crate::config::Config;
use crate::error::{Error, Result};
use std::path::Path;

/// Load configuration from a TOML file.
///
/// Returns default config if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save configuration to a TOML file.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;

    std::fs::write(path, contents).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::annotate::Approximant;
    use crate::bank::Column;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_nonexistent_file_returns_default() {
        let path = Path::new("/nonexistent/path/config.toml");
        let config = load_config_file(path);
        assert!(config.is_ok());
        let config = config.ok().unwrap();
        assert!(config.approximants.is_empty());
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[defaults]
templates_per_bank = 500
overlap = 10
sort_by = "mchirp"
instrument = "H1"
f_low = 15.0

[[approximants]]
min = 0.0
max = 1.73
approximant = "TaylorF2"

[[approximants]]
min = 1.73
max = 1000.0
approximant = "SEOBNRv4_ROM"
"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(config.defaults.templates_per_bank, Some(500));
        assert_eq!(config.defaults.overlap, 10);
        assert_eq!(config.defaults.sort_by, Some(Column::Mchirp));
        assert_eq!(config.defaults.f_low, Some(15.0));
        assert_eq!(config.defaults.group_by_chi, 1);
        assert_eq!(config.approximants.len(), 2);
        assert_eq!(config.approximants[1].approximant, Approximant::SeobnrV4Rom);
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let config = load_config_file(file.path());
        assert!(matches!(config, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.defaults.templates_per_bank = Some(42);
        config.defaults.instrument = Some("L1".to_string());

        save_config(&config, &path).unwrap();
        let loaded = load_config_file(&path).unwrap();
        assert_eq!(loaded.defaults.templates_per_bank, Some(42));
        assert_eq!(loaded.defaults.instrument.as_deref(), Some("L1"));
    }
}
