//! Config file discovery and loading for `.paramdoc.toml`.
//!
//! An explicit `--config` path must load. Otherwise two locations are checked
//! in precedence order:
//! 1. `./.paramdoc.toml` (project-local)
//! 2. `~/.config/paramdoc.toml` (user-global)

use std::path::{Path, PathBuf};

use super::CliConfig;

const CONFIG_FILENAME: &str = ".paramdoc.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "paramdoc.toml";

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Load CLI config from `explicit`, or from the first discovered location,
/// or return defaults.
pub(crate) fn load_cli_config(explicit: Option<&Path>) -> Result<CliConfig, ConfigError> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        tracing::debug!(?path, "Loaded CLI config");
        return Ok(config);
    }

    if let Some(path) = find_config_file(Path::new("."), home_dir().as_deref()) {
        match read_config(&path) {
            Ok(config) => {
                tracing::debug!(?path, "Loaded CLI config");
                return Ok(config);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring CLI config, using defaults");
            }
        }
    }
    Ok(CliConfig::default())
}

fn read_config(path: &Path) -> Result<CliConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Search `base_dir`, then `home`, for a config file.
fn find_config_file(base_dir: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let local = base_dir.join(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    let global = home?.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME);
    global.is_file().then_some(global)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.input.is_none());
        assert_eq!(
            config.input_path(None),
            PathBuf::from("tables/soft_tables.json")
        );
        assert_eq!(config.output_path(None), PathBuf::from("params.rst"));
        assert_eq!(config.conf_output_path(None), PathBuf::from("conf.py"));
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_str = r#"
input = "conf/tables/soft_tables.json"
output = "doc/params.rst"
conf-output = "doc/conf.py"

[sphinx]
project-name = "NanoCom AX100"
exclude-patterns = ["clients", "lib/**"]
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.input_path(None),
            PathBuf::from("conf/tables/soft_tables.json")
        );
        assert_eq!(config.output_path(None), PathBuf::from("doc/params.rst"));
        assert_eq!(config.conf_output_path(None), PathBuf::from("doc/conf.py"));
        assert_eq!(config.sphinx.project_name, "NanoCom AX100");
        assert_eq!(config.sphinx.exclude_patterns, vec!["clients", "lib/**"]);
        assert_eq!(config.sphinx.front_doc_type, "Manual");
    }

    #[test]
    fn test_flag_overrides_config() {
        let config: CliConfig = toml::from_str(r#"output = "doc/params.rst""#).unwrap();
        assert_eq!(
            config.output_path(Some(PathBuf::from("other.rst"))),
            PathBuf::from("other.rst")
        );
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let err = load_cli_config(Some(Path::new("/nonexistent/.paramdoc.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_explicit_invalid_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "input = [").unwrap();
        let err = load_cli_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    fn write_global_config(home: &Path, contents: &str) {
        let config_dir = home.join(GLOBAL_CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(GLOBAL_CONFIG_FILENAME), contents).unwrap();
    }

    #[test]
    fn test_find_global_config_when_no_local() {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write_global_config(home.path(), r#"output = "from-home.rst""#);

        let found = find_config_file(project.path(), Some(home.path())).unwrap();
        assert_eq!(
            found,
            home.path().join(".config").join("paramdoc.toml")
        );
        let config = read_config(&found).unwrap();
        assert_eq!(config.output_path(None), PathBuf::from("from-home.rst"));
    }

    #[test]
    fn test_local_config_wins_over_global() {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        write_global_config(home.path(), r#"output = "from-home.rst""#);
        std::fs::write(
            project.path().join(CONFIG_FILENAME),
            r#"output = "from-project.rst""#,
        )
        .unwrap();

        let found = find_config_file(project.path(), Some(home.path())).unwrap();
        assert_eq!(found, project.path().join(".paramdoc.toml"));
    }

    #[test]
    fn test_no_config_found() {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        assert!(find_config_file(project.path(), Some(home.path())).is_none());
        assert!(find_config_file(project.path(), None).is_none());
    }

    #[test]
    #[serial]
    fn test_home_dir_follows_env() {
        let home = tempfile::tempdir().unwrap();

        let previous = std::env::var_os("HOME");
        std::env::set_var("HOME", home.path());
        let resolved = home_dir();
        match previous {
            Some(value) => std::env::set_var("HOME", value),
            None => std::env::remove_var("HOME"),
        }

        assert_eq!(resolved, Some(home.path().to_path_buf()));
    }
}
