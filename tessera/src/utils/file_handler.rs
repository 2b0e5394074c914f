use crate::Config;
use anyhow::{self, Context, Result};
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

pub const CONFIG_RON: &str = "config.ron";
pub const CONFIG_TOML: &str = "config.toml";

const COMMENT_HEADER: &str = r"// tessera configuration
//
// Every name left out falls back to the built-in default. `modkey` in a
// binding's modifier list is replaced by the `modkey` set here.
// Check this file with `tessera-check` after editing it.

";

fn ron_options() -> Options {
    Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME | Extensions::UNWRAP_NEWTYPES)
}

/// Where `config.ron` lives, whether or not it exists yet.
///
/// # Errors
///
/// Errors if the XDG base directories cannot be resolved or the config
/// directory cannot be created.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(BaseDirectories::with_prefix("tessera")?.place_config_file(CONFIG_RON)?)
}

/// Load an explicit file (`Some`) or the one in the config directory (`None`).
///
/// # Errors
///
/// Errors if the file cannot be read or parsed, or if no config exists yet
/// and the default cannot be written.
pub fn load_config_file(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => parse_config_file(&path),
        None => {
            let ron_file = default_config_path()?;
            let dir = ron_file
                .parent()
                .context("config path has no parent directory")?;
            load_from_dir(dir)
        }
    }
}

/// Prefer `config.ron`, accept `config.toml`, write and return the default
/// when neither exists.
pub(crate) fn load_from_dir(dir: &Path) -> Result<Config> {
    tracing::debug!("Loading config file");
    let ron_file = dir.join(CONFIG_RON);
    let toml_file = dir.join(CONFIG_TOML);

    if ron_file.exists() {
        tracing::debug!("Config file '{}' found.", ron_file.display());
        parse_config_file(&ron_file)
    } else if toml_file.exists() {
        tracing::debug!("Config file '{}' found.", toml_file.display());
        tracing::info!("Using TOML config. RON is the preferred format, see `tessera-check --help`.");
        parse_config_file(&toml_file)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = Config::default();
        write_to_file(&ron_file, &config)?;
        Ok(config)
    }
}

/// Parse by extension: `.ron` as RON, anything else as TOML.
///
/// # Errors
///
/// Errors if the file cannot be read or does not parse.
pub fn parse_config_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    if path.extension() == Some(OsStr::new("ron")) {
        Ok(ron_options().from_str(&contents)?)
    } else {
        Ok(toml::from_str(&contents)?)
    }
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<(), anyhow::Error> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(2)
        .extensions(Extensions::IMPLICIT_SOME | Extensions::UNWRAP_NEWTYPES);
    let ron = to_string_pretty(&config, ron_pretty_conf)?;
    let ron_with_header = String::from(COMMENT_HEADER) + &ron;
    let mut file = File::create(ron_file)?;
    file.write_all(ron_with_header.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from_dir(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        let written = fs::read_to_string(dir.path().join(CONFIG_RON)).unwrap();
        assert!(written.starts_with(COMMENT_HEADER));
        assert_eq!(parse_config_file(&dir.path().join(CONFIG_RON)).unwrap(), config);
    }

    #[test]
    fn ron_is_preferred_over_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_RON), r#"(terminal: "alacritty")"#).unwrap();
        fs::write(dir.path().join(CONFIG_TOML), r#"terminal = "xterm""#).unwrap();
        assert_eq!(load_from_dir(dir.path()).unwrap().terminal, "alacritty");
    }

    #[test]
    fn toml_is_used_without_ron() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_TOML), r#"terminal = "xterm""#).unwrap();
        assert_eq!(load_from_dir(dir.path()).unwrap().terminal, "xterm");
        assert!(!dir.path().join(CONFIG_RON).exists());
    }

    #[test]
    fn explicit_file_with_implicit_some() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.ron");
        fs::write(&path, r#"(autostart: "~/start.sh", log_level: "warn")"#).unwrap();
        let config = load_config_file(Some(path)).unwrap();
        assert_eq!(config.autostart.as_deref(), Some("~/start.sh"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(modkey: )").unwrap();
        assert!(load_config_file(Some(path)).is_err());
        assert!(load_config_file(Some(dir.path().join("absent.toml"))).is_err());
    }
}
