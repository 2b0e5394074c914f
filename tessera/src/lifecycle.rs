//! Owns the loaded configuration across reloads and runs the autostart
//! script exactly once per session.
use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::utils::child_process::{self, ChildID, Children};
use crate::utils::file_handler::load_config_file;
use crate::Config;

/// Why the window manager finished starting up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupKind {
    /// First start of the session.
    Initial,
    /// The configuration was rebuilt in place.
    Reload,
}

pub struct Lifecycle {
    config: Config,
    source: Option<PathBuf>,
    children: Children,
    startup_fired: bool,
    child_exited: Arc<AtomicBool>,
}

impl Lifecycle {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let child_exited = Arc::new(AtomicBool::new(false));
        child_process::register_child_hook(child_exited.clone());
        Self {
            config,
            source: None,
            children: Children::new(),
            startup_fired: false,
            child_exited,
        }
    }

    /// Reload from `path` instead of the config directory.
    #[must_use]
    pub fn with_source(mut self, path: PathBuf) -> Self {
        self.source = Some(path);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Install the global log subscriber from the config's `log_level`.
    ///
    /// # Errors
    ///
    /// Errors if a global subscriber was already set.
    pub fn setup_logging(&self) -> anyhow::Result<()> {
        crate::utils::log::setup_logging(&self.config.log_level)
    }

    #[must_use]
    pub const fn children(&self) -> &Children {
        &self.children
    }

    /// Run the autostart script if this is the first initial startup.
    ///
    /// Returns whether the script was started.
    pub fn startup_complete(&mut self, kind: StartupKind) -> bool {
        if kind == StartupKind::Reload || self.startup_fired {
            tracing::debug!("Skipping autostart for {:?}", kind);
            return false;
        }
        self.startup_fired = true;

        let path = match self.config.autostart_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::error!("Cannot resolve the autostart script: {}", err);
                return false;
            }
        };
        if !path.exists() {
            tracing::info!("No autostart script at {}", path.display());
            return false;
        }
        match child_process::run_script(&path) {
            Ok(child) => {
                tracing::info!("Started autostart script {}", path.display());
                self.children.insert(child);
                true
            }
            Err(err) => {
                tracing::error!("Unable to run autostart script {}: {}", path.display(), err);
                false
            }
        }
    }

    /// Build the configuration again from disk and replace the current one.
    ///
    /// A config that fails to load is logged and the current one is kept.
    pub fn reload(&mut self) {
        match load_config_file(self.source.clone()) {
            Ok(config) => {
                tracing::info!("Configuration reloaded");
                self.config = config;
            }
            Err(err) => tracing::error!("Reload failed, keeping current config: {:?}", err),
        }
        self.startup_complete(StartupKind::Reload);
    }

    /// Run `cmdline` through `sh -c`.
    pub fn spawn(&mut self, cmdline: &str) -> Option<ChildID> {
        tracing::debug!("Spawning {:?}", cmdline);
        child_process::exec_shell(cmdline, &mut self.children)
            .map_err(|err| tracing::error!("Unable to spawn {:?}: {}", cmdline, err))
            .ok()
    }

    /// Whether `SIGCHLD` arrived since the last [`Lifecycle::reap`].
    #[must_use]
    pub fn children_exited(&self) -> bool {
        self.child_exited.load(Ordering::SeqCst)
    }

    /// Forget children that have exited.
    pub fn reap(&mut self) {
        self.child_exited.store(false, Ordering::SeqCst);
        self.children.remove_finished_children();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use std::time::{Duration, Instant};

    fn wait_for(path: &Path) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if path.exists() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        false
    }

    fn autostart_script(dir: &Path) -> PathBuf {
        let script = dir.join("autostart.sh");
        fs::write(
            &script,
            format!("#!/bin/sh\necho run >> {}\n", dir.join("marker").display()),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    fn config_with_autostart(script: &Path) -> Config {
        Config {
            autostart: Some(script.to_string_lossy().into_owned()),
            ..Config::default()
        }
    }

    #[test]
    fn autostart_fires_once_on_initial_startup() {
        let dir = tempfile::tempdir().unwrap();
        let script = autostart_script(dir.path());
        let mut lifecycle = Lifecycle::new(config_with_autostart(&script));

        assert!(lifecycle.startup_complete(StartupKind::Initial));
        assert!(wait_for(&dir.path().join("marker")));
        assert!(!lifecycle.startup_complete(StartupKind::Initial));
        assert!(!lifecycle.startup_complete(StartupKind::Reload));
    }

    #[test]
    fn reload_never_fires_autostart() {
        let dir = tempfile::tempdir().unwrap();
        let script = autostart_script(dir.path());
        let mut lifecycle = Lifecycle::new(config_with_autostart(&script));

        assert!(!lifecycle.startup_complete(StartupKind::Reload));
        assert!(lifecycle.children().is_empty());
        // The first initial startup still fires after a reload.
        assert!(lifecycle.startup_complete(StartupKind::Initial));
    }

    #[test]
    fn missing_autostart_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut lifecycle = Lifecycle::new(config_with_autostart(&dir.path().join("absent.sh")));
        assert!(!lifecycle.startup_complete(StartupKind::Initial));
    }

    #[test]
    fn reload_replaces_config_and_keeps_it_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let script = autostart_script(dir.path());
        let path = dir.path().join("config.ron");
        fs::write(
            &path,
            format!(r#"(terminal: "alacritty", autostart: {:?})"#, script.display().to_string()),
        )
        .unwrap();
        let mut lifecycle = Lifecycle::new(Config::default()).with_source(path.clone());
        lifecycle.startup_complete(StartupKind::Initial);

        lifecycle.reload();
        assert_eq!(lifecycle.config().terminal, "alacritty");
        assert_eq!(lifecycle.config().groups, Config::default().groups);

        fs::write(&path, "(terminal: ").unwrap();
        lifecycle.reload();
        assert_eq!(lifecycle.config().terminal, "alacritty");
    }

    #[test]
    fn logging_follows_configured_level() {
        let lifecycle = Lifecycle::new(Config {
            log_level: "error".to_owned(),
            ..Config::default()
        });
        lifecycle.setup_logging().unwrap();
        assert_eq!(
            tracing::level_filters::LevelFilter::current(),
            tracing::level_filters::LevelFilter::ERROR
        );
        // Only one global subscriber can exist.
        assert!(lifecycle.setup_logging().is_err());
    }

    #[test]
    fn spawn_tracks_and_reap_forgets() {
        let mut lifecycle = Lifecycle::new(Config::default());
        assert!(lifecycle.spawn("exit 0").is_some());
        assert_eq!(lifecycle.children().len(), 1);
        let deadline = Instant::now() + Duration::from_secs(5);
        while !lifecycle.children().is_empty() && Instant::now() < deadline {
            lifecycle.reap();
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(lifecycle.children().is_empty());
    }
}
