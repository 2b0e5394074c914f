use anyhow::{bail, Result};
use clap::{arg, command};
use std::path::PathBuf;
use tessera::utils::file_handler::{default_config_path, load_config_file, write_to_file};
use tessera::{Config, Severity};
use tessera_core::RecordingHost;

fn main() -> Result<()> {
    let matches = command!("Tessera Check")
        .about("Checks the configuration file and reports problems")
        .help_template(tessera::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!(migrate: -m --"migrate-toml-to-ron" "Migrates an existing `toml` config to `ron`.\nKeeps the old file for reference, please delete it manually."),
            arg!(-l --"list-keys" "Lists every key binding after `modkey` substitution."),
            arg!(-r --resolve <CHORD> "Dry-runs the binding for a chord such as `modkey+shift+Return`."),
            arg!([INPUT] "Sets the input file to use. Uses the config directory otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m Tessera version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m Tessera git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    if matches.get_flag("migrate") {
        println!("\x1b[0;94m::\x1b[0m Migrating configuration . . .");
        let ron_file = default_config_path()?;
        let toml_file = config_file.unwrap_or_else(|| ron_file.with_extension("toml"));
        let config = load_config_file(Some(toml_file))?;
        write_to_file(&ron_file, &config)?;
        println!("\x1b[0;92m    -> Written to {} \x1b[0m", ron_file.display());
        return Ok(());
    }

    if let Some(path) = &config_file {
        println!("\x1b[1;35mNote: Using file {} \x1b[0m", path.display());
    }
    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match load_config_file(config_file) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(e) => bail!("Configuration failed. Reason: {e:?}"),
    };
    let log_level = if verbose { "debug" } else { config.log_level.as_str() };
    tessera::utils::log::setup_logging(log_level)?;
    if verbose {
        dbg!(&config);
    }

    if matches.get_flag("list-keys") {
        list_keys(&config);
    }
    if let Some(chord) = matches.get_one::<String>("resolve") {
        resolve(&config, chord);
    }

    let mut errors = 0;
    for (name, findings) in config.check_all() {
        println!("\x1b[0;94m::\x1b[0m Checking {name} . . .");
        if findings.is_empty() {
            println!("\x1b[0;92m    -> All {name} OK\x1b[0m");
        }
        for finding in findings {
            if finding.severity == Severity::Error {
                errors += 1;
            }
            println!("{finding}");
        }
    }

    println!("\x1b[0;94m::\x1b[0m Checking environment . . .");
    if tessera::is_program_in_path(&config.terminal) {
        println!("\x1b[0;92m    -> Terminal `{}` found \x1b[0m", config.terminal);
    } else {
        println!(
            "\x1b[1;93mWARNING: Terminal `{}` is not in PATH\x1b[0m",
            config.terminal
        );
    }

    if errors > 0 {
        bail!("{errors} error(s) found in the configuration");
    }
    Ok(())
}

fn list_keys(config: &Config) {
    println!("\x1b[0;94m::\x1b[0m Key bindings . . .");
    for keybind in config.key_table().sorted() {
        let chord = match &keybind.modifier {
            Some(modifier) => format!("{modifier}+{}", keybind.key),
            None => keybind.key.clone(),
        };
        println!(
            "    {chord:<32} {}",
            keybind.desc.as_deref().unwrap_or_default()
        );
    }
}

fn resolve(config: &Config, chord: &str) {
    let (mask, key) = config.parse_chord(chord);
    let mut host = RecordingHost::default();
    if config.key_table().dispatch(mask, &key, &mut host) {
        println!("\x1b[0;94m::\x1b[0m {mask} + {key} runs:");
        for call in host.calls {
            println!("    -> {call}");
        }
    } else {
        println!("\x1b[1;93mWARNING: Nothing is bound to {mask} + {key}\x1b[0m");
    }
}
