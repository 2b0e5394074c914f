use anyhow::{bail, Result};
use clap::{arg, command};
use std::env;
use std::path::PathBuf;
use std::process::Command;
use tessera::utils::file_handler::{default_config_path, write_to_file};
use tessera::Config;

fn main() -> Result<()> {
    let matches = command!("Tessera Config")
        .about("Edit the config with the default editor")
        .help_template(tessera::utils::get_help_template())
        .args(&[arg!(-n --new "Only generate a new config file")])
        .get_matches();

    if matches.get_flag("new") {
        generate_new_config()?;
    } else {
        run_editor()?;
    }

    Ok(())
}

fn find_config_file() -> Result<PathBuf> {
    let path = default_config_path()?;
    if !path.exists() {
        write_to_file(&path, &Config::default())?;
    }
    Ok(path)
}

fn generate_new_config() -> Result<()> {
    let path = default_config_path()?;

    if path.exists() {
        println!(
            "\x1b[0;94m::\x1b[0m A config file already exists, do you want to override it? [y/N]"
        );
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        if !(line.contains('y') || line.contains('Y')) {
            return Ok(());
        }
    }
    write_to_file(&path, &Config::default())?;
    println!("\x1b[0;92m    -> Written to {} \x1b[0m", path.display());
    Ok(())
}

fn run_editor() -> Result<()> {
    let editor = env::var("EDITOR")?;
    let config_path = find_config_file()?;

    let mut process = Command::new(&editor).arg(&config_path).spawn()?;
    if !process.wait()?.success() {
        bail!("Failed to run {editor}");
    }
    Ok(())
}
