//! Config command - inspect and edit the JSON configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use campos_core::CamposConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value (e.g. "export.batch_file_name")
    Get {
        /// Dotted key
        key: String,
    },

    /// Change one value (e.g. "batch.recursive false")
    Set {
        /// Dotted key
        key: String,
        /// New value, parsed as JSON when possible
        value: String,
    },

    /// Show the configuration file path
    Path,
}

/// Platform config location, e.g. `~/.config/campos/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("campos")
        .join("config.json")
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => {
            let config = load_or_default(&path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            save(&CamposConfig::default(), &path)?;
            println!(
                "{} Created configuration file at {}",
                style("✓").green(),
                path.display()
            );
        }
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(load_or_default(&path)?)?;
            println!("{}", serde_json::to_string_pretty(lookup(&json, &key)?)?);
        }
        ConfigCommand::Set { key, value } => {
            let parsed = parse_value(&value);
            let mut json = serde_json::to_value(load_or_default(&path)?)?;
            assign(&mut json, &key, parsed.clone())?;

            let config: CamposConfig = serde_json::from_value(json)
                .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
            save(&config, &path)?;
            println!("{} Set {} = {}", style("✓").green(), key, parsed);
        }
        ConfigCommand::Path => {
            println!("Configuration file: {}", path.display());
            if path.exists() {
                println!("Status: {}", style("exists").green());
            } else {
                println!("Status: {}", style("not created").yellow());
                println!("Run 'campos config init' to create it.");
            }
        }
    }

    Ok(())
}

fn load_or_default(path: &Path) -> anyhow::Result<CamposConfig> {
    if path.exists() {
        Ok(CamposConfig::from_file(path)?)
    } else {
        Ok(CamposConfig::default())
    }
}

fn save(config: &CamposConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

/// Values that are not valid JSON are taken as plain strings, so
/// `set export.batch_file_name saida.xlsx` needs no quoting.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn lookup<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.').try_fold(json, |current, part| {
        current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
    })
}

fn assign(json: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let (parent_key, leaf) = match key.rsplit_once('.') {
        Some((parent, leaf)) => (Some(parent), leaf),
        None => (None, key),
    };

    let mut parent = json;
    if let Some(parent_key) = parent_key {
        for part in parent_key.split('.') {
            parent = parent
                .get_mut(part)
                .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
        }
    }

    let object = parent
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Cannot set value at non-object path: {}", key))?;
    if !object.contains_key(leaf) {
        anyhow::bail!("Configuration key not found: {}", key);
    }
    object.insert(leaf.to_string(), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested_key() {
        let json = serde_json::to_value(CamposConfig::default()).unwrap();
        assert_eq!(lookup(&json, "batch.extension").unwrap(), &json!("docx"));
        assert!(lookup(&json, "batch.missing").is_err());
    }

    #[test]
    fn test_assign_existing_key() {
        let mut json = serde_json::to_value(CamposConfig::default()).unwrap();
        assign(&mut json, "batch.recursive", json!(false)).unwrap();

        let config: CamposConfig = serde_json::from_value(json).unwrap();
        assert!(!config.batch.recursive);
    }

    #[test]
    fn test_assign_rejects_unknown_keys() {
        let mut json = serde_json::to_value(CamposConfig::default()).unwrap();
        assert!(assign(&mut json, "batch.typo", json!(1)).is_err());
        assert!(assign(&mut json, "nope.recursive", json!(1)).is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("false"), json!(false));
        assert_eq!(parse_value("saida.xlsx"), json!("saida.xlsx"));
    }
}
