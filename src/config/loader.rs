//! Configuration loading functionality
//!
//! This module contains functions for loading and validating configuration.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use log::{debug, info};
use serde_yaml::from_str;

use crate::utils::find_project_folder;

use super::model::Config;

/// Merges a parent configuration with a child configuration
///
/// The child configuration takes precedence over the parent configuration.
/// Child rules come first, so they run before the inherited ones.
///
/// # Arguments
/// * `parent` - The parent configuration
/// * `child` - The child configuration
///
/// # Returns
/// * `Config` - The merged configuration
fn merge_configs(parent: Config, mut child: Config) -> Config {
    if child.root.as_os_str().is_empty() {
        child.root = parent.root;
    }

    let mut merged_rules = child.rules;
    merged_rules.extend(parent.rules);
    child.rules = merged_rules;

    extend_unique(&mut child.extensions, parent.extensions);
    extend_unique(&mut child.exclude, parent.exclude);
    extend_unique(&mut child.exclude_globs, parent.exclude_globs);

    child
}

fn extend_unique(target: &mut Vec<String>, values: Vec<String>) {
    for value in values {
        if !target.contains(&value) {
            target.push(value);
        }
    }
}

/// Reads a configuration file and resolves its parents, without validation
fn read_config_file(file: &Path) -> Result<Config> {
    read_config_chain(file, &mut HashSet::new())
}

/// Reads one link of a parent chain
///
/// `visited` holds the canonical paths of every file already in the chain.
fn read_config_chain(file: &Path, visited: &mut HashSet<PathBuf>) -> Result<Config> {
    let canonical = fs::canonicalize(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    if !visited.insert(canonical) {
        return Err(anyhow!(
            "Circular parent configuration: {} is already part of the inheritance chain",
            file.display()
        ));
    }

    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    let mut config: Config = from_str(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })?;

    let base_dir = file.parent().unwrap_or_else(|| Path::new(""));

    if !config.root.as_os_str().is_empty() && config.root.is_relative() {
        config.root = base_dir.join(&config.root);
    }

    if let Some(parent_path) = config.parent.take() {
        debug!("Loading parent configuration from {parent_path}");

        let parent_file = if Path::new(&parent_path).is_absolute() {
            PathBuf::from(&parent_path)
        } else {
            base_dir.join(&parent_path)
        };

        if !parent_file.exists() {
            return Err(anyhow!(
                "Parent configuration file {} specified in {} does not exist",
                parent_file.display(),
                file.display()
            ));
        }

        let parent_config = read_config_chain(&parent_file, visited)?;
        config = merge_configs(parent_config, config);
    }

    Ok(config)
}

/// Loads a configuration from a file
///
/// A relative root is resolved against the directory of the file that
/// declares it.
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read, a rule has an empty pattern,
/// or the configuration is invalid
pub fn load_config(file: PathBuf) -> Result<Config> {
    let mut config = read_config_file(&file)?;
    config.validate(true)?;

    info!(
        "Configuration loaded with {} rules from {}",
        config.rules.len(),
        file.display()
    );
    Ok(config)
}

/// Loads a configuration from a file without checking path existence
///
/// This is primarily used for testing.
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config_for_testing(file: PathBuf) -> Result<Config> {
    let mut config = read_config_file(&file)?;
    config.validate(false)?;
    Ok(config)
}

/// Reads an existing configuration file or falls back to the platform config directory
///
/// # Arguments
/// * `config` - Path to the configuration file
///
/// # Returns
/// * `Result<PathBuf>` - The path to the configuration file or an error
///
/// # Errors
/// Returns an error if the configuration directory cannot be created
pub fn read_or_create(config: PathBuf) -> Result<PathBuf> {
    if !&config.exists() {
        create_config_if_not_exists(config)
    } else {
        Ok(config)
    }
}

/// Resolves a configuration file inside the standard configuration directory
///
/// The directory is created if necessary.
fn create_config_if_not_exists(config: PathBuf) -> Result<PathBuf> {
    let folder = find_project_folder()?;
    Ok(folder.config_dir().join(config))
}
