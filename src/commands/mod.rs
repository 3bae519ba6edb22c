//! Command implementations for osbconfig.
//!
//! Provides the dispatcher that routes CLI commands to their
//! implementations, plus the store seeding shared by both commands.

mod package;
mod resolve_cmd;

use crate::cli::{Command, SettingArgs};
use crate::error::{OsbConfigError, Result};
use crate::settings::{PROP_BUILD_DIRECTORY, PROP_HOST_JAVA_HOME};
use crate::store::{PropertyStore, load_properties_file};
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Package(args) => package::cmd_package(args),
        Command::Resolve(args) => resolve_cmd::cmd_resolve(args),
    }
}

/// Parse a `-D key=value` define.
pub(crate) fn parse_define(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(OsbConfigError::UserError(format!(
            "invalid define '{}', expected KEY=VALUE",
            raw
        ))),
    }
}

/// Build the shared property store from its seeds.
///
/// Precedence: properties file, then `-D` defines (defines win), then the
/// host-supplied keys (`java.home` from JAVA_HOME, `project.build.directory`
/// from the output dir) only where still absent.
pub(crate) fn seed_store(args: &SettingArgs, output_dir: Option<&Path>) -> Result<PropertyStore> {
    let mut store = PropertyStore::new();

    if let Some(path) = &args.properties {
        for (key, value) in load_properties_file(path)? {
            store.seed(key, value);
        }
    }

    for raw in &args.define {
        let (key, value) = parse_define(raw)?;
        store.seed(key, value);
    }

    if let Ok(java_home) = std::env::var("JAVA_HOME") {
        if !java_home.is_empty() {
            store.seed_if_absent(PROP_HOST_JAVA_HOME, java_home);
        }
    }

    if let Some(dir) = output_dir {
        store.seed_if_absent(PROP_BUILD_DIRECTORY, dir.to_string_lossy());
    }

    Ok(store)
}
