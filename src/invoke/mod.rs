//! External tool invocation: layout preparation, command construction, and
//! the synchronous configjar launch.
//!
//! Runs strictly after settings resolution; every path used here is a final
//! resolved value. Directory creation is idempotent, and the tmp and run
//! dirs are re-verified after creation since a silently absent scratch dir
//! would only surface as an opaque tool failure much later.

mod classpath;
mod runner;

pub use classpath::{CLASSPATH_SEPARATOR, assemble_classpath};
pub use runner::{Invocation, ProcessRunner, SystemRunner};

use crate::error::{OsbConfigError, Result};
use crate::settings::{PROP_OSB_HOME, PROP_WL_HOME, ResolvedSettings};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Suffix of the produced artifact file.
pub const ARTIFACT_EXTENSION: &str = ".sbconfig.jar";

/// Entry point class of the vendor packaging tool.
pub const CONFIGJAR_MAIN_CLASS: &str = "com.bea.alsb.tools.configjar.ConfigJar";

/// Where the produced artifact lands and what it is called.
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    pub output_dir: PathBuf,
    pub final_name: String,
}

impl ArtifactSpec {
    /// Deterministic artifact path: `<outputDir>/<finalName>.sbconfig.jar`.
    pub fn artifact_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", self.final_name, ARTIFACT_EXTENSION))
    }
}

/// Prepare directories, build the command, and run configjar to completion.
///
/// Returns the artifact path the tool is expected to have produced. No
/// post-hoc check is made that a file actually exists there; the path is
/// the contract.
pub fn run_configjar(
    settings: &ResolvedSettings,
    artifact: &ArtifactSpec,
    java_opts: &[String],
    runner: &dyn ProcessRunner,
) -> Result<PathBuf> {
    let artifact_path = artifact.artifact_path();
    debug!("artifact: {}", artifact_path.display());

    prepare_layout(settings, artifact)?;

    let classpath = assemble_classpath(settings);
    if classpath.is_none() {
        warn!("no classpath candidate exists, launching configjar without -cp");
    }

    let invocation = build_invocation(settings, classpath, java_opts);
    debug!("about to execute: {}", invocation.command_line());

    let status = runner.run(&invocation).map_err(OsbConfigError::Launch)?;
    if !status.success() {
        return Err(OsbConfigError::ToolExit(status));
    }

    Ok(artifact_path)
}

/// Ensure the output, tmp, and run directories exist and the settings file
/// is present. The settings file is never auto-created.
fn prepare_layout(settings: &ResolvedSettings, artifact: &ArtifactSpec) -> Result<()> {
    ensure_dir(&artifact.output_dir, "output dir")?;
    ensure_dir(Path::new(&settings.tmp_dir), "tmp dir")?;
    ensure_dir(Path::new(&settings.work_dir), "run dir")?;

    let settings_file = Path::new(&settings.settings_file);
    if !settings_file.exists() {
        return Err(OsbConfigError::Layout(format!(
            "file: {} does not exist",
            settings_file.display()
        )));
    }

    Ok(())
}

/// Create a directory (recursively) and re-verify it is actually there.
fn ensure_dir(path: &Path, label: &str) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|e| {
        OsbConfigError::Layout(format!(
            "failed to create {label} '{}': {}",
            path.display(),
            e
        ))
    })?;
    if !path.is_dir() {
        return Err(OsbConfigError::Layout(format!(
            "{label}: {} does not exist",
            path.display()
        )));
    }
    Ok(())
}

/// Build the configjar invocation from resolved settings.
///
/// Argument order: the two system-property flags, any extra JVM options,
/// the classpath (omitted entirely when no candidate exists), the tool's
/// main class, and the settings-file flag pair. Every argument is a
/// discrete token; nothing is shell-quoted or concatenated.
pub fn build_invocation(
    settings: &ResolvedSettings,
    classpath: Option<String>,
    java_opts: &[String],
) -> Invocation {
    let mut args = Vec::new();

    if !Path::new(&settings.wl_home).exists() {
        warn!(
            "${{{}}}={}, which does not exist",
            PROP_WL_HOME, settings.wl_home
        );
    }
    args.push(format!("-Dweblogic.home={}", settings.wl_home));

    if !Path::new(&settings.osb_home).exists() {
        warn!(
            "${{{}}}={}, which does not exist",
            PROP_OSB_HOME, settings.osb_home
        );
    }
    args.push(format!("-Dosb.home={}", settings.osb_home));

    args.extend(java_opts.iter().cloned());

    if let Some(classpath) = classpath {
        args.push("-cp".to_string());
        args.push(classpath);
    }

    args.push(CONFIGJAR_MAIN_CLASS.to_string());
    args.push("-settingsfile".to_string());
    args.push(settings.settings_file.clone());

    let mut env = BTreeMap::new();
    env.insert("TEMP".to_string(), settings.tmp_dir.clone());
    env.insert("TMP".to_string(), settings.tmp_dir.clone());

    Invocation {
        program: settings.java_exe.clone(),
        args,
        env,
        working_dir: PathBuf::from(&settings.work_dir),
    }
}
