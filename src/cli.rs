//! CLI argument parsing for osbconfig.
//!
//! Uses clap derive macros for declarative argument definitions. This
//! module defines the command structure; actual implementations are in the
//! `commands` module.

use crate::settings::SettingOverrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// osbconfig: package an Oracle Service Bus configuration jar.
///
/// Resolves a chain of packaging settings (install roots, work dirs, the
/// configjar settings file) from overrides, seed properties, and templated
/// defaults, then drives the vendor configjar tool to produce the
/// `.sbconfig.jar` artifact.
#[derive(Parser, Debug)]
#[command(name = "osbconfig")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for osbconfig.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve settings, run configjar, and register the artifact.
    ///
    /// Prepares the work directories, assembles the tool classpath from the
    /// installed middleware, and launches configjar with the resolved
    /// settings file.
    Package(PackageArgs),

    /// Resolve settings and print the final values.
    ///
    /// Dry run: performs the full resolution pass and prints every property
    /// key with its final value, without preparing directories or launching
    /// anything.
    Resolve(ResolveArgs),
}

/// Setting overrides and store seeds shared by all commands.
#[derive(Parser, Debug, Default)]
pub struct SettingArgs {
    /// The Oracle Middleware Home (root of the middleware install).
    #[arg(long, value_name = "PATH")]
    pub mw_home: Option<String>,

    /// The ORACLE_HOME of the OSB install.
    #[arg(long, value_name = "PATH")]
    pub osb_home: Option<String>,

    /// Two point WebLogic version, e.g. 10.3.
    #[arg(long, value_name = "VER")]
    pub wl_ver: Option<String>,

    /// The WL_HOME of the WebLogic server install.
    #[arg(long, value_name = "PATH")]
    pub wl_home: Option<String>,

    /// The BEA_HOME, typically the MW_HOME.
    #[arg(long, value_name = "PATH")]
    pub bea_home: Option<String>,

    /// The middleware's modules dir.
    #[arg(long, value_name = "PATH")]
    pub mw_modules_dir: Option<String>,

    /// The middleware features dir.
    #[arg(long, value_name = "PATH")]
    pub mw_features_dir: Option<String>,

    /// The configjar tool dir, typically OSB_HOME/tools/configjar.
    #[arg(long, value_name = "PATH")]
    pub configjar_dir: Option<String>,

    /// JAVA_HOME to launch the tool with. Defaults to the invoking
    /// environment's.
    #[arg(long, value_name = "PATH")]
    pub java_home: Option<String>,

    /// Explicit java executable. A bare name is looked up on PATH.
    #[arg(long, value_name = "PATH")]
    pub java_exe: Option<String>,

    /// Root of the scratch area used for the packaging run.
    #[arg(long, value_name = "PATH")]
    pub work_root: Option<String>,

    /// Temp dir handed to the tool via TEMP/TMP.
    #[arg(long, value_name = "PATH")]
    pub tmp_dir: Option<String>,

    /// Directory the tool is launched in.
    #[arg(long, value_name = "PATH")]
    pub work_dir: Option<String>,

    /// The configjar settings file. Must already exist.
    #[arg(long, value_name = "PATH")]
    pub settings_file: Option<String>,

    /// Seed a property into the shared store (repeatable).
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub define: Vec<String>,

    /// YAML file with seed properties (flat map of key to value).
    #[arg(long, value_name = "PATH")]
    pub properties: Option<PathBuf>,
}

impl SettingArgs {
    /// Caller-supplied setting values for the resolution pass.
    pub fn overrides(&self) -> SettingOverrides {
        SettingOverrides {
            mw_home: self.mw_home.clone(),
            osb_home: self.osb_home.clone(),
            wl_ver: self.wl_ver.clone(),
            wl_home: self.wl_home.clone(),
            bea_home: self.bea_home.clone(),
            mw_modules_dir: self.mw_modules_dir.clone(),
            mw_features_dir: self.mw_features_dir.clone(),
            configjar_dir: self.configjar_dir.clone(),
            java_home: self.java_home.clone(),
            java_exe: self.java_exe.clone(),
            work_root: self.work_root.clone(),
            tmp_dir: self.tmp_dir.clone(),
            work_dir: self.work_dir.clone(),
            settings_file: self.settings_file.clone(),
        }
    }
}

/// Arguments for the `package` command.
#[derive(Parser, Debug)]
pub struct PackageArgs {
    #[command(flatten)]
    pub settings: SettingArgs,

    /// Build output directory the artifact is placed in. Also seeds the
    /// `project.build.directory` property.
    #[arg(long, value_name = "PATH", default_value = "target")]
    pub output_dir: PathBuf,

    /// Final name of the artifact, without the .sbconfig.jar suffix.
    #[arg(long, value_name = "NAME")]
    pub final_name: String,

    /// Extra JVM options for the tool launch, split shell-style.
    #[arg(long, value_name = "OPTS")]
    pub java_opts: Option<String>,
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug, Default)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub settings: SettingArgs,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
