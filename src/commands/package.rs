//! The `package` command: resolve settings, run configjar, register the
//! artifact.

use super::seed_store;
use crate::cli::PackageArgs;
use crate::error::{OsbConfigError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::invoke::{ArtifactSpec, ProcessRunner, SystemRunner, run_configjar};
use crate::resolve::{StoreEvaluator, resolve_all};
use serde_json::json;
use std::path::{Path, PathBuf};

pub fn cmd_package(args: PackageArgs) -> Result<()> {
    let artifact_path = run_package(&args, &SystemRunner)?;
    println!("registered artifact: {}", artifact_path.display());
    Ok(())
}

/// Full package pass, parameterized over the process runner so the launch
/// can be faked in tests.
pub(crate) fn run_package(args: &PackageArgs, runner: &dyn ProcessRunner) -> Result<PathBuf> {
    let mut store = seed_store(&args.settings, Some(&args.output_dir))?;
    let overrides = args.settings.overrides();
    let resolved = resolve_all(&mut store, &StoreEvaluator, &overrides)?;

    let java_opts = match &args.java_opts {
        Some(raw) => shell_words::split(raw).map_err(|e| {
            OsbConfigError::UserError(format!(
                "failed to parse --java-opts '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                raw, e
            ))
        })?,
        None => Vec::new(),
    };

    let artifact = ArtifactSpec {
        output_dir: args.output_dir.clone(),
        final_name: args.final_name.clone(),
    };

    let artifact_path = run_configjar(&resolved, &artifact, &java_opts, runner)?;

    let event = Event::new(EventAction::Package).with_details(json!({
        "artifact": artifact_path.to_string_lossy(),
        "final_name": args.final_name,
        "settings_file": resolved.settings_file,
    }));
    append_event(Path::new(&resolved.work_root), &event)?;

    Ok(artifact_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SettingArgs;
    use crate::events::events_file_path;
    use crate::invoke::{CONFIGJAR_MAIN_CLASS, Invocation};
    use serial_test::serial;
    use std::cell::RefCell;
    use std::process::ExitStatus;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn exit_status(code: i32) -> ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        ExitStatus::from_raw(code << 8)
    }

    struct FakeRunner {
        seen: RefCell<Vec<Invocation>>,
        result: fn() -> std::io::Result<ExitStatus>,
    }

    impl FakeRunner {
        fn new(result: fn() -> std::io::Result<ExitStatus>) -> Self {
            Self {
                seen: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    impl ProcessRunner for FakeRunner {
        fn run(&self, invocation: &Invocation) -> std::io::Result<ExitStatus> {
            self.seen.borrow_mut().push(invocation.clone());
            (self.result)()
        }
    }

    /// Package args with the whole layout rooted in the temp dir, and the
    /// settings file already present.
    fn package_args(temp_dir: &TempDir) -> PackageArgs {
        let root = temp_dir.path();
        let work_root = root.join("work");
        std::fs::create_dir_all(work_root.join("etc")).unwrap();
        std::fs::write(work_root.join("etc/settings.xml"), b"<settings/>").unwrap();

        PackageArgs {
            settings: SettingArgs {
                mw_home: Some(root.join("mw").to_string_lossy().into_owned()),
                java_home: Some(root.join("jdk").to_string_lossy().into_owned()),
                work_root: Some(work_root.to_string_lossy().into_owned()),
                ..Default::default()
            },
            output_dir: root.join("target"),
            final_name: "orders".to_string(),
            java_opts: None,
        }
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn successful_package_registers_artifact_event() {
        let temp_dir = TempDir::new().unwrap();
        let args = package_args(&temp_dir);
        let runner = FakeRunner::new(|| Ok(exit_status(0)));

        let artifact_path = run_package(&args, &runner).unwrap();

        assert_eq!(
            artifact_path,
            temp_dir.path().join("target/orders.sbconfig.jar")
        );

        // Exactly one package event, carrying the artifact path.
        let events_file = events_file_path(&temp_dir.path().join("work"));
        let content = std::fs::read_to_string(&events_file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        let event: Event = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(event.action, EventAction::Package);
        assert_eq!(
            event.details["artifact"],
            artifact_path.to_string_lossy().into_owned()
        );
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn java_opts_are_split_into_discrete_tokens() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = package_args(&temp_dir);
        args.java_opts = Some("-Xmx512m -Dfile.encoding=UTF-8".to_string());
        let runner = FakeRunner::new(|| Ok(exit_status(0)));

        run_package(&args, &runner).unwrap();

        let seen = runner.seen.borrow();
        let inv = &seen[0];
        assert!(inv.args.contains(&"-Xmx512m".to_string()));
        assert!(inv.args.contains(&"-Dfile.encoding=UTF-8".to_string()));
        assert!(inv.args.contains(&CONFIGJAR_MAIN_CLASS.to_string()));
    }

    #[test]
    #[serial]
    fn bad_java_opts_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = package_args(&temp_dir);
        args.java_opts = Some("\"unmatched".to_string());
        let runner = FakeRunner::new(|| Err(std::io::Error::other("must not run")));

        let err = run_package(&args, &runner).unwrap_err();
        assert!(err.to_string().contains("failed to parse --java-opts"));
        assert!(runner.seen.borrow().is_empty());
    }

    #[test]
    #[serial]
    fn launch_failure_registers_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let args = package_args(&temp_dir);
        let runner = FakeRunner::new(|| {
            Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no java",
            ))
        });

        let err = run_package(&args, &runner).unwrap_err();

        assert_eq!(err.exit_code(), crate::exit_codes::LAUNCH_FAILURE);
        let events_file = events_file_path(&temp_dir.path().join("work"));
        assert!(!events_file.exists());
    }

    #[test]
    #[serial]
    fn missing_settings_file_aborts_before_launch() {
        let temp_dir = TempDir::new().unwrap();
        let args = package_args(&temp_dir);
        std::fs::remove_file(temp_dir.path().join("work/etc/settings.xml")).unwrap();
        let runner = FakeRunner::new(|| Err(std::io::Error::other("must not run")));

        let err = run_package(&args, &runner).unwrap_err();

        assert_eq!(err.exit_code(), crate::exit_codes::LAYOUT_FAILURE);
        assert!(runner.seen.borrow().is_empty());
        assert!(!events_file_path(&temp_dir.path().join("work")).exists());
    }
}
