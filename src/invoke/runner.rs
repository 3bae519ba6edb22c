//! Process launch boundary for the external packaging tool.
//!
//! The launch is a narrow capability: an [`Invocation`] goes in, an exit
//! status (or I/O failure) comes out. Tests substitute a fake runner so the
//! command construction can be asserted without a JVM on the machine.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// A fully constructed external tool invocation. Never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Executable to launch.
    pub program: String,
    /// Ordered argument tokens, passed discretely (no shell involved).
    pub args: Vec<String>,
    /// Environment overlay, layered on top of the inherited environment.
    pub env: BTreeMap<String, String>,
    /// Working directory for the child process.
    pub working_dir: PathBuf,
}

impl Invocation {
    /// Render the command line for log output.
    pub fn command_line(&self) -> String {
        let mut tokens = Vec::with_capacity(self.args.len() + 1);
        tokens.push(self.program.clone());
        tokens.extend(self.args.iter().cloned());
        shell_words::join(&tokens)
    }
}

/// Capability to run an invocation to completion.
pub trait ProcessRunner {
    /// Run the invocation synchronously, blocking until the process exits.
    fn run(&self, invocation: &Invocation) -> std::io::Result<ExitStatus>;
}

/// Runner that launches a real child process via `std::process`.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> std::io::Result<ExitStatus> {
        Command::new(&invocation.program)
            .args(&invocation.args)
            .envs(&invocation.env)
            .current_dir(&invocation.working_dir)
            .status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn invocation(program: &str, args: &[&str], working_dir: PathBuf) -> Invocation {
        Invocation {
            program: program.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            env: BTreeMap::new(),
            working_dir,
        }
    }

    #[test]
    fn runs_simple_command() {
        let temp_dir = TempDir::new().unwrap();
        #[cfg(windows)]
        let inv = invocation("cmd", &["/c", "exit 0"], temp_dir.path().to_path_buf());
        #[cfg(not(windows))]
        let inv = invocation("sh", &["-c", "exit 0"], temp_dir.path().to_path_buf());

        let status = SystemRunner.run(&inv).unwrap();
        assert!(status.success());
    }

    #[test]
    fn reports_nonzero_exit_status() {
        let temp_dir = TempDir::new().unwrap();
        #[cfg(windows)]
        let inv = invocation("cmd", &["/c", "exit 3"], temp_dir.path().to_path_buf());
        #[cfg(not(windows))]
        let inv = invocation("sh", &["-c", "exit 3"], temp_dir.path().to_path_buf());

        let status = SystemRunner.run(&inv).unwrap();
        assert!(!status.success());
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn missing_program_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let inv = invocation(
            "osbconfig_no_such_program_xyz",
            &[],
            temp_dir.path().to_path_buf(),
        );
        assert!(SystemRunner.run(&inv).is_err());
    }

    #[test]
    fn child_sees_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("marker"), b"").unwrap();

        #[cfg(windows)]
        let inv = invocation(
            "cmd",
            &["/c", "if exist marker (exit 0) else (exit 1)"],
            temp_dir.path().to_path_buf(),
        );
        #[cfg(not(windows))]
        let inv = invocation("sh", &["-c", "test -f marker"], temp_dir.path().to_path_buf());

        let status = SystemRunner.run(&inv).unwrap();
        assert!(status.success());
    }

    #[test]
    fn env_overlay_reaches_child_without_replacing_inherited() {
        let temp_dir = TempDir::new().unwrap();
        let mut env = BTreeMap::new();
        env.insert("OSBCONFIG_TEST_TMP".to_string(), "/scratch/tmp".to_string());

        // PATH comes from the inherited environment; the overlay only adds.
        #[cfg(not(windows))]
        let inv = Invocation {
            program: "sh".to_string(),
            args: vec![
                "-c".to_string(),
                "test \"$OSBCONFIG_TEST_TMP\" = /scratch/tmp && test -n \"$PATH\"".to_string(),
            ],
            env,
            working_dir: temp_dir.path().to_path_buf(),
        };
        #[cfg(windows)]
        let inv = Invocation {
            program: "cmd".to_string(),
            args: vec![
                "/c".to_string(),
                "if \"%OSBCONFIG_TEST_TMP%\"==\"/scratch/tmp\" (exit 0) else (exit 1)".to_string(),
            ],
            env,
            working_dir: temp_dir.path().to_path_buf(),
        };

        let status = SystemRunner.run(&inv).unwrap();
        assert!(status.success());
    }

    #[test]
    fn command_line_quotes_tokens_with_spaces() {
        let inv = invocation(
            "/opt/java/bin/java",
            &["-cp", "a.jar:b dir/c.jar", "Main"],
            PathBuf::from("/tmp"),
        );
        assert_eq!(
            inv.command_line(),
            "/opt/java/bin/java -cp 'a.jar:b dir/c.jar' Main"
        );
    }
}
