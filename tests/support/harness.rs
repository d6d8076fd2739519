use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness runs the prlint binary inside an isolated temporary directory,
/// so no `.prlint/config.md` or `PR_DESCRIPTION` from the host leaks in.
pub struct TestHarness {
    pub dir: TempDir,
    pub prlint_binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        TestHarness {
            dir: temp_dir,
            prlint_binary: PathBuf::from(env!("CARGO_BIN_EXE_prlint")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.prlint/config.md` with the given content.
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) {
        let config_dir = self.path().join(".prlint");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::write(config_dir.join("config.md"), content).expect("Failed to write config");
    }

    /// Writes a file relative to the harness directory and returns its path.
    #[allow(dead_code)]
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Executes prlint with the given arguments and extra environment.
    pub fn run(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(&self.prlint_binary);
        cmd.args(args)
            .current_dir(self.path())
            .env_remove("PR_DESCRIPTION")
            .env_remove("PRLINT_QUIET")
            .env("NO_COLOR", "1");
        for (key, value) in env {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to run prlint")
    }

    /// Runs `prlint check` with the payload in `PR_DESCRIPTION`.
    #[allow(dead_code)]
    pub fn check(&self, payload: &str) -> Output {
        self.run(&["check"], &[("PR_DESCRIPTION", payload)])
    }
}

/// Stdout lines carrying a pass or fail glyph.
#[allow(dead_code)]
pub fn result_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| line.starts_with('✓') || line.starts_with('✗'))
        .map(str::to_string)
        .collect()
}
