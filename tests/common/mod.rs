//! Shared helpers for running the `respwrap` binary against scratch copies of
//! the handler test fixtures.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn manifest_dir() -> PathBuf {
    PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
}

pub fn fixture_text(name: &str) -> String {
    let path = manifest_dir().join("tests").join("fixtures").join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("read {}: {err}", path.display()))
}

/// Scratch directory holding one copy of a fixture.
pub struct Workspace {
    pub dir: TempDir,
    pub target: PathBuf,
}

impl Workspace {
    /// Copy `fixture` into a fresh temp dir at `rel`.
    pub fn with_fixture(fixture: &str, rel: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let target = dir.path().join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).expect("create fixture parent");
        }
        fs::write(&target, fixture_text(fixture)).expect("copy fixture");
        Self { dir, target }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn target_text(&self) -> String {
        fs::read_to_string(&self.target).expect("read target")
    }

    /// Run the binary with `args`, from the workspace root.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_respwrap"))
            .args(args)
            .current_dir(self.root())
            .env_remove("RESPWRAP_LOG")
            .output()
            .expect("run respwrap")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
