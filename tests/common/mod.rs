//! Shared fixtures: a scripted stand-in for the `ci` compiler-driver.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

pub struct FakeCi {
    pub dir: PathBuf,
}

impl FakeCi {
    /// Installs a `ci` script in `dir` that logs its arguments to `calls.log`
    /// and creates `<stem>.e` on `build`. Dropping `fail-build` or `fail-test`
    /// marker files next to it makes the matching subcommand exit 1.
    #[cfg(unix)]
    pub fn install(dir: &Path) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = r#"#!/bin/sh
here="$(dirname "$0")"
echo "$@" >> "$here/calls.log"
case "$1" in
  build)
    [ -f "$here/fail-build" ] && { echo "main.cpp:1: error" >&2; exit 1; }
    : > "${2%.*}.e"
    ;;
  test)
    [ -f "$here/fail-test" ] && { echo "WA on test 1"; exit 1; }
    ;;
esac
exit 0
"#;
        let path = dir.join("ci");
        fs::write(&path, script).expect("Failed to write fake ci");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake ci executable");
        Self {
            dir: dir.to_path_buf(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join("ci")
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn fail(&self, subcommand: &str) {
        fs::write(self.dir.join(format!("fail-{subcommand}")), "").unwrap();
    }
}

pub fn touch_at(path: &Path, secs: u64) {
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
        .unwrap();
}

/// Workspace with a `main.cpp` solution and an `icie.toml` pointing at `tool`.
pub fn workspace(root: &Path, tool: &Path) -> PathBuf {
    let source = root.join("main.cpp");
    fs::write(&source, "int main() { return 0; }\n").unwrap();
    fs::write(
        root.join("icie.toml"),
        format!("[tool]\npath = {:?}\n", tool.to_string_lossy()),
    )
    .unwrap();
    source
}
