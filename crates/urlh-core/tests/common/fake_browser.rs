//! Stand-in browser executables for integration tests.
//!
//! A fake browser is a shell script that records its arguments, one per
//! line, into a file next to it and exits with a fixed status.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub struct FakeBrowser {
    pub path: PathBuf,
    pub args_file: PathBuf,
}

impl FakeBrowser {
    /// Writes an executable script named `name` into `dir` that exits with `status`.
    pub fn install(dir: &Path, name: &str, status: i32) -> Self {
        let path = dir.join(name);
        let args_file = dir.join(format!("{name}.args"));
        let script = format!(
            "#!/bin/sh\necho \"$#\" > '{args}'\nfor a in \"$@\"; do printf '%s\\n' \"$a\" >> '{args}'; done\nexit {status}\n",
            args = args_file.display(),
        );
        fs::write(&path, script).expect("write fake browser");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake browser");
        Self { path, args_file }
    }

    /// Argument count followed by each argument, as recorded by the last run.
    pub fn recorded(&self) -> Vec<String> {
        fs::read_to_string(&self.args_file)
            .expect("fake browser did not run")
            .lines()
            .map(str::to_string)
            .collect()
    }
}
