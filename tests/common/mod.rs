#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Writer handing notices to a buffer the test can inspect after the
/// launcher is done with it.
#[derive(Debug, Clone, Default)]
pub struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl SharedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("writer lock poisoned")).into_owned()
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("writer lock poisoned").write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Writes an executable shell script standing in for the configured diff
/// tool. The script records its working directory, its two path arguments
/// and the contents of both files into `recorder`, then exits with
/// `exit_code`.
pub fn write_tool_script(path: &Path, recorder: &Path, exit_code: i32) -> PathBuf {
    let script = format!(
        r#"#!/bin/sh
pwd >> "{rec}"
printf '%s\n' "$1" >> "{rec}"
printf '%s\n' "$2" >> "{rec}"
cat "$1" >> "{rec}"
cat "$2" >> "{rec}"
exit {exit_code}
"#,
        rec = recorder.display()
    );

    write_executable(path, &script)
}

/// A tool script that stays alive for a while before exiting, long enough
/// for a test to issue a second run against an in-flight first one.
pub fn write_slow_tool_script(path: &Path, recorder: &Path, millis: u64) -> PathBuf {
    let script = format!(
        r#"#!/bin/sh
pwd >> "{rec}"
sleep {seconds}
exit 0
"#,
        rec = recorder.display(),
        seconds = millis as f64 / 1000.0
    );

    write_executable(path, &script)
}

/// A tool script that fails the way the difftool facility itself fails when
/// the configured tool crashes: its known message on stderr, non-zero exit.
pub fn write_crashing_tool_script(path: &Path, message: &str, exit_code: i32) -> PathBuf {
    let script = format!(
        r#"#!/bin/sh
echo "{message}" >&2
exit {exit_code}
"#
    );

    write_executable(path, &script)
}

fn write_executable(path: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, script).expect("failed to write tool script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("failed to mark tool script executable");

    path.to_path_buf()
}

/// Lines recorded by a tool script, empty when the tool never ran.
pub fn recorded_lines(recorder: &Path) -> Vec<String> {
    match std::fs::read_to_string(recorder) {
        Ok(contents) => contents.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

/// Number of entries currently present in a scratch directory.
pub fn scratch_entry_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| entries.count())
        .unwrap_or(0)
}
