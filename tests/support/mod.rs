#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::process::{Command, Output};

pub fn verse_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_verse"))
}

pub fn run_command(cmd: Command) -> Result<Output> {
    let mut cmd = cmd;
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Repository `data/` directory, which carries the bundled catalog.
pub fn repo_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}
