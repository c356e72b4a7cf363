use crate::config::rustfmt_bin;
use anyhow::Context;
use std::path::Path;
use std::process::Command;

/// Run rustfmt on one generated file.
///
/// `GATEWAYGEN_RUSTFMT_BIN` overrides the binary without touching `PATH`.
pub fn format_file(path: &Path) -> anyhow::Result<()> {
    let bin = rustfmt_bin();
    let status = Command::new(&bin)
        .arg("--edition")
        .arg("2021")
        .arg(path)
        .status()
        .with_context(|| format!("Failed to run {bin}"))?;
    if !status.success() {
        anyhow::bail!("{bin} failed on {}", path.display());
    }
    Ok(())
}
