use crate::core::{ConfigProvider, Converter};
use crate::utils::error::{MdpipeError, Result};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Subprocess backend: one `python -m markitdown <path>` invocation per file,
/// with the converted text captured from the child's stdout.
pub struct MarkitdownConverter<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> MarkitdownConverter<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Probe whether the markitdown module is importable and install it via
    /// pip when it is not. An install failure has no fallback and is fatal.
    pub async fn ensure_installed(&self) -> Result<()> {
        let python = self.config.python_command();

        let probe = Command::new(python)
            .args(["-c", "import markitdown"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| MdpipeError::BootstrapError {
                message: format!("failed to run `{}`: {}", python, e),
            })?;

        if probe.success() {
            tracing::debug!("markitdown module is available");
            return Ok(());
        }

        if !self.config.auto_install() {
            return Err(MdpipeError::BootstrapError {
                message: format!(
                    "markitdown module not found for `{}` and auto-install is disabled",
                    python
                ),
            });
        }

        tracing::info!("markitdown module not found. Installing...");
        let status = Command::new(python)
            .args(["-m", "pip", "install", "markitdown[all]", "--quiet"])
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| MdpipeError::BootstrapError {
                message: format!("failed to run pip via `{}`: {}", python, e),
            })?;

        if !status.success() {
            return Err(MdpipeError::BootstrapError {
                message: format!("pip install markitdown[all] exited with {}", status),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl<C: ConfigProvider> Converter for MarkitdownConverter<C> {
    async fn convert(&self, path: &Path) -> Result<String> {
        let display = path.display().to_string();

        let mut cmd = Command::new(self.config.python_command());
        cmd.args(["-m", "markitdown"])
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped());

        if self.config.suppress_warnings() {
            // capture the child's stderr so it only surfaces in our own
            // error report, and silence Python warnings outright
            cmd.env("PYTHONWARNINGS", "ignore").stderr(Stdio::piped());
        } else {
            cmd.stderr(Stdio::inherit());
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| MdpipeError::ConversionError {
                path: display.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            // the last stderr line is usually the exception itself
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.lines().rev().find(|l| !l.trim().is_empty()) {
                Some(line) => line.trim().to_string(),
                None => format!("markitdown exited with {}", output.status),
            };
            return Err(MdpipeError::ConversionError {
                path: display,
                reason,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
