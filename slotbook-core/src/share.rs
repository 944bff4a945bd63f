//! Handing a summary off to a share helper.
//!
//! A share helper is any executable named `slotbook-share-<app>` on the
//! search path. It receives the summary text on stdin and exits 0 on success.
//! When no app is requested, the helper is missing, fails, or times out, the
//! text is written to the fallback sink instead.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::error::{SlotbookError, SlotbookResult};

const SHARE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Delivered to the named helper
    App(String),
    /// Written to the fallback sink
    Fallback,
}

pub fn helper_binary_name(app: &str) -> String {
    format!("slotbook-share-{}", app)
}

pub struct Sharer<W> {
    fallback: W,
    search_path: Option<OsString>,
}

impl<W: Write> Sharer<W> {
    pub fn new(fallback: W) -> Self {
        Sharer {
            fallback,
            search_path: None,
        }
    }

    /// Look for helpers in `paths` (a `PATH`-style list) instead of `PATH`.
    pub fn with_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.fallback
    }

    pub async fn share(&mut self, text: &str, app: Option<&str>) -> SlotbookResult<ShareOutcome> {
        if let Some(app) = app.map(str::trim).filter(|a| !a.is_empty()) {
            match self.send_to_helper(app, text).await {
                Ok(()) => return Ok(ShareOutcome::App(app.to_string())),
                Err(e) => warn!(app, error = %e, "share helper unavailable, using fallback"),
            }
        }

        self.fallback.write_all(text.as_bytes())?;
        self.fallback.write_all(b"\n")?;
        self.fallback.flush()?;
        Ok(ShareOutcome::Fallback)
    }

    fn helper_path(&self, app: &str) -> SlotbookResult<PathBuf> {
        let binary_name = helper_binary_name(app);
        let found = match &self.search_path {
            Some(paths) => which::which_in(&binary_name, Some(paths), std::env::temp_dir()),
            None => which::which(&binary_name),
        };
        found.map_err(|_| SlotbookError::Share(format!("'{}' not found in PATH", binary_name)))
    }

    async fn send_to_helper(&self, app: &str, text: &str) -> SlotbookResult<()> {
        let binary_path = self.helper_path(app)?;
        timeout(SHARE_TIMEOUT, run_helper(&binary_path, text))
            .await
            .map_err(|_| {
                SlotbookError::Share(format!(
                    "share helper timed out after {}s",
                    SHARE_TIMEOUT.as_secs()
                ))
            })?
    }
}

async fn run_helper(binary_path: &Path, text: &str) -> SlotbookResult<()> {
    debug!(helper = %binary_path.display(), "running share helper");

    let mut child = Command::new(binary_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            SlotbookError::Share(format!("Failed to spawn {}: {}", binary_path.display(), e))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
        stdin.shutdown().await?;
    }

    let status = child.wait().await?;
    if !status.success() {
        return Err(SlotbookError::Share(format!(
            "{} exited with status: {}",
            binary_path.display(),
            status.code().unwrap_or(-1)
        )));
    }

    Ok(())
}
