//! External commands (package manager, dev servers, builds)
//!
//! Installs and builds run one at a time with [`run_blocking`]. `run dev`
//! starts its servers as supervised Tokio tasks with [`supervise`]: each
//! task owns one child, streams through the inherited stdio, and is killed
//! when the shutdown signal fires.

use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tokio::sync::watch;
use tokio::task::JoinSet;

use crate::error::{NugraError, Result};

/// A command line to run in a working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Short name for progress output (`frontend`, `backend`, ...)
    pub label: String,
    /// Executable
    pub program: String,
    /// Arguments
    pub args: Vec<String>,
    /// Working directory
    pub cwd: PathBuf,
}

impl CommandSpec {
    /// Create a command line
    pub fn new<I, S>(label: &str, program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.to_string(),
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
        }
    }

    fn std_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(&self.cwd);
        command
    }

    fn tokio_command(&self) -> tokio::process::Command {
        let mut command = tokio::process::Command::new(&self.program);
        command
            .args(&self.args)
            .current_dir(&self.cwd)
            .kill_on_drop(true);
        command
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Run a command to completion with inherited stdio
///
/// # Errors
///
/// Returns [`NugraError::Process`] if the command cannot be started or
/// exits unsuccessfully.
pub fn run_blocking(spec: &CommandSpec) -> Result<()> {
    tracing::info!(command = %spec, cwd = %spec.cwd.display(), "running");

    let status = spec
        .std_command()
        .status()
        .map_err(|e| NugraError::process(format!("failed to start `{spec}`: {e}")))?;

    check_status(spec, status)
}

fn check_status(spec: &CommandSpec, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(NugraError::process(format!("`{spec}` exited with {status}")))
    }
}

/// How a supervised child ended
#[derive(Debug)]
pub struct ChildExit {
    /// Label of the command
    pub label: String,
    /// Exit status
    pub status: ExitStatus,
    /// Whether the child was stopped by the shutdown signal
    pub cancelled: bool,
}

/// Run all commands concurrently until they exit or Ctrl-C / SIGTERM arrives
///
/// # Errors
///
/// Returns an error if a child fails to start, or exits unsuccessfully
/// without having been cancelled.
pub async fn supervise(specs: &[CommandSpec]) -> Result<Vec<ChildExit>> {
    supervise_until(specs, shutdown_signal()).await
}

/// Run all commands concurrently until they exit or `shutdown` completes
///
/// On shutdown every running child is killed and awaited.
///
/// # Errors
///
/// See [`supervise`].
pub async fn supervise_until<F>(specs: &[CommandSpec], shutdown: F) -> Result<Vec<ChildExit>>
where
    F: Future<Output = ()>,
{
    let (cancel_tx, cancel_rx) = watch::channel(false);
    let mut tasks = JoinSet::new();
    for spec in specs {
        tasks.spawn(supervise_child(spec.clone(), cancel_rx.clone()));
    }

    tokio::pin!(shutdown);
    let mut cancelled = false;
    let mut exits = Vec::with_capacity(specs.len());
    let mut failures = Vec::new();

    loop {
        tokio::select! {
            joined = tasks.join_next() => match joined {
                None => break,
                Some(Ok(Ok(exit))) => {
                    if !exit.cancelled && !exit.status.success() {
                        tracing::warn!(
                            label = %exit.label,
                            status = %exit.status,
                            "process exited unsuccessfully"
                        );
                        failures.push(format!("{} exited with {}", exit.label, exit.status));
                    }
                    exits.push(exit);
                }
                Some(Ok(Err(err))) => failures.push(err.to_string()),
                Some(Err(err)) => failures.push(format!("supervisor task failed: {err}")),
            },
            () = &mut shutdown, if !cancelled => {
                tracing::info!("shutdown requested, stopping child processes");
                cancelled = true;
                cancel_tx.send_replace(true);
            }
        }
    }

    if failures.is_empty() {
        Ok(exits)
    } else {
        Err(NugraError::process(failures.join("; ")))
    }
}

async fn supervise_child(
    spec: CommandSpec,
    mut cancel: watch::Receiver<bool>,
) -> Result<ChildExit> {
    let mut child = spec
        .tokio_command()
        .spawn()
        .map_err(|e| NugraError::process(format!("failed to start `{spec}`: {e}")))?;
    tracing::info!(label = %spec.label, command = %spec, pid = ?child.id(), "started");

    tokio::select! {
        status = child.wait() => {
            let status = status?;
            tracing::info!(label = %spec.label, %status, "exited");
            Ok(ChildExit { label: spec.label, status, cancelled: false })
        }
        _ = cancel.changed() => {
            child.start_kill()?;
            let status = child.wait().await?;
            tracing::debug!(label = %spec.label, %status, "stopped");
            Ok(ChildExit { label: spec.label, status, cancelled: true })
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn sh(label: &str, script: &str) -> CommandSpec {
        CommandSpec::new(label, "sh", ["-c", script], Path::new("."))
    }

    #[test]
    fn test_display() {
        let spec = CommandSpec::new(
            "frontend",
            "npx",
            ["vite", "build"],
            Path::new("apps/frontend"),
        );
        assert_eq!(spec.to_string(), "npx vite build");
    }

    #[test]
    fn test_run_blocking_status() {
        assert!(run_blocking(&sh("ok", "exit 0")).is_ok());

        let err = run_blocking(&sh("fail", "exit 3")).unwrap_err();
        assert!(matches!(err, NugraError::Process(_)));
    }

    #[test]
    fn test_run_blocking_missing_program() {
        let spec = CommandSpec::new(
            "missing",
            "nugra-definitely-missing-binary",
            Vec::<String>::new(),
            Path::new("."),
        );
        let err = run_blocking(&spec).unwrap_err();
        assert!(err.to_string().contains("failed to start"));
    }

    #[tokio::test]
    async fn test_supervise_waits_for_all_children() {
        let exits = supervise_until(
            &[sh("a", "exit 0"), sh("b", "sleep 0.1")],
            std::future::pending(),
        )
        .await
        .unwrap();
        assert_eq!(exits.len(), 2);
        assert!(exits.iter().all(|exit| exit.status.success() && !exit.cancelled));
    }

    #[tokio::test]
    async fn test_supervise_reports_failures() {
        let result = supervise_until(
            &[sh("a", "exit 0"), sh("b", "exit 2")],
            std::future::pending(),
        )
        .await;
        let err = result.unwrap_err();
        assert!(err.to_string().contains("b exited"));
    }

    #[tokio::test]
    async fn test_shutdown_kills_children() {
        let started = Instant::now();
        let exits = supervise_until(
            &[sh("frontend", "sleep 30"), sh("backend", "sleep 30")],
            tokio::time::sleep(Duration::from_millis(100)),
        )
        .await
        .unwrap();

        assert!(started.elapsed() < Duration::from_secs(10));
        assert_eq!(exits.len(), 2);
        assert!(exits.iter().all(|exit| exit.cancelled));
    }
}
