//! Polling sync driver
//!
//! Runs fetch -> build -> reconcile passes at a fixed interval. Passes
//! are strictly sequential; a failing pass is logged and never stops the
//! loop. Nothing persists between passes except the filesystem itself.

use std::time::Duration;

use tracing::{debug, error, info};

use strm_api::TorrServerClient;
use strm_core::{SyncEngine, SyncOptions, SyncReport, build_entries};
use strm_fs::NamingMode;

use crate::error::Result;

/// Everything one reconciliation pass needs, resolved once at startup.
pub struct Driver {
    client: TorrServerClient,
    engine: SyncEngine,
    mode: NamingMode,
    options: SyncOptions,
    interval: Duration,
    once: bool,
}

impl Driver {
    pub fn new(
        client: TorrServerClient,
        engine: SyncEngine,
        mode: NamingMode,
        options: SyncOptions,
        interval: Duration,
        once: bool,
    ) -> Self {
        Self {
            client,
            engine,
            mode,
            options,
            interval,
            once,
        }
    }

    /// Run numbered passes until the process is terminated.
    ///
    /// With `once` set, exactly one pass runs and the function returns
    /// normally even when that pass hit a non-fatal error; only startup
    /// failures affect the exit status.
    pub async fn run(&self) {
        let mut pass: u64 = 0;
        loop {
            pass += 1;
            info!(pass, "starting sync pass");
            match self.run_pass().await {
                Ok(report) => {
                    info!(
                        pass,
                        created = report.stats.created,
                        updated = report.stats.updated,
                        skipped = report.stats.skipped,
                        removed = report.stats.removed,
                        "sync pass complete"
                    );
                    if !report.success() {
                        error!(
                            pass,
                            failures = report.errors.len(),
                            "some entries failed to converge; they will be retried next pass"
                        );
                    }
                }
                Err(e) => {
                    error!(pass, error = %e, "sync pass failed");
                }
            }

            if self.once {
                info!("single pass requested, exiting");
                return;
            }

            debug!(
                seconds = self.interval.as_secs_f64(),
                "waiting for next pass"
            );
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One full reconciliation pass: fetch the listing, derive the
    /// desired mapping, converge the filesystem.
    async fn run_pass(&self) -> Result<SyncReport> {
        let torrents = self.client.list_torrents().await?;
        let build = build_entries(&torrents, self.mode);
        Ok(self.engine.reconcile(&build.entries, &self.options))
    }
}
