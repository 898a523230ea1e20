//! Destinations for saved purchase snapshots.

#[cfg(test)]
use mockall::automock;

use color_eyre::eyre::{Context, Result};
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use crate::purchase::form::PurchaseSnapshot;

/// Receives a snapshot every time the form is saved successfully.
#[cfg_attr(test, automock)]
pub trait SaveSink {
    fn emit(&self, snapshot: &PurchaseSnapshot) -> Result<()>;
}

/// Writes each snapshot to the application log.
#[derive(Default)]
pub struct LogSink;

impl SaveSink for LogSink {
    fn emit(&self, snapshot: &PurchaseSnapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)
            .wrap_err("failed to serialize purchase snapshot")?;
        log::info!("purchase saved: {json}");
        Ok(())
    }
}

/// Appends each snapshot to a file as one JSON document per line.
pub struct LedgerSink {
    path: PathBuf,
}

impl LedgerSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SaveSink for LedgerSink {
    fn emit(&self, snapshot: &PurchaseSnapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)
            .wrap_err("failed to serialize purchase snapshot")?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .wrap_err_with(|| {
                format!("failed to open ledger {}", self.path.display())
            })?;

        writeln!(file, "{json}").wrap_err_with(|| {
            format!("failed to write ledger {}", self.path.display())
        })?;

        log::info!(
            "purchase saved to {}: {} row(s), total {}",
            self.path.display(),
            snapshot.rows.len(),
            snapshot.grand_total
        );

        Ok(())
    }
}

#[cfg(test)]
#[path = "./sink_tests.rs"]
mod tests;
