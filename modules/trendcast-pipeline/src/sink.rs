use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Local;
use serde::Serialize;
use tracing::{error, info};

use trendcast_common::{sanitize_cell, ResultRow, TrendcastError};

use crate::traits::RowSink;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const BACKUP_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Appends result rows to the remote sink; any primary failure falls back
/// to a timestamped local JSON backup. Only a double failure loses data,
/// and that is logged rather than escalated.
pub struct ResultSink {
    remote: Arc<dyn RowSink>,
    backup_dir: PathBuf,
}

#[derive(Serialize)]
struct Backup<'a> {
    data: &'a [Vec<String>],
    timestamp: String,
}

impl ResultSink {
    pub fn new(remote: Arc<dyn RowSink>, backup_dir: &Path) -> Self {
        Self {
            remote,
            backup_dir: backup_dir.to_path_buf(),
        }
    }

    pub async fn save(&self, rows: Vec<ResultRow>) {
        let cells: Vec<Vec<String>> = rows.into_iter().map(ResultRow::into_cells).collect();

        match self.remote.append_rows(&cells).await {
            Ok(()) => info!(rows = cells.len(), "saved rows to remote sink"),
            Err(e) => {
                error!(error = %e, "remote sink failed, writing local backup");
                if let Err(backup_err) = self.write_backup(&cells) {
                    error!(error = %backup_err, "backup write failed, rows lost");
                }
            }
        }
    }

    fn write_backup(&self, cells: &[Vec<String>]) -> Result<()> {
        std::fs::create_dir_all(&self.backup_dir).context("creating backup dir")?;

        let now = Local::now();
        let path = self
            .backup_dir
            .join(format!("backup_{}.json", now.format(BACKUP_STAMP_FORMAT)));

        let backup = Backup {
            data: cells,
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        };

        let json = serde_json::to_string_pretty(&backup)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;

        info!(path = %path.display(), "saved rows to backup file");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Remote impl
// ---------------------------------------------------------------------------

fn sink_error(e: sheets_client::SheetsError) -> TrendcastError {
    TrendcastError::Sink(e.to_string())
}

/// Spreadsheet-backed sink: authenticates per save, writes the header when
/// the sheet is empty, truncates oversized cells, and stamps each row.
pub struct SheetSink {
    key_path: PathBuf,
    spreadsheet_id: String,
    range: String,
}

impl SheetSink {
    pub fn new(key_path: &Path, spreadsheet_id: &str) -> Self {
        Self {
            key_path: key_path.to_path_buf(),
            spreadsheet_id: spreadsheet_id.to_string(),
            range: "Sheet1".to_string(),
        }
    }
}

#[async_trait]
impl RowSink for SheetSink {
    async fn append_rows(&self, rows: &[Vec<String>]) -> Result<()> {
        let client = sheets_client::SheetsClient::connect(&self.key_path)
            .await
            .map_err(sink_error)?;

        let existing = client
            .values(&self.spreadsheet_id, &self.range)
            .await
            .map_err(sink_error)?;
        if existing.is_empty() {
            let header: Vec<String> = ResultRow::HEADER.iter().map(|h| h.to_string()).collect();
            client
                .append_row(&self.spreadsheet_id, &self.range, &header)
                .await
                .map_err(sink_error)?;
        }

        for row in rows {
            let mut clean: Vec<String> = row.iter().map(|cell| sanitize_cell(cell)).collect();
            clean.push(Local::now().format(TIMESTAMP_FORMAT).to_string());
            client
                .append_row(&self.spreadsheet_id, &self.range, &clean)
                .await
                .map_err(sink_error)?;
        }

        Ok(())
    }
}
