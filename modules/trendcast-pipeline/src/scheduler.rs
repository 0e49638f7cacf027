use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike};
use tracing::info;

use trendcast_common::TrendcastError;

use crate::pipeline::Pipeline;

/// Poll interval of the trigger loop. Runs execute synchronously inside the
/// loop, so a run that outlasts an interval simply delays the next check —
/// overlapping runs cannot occur.
const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// Fires one pipeline run per day at a configured local time.
pub struct DailyTrigger {
    at: NaiveTime,
    last_run: Option<NaiveDate>,
}

impl DailyTrigger {
    /// Parse a trigger time in `HH:MM` form.
    pub fn new(schedule_time: &str) -> Result<Self> {
        let at = NaiveTime::parse_from_str(schedule_time, "%H:%M").map_err(|e| {
            TrendcastError::Config(format!("invalid SCHEDULE_TIME '{schedule_time}': {e}"))
        })?;
        Ok(Self { at, last_run: None })
    }

    /// Whether the trigger should fire at `now`. True once per day, at or
    /// after the scheduled minute.
    pub fn is_due(&self, now: DateTime<Local>) -> bool {
        if self.last_run == Some(now.date_naive()) {
            return false;
        }
        let now_minute = now.time().with_second(0).and_then(|t| t.with_nanosecond(0));
        now_minute.map(|t| t >= self.at).unwrap_or(false)
    }

    pub fn mark_ran(&mut self, now: DateTime<Local>) {
        self.last_run = Some(now.date_naive());
    }

    /// Arm the trigger at `now`. Arming past the scheduled time counts today
    /// as covered, so the first fire is the next day's occurrence.
    pub fn arm(&mut self, now: DateTime<Local>) {
        if now.time() >= self.at {
            self.last_run = Some(now.date_naive());
        }
    }

    /// Trigger loop: check once per minute, run the pipeline synchronously
    /// when due. Never returns.
    pub async fn run_forever(mut self, pipeline: &Pipeline) {
        self.arm(Local::now());
        info!(at = %self.at, "daily trigger armed");
        loop {
            let now = Local::now();
            if self.is_due(now) {
                self.mark_ran(now);
                let report = pipeline.run().await;
                info!(?report, "scheduled run complete");
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
