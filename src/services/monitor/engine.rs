use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::modules::homework::schema::{self, ValidationError};
use crate::modules::homework::verdict::{self, UnknownStatusError};
use crate::services::practicum::{HomeworkApi, PracticumError};
use crate::services::telegram::{Notifier, NotifyError};

/// Everything a cycle can fail with. All variants are recoverable: the
/// engine reports them and keeps looping.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    #[error(transparent)]
    Api(#[from] PracticumError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatusError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

pub struct MonitorEngine {
    api: Arc<dyn HomeworkApi>,
    notifier: Notifier,
    poll_interval: Duration,
    cursor: i64,
}

impl MonitorEngine {
    /// The first window reaches back one interval, so changes that landed
    /// just before startup are still picked up.
    pub fn new(api: Arc<dyn HomeworkApi>, notifier: Notifier, poll_interval: Duration) -> Self {
        let cursor = Utc::now().timestamp() - poll_interval.as_secs() as i64;
        Self::with_cursor(api, notifier, poll_interval, cursor)
    }

    pub fn with_cursor(
        api: Arc<dyn HomeworkApi>,
        notifier: Notifier,
        poll_interval: Duration,
        cursor: i64,
    ) -> Self {
        Self {
            api,
            notifier,
            poll_interval,
            cursor,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Start the polling loop. Runs until the process is terminated.
    pub async fn run(&mut self) {
        tracing::info!(
            "Homework monitor running, polling every {} seconds",
            self.poll_interval.as_secs()
        );

        loop {
            self.tick().await;
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// One cycle plus its error boundary. Nothing propagates out of here:
    /// a failed cycle is logged and reported to the operator chat, and a
    /// failure of that alert send is only logged.
    pub async fn tick(&mut self) {
        match self.run_cycle().await {
            Ok(sent) => {
                tracing::debug!("Cycle complete, {} notification(s) sent", sent);
            }
            Err(e) => {
                tracing::error!("Poll cycle failed: {}", e);

                let alert = format!("Program malfunction: {}", e);
                if let Err(send_err) = self.notifier.notify(&alert).await {
                    tracing::error!("Failed to deliver failure alert: {}", send_err);
                }
            }
        }
    }

    /// Fetch the window behind the cursor, validate it, and push one verdict
    /// message per reported homework, in API order.
    pub async fn run_cycle(&mut self) -> Result<usize, CycleError> {
        let raw = self.api.status_updates(self.cursor).await?;
        let update = schema::check_response(&schema::normalize_response(raw))?;

        if update.homeworks.is_empty() {
            tracing::debug!(
                "No homework status changes in the last {} seconds",
                self.poll_interval.as_secs()
            );
        }

        let mut sent = 0;
        for homework in &update.homeworks {
            let message = verdict::status_message(homework)?;
            self.notifier.notify(&message).await?;
            sent += 1;
        }

        // The window only counts as covered once every verdict went out; a
        // partial batch keeps the old cursor and is re-requested next cycle
        self.cursor = update.current_date;

        Ok(sent)
    }
}
