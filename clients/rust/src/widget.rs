use crate::{APIResponse, BaseClient};
use chrono::{DateTime, Utc};
use hurry_api_structs::*;
use hurry_domain::{TimeLeft, ID};
use reqwest::StatusCode;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

#[derive(Clone)]
pub struct WidgetClient {
    base: Arc<BaseClient>,
}

pub struct GetActiveTimerInput {
    pub shop: String,
    pub product_id: Option<String>,
}

impl WidgetClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn active_timer(
        &self,
        input: GetActiveTimerInput,
    ) -> APIResponse<get_active_timer::APIResponse> {
        let mut path = format!("timers/active?shop={}", input.shop);
        if let Some(product_id) = input.product_id {
            path = format!("{}&product_id={}", path, product_id);
        }
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn record_click(
        &self,
        timer_id: ID,
    ) -> APIResponse<record_timer_click::APIResponse> {
        self.base
            .post((), format!("timers/{}/click", timer_id), StatusCode::OK)
            .await
    }
}

/// Milliseconds to add to the local clock to approximate the server clock,
/// derived from the `timestamp` echoed by the active timer endpoint. A
/// malformed timestamp yields no correction.
pub fn server_offset_millis(timestamp: &str) -> i64 {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|server_now| server_now.timestamp_millis() - Utc::now().timestamp_millis())
        .unwrap_or(0)
}

/// Emits the remaining time for a countdown once per second until it expires.
///
/// Every tick recomputes against the fixed end timestamp instead of
/// decrementing, so delayed or missed ticks never skew the countdown.
/// Dropping the handle stops the ticker.
pub struct Countdown {
    handle: JoinHandle<()>,
    rx: mpsc::UnboundedReceiver<TimeLeft>,
}

impl Countdown {
    pub fn start(end_ts: i64, clock_offset_millis: i64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(1));
            loop {
                ticker.tick().await;
                let now = Utc::now().timestamp_millis() + clock_offset_millis;
                match TimeLeft::until(end_ts, now) {
                    Some(time_left) => {
                        if tx.send(time_left).is_err() {
                            break;
                        }
                    }
                    None => break,
                }
            }
        });

        Self { handle, rx }
    }

    /// The next remaining-time sample, or `None` once the countdown expired.
    pub async fn tick(&mut self) -> Option<TimeLeft> {
        self.rx.recv().await
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
