use std::time::Duration;

use time::OffsetDateTime;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::format_duration;

/// Once-a-second publisher of a running session's formatted elapsed
/// time.
///
/// The initial value is computed at spawn, so a session restored long
/// after it started shows the right elapsed time immediately. The
/// backing task is aborted on cancel and on drop.
pub struct ElapsedTicker {
    handle: JoinHandle<()>,
    receiver: watch::Receiver<String>,
}

impl ElapsedTicker {
    /// Spawn the publisher. Must be called within a tokio runtime.
    pub fn spawn(started_at: OffsetDateTime) -> Self {
        let (sender, receiver) = watch::channel(elapsed_display(started_at));
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // the first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                if sender.send(elapsed_display(started_at)).is_err() {
                    break;
                }
            }
        });
        Self { handle, receiver }
    }

    /// Channel carrying the formatted elapsed time.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.receiver.clone()
    }

    /// Stop publishing.
    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for ElapsedTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn elapsed_display(started_at: OffsetDateTime) -> String {
    format_duration(OffsetDateTime::now_utc() - started_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn initial_value_reflects_time_already_elapsed() {
        let started_at = OffsetDateTime::now_utc() - time::Duration::seconds(65);

        let ticker = ElapsedTicker::spawn(started_at);

        assert_eq!(*ticker.subscribe().borrow(), "00:01:05");
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_an_update_each_second() {
        let ticker = ElapsedTicker::spawn(OffsetDateTime::now_utc());
        let mut receiver = ticker.subscribe();

        receiver.changed().await.unwrap();
        receiver.changed().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_ends_the_stream() {
        let ticker = ElapsedTicker::spawn(OffsetDateTime::now_utc());
        let mut receiver = ticker.subscribe();

        ticker.cancel();

        assert!(receiver.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_ticker_ends_the_stream() {
        let ticker = ElapsedTicker::spawn(OffsetDateTime::now_utc());
        let mut receiver = ticker.subscribe();

        drop(ticker);

        assert!(receiver.changed().await.is_err());
    }
}
