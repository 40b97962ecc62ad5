// Copyright (c) 2024 Botho Foundation

//! Auto-purchase timer.
//!
//! [`AutoPurchase`] is polled from the host's event loop (a single-threaded
//! tokio runtime) alongside user input:
//!
//! ```ignore
//! loop {
//!     tokio::select! {
//!         _ = auto.tick() => { session.buy(); }
//!         line = lines.next_line() => { /* may call auto.stop() */ }
//!     }
//! }
//! ```
//!
//! Because ticks are only delivered through `tick().await` on the same task
//! that calls [`AutoPurchase::stop`], no tick can be observed once `stop`
//! returns. A period change made while running keeps the already scheduled
//! deadline and applies from the following tick on.

use std::future;
use std::time::Duration;

use pbs_draw::clamp_interval;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::debug;

/// Cancellable repeating timer for automatic purchases.
#[derive(Debug)]
pub struct AutoPurchase {
    period: Duration,
    pending_period: Option<Duration>,
    timer: Option<Interval>,
    ticks: u64,
}

impl AutoPurchase {
    /// Create a stopped timer. `period` is clamped to the supported range.
    pub fn new(period: Duration) -> Self {
        Self {
            period: clamp_interval(period),
            pending_period: None,
            timer: None,
            ticks: 0,
        }
    }

    /// Start ticking; the first tick fires one period from now.
    ///
    /// Must be called from within a tokio runtime. Does nothing if already
    /// running.
    pub fn start(&mut self) {
        if self.timer.is_some() {
            return;
        }
        if let Some(period) = self.pending_period.take() {
            self.period = period;
        }
        self.timer = Some(Self::timer(self.period));
        debug!(period_ms = self.period.as_millis() as u64, "Auto-purchase started");
    }

    /// Stop ticking. Returns whether the timer was running.
    pub fn stop(&mut self) -> bool {
        let was_active = self.timer.take().is_some();
        if let Some(period) = self.pending_period.take() {
            self.period = period;
        }
        if was_active {
            debug!(ticks = self.ticks, "Auto-purchase stopped");
        }
        was_active
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Change the period (clamped). Returns the stored value.
    ///
    /// While running, the tick already scheduled keeps its deadline and the
    /// new period is used from then on.
    pub fn set_period(&mut self, period: Duration) -> Duration {
        let period = clamp_interval(period);
        if self.timer.is_some() && period != self.period {
            self.pending_period = Some(period);
        } else {
            self.period = period;
            self.pending_period = None;
        }
        period
    }

    /// The most recently requested period.
    pub fn period(&self) -> Duration {
        self.pending_period.unwrap_or(self.period)
    }

    /// Ticks delivered since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Wait for the next tick and return its sequence number (starting at 1).
    ///
    /// Never completes while stopped. Cancel-safe: dropping the future before
    /// it completes does not lose or duplicate a tick.
    pub async fn tick(&mut self) -> u64 {
        let Some(timer) = self.timer.as_mut() else {
            return future::pending().await;
        };
        timer.tick().await;

        if let Some(period) = self.pending_period.take() {
            self.period = period;
            self.timer = Some(Self::timer(period));
        }

        self.ticks += 1;
        self.ticks
    }

    fn timer(period: Duration) -> Interval {
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    const PERIOD: Duration = Duration::from_millis(100);

    #[tokio::test(start_paused = true)]
    async fn test_stopped_timer_never_ticks() {
        let mut auto = AutoPurchase::new(PERIOD);
        assert!(!auto.is_active());
        assert!(timeout(Duration::from_secs(60), auto.tick()).await.is_err());
        assert_eq!(auto.ticks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_period() {
        let mut auto = AutoPurchase::new(PERIOD);
        let start = Instant::now();
        auto.start();

        assert_eq!(auto.tick().await, 1);
        assert_eq!(Instant::now() - start, PERIOD);
        assert_eq!(auto.tick().await, 2);
        assert_eq!(Instant::now() - start, PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_after_stop() {
        let mut auto = AutoPurchase::new(PERIOD);
        auto.start();
        auto.tick().await;

        assert!(auto.stop());
        assert!(!auto.stop());
        assert!(timeout(Duration::from_secs(60), auto.tick()).await.is_err());
        assert_eq!(auto.ticks(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_period_change_applies_after_pending_tick() {
        let mut auto = AutoPurchase::new(PERIOD);
        let start = Instant::now();
        auto.start();

        auto.set_period(Duration::from_millis(300));
        assert_eq!(auto.period(), Duration::from_millis(300));

        auto.tick().await;
        assert_eq!(Instant::now() - start, PERIOD);

        auto.tick().await;
        assert_eq!(Instant::now() - start, PERIOD + Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_period_change_while_stopped_applies_on_start() {
        let mut auto = AutoPurchase::new(PERIOD);
        auto.set_period(Duration::from_millis(50));

        let start = Instant::now();
        auto.start();
        auto.tick().await;
        assert_eq!(Instant::now() - start, Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_stop() {
        let mut auto = AutoPurchase::new(PERIOD);
        auto.start();
        auto.tick().await;
        auto.stop();

        auto.start();
        assert!(auto.is_active());
        assert_eq!(auto.tick().await, 2);
    }

    #[test]
    fn test_period_is_clamped() {
        let mut auto = AutoPurchase::new(Duration::ZERO);
        assert_eq!(auto.period(), Duration::from_millis(1));
        assert_eq!(
            auto.set_period(Duration::from_secs(1_000_000)),
            Duration::from_secs(3600)
        );
    }
}
