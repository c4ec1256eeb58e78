//! Fixed-cadence tick loop.
//!
//! One synchronous tick per period: cancellation check, session tick,
//! snapshot publish. The sink sits behind a trait so a failing
//! presentation layer can never corrupt the session - its errors stop at
//! the loop boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::input::InputSource;
use crate::session::MatchSession;
use crate::snapshot::MatchSnapshot;

/// 16 ms per tick, ~60 Hz
pub const TICK_PERIOD: Duration = Duration::from_millis(16);

/// Receives one snapshot per completed tick
pub trait SnapshotSink {
    fn publish(&mut self, snapshot: &MatchSnapshot) -> Result<(), Box<dyn std::error::Error>>;
}

/// Drives a session at a fixed cadence until the stop flag is set or the
/// session leaves the running phase.
pub struct TickLoop {
    period: Duration,
    stop: Arc<AtomicBool>,
}

impl TickLoop {
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Shared flag; setting it stops the loop before the next tick starts.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Run until cancelled. Scheduling is deadline-based: each tick is
    /// due one period after the previous deadline, and overruns skip the
    /// sleep instead of accumulating debt.
    pub fn run<S: InputSource>(&self, session: &mut MatchSession<S>, sink: &mut dyn SnapshotSink) {
        let mut deadline = Instant::now();

        loop {
            // Cancellation lands between ticks, never inside one
            if self.stop.load(Ordering::Relaxed) {
                log::info!("tick loop cancelled");
                return;
            }

            let snapshot = match session.tick() {
                Some(snapshot) => snapshot,
                None => {
                    log::info!("tick loop exiting: match is idle");
                    return;
                }
            };

            if let Err(err) = sink.publish(&snapshot) {
                log::error!("snapshot sink failed: {}; continuing", err);
            }

            deadline += self.period;
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            } else {
                deadline = now;
            }
        }
    }
}

impl Default for TickLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::SourceError;
    use game_core::ControlFrame;
    use std::sync::atomic::AtomicUsize;

    struct IdleSource;

    impl InputSource for IdleSource {
        fn acquire(&mut self) -> Result<(), SourceError> {
            Ok(())
        }

        fn release(&mut self) {}

        fn poll_samples(&mut self) -> Result<ControlFrame, SourceError> {
            Ok(ControlFrame::new())
        }
    }

    /// Counts ticks, optionally failing each publish, and cancels the
    /// loop once enough snapshots arrived.
    struct CountingSink {
        seen: Arc<AtomicUsize>,
        stop: Arc<AtomicBool>,
        stop_after: usize,
        fail: bool,
    }

    impl SnapshotSink for CountingSink {
        fn publish(&mut self, _snapshot: &MatchSnapshot) -> Result<(), Box<dyn std::error::Error>> {
            let count = self.seen.fetch_add(1, Ordering::SeqCst) + 1;
            if count >= self.stop_after {
                self.stop.store(true, Ordering::SeqCst);
            }
            if self.fail {
                Err("sink rejected the snapshot".into())
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_loop_ticks_until_cancelled() {
        let tick_loop = TickLoop::with_period(Duration::from_millis(1));
        let seen = Arc::new(AtomicUsize::new(0));
        let mut sink = CountingSink {
            seen: Arc::clone(&seen),
            stop: tick_loop.stop_handle(),
            stop_after: 5,
            fail: false,
        };

        let mut session = MatchSession::new(IdleSource, 1);
        session.start().unwrap();
        tick_loop.run(&mut session, &mut sink);

        assert_eq!(seen.load(Ordering::SeqCst), 5);
        assert!(session.is_running(), "cancelling the loop does not stop the match");
    }

    #[test]
    fn test_sink_failure_does_not_end_the_loop() {
        let tick_loop = TickLoop::with_period(Duration::from_millis(1));
        let seen = Arc::new(AtomicUsize::new(0));
        let mut sink = CountingSink {
            seen: Arc::clone(&seen),
            stop: tick_loop.stop_handle(),
            stop_after: 3,
            fail: true,
        };

        let mut session = MatchSession::new(IdleSource, 1);
        session.start().unwrap();
        tick_loop.run(&mut session, &mut sink);

        assert_eq!(
            seen.load(Ordering::SeqCst),
            3,
            "ticks continue past sink errors"
        );
    }

    #[test]
    fn test_loop_exits_when_session_idle() {
        let tick_loop = TickLoop::with_period(Duration::from_millis(1));
        let seen = Arc::new(AtomicUsize::new(0));
        let mut sink = CountingSink {
            seen: Arc::clone(&seen),
            stop: tick_loop.stop_handle(),
            stop_after: usize::MAX,
            fail: false,
        };

        // Never started: the first tick returns None and the loop exits
        let mut session = MatchSession::new(IdleSource, 1);
        tick_loop.run(&mut session, &mut sink);

        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }
}
