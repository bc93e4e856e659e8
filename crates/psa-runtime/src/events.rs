use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

/// What woke the watch loop up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    Tick,
    Cancelled,
}

/// Blocking source of watch-loop events.
///
/// This is the only place watch mode suspends; a refresh cycle runs to
/// completion before the next event is requested.
pub trait EventSource {
    fn next_event(&mut self) -> WatchEvent;
}

/// Fixed-interval ticks raced against a cancellation channel.
///
/// Deadlines stay on a fixed schedule. When a cycle overruns, one tick
/// is delivered right away and any further missed ticks are dropped.
pub struct IntervalEvents {
    interval: Duration,
    next_deadline: Instant,
    cancel: Receiver<()>,
}

impl IntervalEvents {
    pub fn new(interval: Duration, cancel: Receiver<()>) -> Self {
        Self {
            interval,
            next_deadline: Instant::now() + interval,
            cancel,
        }
    }

    fn advance(&mut self, now: Instant) {
        self.next_deadline += self.interval;
        while self.next_deadline <= now {
            self.next_deadline += self.interval;
        }
    }
}

impl EventSource for IntervalEvents {
    fn next_event(&mut self) -> WatchEvent {
        match self.cancel.try_recv() {
            Ok(()) => return WatchEvent::Cancelled,
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
        }

        let now = Instant::now();
        if now < self.next_deadline {
            match self.cancel.recv_timeout(self.next_deadline - now) {
                Ok(()) => return WatchEvent::Cancelled,
                Err(RecvTimeoutError::Timeout) => {}
                // Nobody left to cancel us; keep ticking on schedule
                Err(RecvTimeoutError::Disconnected) => {
                    let now = Instant::now();
                    if now < self.next_deadline {
                        std::thread::sleep(self.next_deadline - now);
                    }
                }
            }
        }

        self.advance(Instant::now());
        WatchEvent::Tick
    }
}
