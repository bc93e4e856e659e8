//! Fake container and event sources for driving the pipeline without a daemon.

use psa_runtime::{ContainerSource, Error, EventSource, Result, WatchEvent};
use psa_types::ContainerRecord;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Returns the same listing on every call.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<ContainerRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<ContainerRecord>) -> Self {
        Self { records }
    }
}

impl ContainerSource for StaticSource {
    fn list_all(&self) -> Result<Vec<ContainerRecord>> {
        Ok(self.records.clone())
    }
}

/// Plays back a queue of listings and failures, one per call.
///
/// Once the script runs out, the last successful listing is repeated.
#[derive(Default)]
pub struct ScriptedSource {
    script: RefCell<VecDeque<Option<Vec<ContainerRecord>>>>,
    last: RefCell<Vec<ContainerRecord>>,
    calls: Cell<usize>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_ok(self, records: Vec<ContainerRecord>) -> Self {
        self.script.borrow_mut().push_back(Some(records));
        self
    }

    pub fn then_fail(self) -> Self {
        self.script.borrow_mut().push_back(None);
        self
    }

    /// Number of `list_all` calls so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ContainerSource for ScriptedSource {
    fn list_all(&self) -> Result<Vec<ContainerRecord>> {
        self.calls.set(self.calls.get() + 1);

        match self.script.borrow_mut().pop_front() {
            Some(Some(records)) => {
                *self.last.borrow_mut() = records.clone();
                Ok(records)
            }
            Some(None) => Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "daemon unavailable",
            ))),
            None => Ok(self.last.borrow().clone()),
        }
    }
}

/// Plays back a fixed sequence of watch events, then cancels.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    events: VecDeque<WatchEvent>,
    delivered: usize,
}

impl ScriptedEvents {
    pub fn new(events: impl IntoIterator<Item = WatchEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            delivered: 0,
        }
    }

    /// `n` ticks followed by cancellation
    pub fn ticks(n: usize) -> Self {
        Self::new(std::iter::repeat_n(WatchEvent::Tick, n))
    }

    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> WatchEvent {
        self.delivered += 1;
        self.events.pop_front().unwrap_or(WatchEvent::Cancelled)
    }
}
