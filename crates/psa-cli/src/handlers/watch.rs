use super::{ListOptions, emit_listing};
use crate::presentation::Renderer;
use crate::ui::{AnsiTerminal, TerminalWriter};
use anyhow::Result;
use chrono::{Local, Utc};
use psa_runtime::{ContainerSource, EventSource, IntervalEvents, WatchEvent};
use std::sync::mpsc;
use std::time::Duration;

pub const WATCH_HEADER: &str = "Watching containers (Press Ctrl+C to exit)";
pub const WATCH_STOPPED: &str = "Watch mode stopped";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Running,
    Stopped,
}

/// Re-renders the listing on every tick until cancelled.
///
/// Cycles run to completion on the calling thread; the event source is only
/// consulted between cycles, so two refreshes never overlap and a Ctrl+C
/// during a refresh is seen once that refresh is done.
pub struct WatchScheduler<'a, S: ?Sized, E, T: ?Sized> {
    source: &'a S,
    events: E,
    terminal: &'a mut T,
    renderer: &'a Renderer,
    options: &'a ListOptions,
    state: WatchState,
    cycles: usize,
}

impl<'a, S, E, T> WatchScheduler<'a, S, E, T>
where
    S: ContainerSource + ?Sized,
    E: EventSource,
    T: TerminalWriter + ?Sized,
{
    pub fn new(
        source: &'a S,
        events: E,
        terminal: &'a mut T,
        renderer: &'a Renderer,
        options: &'a ListOptions,
    ) -> Self {
        Self {
            source,
            events,
            terminal,
            renderer,
            options,
            state: WatchState::Running,
            cycles: 0,
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    /// Completed refresh cycles, including failed fetches
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    /// Run until cancelled. Returns the terminal state.
    pub fn run(&mut self) -> WatchState {
        if self.state == WatchState::Stopped {
            return self.state;
        }

        self.refresh();

        while self.state == WatchState::Running {
            let event = self.events.next_event();
            tracing::debug!(?event, cycles = self.cycles, "watch event");

            match event {
                WatchEvent::Tick => self.refresh(),
                WatchEvent::Cancelled => {
                    self.terminal.write_line(WATCH_STOPPED);
                    self.terminal.flush();
                    self.state = WatchState::Stopped;
                }
            }
        }

        self.state
    }

    fn refresh(&mut self) {
        let now = Utc::now();
        self.cycles += 1;

        self.terminal.clear_screen();
        self.terminal.write_line(WATCH_HEADER);
        self.terminal.write_line(
            &now.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        );

        match self.source.list_all() {
            Ok(records) => {
                emit_listing(self.terminal, self.renderer, records, self.options, now);
            }
            Err(err) => {
                tracing::debug!(cycle = self.cycles, error = %err, "skipping cycle");
                self.terminal.write_error(&format!("Error: {}", err));
            }
        }

        self.terminal.flush();
    }
}

/// Watch mode on the real terminal, cancelled by Ctrl+C or SIGTERM.
pub fn handle<S>(
    source: &S,
    renderer: &Renderer,
    options: &ListOptions,
    interval: Duration,
) -> Result<()>
where
    S: ContainerSource + ?Sized,
{
    let (cancel_tx, cancel_rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = cancel_tx.send(());
    })?;

    let events = IntervalEvents::new(interval, cancel_rx);
    let mut terminal = AnsiTerminal::new();

    WatchScheduler::new(source, events, &mut terminal, renderer, options).run();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{Theme, Verbosity};
    use crate::ui::MockTerminal;
    use psa_testing::{ContainerBuilder, ScriptedEvents, ScriptedSource, sample_containers};

    fn renderer() -> Renderer {
        Renderer::new(Theme::plain())
    }

    #[test]
    fn test_initial_cycle_then_stop() {
        let source = ScriptedSource::new().then_ok(sample_containers());
        let mut terminal = MockTerminal::new();
        let renderer = renderer();
        let options = ListOptions::default();

        let mut scheduler = WatchScheduler::new(
            &source,
            ScriptedEvents::ticks(0),
            &mut terminal,
            &renderer,
            &options,
        );

        assert_eq!(scheduler.run(), WatchState::Stopped);
        assert_eq!(scheduler.cycles(), 1);
        assert_eq!(source.calls(), 1);

        assert_eq!(terminal.clear_count, 1);
        assert_eq!(terminal.lines[0], WATCH_HEADER);
        assert_eq!(terminal.lines.last().map(String::as_str), Some(WATCH_STOPPED));
        // header, timestamp, blank, five containers, blank, stop notice
        assert_eq!(terminal.lines.len(), 10);
    }

    #[test]
    fn test_one_cycle_per_tick() {
        let source = ScriptedSource::new().then_ok(sample_containers());
        let mut terminal = MockTerminal::new();
        let renderer = renderer();
        let options = ListOptions::default();

        let mut scheduler = WatchScheduler::new(
            &source,
            ScriptedEvents::ticks(3),
            &mut terminal,
            &renderer,
            &options,
        );

        assert_eq!(scheduler.run(), WatchState::Stopped);
        assert_eq!(scheduler.cycles(), 4);
        assert_eq!(scheduler.events().delivered(), 4);
        assert_eq!(source.calls(), 4);
        assert_eq!(terminal.clear_count, 4);
    }

    #[test]
    fn test_fetch_failure_skips_cycle_and_keeps_running() {
        let first = vec![ContainerBuilder::new("a").name("/first").build()];
        let last = vec![ContainerBuilder::new("b").name("/last").build()];
        let source = ScriptedSource::new()
            .then_ok(first)
            .then_fail()
            .then_ok(last);
        let mut terminal = MockTerminal::new();
        let renderer = renderer();
        let options = ListOptions::default();

        let mut scheduler = WatchScheduler::new(
            &source,
            ScriptedEvents::ticks(2),
            &mut terminal,
            &renderer,
            &options,
        );

        assert_eq!(scheduler.run(), WatchState::Stopped);
        assert_eq!(scheduler.cycles(), 3);

        assert_eq!(terminal.errors.len(), 1);
        assert!(terminal.errors[0].starts_with("Error: "));
        assert!(terminal.errors[0].contains("daemon unavailable"));

        // The cycle after the failure rendered normally
        assert!(terminal.lines.iter().any(|line| line.contains("| last |")));
    }

    #[test]
    fn test_failed_cycle_still_clears_and_prints_header() {
        let source = ScriptedSource::new().then_fail();
        let mut terminal = MockTerminal::new();
        let renderer = renderer();
        let options = ListOptions::default();

        let mut scheduler = WatchScheduler::new(
            &source,
            ScriptedEvents::ticks(0),
            &mut terminal,
            &renderer,
            &options,
        );
        scheduler.run();

        assert_eq!(terminal.clear_count, 1);
        assert_eq!(terminal.lines.len(), 3);
        assert_eq!(terminal.lines[0], WATCH_HEADER);
        assert_eq!(terminal.lines[2], WATCH_STOPPED);
        assert_eq!(terminal.errors.len(), 1);
    }

    #[test]
    fn test_filter_warning_is_reported_each_cycle() {
        let source = ScriptedSource::new().then_ok(sample_containers());
        let mut terminal = MockTerminal::new();
        let renderer = renderer();
        let options = ListOptions {
            pattern: "[".to_string(),
            verbosity: Verbosity::Compact,
        };

        let mut scheduler = WatchScheduler::new(
            &source,
            ScriptedEvents::ticks(1),
            &mut terminal,
            &renderer,
            &options,
        );
        scheduler.run();

        assert_eq!(terminal.errors.len(), 2);
        assert!(terminal.errors.iter().all(|e| e.starts_with("Warning: ")));
    }

    #[test]
    fn test_stopped_scheduler_does_not_restart() {
        let source = ScriptedSource::new().then_ok(Vec::new());
        let mut terminal = MockTerminal::new();
        let renderer = renderer();
        let options = ListOptions::default();

        let mut scheduler = WatchScheduler::new(
            &source,
            ScriptedEvents::new([WatchEvent::Cancelled, WatchEvent::Tick]),
            &mut terminal,
            &renderer,
            &options,
        );

        assert_eq!(scheduler.run(), WatchState::Stopped);
        assert_eq!(scheduler.run(), WatchState::Stopped);
        assert_eq!(scheduler.cycles(), 1);
        assert_eq!(source.calls(), 1);
    }
}
