use color_eyre::eyre::WrapErr;
use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{self, Event as CrosstermEvent};
use std::thread;
use std::time::{Duration, Instant};

const TICK_FPS: f64 = 15.0;

pub enum Event {
    Tick,
    Crossterm(CrosstermEvent),
    App(AppEvent),
}

impl From<AppEvent> for Event {
    fn from(value: AppEvent) -> Self {
        Event::App(value)
    }
}

pub enum AppEvent {
    Quit,
}

/// Terminal event handler.
#[derive(Debug)]
pub struct EventHandler {
    sender: Sender<Event>,
    receiver: Receiver<Event>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] and spawns a thread to
    /// read terminal events.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        let actor = EventThread::new(sender.clone());
        thread::spawn(|| actor.run());
        Self { sender, receiver }
    }

    /// Receives the next event, blocking until one arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the sender channel is disconnected, which only
    /// happens when the event thread dies on a broken terminal.
    pub fn next(&self) -> color_eyre::Result<Event> {
        Ok(self.receiver.recv()?)
    }

    /// Queues an app event for the next iteration of the event loop.
    pub fn send(&mut self, app_event: AppEvent) {
        let _ = self.sender.send(app_event.into());
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread that reads crossterm events and emits ticks at a fixed rate.
#[derive(Debug)]
struct EventThread {
    sender: Sender<Event>,
}

impl EventThread {
    fn new(sender: Sender<Event>) -> Self {
        Self { sender }
    }

    fn run(self) -> color_eyre::Result<()> {
        let tick_interval = Duration::from_secs_f64(1.0 / TICK_FPS);
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_interval.saturating_sub(last_tick.elapsed());
            if timeout == Duration::ZERO {
                last_tick = Instant::now();
                self.send(Event::Tick);
            }
            // Poll between ticks so the tick interval is never blocked.
            if event::poll(timeout).wrap_err("failed to poll for crossterm events")? {
                let event = event::read().wrap_err("failed to read crossterm event")?;
                self.send(Event::Crossterm(event));
            }
        }
    }

    fn send(&self, event: Event) {
        let _ = self.sender.send(event);
    }
}
