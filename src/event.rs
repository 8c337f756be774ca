use crate::config::Screen;
use crate::dispatch::DispatchOutcome;
use crate::service::{Record, ServiceError};
use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;

/// Shortest allowed interval between tick events.
const MIN_TICK_RATE: Duration = Duration::from_millis(50);

/// Representation of all possible events.
#[derive(Clone, Debug)]
pub enum Event {
    /// Emitted on a regular schedule. Drives the status clock and
    /// notification expiry.
    Tick,
    /// Crossterm events.
    Crossterm(CrosstermEvent),
    /// Application events.
    App(AppEvent),
}

/// Application events.
#[derive(Clone, Debug)]
pub enum AppEvent {
    /// Quit the application.
    Quit,
    /// Show another screen
    SwitchScreen(Screen),
    /// Reload the table records
    RefreshData,
    /// A record fetch finished. Tagged with the load generation that started it.
    DataLoaded(u64, Result<Vec<Record>, ServiceError>),
    /// A command dispatch finished
    CommandFinished(Result<DispatchOutcome, ServiceError>),
    /// Save the settings form
    SaveSettings,
    /// Toggle debug mode
    ToggleDebug,
}

/// Terminal event handler.
#[derive(Debug)]
pub struct EventHandler {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver channel.
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] and spawns the terminal reader task.
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = EventTask::new(sender.clone(), tick_rate.max(MIN_TICK_RATE));
        tokio::spawn(async { actor.run().await });
        Self { sender, receiver }
    }

    /// Constructs a handler without a terminal reader. Only app events are delivered.
    pub fn detached() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Receives an event from the sender.
    ///
    /// This function blocks until an event is received.
    ///
    /// # Errors
    ///
    /// Returns an error if every sender is gone, which only happens once the
    /// terminal reader task has stopped.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver.recv().await.ok_or_eyre("Failed to receive event")
    }

    /// Queue an app event to be processed by the next iteration of the event loop.
    pub fn send(&self, app_event: AppEvent) {
        // The receiver lives as long as self, so this cannot fail
        let _ = self.sender.send(Event::App(app_event));
    }

    /// Returns a handle background tasks can use to post app events.
    pub fn app_sender(&self) -> AppEventSender {
        AppEventSender {
            sender: self.sender.clone(),
        }
    }
}

/// Cloneable sender for posting results from background tasks.
#[derive(Clone, Debug)]
pub struct AppEventSender {
    sender: mpsc::UnboundedSender<Event>,
}

impl AppEventSender {
    /// Posts an app event. Dropped silently once the application has shut down.
    pub fn send(&self, app_event: AppEvent) {
        let _ = self.sender.send(Event::App(app_event));
    }
}

/// A task that reads crossterm events and emits tick events on a regular schedule.
struct EventTask {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    tick_rate: Duration,
}

impl EventTask {
    fn new(sender: mpsc::UnboundedSender<Event>, tick_rate: Duration) -> Self {
        Self { sender, tick_rate }
    }

    /// Emits tick events at a fixed rate and forwards crossterm events in between.
    async fn run(self) -> color_eyre::Result<()> {
        let mut reader = crossterm::event::EventStream::new();
        let mut tick = tokio::time::interval(self.tick_rate);
        loop {
            let tick_delay = tick.tick();
            let crossterm_event = reader.next().fuse();
            tokio::select! {
              _ = self.sender.closed() => {
                break;
              }
              _ = tick_delay => {
                self.send(Event::Tick);
              }
              Some(Ok(evt)) = crossterm_event => {
                self.send(Event::Crossterm(evt));
              }
            };
        }
        Ok(())
    }

    /// Sends an event to the receiver.
    fn send(&self, event: Event) {
        // Shutting down the app drops the receiver, so a failed send is expected.
        let _ = self.sender.send(event);
    }
}
