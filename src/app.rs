use crate::{
    config::{Screen, Settings},
    dispatch::{self, CommandDispatcher},
    event::{AppEvent, Event, EventHandler},
    input::{CommandInput, InputEvent},
    service::{DataService, Record},
    settings_form::{FormAction, SettingsForm},
    status::StatusBar,
    surface::{Notification, Severity, Surface},
};
use chrono::Local;
use ratatui::{
    Terminal,
    backend::Backend,
    crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Which part of the main screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Table,
}

/// Application.
pub struct App {
    pub running: bool,
    pub settings: Settings,
    pub screen: Screen,
    pub focus: Focus,
    pub events: EventHandler,
    pub command_input: CommandInput,
    pub records: Vec<Record>,
    pub selected_row: usize,
    pub status: StatusBar,
    pub notification: Option<Notification>,
    pub settings_form: SettingsForm,
    service: Arc<dyn DataService>,
    dispatcher: CommandDispatcher,
    load_task: Option<JoinHandle<()>>,
    /// Bumped by every load; results of older loads are dropped.
    load_generation: u64,
    dispatch_task: Option<JoinHandle<()>>,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(settings: Settings, service: Arc<dyn DataService>, events: EventHandler) -> Self {
        let screen = settings.ui.default_screen;
        let settings_form = SettingsForm::from_settings(&settings);
        Self {
            running: true,
            settings,
            screen,
            focus: Focus::Input,
            events,
            command_input: CommandInput::new(),
            records: Vec::new(),
            selected_row: 0,
            status: StatusBar::default(),
            notification: None,
            settings_form,
            dispatcher: CommandDispatcher::new(service.clone()),
            service,
            load_task: None,
            load_generation: 0,
            dispatch_task: None,
        }
    }

    /// Run the application's main loop.
    pub async fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> color_eyre::Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        self.mount();
        while self.running {
            terminal.draw(|frame| {
                let area = frame.area();
                frame.render_widget(&self, area);
                if let Some(position) = self.cursor_position(area) {
                    frame.set_cursor_position(position);
                }
            })?;
            let event = self.events.next().await?;
            self.handle_event(event);
        }
        self.shutdown();
        Ok(())
    }

    /// Sets the initial status and requests the first record load.
    pub fn mount(&mut self) {
        info!("Starting on {:?} screen", self.screen);
        self.update_status("Ready");
        self.events.send(AppEvent::RefreshData);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Tick => self.tick(),
            Event::Crossterm(CrosstermEvent::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_events(key_event)
            }
            Event::Crossterm(CrosstermEvent::Paste(text))
                if self.screen == Screen::Main && self.focus == Focus::Input =>
            {
                self.command_input.paste(&text)
            }
            Event::Crossterm(_) => {}
            Event::App(app_event) => self.handle_app_event(app_event),
        }
    }

    fn handle_app_event(&mut self, app_event: AppEvent) {
        match app_event {
            AppEvent::Quit => self.quit(),
            AppEvent::SwitchScreen(screen) => self.switch_screen(screen),
            AppEvent::RefreshData => self.load_data(),
            AppEvent::DataLoaded(generation, result) => {
                if generation != self.load_generation {
                    debug!("Dropping records of superseded load {}", generation);
                    return;
                }
                self.load_task = None;
                dispatch::finish_load(self, result);
            }
            AppEvent::CommandFinished(outcome) => {
                if self.dispatch_task.take().is_none() {
                    debug!("Dropping outcome of a cancelled dispatch");
                    return;
                }
                let mut input = std::mem::take(&mut self.command_input);
                let reload = dispatch::finish_dispatch(self, &mut input, outcome);
                self.command_input = input;
                if reload {
                    self.load_data();
                }
            }
            AppEvent::SaveSettings => self.save_settings(),
            AppEvent::ToggleDebug => {
                self.settings.debug = !self.settings.debug;
                let state = if self.settings.debug { "ON" } else { "OFF" };
                self.notify(Notification::info(format!("Debug mode: {state}")));
            }
        }
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) {
        // Global keybindings
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers == KeyModifiers::CONTROL => {
                return self.events.send(AppEvent::Quit);
            }
            KeyCode::Char('d') if key_event.modifiers == KeyModifiers::CONTROL => {
                return self.events.send(AppEvent::ToggleDebug);
            }
            KeyCode::Esc if self.notification.is_some() => {
                self.notification = None;
                return;
            }
            _ => {}
        }

        match (self.screen, self.focus) {
            (Screen::Main, Focus::Input) => match key_event.code {
                KeyCode::Tab | KeyCode::Esc => self.focus = Focus::Table,
                _ => {
                    if let Some(InputEvent::Submitted(command)) = self.command_input.handle_key(key_event) {
                        self.dispatch(command);
                    }
                }
            },

            (Screen::Main, Focus::Table) => match key_event.code {
                KeyCode::Tab | KeyCode::Char('i') => self.focus = Focus::Input,
                KeyCode::Char('s') => self.events.send(AppEvent::SwitchScreen(Screen::Settings)),
                KeyCode::Char('q') => self.events.send(AppEvent::Quit),
                KeyCode::Char('r') => self.events.send(AppEvent::RefreshData),
                KeyCode::Up => self.selected_row = self.selected_row.saturating_sub(1),
                KeyCode::Down => {
                    self.selected_row = (self.selected_row + 1).min(self.records.len().saturating_sub(1))
                }
                _ => {}
            },

            (Screen::Settings, _) => match self.settings_form.handle_key(key_event) {
                Some(FormAction::Save) => self.events.send(AppEvent::SaveSettings),
                Some(FormAction::Back) => self.events.send(AppEvent::SwitchScreen(Screen::Main)),
                None => {}
            },
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        debug!("Switching to {:?} screen", screen);
        if screen == Screen::Settings {
            self.settings_form = SettingsForm::from_settings(&self.settings);
        }
        self.screen = screen;
    }

    /// Starts a record load, replacing any load still in flight.
    fn load_data(&mut self) {
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
        self.load_generation += 1;
        let generation = self.load_generation;
        let service = self.service.clone();
        let sender = self.events.app_sender();
        self.load_task = Some(tokio::spawn(async move {
            let result = service.get_data().await;
            sender.send(AppEvent::DataLoaded(generation, result));
        }));
    }

    /// Executes a submitted command in the background. The command input
    /// stays suspended until the outcome arrives.
    fn dispatch(&mut self, command: String) {
        info!("Submitting command: {}", command);
        self.update_status(&format!("Executing: {command}"));
        let dispatcher = self.dispatcher.clone();
        let sender = self.events.app_sender();
        self.dispatch_task = Some(tokio::spawn(async move {
            let outcome = dispatcher.execute(&command).await;
            sender.send(AppEvent::CommandFinished(outcome));
        }));
    }

    fn save_settings(&mut self) {
        let result = self.settings_form.apply(&self.settings).map_err(|e| e.to_string()).and_then(|updated| {
            let path = updated.config_path();
            updated.save(&path).map_err(|e| e.to_string())?;
            info!("Settings saved to {}", path.display());
            Ok(updated)
        });

        match result {
            Ok(updated) => {
                self.settings = updated;
                self.notify(Notification::info("Settings saved successfully!"));
                self.switch_screen(Screen::Main);
            }
            Err(e) => self.notify(Notification::error(format!("Error saving settings: {e}"))),
        }
    }

    /// Advances the clock and expires old notifications.
    pub fn tick(&mut self) {
        self.status.update_time(Local::now());
        if self.notification.as_ref().is_some_and(|n| n.is_expired(Instant::now())) {
            self.notification = None;
        }
    }

    /// History details shown in the status bar while debugging.
    pub fn debug_info(&self) -> Option<String> {
        if !(self.settings.debug || self.settings.ui.show_debug) {
            return None;
        }
        let history = self.command_input.history();
        Some(format!(
            "history {}/{} {:?}",
            history.cursor(),
            history.len(),
            self.command_input.mode()
        ))
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Aborts background work. Results still in flight are discarded.
    pub fn shutdown(&mut self) {
        for task in [self.load_task.take(), self.dispatch_task.take()].into_iter().flatten() {
            task.abort();
        }
        self.load_generation += 1;
    }
}

impl Surface for App {
    fn update_status(&mut self, message: &str) {
        self.status.set_message(message);
    }

    fn show_records(&mut self, records: &[Record]) {
        self.records = records.to_vec();
        self.selected_row = self.selected_row.min(self.records.len().saturating_sub(1));
    }

    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Information => info!("{}", notification.message),
            Severity::Error => error!("{}", notification.message),
        }
        self.notification = Some(notification);
    }
}
