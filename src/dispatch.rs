use crate::command::CommandResult;
use crate::input::CommandInput;
use crate::service::{DataService, Record, ServiceError};
use crate::surface::{Failure, Notification, Surface};
use std::sync::Arc;
use tracing::{debug, warn};

/// Result of a dispatch that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The command was blank, nothing was sent.
    Skipped,
    Completed {
        result: CommandResult,
        /// Reply of the data service.
        message: String,
    },
}

/// Classifies typed commands and forwards them to a [`DataService`].
#[derive(Clone)]
pub struct CommandDispatcher {
    service: Arc<dyn DataService>,
}

impl CommandDispatcher {
    pub fn new(service: Arc<dyn DataService>) -> Self {
        Self { service }
    }

    /// Trims and executes a command line.
    pub async fn execute(&self, raw_text: &str) -> Result<DispatchOutcome, ServiceError> {
        let command = raw_text.trim();
        if command.is_empty() {
            return Ok(DispatchOutcome::Skipped);
        }

        let result = CommandResult::classify(command);
        debug!("Dispatching {:?}", result);
        let message = self.service.execute_command(command).await?;
        Ok(DispatchOutcome::Completed { result, message })
    }
}

/// Applies a finished record fetch. On failure the displayed rows are kept.
pub fn finish_load<S: Surface>(surface: &mut S, result: Result<Vec<Record>, ServiceError>) {
    match result {
        Ok(records) => {
            surface.show_records(&records);
            surface.update_status(&format!("Loaded {} items", records.len()));
        }
        Err(err) => {
            warn!("Loading records failed: {}", err);
            surface.notify(Failure::Load(err).into());
        }
    }
}

/// Applies a finished dispatch to the command input and the surface.
///
/// A completed command names its kind on the status line and notifies the
/// service reply.
/// Returns true when the records should be reloaded. The input text is only
/// cleared on success so a failed command can be edited and retried.
pub fn finish_dispatch<S: Surface>(
    surface: &mut S,
    input: &mut CommandInput,
    outcome: Result<DispatchOutcome, ServiceError>,
) -> bool {
    input.resume();
    match outcome {
        Ok(DispatchOutcome::Completed { result, message }) => {
            surface.update_status(&format!("Last command: {}", result.kind()));
            surface.notify(Notification::info(format!("Command executed: {message}")));
            input.clear();
            true
        }
        Ok(DispatchOutcome::Skipped) => false,
        Err(err) => {
            warn!("Command failed: {}", err);
            surface.notify(Failure::Dispatch(err).into());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Severity;
    use async_trait::async_trait;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Mutex;

    /// Service that records the commands it receives.
    #[derive(Default)]
    struct RecordingService {
        received: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl DataService for RecordingService {
        async fn get_data(&self) -> Result<Vec<Record>, ServiceError> {
            Ok(Vec::new())
        }

        async fn execute_command(&self, command: &str) -> Result<String, ServiceError> {
            self.received.lock().unwrap().push(command.to_string());
            if self.fail {
                Err(ServiceError::Rejected("read-only".into()))
            } else {
                Ok(CommandResult::classify(command).to_string())
            }
        }
    }

    #[derive(Default)]
    struct TestSurface {
        status: String,
        rows: Vec<Record>,
        notifications: Vec<Notification>,
    }

    impl Surface for TestSurface {
        fn update_status(&mut self, message: &str) {
            self.status = message.to_string();
        }

        fn show_records(&mut self, records: &[Record]) {
            self.rows = records.to_vec();
        }

        fn notify(&mut self, notification: Notification) {
            self.notifications.push(notification);
        }
    }

    fn submitted_input(text: &str) -> CommandInput {
        let mut input = CommandInput::new();
        for c in text.chars() {
            input.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        input.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        input
    }

    #[tokio::test]
    async fn test_execute_trims_and_classifies() {
        let service = Arc::new(RecordingService::default());
        let dispatcher = CommandDispatcher::new(service.clone());

        let outcome = dispatcher.execute("  Clear ").await.unwrap();
        assert_eq!(
            outcome,
            DispatchOutcome::Completed {
                result: CommandResult::Cleared,
                message: "Data cleared".to_string(),
            }
        );
        assert_eq!(*service.received.lock().unwrap(), vec!["Clear".to_string()]);
    }

    #[tokio::test]
    async fn test_execute_blank_skips_service() {
        let service = Arc::new(RecordingService::default());
        let dispatcher = CommandDispatcher::new(service.clone());

        assert_eq!(dispatcher.execute("   ").await.unwrap(), DispatchOutcome::Skipped);
        assert!(service.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_execute_surfaces_service_error() {
        let service = Arc::new(RecordingService {
            fail: true,
            ..Default::default()
        });
        let dispatcher = CommandDispatcher::new(service);

        let err = dispatcher.execute("add widget-7").await.unwrap_err();
        assert_eq!(err, ServiceError::Rejected("read-only".into()));
    }

    #[test]
    fn test_finish_dispatch_success_clears_input() {
        let mut surface = TestSurface::default();
        let mut input = submitted_input("refresh");
        assert!(input.is_suspended());

        let reload = finish_dispatch(
            &mut surface,
            &mut input,
            Ok(DispatchOutcome::Completed {
                result: CommandResult::Refreshed,
                message: "Data refreshed".to_string(),
            }),
        );

        assert!(reload);
        assert!(!input.is_suspended());
        assert_eq!(input.value(), "");
        assert_eq!(surface.status, "Last command: refresh");
        assert_eq!(surface.notifications[0].message, "Command executed: Data refreshed");
        assert_eq!(surface.notifications[0].severity, Severity::Information);
    }

    #[test]
    fn test_finish_dispatch_failure_keeps_input() {
        let mut surface = TestSurface::default();
        let mut input = submitted_input("add widget-7");

        let reload = finish_dispatch(
            &mut surface,
            &mut input,
            Err(ServiceError::Unavailable("offline".into())),
        );

        assert!(!reload);
        assert!(!input.is_suspended());
        assert_eq!(input.value(), "add widget-7");
        assert_eq!(
            surface.notifications[0].message,
            "Command failed: service unavailable: offline"
        );
        assert_eq!(surface.notifications[0].severity, Severity::Error);
    }

    #[test]
    fn test_finish_load_success_and_failure() {
        let mut surface = TestSurface::default();
        let rows = vec![Record::new(1, "Item 1", "active", "2023-01-01")];

        finish_load(&mut surface, Ok(rows.clone()));
        assert_eq!(surface.rows, rows);
        assert_eq!(surface.status, "Loaded 1 items");

        finish_load(&mut surface, Err(ServiceError::Io("disk gone".into())));
        assert_eq!(surface.rows, rows);
        assert_eq!(surface.status, "Loaded 1 items");
        assert_eq!(surface.notifications[0].message, "Error loading data: io error: disk gone");
    }
}
