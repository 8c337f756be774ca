use crate::command::CommandResult;
use crate::config::Settings;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Simulated latency of a record fetch.
const LOAD_DELAY: Duration = Duration::from_millis(100);
/// Simulated latency of a command execution.
const COMMAND_DELAY: Duration = Duration::from_millis(500);

/// One row of the main table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub updated: String,
}

impl Record {
    pub fn new(id: u32, name: &str, status: &str, updated: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            status: status.to_string(),
            updated: updated.to_string(),
        }
    }

    /// Cells in display order: ID, Name, Status, Updated.
    pub fn cells(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.name.clone(),
            self.status.clone(),
            self.updated.clone(),
        ]
    }
}

/// Errors raised by a [`DataService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Local storage could not be prepared or read.
    Io(String),
    /// The backing store did not answer.
    Unavailable(String),
    /// The backing store refused the request.
    Rejected(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Io(msg) => write!(f, "io error: {msg}"),
            ServiceError::Unavailable(msg) => write!(f, "service unavailable: {msg}"),
            ServiceError::Rejected(msg) => write!(f, "request rejected: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::Io(err.to_string())
    }
}

/// Source of table records and executor of typed commands.
#[async_trait]
pub trait DataService: Send + Sync {
    /// Fetches the current record set.
    async fn get_data(&self) -> Result<Vec<Record>, ServiceError>;

    /// Executes a trimmed, non-empty command and returns a reply for the user.
    async fn execute_command(&self, command: &str) -> Result<String, ServiceError>;
}

/// Data service returning fixed sample records after a simulated delay.
#[derive(Debug, Clone)]
pub struct SampleDataService {
    load_delay: Duration,
    command_delay: Duration,
}

impl SampleDataService {
    /// Creates the service, making sure the configured data directory exists.
    pub fn new(settings: &Settings) -> Result<Self, ServiceError> {
        std::fs::create_dir_all(&settings.data_dir)?;
        debug!("Data directory ready at {}", settings.data_dir.display());
        Ok(Self {
            load_delay: LOAD_DELAY,
            command_delay: COMMAND_DELAY,
        })
    }

    /// Overrides the simulated latencies.
    pub fn with_delays(mut self, load_delay: Duration, command_delay: Duration) -> Self {
        self.load_delay = load_delay;
        self.command_delay = command_delay;
        self
    }

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new(1, "Item 1", "active", "2023-01-01"),
            Record::new(2, "Item 2", "pending", "2023-01-02"),
            Record::new(3, "Item 3", "completed", "2023-01-03"),
        ]
    }
}

#[async_trait]
impl DataService for SampleDataService {
    async fn get_data(&self) -> Result<Vec<Record>, ServiceError> {
        tokio::time::sleep(self.load_delay).await;
        Ok(Self::sample_records())
    }

    async fn execute_command(&self, command: &str) -> Result<String, ServiceError> {
        info!("Executing command: {}", command);
        tokio::time::sleep(self.command_delay).await;
        Ok(CommandResult::classify(command).to_string())
    }
}
